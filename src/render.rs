//! Scene drawing.
//!
//! The renderer only reads state. It talks to a [`Surface`], which the browser
//! canvas implements; tests use a recording surface instead.

use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

use crate::config::SimConfig;
use crate::model::{
    AnimationState, LandingResult, ScreenMapper, ScreenPoint, SimSession, SimulationParameters,
};

pub const SKY_COLOR: &str = "#87CEEB";
pub const GROUND_COLOR: &str = "#90EE90";
pub const BARREL_COLOR: &str = "#8B4513";
pub const HUB_COLOR: &str = "#D2691E";
pub const TARGET_COLOR: &str = "#FF0000";
pub const TRAJECTORY_COLOR: &str = "#0000FF";
pub const PROJECTILE_COLOR: &str = "#000000";
pub const TRAJECTORY_WIDTH: f64 = 2.0;

/// The handful of 2D primitives the scene needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, color: &str);
    fn stroke_polyline(&mut self, points: &[ScreenPoint], color: &str, width: f64);
    /// Saves state, then moves the origin to `pivot` and rotates by `angle_rad`.
    fn push_rotation(&mut self, pivot: ScreenPoint, angle_rad: f64);
    fn pop_transform(&mut self);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, color: &str) {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, PI * 2.0).ok();
        self.set_fill_style_str(color);
        self.fill();
    }

    fn stroke_polyline(&mut self, points: &[ScreenPoint], color: &str, width: f64) {
        let Some((first, rest)) = points.split_first() else { return };
        self.begin_path();
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.stroke();
    }

    fn push_rotation(&mut self, pivot: ScreenPoint, angle_rad: f64) {
        self.save();
        self.translate(pivot.x, pivot.y).ok();
        self.rotate(angle_rad).ok();
    }

    fn pop_transform(&mut self) {
        self.restore();
    }
}

/// Sizes of the drawn shapes, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub cannon_width: f64,
    pub marker_radius: f64,
    pub target_radius: f64,
}

impl SceneStyle {
    pub fn from_config(cfg: &SimConfig) -> Self {
        Self {
            cannon_width: cfg.cannon_width,
            marker_radius: cfg.marker_radius,
            target_radius: cfg.target_radius,
        }
    }
}

/// Read-only snapshot of everything a frame depends on.
pub struct Scene<'a> {
    pub params: &'a SimulationParameters,
    pub mapper: &'a ScreenMapper,
    pub anchor: ScreenPoint,
    pub history: &'a [ScreenPoint],
    pub projectile: ScreenPoint,
    pub state: AnimationState,
    pub landing: Option<LandingResult>,
    pub style: SceneStyle,
}

impl<'a> Scene<'a> {
    pub fn from_session(session: &'a SimSession, style: SceneStyle) -> Self {
        Self {
            params: session.params(),
            mapper: session.mapper(),
            anchor: session.anchor(),
            history: session.history(),
            projectile: session.projectile(),
            state: session.state(),
            landing: session.landing(),
            style,
        }
    }

    /// Hidden on a pristine cannon. A paused shot is still in flight.
    pub fn shows_projectile(&self) -> bool {
        matches!(self.state, AnimationState::Running | AnimationState::Paused)
            || self.landing.is_some()
    }
}

pub fn render_scene<S: Surface + ?Sized>(surface: &mut S, scene: &Scene) {
    let m = scene.mapper;
    let (w, h) = (m.canvas_width, m.canvas_height);

    surface.clear(w, h);
    surface.fill_rect(0.0, 0.0, w, h, SKY_COLOR);
    surface.fill_rect(0.0, m.ground_line(), w, m.ground_offset, GROUND_COLOR);

    draw_cannon(surface, scene);
    draw_target(surface, scene);

    if !scene.history.is_empty() {
        let mut path = Vec::with_capacity(scene.history.len() + 1);
        path.push(scene.anchor);
        path.extend_from_slice(scene.history);
        surface.stroke_polyline(&path, TRAJECTORY_COLOR, TRAJECTORY_WIDTH);
    }

    if scene.shows_projectile() {
        surface.fill_circle(scene.projectile, scene.style.marker_radius, PROJECTILE_COLOR);
    }
}

fn draw_cannon<S: Surface + ?Sized>(surface: &mut S, scene: &Scene) {
    let m = scene.mapper;
    let width = scene.style.cannon_width;
    surface.push_rotation(m.mount, -scene.params.angle_rad());
    surface.fill_rect(0.0, -width / 2.0, m.cannon_length, width, BARREL_COLOR);
    surface.fill_circle(ScreenPoint::default(), width, HUB_COLOR);
    surface.pop_transform();
}

fn draw_target<S: Surface + ?Sized>(surface: &mut S, scene: &Scene) {
    let m = scene.mapper;
    let center = ScreenPoint {
        x: m.target_screen_x(scene.params.target_distance),
        y: m.ground_line(),
    };
    surface.fill_circle(center, scene.style.target_radius, TARGET_COLOR);
}
