//! Meters to canvas pixels, and where the cannon tip sits for a given angle.

use super::kinematics::PhysicalPoint;
use crate::config::SimConfig;

/// Canvas coordinates, +y down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapper {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// px per meter along x
    pub scale_x: f64,
    /// px per meter along y
    pub scale_y: f64,
    /// Height of the drawn ground strip.
    pub ground_offset: f64,
    /// Pivot the barrel rotates around.
    pub mount: ScreenPoint,
    pub cannon_length: f64,
}

impl ScreenMapper {
    pub fn from_config(cfg: &SimConfig) -> Self {
        Self {
            canvas_width: cfg.canvas_width,
            canvas_height: cfg.canvas_height,
            scale_x: cfg.scale_x,
            scale_y: cfg.scale_y,
            ground_offset: cfg.ground_offset,
            mount: ScreenPoint {
                x: cfg.mount_x,
                y: cfg.canvas_height - cfg.mount_inset,
            },
            cannon_length: cfg.cannon_length,
        }
    }

    /// Tip of the barrel. The screen angle is the negated physical one since
    /// canvas y grows downward.
    pub fn cannon_anchor(&self, angle_deg: f64) -> ScreenPoint {
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
        ScreenPoint {
            x: self.mount.x + self.cannon_length * cos_a,
            y: self.mount.y - self.cannon_length * sin_a,
        }
    }

    pub fn to_screen(&self, anchor: ScreenPoint, p: PhysicalPoint) -> ScreenPoint {
        ScreenPoint {
            x: anchor.x + p.x * self.scale_x,
            y: self.canvas_height - p.y * self.scale_y - self.ground_offset,
        }
    }

    /// Top edge of the ground strip.
    pub fn ground_line(&self) -> f64 {
        self.canvas_height - self.ground_offset
    }

    pub fn has_reached_ground(&self, p: ScreenPoint) -> bool {
        p.y >= self.ground_line()
    }

    pub fn target_screen_x(&self, distance_m: f64) -> f64 {
        self.mount.x + distance_m * self.scale_x
    }
}
