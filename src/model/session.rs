//! One cannon, one shot at a time.
//!
//! [`SimSession`] owns everything that changes while a shot is in flight. The
//! host calls [`SimSession::tick`] once per display frame and schedules the
//! next frame only when it returns [`Tick::Continue`]; every other mutation
//! goes through the named operations below.

use log::{debug, info};

use super::kinematics::{self, PhysicalPoint};
use super::mapper::{ScreenMapper, ScreenPoint};
use super::params::{ParamError, ParamKind, SimulationParameters};
use crate::config::SimConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Paused,
    Landed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingResult {
    pub horizontal_distance_m: f64,
    /// Simulated seconds at the step that touched down.
    pub time_s: f64,
}

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

#[derive(Clone, Debug)]
pub struct SimSession {
    params: SimulationParameters,
    mapper: ScreenMapper,
    time_step: f64,
    landing_correction: f64,
    state: AnimationState,
    elapsed: f64,
    history: Vec<ScreenPoint>,
    landing: Option<LandingResult>,
    anchor: ScreenPoint,
    projectile: ScreenPoint,
    peak_height: Option<f64>,
}

impl SimSession {
    pub fn new(cfg: &SimConfig) -> Self {
        let mapper = ScreenMapper::from_config(cfg);
        let anchor = mapper.cannon_anchor(cfg.initial.angle_deg);
        Self {
            params: cfg.initial,
            mapper,
            time_step: cfg.time_step,
            landing_correction: cfg.landing_correction,
            state: AnimationState::Idle,
            elapsed: 0.0,
            history: Vec::new(),
            landing: None,
            anchor,
            projectile: anchor,
            peak_height: None,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }
    pub fn mapper(&self) -> &ScreenMapper {
        &self.mapper
    }
    pub fn state(&self) -> AnimationState {
        self.state
    }
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
    pub fn history(&self) -> &[ScreenPoint] {
        &self.history
    }
    pub fn landing(&self) -> Option<LandingResult> {
        self.landing
    }
    pub fn anchor(&self) -> ScreenPoint {
        self.anchor
    }
    pub fn projectile(&self) -> ScreenPoint {
        self.projectile
    }
    pub fn peak_height(&self) -> Option<f64> {
        self.peak_height
    }
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Applies a slider value. Takes effect on the next step, even mid-flight.
    pub fn set_parameter(&mut self, kind: ParamKind, raw: &str) -> Result<f64, ParamError> {
        let value = self.params.set_from_str(kind, raw)?;
        if kind == ParamKind::Angle {
            self.refresh_anchor();
        }
        Ok(value)
    }

    /// Starts a new shot from Idle or Landed. Ignored while a shot is in
    /// flight, paused or not.
    pub fn fire(&mut self) -> bool {
        match self.state {
            AnimationState::Running | AnimationState::Paused => false,
            AnimationState::Idle | AnimationState::Landed => {
                self.clear_run();
                self.state = AnimationState::Running;
                info!(
                    "fire: v0={} angle={} g={} h={}",
                    self.params.initial_velocity,
                    self.params.angle_deg,
                    self.params.gravity,
                    self.params.launch_height
                );
                true
            }
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }
        self.state = AnimationState::Paused;
        debug!("paused at t={:.2}", self.elapsed);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != AnimationState::Paused {
            return false;
        }
        self.state = AnimationState::Running;
        debug!("resumed at t={:.2}", self.elapsed);
        true
    }

    /// Back to a pristine Idle cannon, from any state.
    pub fn reset(&mut self) {
        self.clear_run();
        self.state = AnimationState::Idle;
        info!("reset");
    }

    /// Advances one fixed time step. Does nothing unless Running.
    pub fn step(&mut self) {
        if self.state != AnimationState::Running {
            return;
        }
        self.elapsed += self.time_step;
        let pos = kinematics::position_at(self.elapsed, &self.params);
        self.refresh_anchor();
        let screen = self.mapper.to_screen(self.anchor, pos);
        self.projectile = screen;
        self.history.push(screen);
        self.peak_height = Some(self.peak_height.map_or(pos.y, |h| h.max(pos.y)));

        if self.mapper.has_reached_ground(screen) {
            self.land(pos);
        }
    }

    /// One frame: step, then report whether another frame is wanted.
    pub fn tick(&mut self) -> Tick {
        self.step();
        if self.state == AnimationState::Running {
            Tick::Continue
        } else {
            Tick::Stop
        }
    }

    fn land(&mut self, pos: PhysicalPoint) {
        let result = LandingResult {
            horizontal_distance_m: pos.x - self.landing_correction,
            time_s: self.elapsed,
        };
        self.landing = Some(result);
        self.state = AnimationState::Landed;
        info!(
            "landed after {:.2}s at {:.2} m ({} samples)",
            result.time_s,
            result.horizontal_distance_m,
            self.history.len()
        );
    }

    fn clear_run(&mut self) {
        self.elapsed = 0.0;
        self.history.clear();
        self.landing = None;
        self.peak_height = None;
        self.refresh_anchor();
        self.projectile = self.anchor;
    }

    fn refresh_anchor(&mut self) {
        let anchor = self.mapper.cannon_anchor(self.params.angle_deg);
        if anchor != self.anchor {
            debug!("cannon tip at ({:.1}, {:.1})", anchor.x, anchor.y);
        }
        self.anchor = anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SimSession {
        SimSession::new(&SimConfig::default())
    }

    #[test]
    fn starts_idle_with_projectile_on_the_tip() {
        let s = session();
        assert_eq!(s.state(), AnimationState::Idle);
        assert_eq!(s.elapsed(), 0.0);
        assert!(s.history().is_empty());
        assert_eq!(s.projectile(), s.anchor());
        assert_eq!(s.anchor(), s.mapper().cannon_anchor(20.0));
    }

    #[test]
    fn step_is_inert_unless_running() {
        let mut s = session();
        s.step();
        assert_eq!(s.elapsed(), 0.0);
        assert!(s.history().is_empty());
        assert_eq!(s.tick(), Tick::Stop);
    }

    #[test]
    fn each_step_appends_one_sample() {
        let mut s = session();
        assert!(s.fire());
        for _ in 0..5 {
            assert_eq!(s.tick(), Tick::Continue);
        }
        assert_eq!(s.history().len(), 5);
        assert!((s.elapsed() - 0.05).abs() < 1e-12);
        assert_eq!(*s.history().last().unwrap(), s.projectile());
    }

    #[test]
    fn fire_while_running_is_a_no_op() {
        let mut s = session();
        s.fire();
        s.step();
        s.step();
        let before = s.history().to_vec();
        let t = s.elapsed();
        assert!(!s.fire());
        assert_eq!(s.state(), AnimationState::Running);
        assert_eq!(s.history(), before.as_slice());
        assert_eq!(s.elapsed(), t);
    }

    #[test]
    fn pause_freezes_and_resume_continues_without_gap() {
        let mut s = session();
        s.fire();
        for _ in 0..10 {
            s.step();
        }
        assert!(s.pause());
        let frozen = s.elapsed();
        s.step();
        assert_eq!(s.tick(), Tick::Stop);
        assert_eq!(s.elapsed(), frozen);
        assert_eq!(s.history().len(), 10);
        assert!(!s.fire());

        assert!(s.resume());
        s.step();
        assert_eq!(s.history().len(), 11);
        let dt = s.elapsed() - frozen;
        assert!((dt - s.time_step()).abs() < 1e-12);
        let h = s.history();
        assert_ne!(h[9], h[10]);
    }

    #[test]
    fn resume_and_pause_ignored_in_wrong_states() {
        let mut s = session();
        assert!(!s.pause());
        assert!(!s.resume());
        s.fire();
        assert!(!s.resume());
        assert_eq!(s.state(), AnimationState::Running);
    }

    #[test]
    fn reference_shot_lands_where_kinematics_say() {
        let mut s = session();
        s.fire();
        let mut frames = 0;
        while s.tick() == Tick::Continue {
            frames += 1;
            assert!(frames < 10_000, "never landed");
        }
        assert_eq!(s.state(), AnimationState::Landed);
        let landing = s.landing().unwrap();
        let (vx, _) = kinematics::velocity_components(s.params());
        let t_root = kinematics::time_of_flight(s.params()).unwrap();

        assert!((landing.horizontal_distance_m - (vx * s.elapsed() - 0.15)).abs() < 1e-9);
        assert!(s.elapsed() >= t_root - 1e-9);
        assert!(s.elapsed() - t_root <= s.time_step() + 1e-9);
        let expected = vx * t_root - 0.15;
        assert!((landing.horizontal_distance_m - expected).abs() <= vx * s.time_step() + 1e-9);
    }

    #[test]
    fn landing_is_terminal_until_fired_again() {
        let mut s = session();
        s.fire();
        while s.tick() == Tick::Continue {}
        let samples = s.history().len();
        let landing = s.landing();
        s.step();
        assert!(!s.resume());
        s.step();
        assert_eq!(s.history().len(), samples);
        assert_eq!(s.landing(), landing);

        assert!(s.fire());
        assert!(s.history().is_empty());
        assert!(s.landing().is_none());
        assert_eq!(s.state(), AnimationState::Running);
    }

    #[test]
    fn reset_from_every_state() {
        let setups: [fn(&mut SimSession); 4] = [
            |_| {},
            |s| {
                s.fire();
                s.step();
                s.step();
            },
            |s| {
                s.fire();
                s.step();
                s.pause();
            },
            |s| {
                s.fire();
                while s.tick() == Tick::Continue {}
            },
        ];
        for setup in setups {
            let mut s = session();
            setup(&mut s);
            s.set_parameter(ParamKind::Angle, "45").unwrap();
            s.reset();
            assert_eq!(s.state(), AnimationState::Idle);
            assert_eq!(s.elapsed(), 0.0);
            assert!(s.history().is_empty());
            assert!(s.landing().is_none());
            assert!(s.peak_height().is_none());
            assert_eq!(s.anchor(), s.mapper().cannon_anchor(45.0));
            assert_eq!(s.projectile(), s.anchor());
        }
    }

    #[test]
    fn angle_change_while_idle_moves_tip_without_starting() {
        let mut s = session();
        let before = s.anchor();
        s.set_parameter(ParamKind::Angle, "60").unwrap();
        assert_ne!(s.anchor(), before);
        assert_eq!(s.anchor(), s.mapper().cannon_anchor(60.0));
        assert_eq!(s.state(), AnimationState::Idle);
        assert!(s.history().is_empty());
    }

    #[test]
    fn rejected_input_leaves_session_untouched() {
        let mut s = session();
        let anchor = s.anchor();
        assert!(s.set_parameter(ParamKind::Angle, "sixty").is_err());
        assert_eq!(s.params().angle_deg, 20.0);
        assert_eq!(s.anchor(), anchor);
    }

    #[test]
    fn parameter_change_is_seen_by_the_next_step() {
        let mut s = session();
        s.fire();
        s.step();
        s.set_parameter(ParamKind::Gravity, "0").unwrap();
        s.step();
        let t = s.elapsed();
        let expected = kinematics::position_at(t, s.params());
        let mapped = s.mapper().to_screen(s.anchor(), expected);
        assert_eq!(s.projectile(), mapped);
    }

    #[test]
    fn peak_height_tracks_the_highest_sample() {
        let mut s = session();
        s.fire();
        while s.tick() == Tick::Continue {}
        let apex = kinematics::apex_height(s.params());
        let peak = s.peak_height().unwrap();
        assert!(peak <= apex + 1e-9);
        assert!(apex - peak < 0.01);
    }
}
