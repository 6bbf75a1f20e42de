//! Physical inputs for a shot and the slider-driven updates that mutate them.

use serde::Deserialize;
use std::error::Error;
use std::fmt;

pub const DEFAULT_INITIAL_VELOCITY: f64 = 18.0;
pub const DEFAULT_ANGLE_DEG: f64 = 20.0;
pub const DEFAULT_MASS: f64 = 24.35;
pub const DEFAULT_GRAVITY: f64 = 9.81;
pub const DEFAULT_LAUNCH_HEIGHT: f64 = 1.75;
pub const DEFAULT_TARGET_DISTANCE: f64 = 15.0;
pub const DEFAULT_AIR_DENSITY: f64 = 1.225;
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.47;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Muzzle speed in m/s.
    pub initial_velocity: f64,
    /// Elevation in degrees, 0 = horizontal.
    pub angle_deg: f64,
    /// Kilograms. Shown in the readout only, the kinematics ignore it.
    pub mass: f64,
    /// m/s^2, positive means downward pull.
    pub gravity: f64,
    /// Meters above the ground plane at t = 0.
    pub launch_height: f64,
    /// Meters from the cannon mount to the target marker.
    pub target_distance: f64,
    /// kg/m^3. Inert until a drag model exists.
    pub air_density: f64,
    /// Inert until a drag model exists.
    pub drag_coefficient: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            angle_deg: DEFAULT_ANGLE_DEG,
            mass: DEFAULT_MASS,
            gravity: DEFAULT_GRAVITY,
            launch_height: DEFAULT_LAUNCH_HEIGHT,
            target_distance: DEFAULT_TARGET_DISTANCE,
            air_density: DEFAULT_AIR_DENSITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
        }
    }
}

/// The five user-adjustable inputs. Target distance and the drag fields are
/// configuration-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    InitialVelocity,
    Angle,
    Mass,
    Gravity,
    LaunchHeight,
}

/// Slider bounds and step increment for one input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    /// Decimal places needed to write `step` exactly, e.g. 2 for 0.01.
    pub fn decimals(&self) -> i32 {
        let mut d = 0;
        while d < 6 && (self.step * 10f64.powi(d)).fract().abs() > 1e-9 {
            d += 1;
        }
        d
    }
}

impl ParamKind {
    pub const ALL: [ParamKind; 5] = [
        ParamKind::InitialVelocity,
        ParamKind::Angle,
        ParamKind::Mass,
        ParamKind::Gravity,
        ParamKind::LaunchHeight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamKind::InitialVelocity => "Initial speed (m/s)",
            ParamKind::Angle => "Angle (°)",
            ParamKind::Mass => "Mass (kg)",
            ParamKind::Gravity => "Gravity (m/s²)",
            ParamKind::LaunchHeight => "Launch height (m)",
        }
    }

    /// DOM id used for the slider element.
    pub fn id(self) -> &'static str {
        match self {
            ParamKind::InitialVelocity => "initial-speed",
            ParamKind::Angle => "angle",
            ParamKind::Mass => "mass",
            ParamKind::Gravity => "gravity",
            ParamKind::LaunchHeight => "launch-height",
        }
    }

    pub fn range(self) -> SliderRange {
        match self {
            ParamKind::InitialVelocity => SliderRange { min: 0.0, max: 30.0, step: 0.1 },
            ParamKind::Angle => SliderRange { min: 0.0, max: 90.0, step: 1.0 },
            ParamKind::Mass => SliderRange { min: 1.0, max: 31.0, step: 0.01 },
            ParamKind::Gravity => SliderRange { min: 0.0, max: 20.0, step: 0.01 },
            ParamKind::LaunchHeight => SliderRange { min: 0.0, max: 5.0, step: 0.01 },
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        let r = self.range();
        value.clamp(r.min, r.max)
    }

    /// Value one step below/above `current`, kept inside the slider bounds.
    pub fn nudge(self, current: f64, up: bool) -> f64 {
        let range = self.range();
        let next = if up { current + range.step } else { current - range.step };
        let snapped = (next / range.step).round() * range.step;
        // the multiply above can leave 0.30000000000000004; cut back to the step's decimals
        let scale = 10f64.powi(range.decimals());
        self.clamp((snapped * scale).round() / scale)
    }

    /// Readout text; speed and angle are shown verbatim, the rest with two decimals.
    pub fn format(self, value: f64) -> String {
        match self {
            ParamKind::InitialVelocity | ParamKind::Angle => format!("{}", value),
            ParamKind::Mass | ParamKind::Gravity | ParamKind::LaunchHeight => {
                format!("{:.2}", value)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    NotANumber { kind: ParamKind, raw: String },
    NotFinite { kind: ParamKind, value: f64 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamError::NotANumber { kind, raw } => {
                write!(f, "{:?}: '{}' is not a number", kind, raw)
            }
            ParamError::NotFinite { kind, value } => {
                write!(f, "{:?}: {} is not a finite value", kind, value)
            }
        }
    }
}

impl Error for ParamError {}

impl SimulationParameters {
    pub fn get(&self, kind: ParamKind) -> f64 {
        match kind {
            ParamKind::InitialVelocity => self.initial_velocity,
            ParamKind::Angle => self.angle_deg,
            ParamKind::Mass => self.mass,
            ParamKind::Gravity => self.gravity,
            ParamKind::LaunchHeight => self.launch_height,
        }
    }

    /// Stores `value` if it is finite. Range is the slider's job, not ours.
    pub fn set(&mut self, kind: ParamKind, value: f64) -> Result<(), ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NotFinite { kind, value });
        }
        let slot = match kind {
            ParamKind::InitialVelocity => &mut self.initial_velocity,
            ParamKind::Angle => &mut self.angle_deg,
            ParamKind::Mass => &mut self.mass,
            ParamKind::Gravity => &mut self.gravity,
            ParamKind::LaunchHeight => &mut self.launch_height,
        };
        *slot = value;
        Ok(())
    }

    /// Parses raw slider text and stores it. On error the previous value stays.
    pub fn set_from_str(&mut self, kind: ParamKind, raw: &str) -> Result<f64, ParamError> {
        let value: f64 = raw.trim().parse().map_err(|_| ParamError::NotANumber {
            kind,
            raw: raw.to_string(),
        })?;
        self.set(kind, value)?;
        Ok(value)
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let p = SimulationParameters::default();
        assert_eq!(p.initial_velocity, 18.0);
        assert_eq!(p.angle_deg, 20.0);
        assert_eq!(p.gravity, 9.81);
        assert_eq!(p.launch_height, 1.75);
        assert_eq!(p.target_distance, 15.0);
    }

    #[test]
    fn non_numeric_input_keeps_previous_value() {
        let mut p = SimulationParameters::default();
        let err = p.set_from_str(ParamKind::Gravity, "abc").unwrap_err();
        assert!(matches!(err, ParamError::NotANumber { kind: ParamKind::Gravity, .. }));
        assert_eq!(p.gravity, DEFAULT_GRAVITY);

        assert!(p.set_from_str(ParamKind::Angle, "").is_err());
        assert_eq!(p.angle_deg, DEFAULT_ANGLE_DEG);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut p = SimulationParameters::default();
        assert!(p.set_from_str(ParamKind::InitialVelocity, "NaN").is_err());
        assert!(p.set_from_str(ParamKind::InitialVelocity, "inf").is_err());
        assert!(p.set(ParamKind::Mass, f64::NAN).is_err());
        assert_eq!(p.initial_velocity, DEFAULT_INITIAL_VELOCITY);
        assert_eq!(p.mass, DEFAULT_MASS);
    }

    #[test]
    fn numeric_input_is_stored_without_range_check() {
        let mut p = SimulationParameters::default();
        assert_eq!(p.set_from_str(ParamKind::Angle, " 45 ").unwrap(), 45.0);
        assert_eq!(p.angle_deg, 45.0);
        // out of slider range, still numeric
        assert!(p.set_from_str(ParamKind::InitialVelocity, "-3").is_ok());
        assert_eq!(p.initial_velocity, -3.0);
    }

    #[test]
    fn nudge_clamps_to_slider_bounds() {
        assert_eq!(ParamKind::Angle.nudge(90.0, true), 90.0);
        assert_eq!(ParamKind::Angle.nudge(0.0, false), 0.0);
        assert_eq!(ParamKind::Angle.nudge(20.0, true), 21.0);
        let v = ParamKind::InitialVelocity.nudge(18.0, true);
        assert!((v - 18.1).abs() < 1e-9);
        assert_eq!(ParamKind::Mass.nudge(1.0, false), 1.0);
    }

    #[test]
    fn step_decimals() {
        assert_eq!(ParamKind::InitialVelocity.range().decimals(), 1);
        assert_eq!(ParamKind::Angle.range().decimals(), 0);
        assert_eq!(ParamKind::Gravity.range().decimals(), 2);
    }

    #[test]
    fn stepping_across_the_range_keeps_labels_short() {
        for kind in ParamKind::ALL {
            let r = kind.range();
            let max_len = format!("{:.*}", r.decimals() as usize, r.max).len();
            let mut v = r.min;
            let mut seen = vec![v];
            for _ in 0..5_000 {
                v = kind.nudge(v, true);
                seen.push(v);
            }
            assert_eq!(v, r.max, "{:?} never reached its max", kind);
            for _ in 0..5_000 {
                v = kind.nudge(v, false);
                seen.push(v);
            }
            assert_eq!(v, r.min, "{:?} never returned to its min", kind);
            for value in seen {
                let label = kind.format(value);
                assert!(label.len() <= max_len, "{:?} label {:?}", kind, label);
                let sent = value.to_string();
                assert!(sent.len() <= max_len, "{:?} slider text {:?}", kind, sent);
            }
        }
    }

    #[test]
    fn velocity_steps_from_zero_are_exact() {
        let mut v = 0.0;
        for _ in 0..3 {
            v = ParamKind::InitialVelocity.nudge(v, true);
        }
        assert_eq!(v.to_string(), "0.3");
        assert_eq!(ParamKind::InitialVelocity.format(v), "0.3");
    }

    #[test]
    fn readout_formatting() {
        assert_eq!(ParamKind::Angle.format(20.0), "20");
        assert_eq!(ParamKind::InitialVelocity.format(18.5), "18.5");
        assert_eq!(ParamKind::Gravity.format(9.81), "9.81");
        assert_eq!(ParamKind::Mass.format(24.351), "24.35");
    }
}
