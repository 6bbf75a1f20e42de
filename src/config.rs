//! Simulation configuration.
//!
//! Every tuning constant of the animation lives here under a name, with the
//! defaults of the reference 1200×400 layout. A page can override any subset
//! by embedding JSON in a script tag:
//!
//! ```html
//! <script type="application/json" id="sim-config">
//!   { "time_step": 0.02, "scale_y": 26.67, "initial": { "angle_deg": 35 } }
//! </script>
//! ```

use serde::Deserialize;
use std::error::Error;
use std::fmt;

use crate::model::SimulationParameters;

pub const DEFAULT_TIME_STEP: f64 = 0.01;
/// Meters subtracted from the landing x so the marker edge, not its center,
/// lines up with ground contact.
pub const DEFAULT_LANDING_CORRECTION: f64 = 0.15;
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;
pub const DEFAULT_VISIBLE_WIDTH_M: f64 = 30.0;
pub const DEFAULT_VISIBLE_HEIGHT_M: f64 = 10.0;
pub const DEFAULT_GROUND_OFFSET: f64 = 20.0;
pub const DEFAULT_MOUNT_X: f64 = 40.0;
pub const DEFAULT_MOUNT_INSET: f64 = 40.0;
pub const DEFAULT_CANNON_LENGTH: f64 = 80.0;
pub const DEFAULT_CANNON_WIDTH: f64 = 20.0;
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;
pub const DEFAULT_TARGET_RADIUS: f64 = 20.0;
pub const CONFIG_ELEMENT_ID: &str = "sim-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seconds of simulated time per animation frame.
    pub time_step: f64,
    pub landing_correction: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub ground_offset: f64,
    pub mount_x: f64,
    /// Distance of the mount point above the canvas bottom edge.
    pub mount_inset: f64,
    pub cannon_length: f64,
    pub cannon_width: f64,
    pub marker_radius: f64,
    pub target_radius: f64,
    /// Slider positions on load.
    pub initial: SimulationParameters,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            landing_correction: DEFAULT_LANDING_CORRECTION,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            scale_x: DEFAULT_CANVAS_WIDTH / DEFAULT_VISIBLE_WIDTH_M,
            scale_y: DEFAULT_CANVAS_HEIGHT / DEFAULT_VISIBLE_HEIGHT_M,
            ground_offset: DEFAULT_GROUND_OFFSET,
            mount_x: DEFAULT_MOUNT_X,
            mount_inset: DEFAULT_MOUNT_INSET,
            cannon_length: DEFAULT_CANNON_LENGTH,
            cannon_width: DEFAULT_CANNON_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
            target_radius: DEFAULT_TARGET_RADIUS,
            initial: SimulationParameters::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config is not valid JSON: {}", e),
            ConfigError::Invalid(what) => write!(f, "invalid config: {}", what),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl SimConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid("time_step must be a positive number"));
        }
        if !(self.scale_x > 0.0 && self.scale_y > 0.0) {
            return Err(ConfigError::Invalid("scale_x and scale_y must be positive"));
        }
        let dims = [self.canvas_width, self.canvas_height];
        if !dims.iter().all(|d| d.is_finite() && *d >= 1.0) {
            return Err(ConfigError::Invalid("canvas dimensions must be at least 1 px"));
        }
        Ok(())
    }

    /// Canvas backing-store size in whole pixels.
    pub fn canvas_size_px(&self) -> (u32, u32) {
        (
            self.canvas_width.round() as u32,
            self.canvas_height.round() as u32,
        )
    }

    /// Reads the `#sim-config` element if the page has one. Missing element
    /// means defaults; a broken one is logged and also means defaults.
    pub fn load_from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(text) if !text.trim().is_empty() => match Self::from_json(&text) {
                Ok(cfg) => {
                    log::info!("loaded simulation config from #{}", CONFIG_ELEMENT_ID);
                    cfg
                }
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
