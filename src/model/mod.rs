//! Core data model for the cannon simulator: inputs, motion, screen mapping
//! and the per-shot session state machine.

pub mod kinematics;
pub mod mapper;
pub mod params;
pub mod session;

pub use kinematics::{PhysicalPoint, position_at};
pub use mapper::{ScreenMapper, ScreenPoint};
pub use params::{ParamError, ParamKind, SimulationParameters, SliderRange};
pub use session::{AnimationState, LandingResult, SimSession, Tick};
