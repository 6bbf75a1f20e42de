pub mod frame_loop;
pub mod label_cadence;

pub use frame_loop::FrameLoop;
pub use label_cadence::LabelCadence;
