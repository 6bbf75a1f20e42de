pub mod app;
pub mod controls_panel;
pub mod parameter_slider;
pub mod readout_panel;

pub use app::{App, AppProps};
