//! Cannon trajectory visualizer.
//!
//! Sliders set the muzzle speed, elevation, mass, gravity and launch height;
//! Fire animates an ideal (drag-free) projectile from the cannon tip until it
//! touches the ground and reports how far it went.
//!
//! - [`model`] – parameters, kinematics, screen mapping and the shot session
//! - [`render`] – scene drawing onto a 2D surface
//! - [`config`] – named tuning constants, optionally overridden by the page
//! - [`components`] – the Yew UI and the animation-frame loop

pub mod components;
pub mod config;
pub mod model;
pub mod render;
pub mod state;
pub mod util;
