//! Motion-adaptive comfort effects for real-time 3D viewers.
//!
//! Estimates a discomfort intensity from an observer's linear and angular
//! velocity, then derives two mitigations: a narrowed field of view and a
//! vignette mask. The host render loop supplies poses once per frame and
//! applies the outputs; this crate does no rendering of its own.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod fov;
pub mod pipeline;
pub mod smoothing;
pub mod vignette;

pub static VIGNETTE_WGSL: &str = include_str!("../shaders/vignette.wgsl");

pub use analyzer::*;
pub use config::*;
pub use constants::*;
pub use fov::*;
pub use pipeline::*;
pub use smoothing::*;
pub use vignette::*;
