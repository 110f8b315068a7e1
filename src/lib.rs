//! Wavegrid library - procedural water surface on a quad grid

pub mod cli;
pub mod debug;
pub mod error;
pub mod noise;
pub mod params;
pub mod water;
