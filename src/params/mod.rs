//! Parameter definitions with units and documented semantics.
//!
//! Every tunable number lives here with:
//! - Units (world units, radians, seconds)
//! - Documented defaults and meanings
//! - Validation that fails fast at construction time

mod run;
mod water;

// Re-export all types
pub use run::{RunConfig, SnapshotConfig};
pub use water::{GridParams, SurfaceParams, WaveConfig, WaveMode};
