//! Pulse Grid - a small real-time grid puzzle simulation
//!
//! Core modules:
//! - `sim`: Simulation engine (entities, grid, disruption, stability)
//! - `tuning`: Data-driven gameplay constants
//! - `snapshot`: Read-only view handed to an external renderer
//! - `error`: Configuration errors
//!
//! Rendering and raw input polling are not part of this crate. A driver
//! translates key presses into ordered [`sim::Intent`]s, calls
//! [`sim::tick`] once per frame and draws the resulting [`Snapshot`].

pub mod error;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::TuningError;
pub use snapshot::Snapshot;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Grid dimensions (cells per side)
    pub const GRID_SIZE: usize = 5;
    /// Side length of a grid cell in world units
    pub const CELL_SIZE: f32 = 50.0;
    /// World position of the top-left corner of cell (0, 0)
    pub const GRID_ORIGIN: Vec2 = Vec2::new(250.0, 150.0);

    /// Pulse lifetime in seconds (expires once age exceeds this)
    pub const PULSE_LIFETIME: f32 = 3.0;

    /// Waves per level (fixed for the level's lifetime)
    pub const WAVE_COUNT: usize = 3;
    /// Starting strength of a wave
    pub const WAVE_STRENGTH: f32 = 1.0;

    /// Pulse/wave distance below which a wave is disrupted
    pub const DISRUPTION_RADIUS: f32 = 50.0;
    /// Strength removed from a wave per in-range pulse per frame
    pub const DISRUPTION_AMOUNT: f32 = 0.5;
    /// Stability added per in-range (pulse, wave) pair per frame
    pub const STABILITY_PER_DISRUPTION: f32 = 5.0;

    /// Stability at which the network is overloaded
    pub const OVERLOAD_THRESHOLD: f32 = 100.0;
    /// Stability above which the meter is drawn as critical
    pub const CRITICAL_THRESHOLD: f32 = 80.0;
}

/// World position of the origin (top-left corner) of a grid cell
#[inline]
pub fn cell_origin(col: usize, row: usize) -> Vec2 {
    consts::GRID_ORIGIN + Vec2::new(col as f32, row as f32) * consts::CELL_SIZE
}

/// World-space extent spanned by cell origins as (min, max) corners.
///
/// Pulses are placed at cell origins, so hit-testing happens inside this
/// rectangle. Waves spawn inside the same rectangle.
#[inline]
pub fn grid_bounds() -> (Vec2, Vec2) {
    let last = consts::GRID_SIZE - 1;
    (cell_origin(0, 0), cell_origin(last, last))
}
