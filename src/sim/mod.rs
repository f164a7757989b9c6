//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the state
//! - Stable iteration order (row-major grid, roster order)
//! - No rendering, input polling or clock access

pub mod collision;
pub mod entity;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, disrupt_waves, in_disruption_range};
pub use entity::{Entity, Pulse, Wave};
pub use grid::{CellCoord, Direction, Grid};
pub use state::{GameState, Outcome};
pub use tick::{FrameReport, Intent, TickInput, tick};
