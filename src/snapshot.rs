//! Read-only view of the simulation for renderers
//!
//! A snapshot carries everything needed to draw a frame: cell occupancy,
//! entity positions, the cursor rectangle, the stability meter and the
//! outcome banner. It is plain data and serializes to JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{CellCoord, Entity, GameState, Outcome};

/// A pulse as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseView {
    pub cell: CellCoord,
    pub pos: Vec2,
    pub active: bool,
}

/// A wave as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub pos: Vec2,
    pub active: bool,
}

/// Renderable state for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    /// Occupied cells in row-major order (expired pulses included)
    pub pulses: Vec<PulseView>,
    pub waves: Vec<WaveView>,
    pub cursor: CellCoord,
    /// World origin of the cursor's cell
    pub cursor_origin: Vec2,
    pub stability: f32,
    /// Meter fill, 1.0 at overload
    pub stability_fraction: f32,
    pub stability_critical: bool,
    pub level_complete: bool,
    pub outcome: Outcome,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let pulses = state
            .grid()
            .iter()
            .map(|(cell, pulse)| PulseView {
                cell,
                pos: pulse.position(),
                active: pulse.is_active(),
            })
            .collect();
        let waves = state
            .waves()
            .iter()
            .map(|wave| WaveView {
                pos: wave.position(),
                active: wave.is_active(),
            })
            .collect();

        Self {
            frame: state.frames(),
            pulses,
            waves,
            cursor: state.cursor(),
            cursor_origin: state.cursor().world_origin(),
            stability: state.stability(),
            stability_fraction: state.stability_fraction(),
            stability_critical: state.stability_critical(),
            level_complete: state.is_level_complete(),
            outcome: state.outcome(),
        }
    }

    /// Pulses still worth drawing
    pub fn active_pulses(&self) -> impl Iterator<Item = &PulseView> {
        self.pulses.iter().filter(|p| p.active)
    }

    /// Waves still worth drawing
    pub fn active_waves(&self) -> impl Iterator<Item = &WaveView> {
        self.waves.iter().filter(|w| w.active)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
