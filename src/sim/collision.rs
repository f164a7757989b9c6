//! Proximity checks between pulses and waves
//!
//! Every active pulse is tested against every active wave. Each pair closer
//! than the disruption radius weakens the wave and strains the network.

use glam::Vec2;

use super::entity::{Entity, Wave};
use super::grid::Grid;

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// In-range (pulse, wave) pairs found
    pub disruptions: u32,
    /// Waves that became inactive during the pass
    pub neutralized: u32,
}

/// Whether two positions are strictly closer than `radius`
#[inline]
pub fn in_disruption_range(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Run the collision pass, disrupting every wave in range of an active pulse.
///
/// Activity is checked per pair, so a wave knocked out by one pulse is
/// skipped by pulses visited later in the same pass. A pulse in range of
/// several waves disrupts each of them.
pub fn disrupt_waves(grid: &Grid, waves: &mut [Wave], radius: f32, amount: f32) -> CollisionResult {
    let mut result = CollisionResult::default();

    for (cell, pulse) in grid.iter() {
        if !pulse.is_active() {
            continue;
        }
        for (index, wave) in waves.iter_mut().enumerate() {
            if !wave.is_active() {
                continue;
            }
            if !in_disruption_range(pulse.position(), wave.position(), radius) {
                continue;
            }

            wave.disrupt(amount);
            result.disruptions += 1;
            log::trace!(
                "Pulse at ({}, {}) disrupted wave {} (strength {:.2})",
                cell.col,
                cell.row,
                index,
                wave.strength()
            );

            if !wave.is_active() {
                result.neutralized += 1;
                log::debug!("Wave {} neutralized", index);
            }
        }
    }

    result
}
