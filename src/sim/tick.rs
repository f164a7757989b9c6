//! Per-frame simulation step
//!
//! A frame applies the player's intents, then advances the world in three
//! strictly ordered phases: update, collision, completion.

use serde::{Deserialize, Serialize};

use super::collision::disrupt_waves;
use super::entity::Entity;
use super::grid::Direction;
use super::state::GameState;

/// A single player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    PlacePulse,
    Reset,
}

/// Player intents for a single frame, applied in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// What happened during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// In-range (pulse, wave) pairs this frame
    pub disruptions: u32,
    /// Waves that became inactive this frame
    pub waves_neutralized: u32,
    /// Pulses that expired this frame
    pub pulses_expired: u32,
    /// Stability added this frame
    pub stability_gained: f32,
}

impl GameState {
    /// Apply one intent
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Move(dir) => self.move_cursor(dir),
            Intent::PlacePulse => {
                self.place_pulse_at_cursor();
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Apply a frame's intents in order without advancing time
    pub fn apply_input(&mut self, input: &TickInput) {
        for &intent in &input.intents {
            self.apply_intent(intent);
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Keeps running after completion or overload; deciding whether to stop
    /// feeding input is up to the driver.
    pub fn advance(&mut self, dt: f32) -> FrameReport {
        let was_complete = self.level_complete;
        let was_overloaded = self.is_overloaded();
        let mut report = FrameReport::default();

        self.frames += 1;
        self.elapsed += dt;

        // Update phase
        for pulse in self.grid.pulses_mut() {
            let was_active = pulse.is_active();
            pulse.update(dt);
            if was_active && !pulse.is_active() {
                report.pulses_expired += 1;
            }
        }
        for wave in &mut self.waves {
            wave.update(dt);
        }
        if report.pulses_expired > 0 {
            log::debug!("{} pulse(s) expired", report.pulses_expired);
        }

        // Collision phase
        let hits = disrupt_waves(
            &self.grid,
            &mut self.waves,
            self.tuning.disruption_radius,
            self.tuning.disruption_amount,
        );
        report.disruptions = hits.disruptions;
        report.waves_neutralized = hits.neutralized;
        report.stability_gained = hits.disruptions as f32 * self.tuning.stability_per_disruption;
        self.stability += report.stability_gained;

        // Completion phase
        self.level_complete = self.waves.iter().all(|w| !w.is_active());

        if self.level_complete && !was_complete {
            log::info!(
                "Level complete after {} frames (stability {:.1})",
                self.frames,
                self.stability
            );
        }
        if self.is_overloaded() && !was_overloaded {
            log::info!("Network overload (stability {:.1})", self.stability);
        }

        report
    }
}

/// Apply intents then advance one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> FrameReport {
    state.apply_input(input);
    state.advance(dt)
}
