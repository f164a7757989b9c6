//! Simulation state and intent operations
//!
//! Everything the engine mutates is owned by [`GameState`]. Renderers read
//! it through accessors or a [`crate::Snapshot`]; all mutation goes through
//! the methods here and [`super::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Pulse, Wave};
use super::grid::{CellCoord, Direction, Grid};
use crate::consts::WAVE_COUNT;
use crate::error::TuningResult;
use crate::tuning::Tuning;

/// Displayed game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Waves remain and the network holds
    Playing,
    /// Every wave is inactive
    Complete,
    /// Stability reached the overload threshold
    Overloaded,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was last seeded with
    pub(super) seed: u64,
    /// Spawn RNG, seeded once and reused across resets
    rng: Pcg32,
    pub(super) tuning: Tuning,
    pub(super) grid: Grid,
    /// Wave roster, fixed size for the whole level
    pub(super) waves: Vec<Wave>,
    pub(super) cursor: CellCoord,
    /// Network strain, only ever reset to zero
    pub(super) stability: f32,
    pub(super) level_complete: bool,
    /// Frames advanced since the last reset
    pub(super) frames: u64,
    /// Simulated seconds since the last reset
    pub(super) elapsed: f32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game state with custom tuning.
    ///
    /// The tuning is validated first, so spawning can never see an
    /// unusable spawn rectangle or strength.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> TuningResult<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            grid: Grid::new(),
            waves: Vec::new(),
            cursor: CellCoord::default(),
            stability: 0.0,
            level_complete: false,
            frames: 0,
            elapsed: 0.0,
        };
        state.spawn_waves();
        log::info!(
            "Simulation created (seed {}, {} waves)",
            seed,
            state.waves.len()
        );
        state
    }

    /// Create a state with a hand-placed wave roster instead of random spawns
    pub fn with_waves(seed: u64, positions: &[Vec2]) -> Self {
        let mut state = Self::new(seed);
        state.waves = positions
            .iter()
            .map(|&pos| Wave::with_strength(pos, state.tuning.wave_strength))
            .collect();
        state
    }

    /// Replace the roster with `WAVE_COUNT` fresh waves at random positions
    fn spawn_waves(&mut self) {
        let (min, max) = (self.tuning.spawn_min, self.tuning.spawn_max);
        let strength = self.tuning.wave_strength;
        self.waves.clear();
        for _ in 0..WAVE_COUNT {
            let x = self.rng.random_range(min.x..=max.x);
            let y = self.rng.random_range(min.y..=max.y);
            self.waves.push(Wave::with_strength(Vec2::new(x, y), strength));
        }
    }

    /// Reseed the spawn RNG. Later resets draw from the new sequence.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Start the level over: empty grid, new waves, cursor and stability zeroed
    pub fn reset(&mut self) {
        self.grid.clear();
        self.spawn_waves();
        self.cursor = CellCoord::default();
        self.stability = 0.0;
        self.level_complete = false;
        self.frames = 0;
        self.elapsed = 0.0;
        log::info!("Level reset");
    }

    /// Move the cursor one cell, clamped to the grid
    pub fn move_cursor(&mut self, dir: Direction) {
        self.cursor = self.cursor.step(dir);
    }

    pub fn move_up(&mut self) {
        self.move_cursor(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.move_cursor(Direction::Down);
    }

    pub fn move_left(&mut self) {
        self.move_cursor(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(Direction::Right);
    }

    /// Place a pulse in the cursor's cell if it is empty.
    ///
    /// Returns whether a pulse was placed. Cells holding an expired pulse
    /// count as occupied.
    pub fn place_pulse_at_cursor(&mut self) -> bool {
        let at = self.cursor;
        let pulse = Pulse::with_lifetime(at.world_origin(), self.tuning.pulse_lifetime);
        let placed = self.grid.place(at, pulse);
        if placed {
            log::debug!("Pulse placed at ({}, {})", at.col, at.row);
        } else {
            log::debug!("Cell ({}, {}) occupied, pulse refused", at.col, at.row);
        }
        placed
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn cursor(&self) -> CellCoord {
        self.cursor
    }

    pub fn stability(&self) -> f32 {
        self.stability
    }

    /// Whether every wave was inactive at the last completion check
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    pub fn is_overloaded(&self) -> bool {
        self.stability >= self.tuning.overload_threshold
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Stability meter fill (1.0 at the overload threshold, not clamped)
    pub fn stability_fraction(&self) -> f32 {
        self.stability / self.tuning.overload_threshold
    }

    /// Whether the meter should be drawn in its warning color
    pub fn stability_critical(&self) -> bool {
        self.stability > self.tuning.critical_threshold
    }

    /// Outcome to display; completion takes precedence over overload.
    ///
    /// Neither outcome stops the simulation.
    pub fn outcome(&self) -> Outcome {
        if self.level_complete {
            Outcome::Complete
        } else if self.is_overloaded() {
            Outcome::Overloaded
        } else {
            Outcome::Playing
        }
    }
}
