//! Simulated entities: player pulses and wave hazards

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Common contract for anything occupying world space in the simulation.
///
/// Drawing is left to the renderer, which reads [`Entity::position`] and
/// [`Entity::is_active`].
pub trait Entity {
    /// Advance internal timers by `dt` seconds
    fn update(&mut self, dt: f32);
    /// Apply a hazard-reduction effect (no-op for immune entities)
    fn disrupt(&mut self, strength: f32);
    /// World position
    fn position(&self) -> Vec2;
    /// Whether the entity is still simulated and drawn
    fn is_active(&self) -> bool;
}

/// A player-placed, time-limited marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pos: Vec2,
    /// Seconds since placement
    age: f32,
    lifetime: f32,
    active: bool,
}

impl Pulse {
    pub fn new(pos: Vec2) -> Self {
        Self::with_lifetime(pos, PULSE_LIFETIME)
    }

    pub fn with_lifetime(pos: Vec2, lifetime: f32) -> Self {
        Self {
            pos,
            age: 0.0,
            lifetime,
            active: true,
        }
    }

    pub fn age(&self) -> f32 {
        self.age
    }
}

impl Entity for Pulse {
    fn update(&mut self, dt: f32) {
        self.age += dt;
        if self.age > self.lifetime {
            self.active = false;
        }
    }

    // Pulses cannot be weakened
    fn disrupt(&mut self, _strength: f32) {}

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A hazard with depletable strength
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pos: Vec2,
    strength: f32,
    active: bool,
}

impl Wave {
    pub fn new(pos: Vec2) -> Self {
        Self::with_strength(pos, WAVE_STRENGTH)
    }

    pub fn with_strength(pos: Vec2, strength: f32) -> Self {
        Self {
            pos,
            strength,
            active: true,
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }
}

impl Entity for Wave {
    // Waves are stationary for now
    fn update(&mut self, _dt: f32) {}

    fn disrupt(&mut self, strength: f32) {
        if !self.active {
            return;
        }
        self.strength -= strength;
        if self.strength <= 0.0 {
            self.active = false;
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
