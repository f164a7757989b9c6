//! Gameplay tuning
//!
//! Every balance constant lives here so a driver can load alternatives from
//! JSON. Grid geometry and the roster size are not tunable: renderers rely
//! on the fixed origin/cell-size mapping in [`crate::consts`], and a level
//! always holds exactly [`crate::consts::WAVE_COUNT`] waves.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{TuningError, TuningResult};

/// Balance values for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds a pulse stays active
    pub pulse_lifetime: f32,
    /// Starting strength of each wave
    pub wave_strength: f32,
    /// Pulse/wave distance below which disruption happens
    pub disruption_radius: f32,
    /// Strength removed per in-range pair per frame
    pub disruption_amount: f32,
    /// Stability added per in-range pair per frame
    pub stability_per_disruption: f32,
    /// Stability at which the network overloads
    pub overload_threshold: f32,
    /// Stability above which the meter shows as critical
    pub critical_threshold: f32,
    /// Wave spawn rectangle (inclusive corners)
    pub spawn_min: Vec2,
    pub spawn_max: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        let (spawn_min, spawn_max) = crate::grid_bounds();
        Self {
            pulse_lifetime: PULSE_LIFETIME,
            wave_strength: WAVE_STRENGTH,
            disruption_radius: DISRUPTION_RADIUS,
            disruption_amount: DISRUPTION_AMOUNT,
            stability_per_disruption: STABILITY_PER_DISRUPTION,
            overload_threshold: OVERLOAD_THRESHOLD,
            critical_threshold: CRITICAL_THRESHOLD,
            spawn_min,
            spawn_max,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> TuningResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> TuningResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> TuningResult<()> {
        positive("pulse_lifetime", self.pulse_lifetime)?;
        positive("wave_strength", self.wave_strength)?;
        positive("disruption_radius", self.disruption_radius)?;
        positive("disruption_amount", self.disruption_amount)?;
        positive("overload_threshold", self.overload_threshold)?;

        if !(self.stability_per_disruption.is_finite() && self.stability_per_disruption >= 0.0) {
            // Negative values would let stability decrease
            return Err(TuningError::Invalid {
                field: "stability_per_disruption",
                reason: "must be finite and non-negative",
            });
        }
        if !self.critical_threshold.is_finite() {
            return Err(TuningError::Invalid {
                field: "critical_threshold",
                reason: "must be finite",
            });
        }
        if !(self.spawn_min.is_finite() && self.spawn_max.is_finite())
            || self.spawn_min.cmpgt(self.spawn_max).any()
        {
            return Err(TuningError::Invalid {
                field: "spawn_min",
                reason: "spawn rectangle must be finite with min <= max",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> TuningResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pulse_lifetime, 3.0);
        assert_eq!(tuning.disruption_radius, 50.0);
        assert_eq!(tuning.spawn_min, Vec2::new(250.0, 150.0));
        assert_eq!(tuning.spawn_max, Vec2::new(450.0, 350.0));
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "pulse_lifetime": 5.0 }"#).unwrap();
        assert_eq!(tuning.pulse_lifetime, 5.0);
        assert_eq!(tuning.overload_threshold, 100.0);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "wave_strength": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "wave_strength", .. }));

        let err = Tuning::from_json(r#"{ "disruption_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "disruption_radius", .. }));

        let err = Tuning::from_json(r#"{ "spawn_min": [500.0, 0.0] }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "spawn_min", .. }));
    }

    #[test]
    fn test_roster_size_not_tunable() {
        // Unknown keys are ignored; the level still spawns three waves
        let tuning = Tuning::from_json(r#"{ "wave_count": 7 }"#).unwrap();
        assert_eq!(tuning, Tuning::default());
        let state = crate::sim::GameState::with_tuning(1, tuning).unwrap();
        assert_eq!(state.waves().len(), WAVE_COUNT);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/nonexistent/pulse-grid-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
