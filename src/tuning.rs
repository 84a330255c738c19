//! Data-driven physics and rules tuning
//!
//! Every constant the engine balances against lives here so a host can ship
//! a JSON file instead of recompiling. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Physics, rules and hole-generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Gravitational acceleration (units/s²)
    pub gravity: f32,
    /// Simulated seconds per real second (arcade speed-up)
    pub time_scale: f32,
    /// Largest real frame delta accepted per advance (stall guard)
    pub max_frame_dt: f32,
    /// Velocity multiplier applied after a tree contact
    pub tree_damping: f32,

    // === Putting ===
    /// Per-tick velocity multiplier while rolling
    pub putt_friction: f32,
    /// Initial roll speed per unit of effective distance (1/s)
    pub roll_constant: f32,
    /// Rolling stops below this speed (units/s)
    pub roll_stop_speed: f32,

    // === Rules ===
    /// Resting within this many yards of the hole on the green means putting
    pub putt_threshold_yards: f32,
    /// Resting within this many yards of the hole means holed
    pub holed_threshold_yards: f32,

    // === Shot variance ===
    /// Accuracy factor spread around 1.0 (normal lies)
    pub accuracy_spread: f32,
    /// Accuracy factor spread around 1.0 from a bunker
    pub bunker_accuracy_spread: f32,
    /// Lateral miss as a fraction of effective distance (normal lies)
    pub dispersion_ratio: f32,
    /// Lateral miss as a fraction of effective distance from a bunker
    pub bunker_dispersion_ratio: f32,
    /// Distance multiplier for any shot out of sand
    pub sand_penalty: f32,
    /// Extra multiplier for hitting driver out of sand
    pub bunker_driver_penalty: f32,

    // === Course ===
    /// Yards per world unit (world units are metres)
    pub yards_per_unit: f32,
    /// Inclusive bunker count range per hole
    pub bunkers: (u32, u32),
    /// Maximum water hazards per hole
    pub max_water: u32,
    /// Maximum trees per hole
    pub max_trees: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            time_scale: 2.5,
            max_frame_dt: 0.1,
            tree_damping: 0.5,

            putt_friction: 0.96,
            // Makes a full roll cover the effective distance at 120 Hz
            roll_constant: 4.8,
            roll_stop_speed: 0.05,

            putt_threshold_yards: 20.0,
            holed_threshold_yards: 0.75,

            accuracy_spread: 0.05,
            bunker_accuracy_spread: 0.10,
            dispersion_ratio: 0.10,
            bunker_dispersion_ratio: 0.20,
            sand_penalty: 0.6,
            bunker_driver_penalty: 0.2,

            yards_per_unit: 1.09361,
            bunkers: (2, 5),
            max_water: 1,
            max_trees: 15,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the integrator or rules cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.time_scale <= 0.0 {
            return invalid("time_scale", "must be positive");
        }
        if self.max_frame_dt <= 0.0 {
            return invalid("max_frame_dt", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.tree_damping) {
            return invalid("tree_damping", "must be within 0..=1");
        }
        if !(self.putt_friction > 0.0 && self.putt_friction < 1.0) {
            return invalid("putt_friction", "must be strictly between 0 and 1");
        }
        if self.roll_constant <= 0.0 {
            return invalid("roll_constant", "must be positive");
        }
        if self.roll_stop_speed <= 0.0 {
            return invalid("roll_stop_speed", "must be positive");
        }
        if self.putt_threshold_yards <= 0.0 {
            return invalid("putt_threshold_yards", "must be positive");
        }
        if self.holed_threshold_yards <= 0.0 {
            return invalid("holed_threshold_yards", "must be positive");
        }
        if self.holed_threshold_yards > self.putt_threshold_yards {
            return invalid("holed_threshold_yards", "must not exceed putt_threshold_yards");
        }
        let spreads = [
            ("accuracy_spread", self.accuracy_spread),
            ("bunker_accuracy_spread", self.bunker_accuracy_spread),
            ("dispersion_ratio", self.dispersion_ratio),
            ("bunker_dispersion_ratio", self.bunker_dispersion_ratio),
        ];
        for (field, value) in spreads {
            if !(0.0..1.0).contains(&value) {
                return invalid(field, "must be within 0..1");
            }
        }
        if self.sand_penalty < 0.0 || self.bunker_driver_penalty < 0.0 {
            return invalid("sand_penalty", "penalties must not be negative");
        }
        if self.yards_per_unit <= 0.0 {
            return invalid("yards_per_unit", "must be positive");
        }
        if self.bunkers.0 > self.bunkers.1 {
            return invalid("bunkers", "min must not exceed max");
        }
        Ok(())
    }

    /// Accuracy spread and dispersion ratio for a lie
    pub fn variance_for(&self, in_bunker: bool) -> (f32, f32) {
        if in_bunker {
            (self.bunker_accuracy_spread, self.bunker_dispersion_ratio)
        } else {
            (self.accuracy_spread, self.dispersion_ratio)
        }
    }
}
