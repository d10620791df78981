//! Data-driven game balance
//!
//! Defaults reproduce the classic feel: speed 2 px/tick, one apple on screen,
//! a new apple every 1.5 s, and 5% harder after every point. Pages can embed a
//! JSON block to override any subset of the fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Balance knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Initial fall speed (pixels per tick)
    pub base_fall_speed: f64,
    /// Multiplier applied to fall speed and spawn cap after every point
    pub growth_factor: f64,
    /// Spawn cap at session start
    pub initial_spawn_cap: u32,
    /// Spawn interval at session start (ms)
    pub base_spawn_interval_ms: f64,
    /// Spawn interval never drops below this (ms)
    pub min_spawn_interval_ms: f64,
    /// Horizontal distance moved per key press (pixels)
    pub key_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_fall_speed: 2.0,
            growth_factor: 1.05,
            initial_spawn_cap: 1,
            base_spawn_interval_ms: 1500.0,
            min_spawn_interval_ms: 500.0,
            key_step: 10.0,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field had the wrong type
    Parse(serde_json::Error),
    /// Parsed fine but a value is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "tuning parse error: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a document, falling back to defaults (with a warning) on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning: {:?}", tuning);
                tuning
            }
            Err(err) => {
                log::warn!("{err}; using default tuning");
                Self::default()
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.base_fall_speed.is_finite() && self.base_fall_speed > 0.0) {
            return invalid("base_fall_speed", "must be a positive number");
        }
        if !(self.growth_factor.is_finite() && self.growth_factor >= 1.0) {
            return invalid("growth_factor", "must be at least 1.0");
        }
        if self.initial_spawn_cap == 0 {
            return invalid("initial_spawn_cap", "must be at least 1");
        }
        if !(self.min_spawn_interval_ms.is_finite() && self.min_spawn_interval_ms > 0.0) {
            return invalid("min_spawn_interval_ms", "must be a positive number");
        }
        if !(self.base_spawn_interval_ms.is_finite()
            && self.base_spawn_interval_ms >= self.min_spawn_interval_ms)
        {
            return invalid(
                "base_spawn_interval_ms",
                "must be at least min_spawn_interval_ms",
            );
        }
        if !(self.key_step.is_finite() && self.key_step > 0.0) {
            return invalid("key_step", "must be a positive number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "key_step": 25 }"#).unwrap();
        assert_eq!(tuning.key_step, 25.0);
        assert_eq!(tuning.base_fall_speed, 2.0);
        assert_eq!(tuning.initial_spawn_cap, 1);
    }

    #[test]
    fn test_rejects_shrinking_growth() {
        let err = Tuning::from_json(r#"{ "growth_factor": 0.9 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "growth_factor",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_min_interval_above_base() {
        let err =
            Tuning::from_json(r#"{ "base_spawn_interval_ms": 400, "min_spawn_interval_ms": 500 }"#)
                .unwrap_err();
        assert!(err.to_string().contains("base_spawn_interval_ms"));
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let err = Tuning::from_json(r#"{ "growth_factr": 1.2 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().contains("growth_factr"));
        assert_eq!(
            Tuning::from_json_or_default(r#"{ "growth_factr": 1.2 }"#),
            Tuning::default()
        );
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert!(matches!(
            Tuning::from_json("{ nope"),
            Err(TuningError::Parse(_))
        ));
        assert_eq!(Tuning::from_json_or_default("{ nope"), Tuning::default());
    }
}
