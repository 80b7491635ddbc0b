use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

pub const DEFAULT_HIT_TOLERANCE_M: f64 = 1.0;

/// Game settings. Every field has a default so a config file only needs the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Half-width of the hit box around the target, applied on both axes.
    /// The same box is used on every planet regardless of gravity.
    pub hit_tolerance_m: f64,
    /// RNG seed for planet and target selection. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub plot: PlotConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hit_tolerance_m: DEFAULT_HIT_TOLERANCE_M,
            seed: None,
            plot: PlotConfig::default(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_px: 960,
            height_px: 600,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !self.hit_tolerance_m.is_finite() || self.hit_tolerance_m <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "hit_tolerance_m must be a positive number, got {}",
                self.hit_tolerance_m
            )));
        }
        if self.plot.width_px == 0 || self.plot.height_px == 0 {
            return Err(GameError::InvalidConfig(
                "plot dimensions must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Seed to use for this game, falling back to the current time.
    pub fn resolved_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HIT_TOLERANCE_M, GameConfig};
    use crate::core::error::GameError;

    #[test]
    fn empty_object_yields_defaults() {
        let config = GameConfig::from_json_str("{}").expect("defaults are valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.hit_tolerance_m, DEFAULT_HIT_TOLERANCE_M);
    }

    #[test]
    fn overrides_selected_fields() {
        let config =
            GameConfig::from_json_str(r#"{"hit_tolerance_m": 2.5, "seed": 9, "plot": {"width_px": 400}}"#)
                .expect("valid config");
        assert_eq!(config.hit_tolerance_m, 2.5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.plot.width_px, 400);
        assert_eq!(config.plot.height_px, 600);
        assert_eq!(config.resolved_seed(), 9);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let err = GameConfig::from_json_str(r#"{"hit_tolerance_m": 0.0}"#)
            .expect_err("zero tolerance can never hit");
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn reports_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").expect_err("malformed");
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::from_json_file("/definitely/not/here.json").expect_err("missing");
        assert!(matches!(err, GameError::Io(_)));
    }
}
