use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::models::PerField;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OpenQuestConfig {
    pub fork: Option<ForkRules>,
    pub live: Option<LiveConfig>,
    pub server: Option<ServerConfig>,
}

impl OpenQuestConfig {
    pub fn fork_rules(&self) -> ForkRules {
        self.fork.clone().unwrap_or_default()
    }

    pub fn debounce(&self) -> Duration {
        let ms = self
            .live
            .as_ref()
            .and_then(|l| l.debounce_ms)
            .unwrap_or(DEFAULT_DEBOUNCE_MS);
        Duration::from_millis(ms)
    }
}

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Weights, per-field gates and indicator bands for fork validation.
///
/// `ForkRules::default()` holds the published values; every caller and test
/// reads them from here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ForkRules {
    /// Percent contribution of each field to the overall score. Sums to 100.
    pub weights: PerField<u8>,
    /// Minimum difference each field must reach, inclusive.
    pub thresholds: PerField<u8>,
    pub indicator: IndicatorBands,
}

impl Default for ForkRules {
    fn default() -> Self {
        Self {
            weights: PerField::new(20, 30, 50),
            thresholds: PerField::new(30, 40, 50),
            indicator: IndicatorBands::default(),
        }
    }
}

/// Lower bounds of the medium and high indicator buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndicatorBands {
    pub medium: u8,
    pub high: u8,
}

impl Default for IndicatorBands {
    fn default() -> Self {
        Self { medium: 50, high: 70 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LiveConfig {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db: Option<String>,
}
