use serde::{Deserialize, Serialize};

/// Coarse severity bucket for an overall difference score. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Red,
    Yellow,
    Green,
}

impl IndicatorColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyIndicator {
    pub level: DifficultyLevel,
    pub label: String,
    pub color: IndicatorColor,
}

impl DifficultyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Too similar",
            Self::Medium => "Getting there",
            Self::High => "Sufficiently distinct",
        }
    }

    pub fn color(&self) -> IndicatorColor {
        match self {
            Self::Low => IndicatorColor::Red,
            Self::Medium => IndicatorColor::Yellow,
            Self::High => IndicatorColor::Green,
        }
    }

    pub fn indicator(self) -> DifficultyIndicator {
        DifficultyIndicator {
            level: self,
            label: self.label().to_string(),
            color: self.color(),
        }
    }
}
