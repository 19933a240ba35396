use serde::{Deserialize, Serialize};
use super::indicator::DifficultyIndicator;
use super::problem::{ComparableField, PerField};

/// How different one field of a fork is from the original, against its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDifference {
    pub field: ComparableField,
    /// Percentage in `0..=100`.
    pub value: u8,
    pub threshold: u8,
}

impl FieldDifference {
    /// Thresholds are inclusive.
    pub fn passes(&self) -> bool {
        self.value >= self.threshold
    }

    /// Percentage points still needed to reach the threshold.
    pub fn shortfall(&self) -> u8 {
        self.threshold.saturating_sub(self.value)
    }

    pub fn error_message(&self) -> String {
        format!(
            "{} needs to be at least {}% different (currently {}%)",
            self.field,
            self.threshold,
            self.value
        )
    }
}

/// Outcome of comparing a fork against the problem it forked from.
///
/// Built fresh on every validation call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkValidationResult {
    pub title_diff: u8,
    pub pitch_diff: u8,
    pub description_diff: u8,
    pub overall_diff: u8,
    pub is_valid: bool,
    /// Empty when valid. Ordered title, pitch, description.
    pub errors: Vec<String>,
    #[serde(skip, default = "default_thresholds")]
    pub(crate) thresholds: PerField<u8>,
}

fn default_thresholds() -> PerField<u8> {
    crate::config::ForkRules::default().thresholds
}

impl ForkValidationResult {
    pub fn diffs(&self) -> PerField<u8> {
        PerField::new(self.title_diff, self.pitch_diff, self.description_diff)
    }

    /// Per-field breakdown with the thresholds the result was judged against.
    pub fn differences(&self) -> Vec<FieldDifference> {
        let diffs = self.diffs();
        ComparableField::ALL
            .iter()
            .map(|&field| FieldDifference {
                field,
                value: diffs.get(field),
                threshold: self.thresholds.get(field),
            })
            .collect()
    }

    /// Fields that still block publication.
    pub fn failing_fields(&self) -> Vec<FieldDifference> {
        self.differences().into_iter().filter(|d| !d.passes()).collect()
    }
}

/// Wire shape returned by the validate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkValidationReport {
    #[serde(flatten)]
    pub result: ForkValidationResult,
    pub indicator: DifficultyIndicator,
}
