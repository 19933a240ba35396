use tracing::debug;
use crate::config::ForkRules;
use crate::models::{ComparableField, FieldDifference, ForkValidationResult, PerField, ProblemText};
use crate::utils::similarity::compute_field_difference;

/// Compare a fork against the problem it forked from using the default rules.
pub fn validate_fork(original: &ProblemText, candidate: &ProblemText) -> ForkValidationResult {
    validate_fork_with(original, candidate, &ForkRules::default())
}

pub fn validate_fork_with(
    original: &ProblemText,
    candidate: &ProblemText,
    rules: &ForkRules,
) -> ForkValidationResult {
    let diffs = PerField::from_fn(|field| {
        compute_field_difference(original.field(field), candidate.field(field))
    });
    let result = ForkValidationResult::from_differences(diffs, rules);

    debug!(
        title = result.title_diff,
        pitch = result.pitch_diff,
        description = result.description_diff,
        overall = result.overall_diff,
        valid = result.is_valid,
        "Validated fork"
    );

    result
}

/// `round(Σ diff·weight / 100)`, weights given in percent.
pub fn weighted_overall(diffs: &PerField<u8>, weights: &PerField<u8>) -> u8 {
    let weighted: f64 = ComparableField::ALL
        .iter()
        .map(|&f| f64::from(diffs.get(f)) * f64::from(weights.get(f)))
        .sum();
    let total_weight: f64 = ComparableField::ALL
        .iter()
        .map(|&f| f64::from(weights.get(f)))
        .sum();
    if total_weight == 0.0 {
        return 0;
    }
    (weighted / total_weight).round().clamp(0.0, 100.0) as u8
}

impl ForkValidationResult {
    /// Judge already-computed per-field differences against `rules`.
    ///
    /// Validity depends only on the per-field thresholds; the overall score
    /// is informational.
    pub fn from_differences(diffs: PerField<u8>, rules: &ForkRules) -> Self {
        let diffs = diffs.map(|_, d| d.min(100));
        let errors: Vec<String> = ComparableField::ALL
            .iter()
            .map(|&field| FieldDifference {
                field,
                value: diffs.get(field),
                threshold: rules.thresholds.get(field),
            })
            .filter(|d| !d.passes())
            .map(|d| d.error_message())
            .collect();

        Self {
            title_diff: diffs.title,
            pitch_diff: diffs.pitch,
            description_diff: diffs.description,
            overall_diff: weighted_overall(&diffs, &rules.weights),
            is_valid: errors.is_empty(),
            errors,
            thresholds: rules.thresholds,
        }
    }
}
