use crate::config::{ForkRules, IndicatorBands};
use crate::models::{DifficultyIndicator, DifficultyLevel};

/// Bucket an overall difference score for the progress bar.
///
/// Has no bearing on validity.
pub fn get_difficulty_indicator(overall_diff: u8) -> DifficultyIndicator {
    indicator_for(overall_diff, &ForkRules::default().indicator)
}

pub fn indicator_for(overall_diff: u8, bands: &IndicatorBands) -> DifficultyIndicator {
    let level = if overall_diff >= bands.high {
        DifficultyLevel::High
    } else if overall_diff >= bands.medium {
        DifficultyLevel::Medium
    } else {
        DifficultyLevel::Low
    };
    level.indicator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndicatorColor;

    #[test]
    fn test_band_edges() {
        assert_eq!(get_difficulty_indicator(0).level, DifficultyLevel::Low);
        assert_eq!(get_difficulty_indicator(49).level, DifficultyLevel::Low);
        assert_eq!(get_difficulty_indicator(50).level, DifficultyLevel::Medium);
        assert_eq!(get_difficulty_indicator(69).level, DifficultyLevel::Medium);
        assert_eq!(get_difficulty_indicator(70).level, DifficultyLevel::High);
        assert_eq!(get_difficulty_indicator(100).level, DifficultyLevel::High);
    }

    #[test]
    fn test_labels_and_colors() {
        let low = get_difficulty_indicator(10);
        assert_eq!(low.label, "Too similar");
        assert_eq!(low.color, IndicatorColor::Red);

        let medium = get_difficulty_indicator(55);
        assert_eq!(medium.label, "Getting there");
        assert_eq!(medium.color, IndicatorColor::Yellow);

        let high = get_difficulty_indicator(90);
        assert_eq!(high.label, "Sufficiently distinct");
        assert_eq!(high.color, IndicatorColor::Green);
    }

    #[test]
    fn test_custom_bands() {
        let bands = IndicatorBands { medium: 30, high: 60 };
        assert_eq!(indicator_for(35, &bands).level, DifficultyLevel::Medium);
        assert_eq!(indicator_for(60, &bands).level, DifficultyLevel::High);
    }
}
