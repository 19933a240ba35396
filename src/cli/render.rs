use console::style;

use crate::models::{DifficultyIndicator, FieldDifference, ForkValidationResult, IndicatorColor};

/// Render a validation result as styled terminal output.
pub fn render_result(result: &ForkValidationResult, indicator: &DifficultyIndicator) -> String {
    let mut lines: Vec<String> = result
        .differences()
        .iter()
        .map(render_field)
        .collect();

    lines.push(format!(
        "  {:<12} {:>3}%  {}",
        style("Overall").bold(),
        result.overall_diff,
        render_indicator(indicator),
    ));

    if result.is_valid {
        lines.push(format!("\n{} Fork is distinct enough to publish", style("✓").green().bold()));
    } else {
        lines.push(format!("\n{} Fork Too Similar - Make Changes", style("✗").red().bold()));
        for error in &result.errors {
            lines.push(format!("  {} {}", style("•").red(), error));
        }
    }

    lines.join("\n")
}

fn render_field(diff: &FieldDifference) -> String {
    let status = if diff.passes() {
        style("✓").green().to_string()
    } else {
        style(format!("✗ needs +{}", diff.shortfall())).red().to_string()
    };
    format!(
        "  {:<12} {:>3}%  (min {}%) {}",
        diff.field.label(),
        diff.value,
        diff.threshold,
        status,
    )
}

pub fn render_indicator(indicator: &DifficultyIndicator) -> String {
    let label = style(&indicator.label);
    match indicator.color {
        IndicatorColor::Red => label.red().to_string(),
        IndicatorColor::Yellow => label.yellow().to_string(),
        IndicatorColor::Green => label.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForkRules;
    use crate::fork::get_difficulty_indicator;
    use crate::models::PerField;

    #[test]
    fn test_render_lists_errors_when_invalid() {
        console::set_colors_enabled(false);
        let result = ForkValidationResult::from_differences(PerField::new(10, 80, 90), &ForkRules::default());
        let out = render_result(&result, &get_difficulty_indicator(result.overall_diff));
        assert!(out.contains("Fork Too Similar"));
        assert!(out.contains("Title needs to be at least 30% different (currently 10%)"));
        assert!(out.contains("needs +20"));
    }

    #[test]
    fn test_render_valid() {
        console::set_colors_enabled(false);
        let result = ForkValidationResult::from_differences(PerField::new(90, 90, 90), &ForkRules::default());
        let out = render_result(&result, &get_difficulty_indicator(result.overall_diff));
        assert!(out.contains("distinct enough"));
        assert!(out.contains("Sufficiently distinct"));
    }
}
