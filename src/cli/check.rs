use std::path::Path;
use crate::cli::commands::CheckArgs;
use crate::cli::render::render_result;
use crate::config::load_or_default;
use crate::errors::OpenQuestError;
use crate::fork::{indicator_for, validate_fork_with};
use crate::models::{ForkValidationReport, ProblemText};
use tracing::info;

pub async fn handle_check(args: CheckArgs) -> Result<(), OpenQuestError> {
    let config = load_or_default(args.config.as_deref().map(Path::new)).await?;
    let rules = config.fork_rules();

    let original = read_problem(Path::new(&args.original)).await?;
    let candidate = read_problem(Path::new(&args.candidate)).await?;

    let result = validate_fork_with(&original, &candidate, &rules);
    let indicator = indicator_for(result.overall_diff, &rules.indicator);
    info!(overall = result.overall_diff, valid = result.is_valid, "Fork checked");

    let failing = result.errors.len();
    let is_valid = result.is_valid;
    if args.json {
        let report = ForkValidationReport { result, indicator };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_result(&result, &indicator));
    }

    if is_valid {
        Ok(())
    } else {
        Err(OpenQuestError::ForkTooSimilar(failing))
    }
}

/// Read a problem's text from YAML or JSON. Missing fields are empty.
pub async fn read_problem(path: &Path) -> Result<ProblemText, OpenQuestError> {
    if !path.exists() {
        return Err(OpenQuestError::NotFound(format!("Problem file {}", path.display())));
    }
    let content = tokio::fs::read_to_string(path).await?;
    parse_problem(&content)
        .map_err(|e| OpenQuestError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn parse_problem(content: &str) -> Result<ProblemText, serde_yaml::Error> {
    // YAML is a superset of JSON, so one parser covers both
    serde_yaml::from_str(content)
}
