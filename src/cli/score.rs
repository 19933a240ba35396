use std::path::Path;
use crate::cli::commands::{IndicatorArgs, ScoreArgs};
use crate::cli::render::render_indicator;
use crate::config::load_or_default;
use crate::errors::OpenQuestError;
use crate::fork::indicator_for;
use crate::utils::similarity::compute_field_difference;

pub async fn handle_score(args: ScoreArgs) -> Result<(), OpenQuestError> {
    let difference = compute_field_difference(&args.original, &args.candidate);
    println!("{}%", difference);
    Ok(())
}

pub async fn handle_indicator(args: IndicatorArgs) -> Result<(), OpenQuestError> {
    let config = load_or_default(args.config.as_deref().map(Path::new)).await?;
    let indicator = indicator_for(args.score, &config.fork_rules().indicator);
    println!("{}% {} ({})", args.score, render_indicator(&indicator), indicator.color.as_str());
    Ok(())
}
