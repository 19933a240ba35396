use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "openquest", version, about = "Fork differentiation checks for OpenQuest problems")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a fork is distinct enough from its original
    Check(CheckArgs),
    /// Score the difference between two pieces of text
    Score(ScoreArgs),
    /// Show the difficulty indicator for an overall score
    Indicator(IndicatorArgs),
    /// Save, load or clear a stored draft
    Draft(DraftArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// YAML or JSON file with the original problem's title, pitch and description
    #[arg(short, long)]
    pub original: String,

    /// YAML or JSON file with the fork's title, pitch and description
    #[arg(short = 'f', long)]
    pub candidate: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ScoreArgs {
    /// Original text
    pub original: String,

    /// Candidate text
    pub candidate: String,
}

#[derive(Args, Clone)]
pub struct IndicatorArgs {
    /// Overall difference score (0-100)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: u8,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct DraftArgs {
    #[command(subcommand)]
    pub action: DraftAction,

    /// SQLite database path
    #[arg(long, default_value = "./data/openquest.db", global = true)]
    pub db: String,
}

#[derive(Subcommand, Clone)]
pub enum DraftAction {
    /// Store a JSON value under a key
    Save {
        key: String,
        /// JSON value to store
        #[arg(long)]
        value: String,
    },
    /// Print the draft stored under a key
    Load { key: String },
    /// Remove the draft stored under a key
    Clear { key: String },
    /// List stored draft keys
    List,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database path
    #[arg(long)]
    pub db: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
