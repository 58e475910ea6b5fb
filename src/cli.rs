use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "compass",
    version,
    about = "Elective pathway recommendations from student interest quizzes"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Policy file overriding the engagement thresholds
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the 30-question forced-choice quiz
    Quiz(QuizCommand),
    /// Score the 13 trait sliders
    Traits(TraitsCommand),
    /// Print the question and trait catalogs
    Catalog(CatalogCommand),
}

#[derive(Args)]
pub struct QuizCommand {
    /// Compact answer string: 30 digits (0 unanswered, 1 or 2), catalog order
    #[arg(
        long,
        required_unless_present = "answers_file",
        conflicts_with = "answers_file"
    )]
    pub answers: Option<String>,

    /// JSON file mapping question id to response code
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TraitsCommand {
    /// Comma-separated slider values (1-10), trait catalog order
    #[arg(
        long,
        required_unless_present = "values_file",
        conflicts_with = "values_file"
    )]
    pub values: Option<String>,

    /// JSON file mapping trait name to slider value
    #[arg(long)]
    pub values_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
