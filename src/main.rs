mod catalog;
mod classify;
mod cli;
mod config;
mod engine;
mod error;
mod report;
mod score;
mod types;

use crate::error::CompassError;
use crate::types::answer::{AnswerSheet, TraitSheet};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCONCLUSIVE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, CompassError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let loaded = config::load_config(cli.config.as_deref())?;
    let policy = loaded.as_ref().map(|cfg| cfg.policy()).unwrap_or_default();

    match cli.command {
        cli::Commands::Quiz(cmd) => {
            let sheet = if let Some(inline) = &cmd.answers {
                AnswerSheet::from_compact(inline)?
            } else if let Some(path) = &cmd.answers_file {
                AnswerSheet::from_json(&std::fs::read_to_string(path)?)?
            } else {
                return Err(CompassError::AnswerParse(
                    "either --answers or --answers-file is required".to_string(),
                ));
            };

            let outcome = engine::evaluate_quiz(&sheet, &policy);
            let rendered = report::render(&outcome, output_format(&cmd.format))?;
            println!("{rendered}");

            if outcome.conclusive() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::INCONCLUSIVE)
            }
        }
        cli::Commands::Traits(cmd) => {
            let sheet = if let Some(inline) = &cmd.values {
                TraitSheet::from_list(inline)?
            } else if let Some(path) = &cmd.values_file {
                TraitSheet::from_json(&std::fs::read_to_string(path)?)?
            } else {
                return Err(CompassError::TraitParse(
                    "either --values or --values-file is required".to_string(),
                ));
            };

            let outcome = engine::evaluate_traits(&sheet, &policy);
            let rendered = report::render(&outcome, output_format(&cmd.format))?;
            println!("{rendered}");

            if outcome.conclusive() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::INCONCLUSIVE)
            }
        }
        cli::Commands::Catalog(cmd) => {
            let rendered = report::render_catalog(output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
