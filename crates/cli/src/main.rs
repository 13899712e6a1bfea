// leadgrid CLI - XRF lead-paint shot classification

mod classify;
mod exit_codes;
mod policy;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_IO, EXIT_POLICY_INVALID, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "lgrid")]
#[command(about = "Classify XRF lead-paint inspection shots into averaged, uniform and conflicting reports")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LGRID_COMMIT"), ", ", env!("LGRID_TARGET"), ")"))]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the shots of one job (all files are pooled)
    #[command(after_help = "\
Examples:
  lgrid classify unit-101.csv unit-102.xlsx --file-type Units
  lgrid classify common/*.csv --file-type \"Common Areas\" --json
  lgrid classify units.xlsx --sheet Readings --file-type Units --csv report.csv
  lgrid classify units.csv --file-type Units --policy strict.toml --fail-on-conflicts")]
    Classify(classify::ClassifyArgs),

    /// Inspect or validate classification policy files
    Policy {
        #[command(subcommand)]
        command: policy::PolicyCommands,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn policy(msg: impl Into<String>) -> Self {
        Self { code: EXIT_POLICY_INVALID, message: msg.into(), hint: None }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn main() -> ExitCode {
    // RUST_LOG overrides; quiet by default so stdout stays clean for --json
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: lgrid <command> [options]");
            eprintln!("       lgrid --help for more information");
            Ok(())
        }
        Some(Commands::Classify(args)) => classify::cmd_classify(args),
        Some(Commands::Policy { command }) => policy::cmd_policy(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
