//! `lgrid policy` — inspect and validate classification policy files.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use leadgrid_classify::ClassificationPolicy;

use crate::CliError;

#[derive(Subcommand)]
pub enum PolicyCommands {
    /// Validate a policy file without classifying anything
    #[command(after_help = "\
Examples:
  lgrid policy validate strict.toml")]
    Validate {
        /// Path to the policy .toml file
        policy: PathBuf,
    },

    /// Print the effective policy as TOML (defaults when no file is given)
    #[command(after_help = "\
Examples:
  lgrid policy show
  lgrid policy show strict.toml")]
    Show {
        /// Path to the policy .toml file
        policy: Option<PathBuf>,
    },
}

pub fn cmd_policy(cmd: PolicyCommands) -> Result<(), CliError> {
    match cmd {
        PolicyCommands::Validate { policy } => {
            let p = load_policy(Some(&policy))?;
            eprintln!(
                "valid: averaging at {} shot(s), positive above {}%, shot positive at {} mg/cm2",
                p.averaging_threshold, p.positive_percent_threshold, p.measurement_threshold,
            );
            Ok(())
        }
        PolicyCommands::Show { policy } => {
            let p = load_policy(policy.as_deref())?;
            let text = p.to_toml().map_err(|e| CliError::other(e.to_string()))?;
            print!("{text}");
            Ok(())
        }
    }
}

/// Load and validate a policy file, or the default policy when `path` is None.
pub fn load_policy(path: Option<&Path>) -> Result<ClassificationPolicy, CliError> {
    let Some(path) = path else {
        return Ok(ClassificationPolicy::default());
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read policy {}: {e}", path.display())))?;

    let policy = ClassificationPolicy::from_toml(&text).map_err(|e| {
        CliError::policy(format!("{}: {e}", path.display()))
            .with_hint("run `lgrid policy show` for the accepted keys and defaults")
    })?;

    log::debug!("loaded policy from {}: {policy:?}", path.display());
    Ok(policy)
}
