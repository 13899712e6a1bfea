//! `lgrid classify` — pool the shots of one job and classify them.

use std::path::PathBuf;

use clap::Args;
use leadgrid_classify::{ingest_rows, process_job, JobReport, Shot};

use crate::exit_codes::EXIT_CONFLICTS;
use crate::policy::load_policy;
use crate::render::render_text;
use crate::CliError;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Inspection exports for one job (.csv, .tsv, .txt, .xlsx, .xlsm, .xls, .xlsb, .ods)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report file type used in titles, e.g. "Units" or "Common Areas"
    #[arg(long, short = 't', env = "LGRID_FILE_TYPE")]
    pub file_type: String,

    /// Policy TOML overriding the default thresholds
    #[arg(long, env = "LGRID_POLICY")]
    pub policy: Option<PathBuf>,

    /// Sheet name for workbook inputs (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output JSON to stdout instead of text reports
    #[arg(long)]
    pub json: bool,

    /// Write JSON output to file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write the three reports to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Exit with code 5 when any component needs manual review
    #[arg(long)]
    pub fail_on_conflicts: bool,
}

pub fn cmd_classify(args: ClassifyArgs) -> Result<(), CliError> {
    if args.file_type.trim().is_empty() {
        return Err(CliError::args("--file-type must not be empty"));
    }

    let policy = load_policy(args.policy.as_deref())?;

    // Pool every file's shots; per-file boundaries are not kept
    let mut shots: Vec<Shot> = Vec::new();
    for path in &args.files {
        let rows = leadgrid_io::read_table(path, args.sheet.as_deref()).map_err(|e| {
            CliError::io(format!("{}: {e}", path.display()))
        })?;
        let file_shots = ingest_rows(&rows);
        log::info!(
            "{}: {} shot(s) from {} row(s)",
            path.display(),
            file_shots.len(),
            rows.len().saturating_sub(1)
        );
        shots.extend(file_shots);
    }

    let report = process_job(&args.file_type, &shots, &policy);

    write_outputs(&args, &report)?;

    let s = &report.summary;
    eprintln!(
        "{} file(s), {} shot(s): {} averaged, {} uniform, {} conflicting component(s) ({} shot(s) for review); excluded {} calibration, {} blank",
        args.files.len(),
        s.total_shots,
        s.averaged_components,
        s.uniform_components,
        s.conflicting_components,
        s.conflicting_shots,
        s.calibration_excluded,
        s.blank_excluded,
    );

    if args.fail_on_conflicts && s.conflicting_shots > 0 {
        return Err(CliError {
            code: EXIT_CONFLICTS,
            message: "conflicting results found (--fail-on-conflicts)".into(),
            hint: None,
        });
    }

    Ok(())
}

fn write_outputs(args: &ClassifyArgs, report: &JobReport) -> Result<(), CliError> {
    if args.json || args.output.is_some() {
        let json_str = serde_json::to_string_pretty(report)
            .map_err(|e| CliError::other(format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = args.output {
            std::fs::write(path, &json_str)
                .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
            eprintln!("wrote {}", path.display());
        }

        if args.json {
            println!("{json_str}");
        }
    }

    if let Some(ref path) = args.csv {
        leadgrid_io::report::export(report, path)
            .map_err(|e| CliError::io(format!("{}: {e}", path.display())))?;
        eprintln!("wrote {}", path.display());
    }

    if !args.json {
        print!("{}", render_text(report));
    }

    Ok(())
}
