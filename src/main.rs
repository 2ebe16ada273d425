// ==========================================
// Teaching Claim - Command line entry
// ==========================================
// filter / merge / expand run one stage from files on disk;
// run chains all three and writes a summary next to the artifacts.
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use teaching_claim::config::ClaimConfig;
use teaching_claim::engine::{DateExpander, EntityMatcher, TermRange};
use teaching_claim::exporter::{self, EXPANDED_FILE, FILTERED_FILE, MERGED_FILE, SUMMARY_FILE, UNMATCHED_FILE};
use teaching_claim::workflow::{ClaimWorkflow, RunSummary};
use teaching_claim::{importer, logging};
use tracing::info;

/// Adjunct timetable → payroll claim roster
#[derive(Parser, Debug)]
#[command(name = "teaching-claim")]
#[command(about = "Builds adjunct lecturer claim rosters from timetable exports")]
#[command(version)]
struct Cli {
    /// JSON config file (defaults to the per-user config, then built-in values)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean Data: keep adjunct rows and split multi-day rows
    Filter {
        #[arg(long, value_name = "FILE")]
        timetable: PathBuf,

        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Merge Headers: attach hiring details to filtered rows
    Merge {
        #[arg(long, value_name = "FILE")]
        filtered: PathBuf,

        #[arg(long, value_name = "FILE")]
        hiring: PathBuf,

        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        unmatched_out: Option<PathBuf>,
    },

    /// Date Transform: one row per teaching date of the term
    Expand {
        #[arg(long, value_name = "FILE")]
        merged: PathBuf,

        /// Term start, e.g. "21 April 2025"
        #[arg(long)]
        start: Option<String>,

        /// Term end, inclusive
        #[arg(long)]
        end: Option<String>,

        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// All three stages in one go
    Run {
        #[arg(long, value_name = "FILE")]
        timetable: PathBuf,

        #[arg(long, value_name = "FILE")]
        hiring: PathBuf,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }
    info!(version = teaching_claim::VERSION, "{}", teaching_claim::APP_NAME);

    let config = ClaimConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Filter { timetable, out } => {
            let out = artifact_path(&config, out, FILTERED_FILE)?;
            let raw = importer::load_timetable(&timetable)?;
            let outcome = config.row_filter().filter(&raw);
            exporter::write_filtered(&out, &outcome.records)?;

            println!("Input rows:      {}", raw.len());
            println!("Filtered rows:   {}", outcome.records.len());
            println!("Multi-day rows:  {}", outcome.multi_day_rows);
            println!("Written to {}", out.display());
        }

        Command::Merge {
            filtered,
            hiring,
            out,
            unmatched_out,
        } => {
            let out = artifact_path(&config, out, MERGED_FILE)?;
            let unmatched_out = artifact_path(&config, unmatched_out, UNMATCHED_FILE)?;

            let filtered = importer::load_timetable(&filtered)?;
            let hiring = importer::load_hiring(&hiring)?;
            let outcome = EntityMatcher::new().match_records(&filtered, &hiring);

            exporter::write_matched(&out, &outcome.matched)?;
            println!("Matched rows:    {}", outcome.matched.len());
            println!("Unmatched rows:  {}", outcome.unmatched_count());
            println!("Written to {}", out.display());

            if !outcome.unmatched.is_empty() {
                exporter::write_unmatched(&unmatched_out, &outcome.unmatched)?;
                println!("Unmatched rows written to {}", unmatched_out.display());
            }
        }

        Command::Expand {
            merged,
            start,
            end,
            out,
        } => {
            let out = artifact_path(&config, out, EXPANDED_FILE)?;
            let term = resolve_term(&config, start, end)?;
            let matched = importer::load_matched(&merged)?;
            let outcome = DateExpander::new().expand_term(&matched, &term);
            exporter::write_expanded(&out, &outcome.records)?;

            println!("Expanded rows:   {}", outcome.records.len());
            println!("Skipped rows:    {}", outcome.skipped);
            println!("Written to {}", out.display());
        }

        Command::Run {
            timetable,
            hiring,
            start,
            end,
            out_dir,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

            let term = resolve_term(&config, start, end)?;
            let raw = importer::load_timetable(&timetable)?;
            let hiring = importer::load_hiring(&hiring)?;

            let mut workflow = ClaimWorkflow::new(config.row_filter());
            let filtered = workflow.run_filter(&raw);
            exporter::write_filtered(&out_dir.join(FILTERED_FILE), &filtered.records)?;

            let merge = workflow.run_merge(&hiring)?;
            exporter::write_matched(&out_dir.join(MERGED_FILE), &merge.matched)?;
            if !merge.unmatched.is_empty() {
                exporter::write_unmatched(&out_dir.join(UNMATCHED_FILE), &merge.unmatched)?;
            }

            let expansion = workflow.run_expand(&term)?;
            exporter::write_expanded(&out_dir.join(EXPANDED_FILE), &expansion.records)?;

            let summary = workflow.summary();
            let summary_path = out_dir.join(SUMMARY_FILE);
            fs::write(&summary_path, summary.to_json()?)
                .with_context(|| format!("cannot write {}", summary_path.display()))?;

            print_summary(summary);
            println!("Artifacts written to {}", out_dir.display());
        }
    }

    Ok(())
}

/// Explicit path, or `<output_dir>/<default_name>` with the directory created.
fn artifact_path(config: &ClaimConfig, explicit: Option<PathBuf>, default_name: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    ensure_dir(&config.output_dir)?;
    Ok(config.output_dir.join(default_name))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create output directory {}", dir.display()))
}

/// CLI dates override the configured term.
fn resolve_term(config: &ClaimConfig, start: Option<String>, end: Option<String>) -> Result<TermRange> {
    let start = start.unwrap_or_else(|| config.term_start.clone());
    let end = end.unwrap_or_else(|| config.term_end.clone());
    Ok(TermRange::parse(&start, &end)?)
}

fn print_summary(summary: &RunSummary) {
    println!("Run {}", summary.run_id);
    println!("Input rows:      {}", summary.input_rows);
    println!("Filtered rows:   {}", summary.filtered_rows);
    println!("Multi-day rows:  {}", summary.multi_day_rows);
    println!("Matched rows:    {}", summary.matched);
    println!("Unmatched rows:  {}", summary.unmatched);
    println!("Expanded rows:   {}", summary.expanded);
    println!("Skipped rows:    {}", summary.skipped);
}
