//! schedsift-cli - offline timetable extraction
//!
//! Usage:
//!   schedsift-cli --input timetable.xlsx
//!   schedsift-cli --input timetable.xlsx --section bsse-4c --pretty
//!   schedsift-cli --input timetable.xlsx --candidates     Per-strategy counts on stderr

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use schedsift::api_json::ParseResponse;
use schedsift::excel::load_workbook_path;
use schedsift::{extract_timetable, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "schedsift-cli", version, about = "Extract per-section schedules from a timetable workbook")]
struct Cli {
    /// Workbook to read (xlsx, xlsm, xlsb, xls, ods)
    #[arg(short, long)]
    input: PathBuf,

    /// Keep only this section code (case-insensitive)
    #[arg(short, long)]
    section: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print one line per (sheet x strategy) candidate to stderr
    #[arg(long)]
    candidates: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let sheets = load_workbook_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let output = extract_timetable(&sheets, cli.section.as_deref());

    if cli.candidates {
        for c in &output.candidates {
            eprintln!(
                "{:<15} {:<30} {:>5} entries  avg {:.3}",
                c.strategy.name(),
                c.sheet,
                c.entries,
                c.avg_confidence
            );
        }
    }

    let response = ParseResponse::from_output(output, sheets.len(), None);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);
    Ok(())
}
