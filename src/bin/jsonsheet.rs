//! jsonsheet: Fetch JSON and spill large arrays into a spreadsheet
//!
//! Usage:
//!   # Fetch, print JSON or {"filePath": ...}
//!   jsonsheet https://jsonplaceholder.typicode.com/users
//!
//!   # Export anything over 5 records to a chosen file
//!   jsonsheet https://example.com/api/items --threshold 5 -o items.xlsx
//!
//!   # Work from a saved response instead of the network
//!   jsonsheet --input response.json
//!   cat response.json | jsonsheet --input -

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jsonsheet::fetch::decode_json;
use jsonsheet::{fetch_data, logging, process_value, ExportConfig, Fetcher, Outcome};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsonsheet")]
#[command(about = "Fetch JSON and write large arrays to an xlsx file", long_about = None)]
struct Args {
    /// Endpoint to GET
    #[arg(value_name = "URL", required_unless_present = "input", conflicts_with = "input")]
    url: Option<String>,

    /// Read the JSON document from a file instead of fetching (use - for stdin)
    #[arg(long, short = 'i', value_name = "FILE")]
    input: Option<String>,

    /// Arrays with more records than this are exported (default: 10)
    #[arg(long, short = 't')]
    threshold: Option<usize>,

    /// Output workbook path (default: output.xlsx)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Worksheet name (default: Data)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Separator for nested key paths (default: ".")
    #[arg(long)]
    separator: Option<String>,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    // Build config
    let mut config = ExportConfig::default();
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(name) = args.sheet_name {
        config.sheet_name = name;
    }
    if let Some(sep) = args.separator {
        if sep.is_empty() {
            bail!("--separator must not be empty");
        }
        config.flatten.separator = sep;
    }

    let outcome = match (&args.url, &args.input) {
        (Some(url), _) => fetch_data(&Fetcher::new(), url, &config)
            .await
            .with_context(|| format!("Failed to process {}", url))?,
        (None, Some(input)) => {
            let value = read_document(input)?;
            process_value(value, &config).context("Failed to export document")?
        }
        (None, None) => bail!("either a URL or --input is required"),
    };

    print_outcome(&outcome, args.compact)
}

/// Read and decode a JSON document from a file or stdin
fn read_document(input: &str) -> Result<serde_json::Value> {
    let reader = if input == "-" {
        Box::new(std::io::stdin()) as Box<dyn Read>
    } else {
        Box::new(File::open(input).with_context(|| format!("Failed to open {}", input))?) as Box<dyn Read>
    };

    let mut content = Vec::new();
    BufReader::new(reader)
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    decode_json(&mut content).context("Failed to parse JSON")
}

fn print_outcome(outcome: &Outcome, compact: bool) -> Result<()> {
    let output = if compact {
        serde_json::to_string(outcome)?
    } else {
        serde_json::to_string_pretty(outcome)?
    };
    println!("{}", output);
    Ok(())
}
