//! Process command - run the local heuristic extraction pipeline.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use numex_core::models::record::ExtractedNumber;
use numex_core::pdf::{PageProvider, PdfReader};
use numex_core::pipeline::scan_document;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF, resolved against the data directory when relative
    #[arg(required = true)]
    input: PathBuf,

    /// Directory for result files (default: the configured results dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write the records as CSV
    #[arg(long)]
    csv: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;
    let input = config.resolve_input(&args.input);

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    info!("Processing file: {}", input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&input)?;
    let mut reader = PdfReader::new();
    reader.load(&data)?;

    println!("Total pages: {}", reader.page_count());

    pb.set_message("Scanning pages...");
    pb.set_position(30);

    let outcome = scan_document(&reader)?;

    pb.set_message("Writing results...");
    pb.set_position(80);

    let output_dir = args.output_dir.unwrap_or_else(|| config.results_dir.clone());
    fs::create_dir_all(&output_dir)?;

    let json_path = output_dir.join("extracted_numbers.json");
    fs::write(&json_path, serde_json::to_string_pretty(&outcome.records)?)?;
    println!(
        "{} Results written to {}",
        style("✓").green(),
        json_path.display()
    );

    if args.csv {
        let csv_path = output_dir.join("extracted_numbers.csv");
        fs::write(&csv_path, format_csv(&outcome.records)?)?;
        println!(
            "{} CSV written to {}",
            style("✓").green(),
            csv_path.display()
        );
    }

    pb.finish_with_message("Done");

    match &outcome.largest {
        Some(largest) => {
            println!();
            println!("Largest number found:");
            println!("{}", serde_json::to_string_pretty(largest)?);
        }
        None => println!("No numbers found in the PDF."),
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// One CSV row per record, columns in entity field order.
fn format_csv(records: &[ExtractedNumber]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "raw_value",
        "context",
        "modifier",
        "interpreted_value",
        "page_number",
        "table_name",
    ])?;

    for record in records {
        let interpreted = record
            .interpreted_value
            .map(|v| v.to_string())
            .unwrap_or_default();

        wtr.write_record([
            &record.raw_value,
            &record.context,
            &record.modifier.to_string(),
            &interpreted,
            &record.page_number.to_string(),
            &record.table_name,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
