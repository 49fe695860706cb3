//! Ai command - delegate extraction to the hosted model.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use numex_core::models::config::GENAI_API_KEY_ENV;
use numex_genai::{GenAiProvider, GeminiProvider};

/// Arguments for the ai command.
#[derive(Args)]
pub struct AiArgs {
    /// Input PDF, resolved against the data directory when relative
    #[arg(required = true)]
    input: PathBuf,

    /// Directory for result files (default: the configured results dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub async fn run(args: AiArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let input = config.resolve_input(&args.input);

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let api_key = std::env::var(GENAI_API_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{} is not set", GENAI_API_KEY_ENV))?;

    let mut provider = GeminiProvider::new(api_key, config.genai.model.clone());
    if let Some(prompt) = config.genai.prompt.clone() {
        provider = provider.with_prompt(prompt);
    }

    info!("Delegating {} to {}", input.display(), config.genai.model);
    let response = provider.largest_number(&input).await?;

    let output_dir = args.output_dir.unwrap_or_else(|| config.results_dir.clone());
    fs::create_dir_all(&output_dir)?;

    let results_path = output_dir.join("results.json");
    fs::write(&results_path, serde_json::to_string_pretty(&response)?)?;
    println!(
        "{} Response written to {}",
        style("✓").green(),
        results_path.display()
    );

    println!();
    println!("Largest number found:");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
