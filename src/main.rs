use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use scamlens::classify::{ClassificationRequest, ImageUpload, Orchestrator};
use scamlens::config::Config;
use scamlens::render;

/// Flag likely scam, phishing or fraud content before acting on it.
#[derive(Debug, Parser)]
#[command(name = "scamlens", version, about)]
struct Cli {
    /// Message text to score against the scam lexicon.
    #[arg(long, conflicts_with_all = ["image", "url"])]
    text: Option<String>,

    /// Screenshot or photo to send for forensic analysis.
    #[arg(long, conflicts_with_all = ["text", "url"])]
    image: Option<PathBuf>,

    /// Link to send for reputation analysis.
    #[arg(long, conflicts_with_all = ["text", "image"])]
    url: Option<String>,

    /// Emit the verdict as JSON instead of the styled block.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cli = Cli::parse();
    let config = Config::load_or_init()?;
    let orchestrator = Orchestrator::new(&config.analysis);

    let request = build_request(&cli).await?;
    let verdict = orchestrator.classify(request).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render::render(&verdict));
    }

    Ok(())
}

async fn build_request(cli: &Cli) -> Result<ClassificationRequest> {
    if let Some(path) = &cli.image {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read image {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        return Ok(ClassificationRequest::image(ImageUpload {
            data,
            declared_mime: None,
            filename,
        }));
    }

    if let Some(url) = &cli.url {
        return Ok(ClassificationRequest::url(url.clone()));
    }

    if let Some(text) = &cli.text {
        return Ok(ClassificationRequest::text(text.clone()));
    }

    // No input at all still classifies: the orchestrator turns it into the
    // invalid-input verdict rather than a CLI error.
    Ok(ClassificationRequest::default())
}
