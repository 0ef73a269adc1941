use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use wxbrief::{SummaryGenerator, WxBriefConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = WxBriefConfig::load_from_path(config_path)?;

    logging::init(&config.logging)?;

    let generator = SummaryGenerator::from_config(None, &config)
        .context("Failed to create summary generator")?;
    tracing::info!(
        model = generator.model(),
        enabled = generator.is_enabled(),
        "Summary generator ready"
    );

    web::run(&config, Arc::new(generator)).await
}
