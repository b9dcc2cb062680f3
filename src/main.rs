//! Revcontent campaign simulation
//!
//! Creates an advertising campaign (Boost) and retrieves its statistics,
//! using a mocked client by default; set REVCONTENT_LIVE=true to go through
//! the real API instead

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tracing::info;

mod config;
mod models;
mod services;
mod sinks;
mod utils;

use config::Settings;
use models::DateRange;
use services::client::{HttpRevcontentClient, RevcontentClient};
use services::mock::MockRevcontentClient;
use services::runner;
use sinks::{ConsoleSink, JsonFileSink, StatsSink};
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Load settings from the environment (fails fast on missing credentials)
    let settings = Settings::new().context("Failed to load settings")?;
    info!("Settings loaded");

    let client: Box<dyn RevcontentClient> = if settings.api.live {
        info!("Using live Revcontent client: {}", settings.api.base_url);
        let mut client = HttpRevcontentClient::new(&settings.api)?;
        client.authenticate().await.context("Authentication failed")?;
        Box::new(client)
    } else {
        info!("Using mocked Revcontent client");
        Box::new(MockRevcontentClient::canned())
    };

    let request = runner::request_from_defaults(&settings.campaign);

    // Stats over the trailing week, ending today
    let today = Utc::now().date_naive();
    let date_range = DateRange::new(today - Duration::days(7), today);

    let mut sinks: Vec<Box<dyn StatsSink>> = vec![
        Box::new(ConsoleSink::stdout()),
        Box::new(JsonFileSink::new(&settings.output.stats_path)),
    ];

    let report = runner::run(client.as_ref(), request, date_range, &mut sinks)
        .await
        .context("Campaign run failed")?;

    info!(
        "Run complete: campaign {} ({} impressions, {} clicks), stats saved to {}",
        report.campaign_id,
        report.stats.impressions,
        report.stats.clicks,
        settings.output.stats_path
    );

    Ok(())
}
