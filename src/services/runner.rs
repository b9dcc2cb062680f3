//! Orchestration runner
//!
//! Sequences the two client calls and forwards the statistics to the output
//! sinks. The flow is strictly linear: create campaign, extract its id,
//! fetch stats, then render. Any error aborts the run; sinks are only
//! invoked after a successful fetch, so no partial output is ever written.

use crate::config::settings::CampaignDefaults;
use crate::models::campaign::{CampaignCreateRequest, CampaignStats, DateRange};
use crate::services::client::RevcontentClient;
use crate::sinks::StatsSink;
use crate::utils::error::AppResult;
use tracing::info;

/// Outcome of one orchestration run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Identifier of the created campaign
    pub campaign_id: String,
    /// Statistics delivered to the sinks
    pub stats: CampaignStats,
}

/// Build the creation request from the configured campaign defaults
pub fn request_from_defaults(defaults: &CampaignDefaults) -> CampaignCreateRequest {
    CampaignCreateRequest {
        name: defaults.name.clone(),
        budget: defaults.budget,
        bid_amount: defaults.bid_amount,
        country_codes: defaults.country_codes.clone(),
    }
}

/// Run the campaign flow: create, fetch stats, render to every sink in order
pub async fn run(
    client: &dyn RevcontentClient,
    request: CampaignCreateRequest,
    date_range: DateRange,
    sinks: &mut [Box<dyn StatsSink>],
) -> AppResult<RunReport> {
    let created = client.create_campaign(&request).await?;
    info!("Campaign created, ID: {}", created.id);

    let stats = client.get_campaign_stats(&created.id, &date_range).await?;
    info!("Statistics received for campaign {}", created.id);

    for sink in sinks.iter_mut() {
        sink.write_stats(&created.id, &stats)?;
        info!("Statistics written to {} sink", sink.name());
    }

    Ok(RunReport {
        campaign_id: created.id,
        stats,
    })
}
