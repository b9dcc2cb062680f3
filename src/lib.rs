//! Revcontent campaign simulation library
//!
//! Provides the campaign creation and statistics retrieval flow against the
//! Revcontent API, with a mocked client for demo runs and tests

pub mod config;
pub mod models;
pub mod services;
pub mod sinks;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{CampaignCreateRequest, CampaignCreateResult, CampaignStats, DateRange};
pub use services::{
    HttpRevcontentClient, MockRevcontentClient, RecordedCall, RevcontentClient, RunReport,
};
pub use sinks::{ConsoleSink, JsonFileSink, StatsSink};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
