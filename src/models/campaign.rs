//! Campaign data models
//!
//! Request, result, and statistics structures for Revcontent campaigns
//! (Boosts), plus the wire envelopes the API wraps them in. Only fields
//! documented in the Revcontent API reference appear here; in particular
//! the creation payload carries no `traffic_type` and the statistics carry
//! no `status`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Campaign (Boost) creation request
///
/// Serializes to exactly the documented creation fields. Built once by the
/// orchestration run and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCreateRequest {
    /// Campaign name
    pub name: String,
    /// Total campaign budget in USD
    pub budget: f64,
    /// Default bid per click in USD
    pub bid_amount: f64,
    /// Targeted country codes
    pub country_codes: Vec<String>,
}

/// Result of a campaign creation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCreateResult {
    /// Identifier of the created campaign, guaranteed non-empty
    pub id: String,
    /// Campaign name echoed back by the API (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Campaign performance statistics
///
/// Unknown inbound fields are dropped on deserialization, so an API response
/// carrying extras (e.g. `status`) still yields only the documented metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignStats {
    /// Ad impressions served
    pub impressions: u64,
    /// Clicks received
    pub clicks: u64,
    /// Total spend in USD
    pub spend: f64,
    /// Click-through rate (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    /// Average cost per click in USD (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cpc: Option<f64>,
}

/// Inclusive date range for a statistics query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub from: NaiveDate,
    /// Last day of the range
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Range covering a single day
    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }
}

/// Generic `{"data": [...]}` envelope used by Revcontent responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Payload items; creation and stats responses both wrap a list
    pub data: Option<Vec<T>>,
}

/// Successful OAuth token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Bearer token for subsequent requests
    pub access_token: Option<String>,
}

/// OAuth error body (400 on `/oauth/token`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl OAuthErrorBody {
    /// Render as `error - description` with documented fallbacks
    pub fn message(&self) -> String {
        format!(
            "{} - {}",
            self.error.as_deref().unwrap_or("unknown_error"),
            self.error_description.as_deref().unwrap_or("No description provided.")
        )
    }
}

/// Structured API error body (400 on the stats endpoints)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorItem>>,
}

/// One entry of a structured error list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorItem {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Join all entries as `[code] title - detail; ...`
    pub fn message(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        let parts: Vec<String> = errors
            .iter()
            .map(|err| {
                let code = err
                    .code
                    .as_ref()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "Unknown code".to_string());
                format!(
                    "[{}] {} - {}",
                    code,
                    err.title.as_deref().unwrap_or("Unknown title"),
                    err.detail.as_deref().unwrap_or("No details provided")
                )
            })
            .collect();
        Some(parts.join("; "))
    }
}
