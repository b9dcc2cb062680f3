//! Revcontent API client
//!
//! Defines the client capability seam and the live HTTP implementation.
//! The live variant speaks OAuth2 client credentials plus the Boost
//! endpoints; the demo run and the test suite use the mocked variant
//! from `services::mock` instead.

use crate::config::settings::ApiConfig;
use crate::models::campaign::{
    ApiErrorBody, AuthSuccess, CampaignCreateRequest, CampaignCreateResult, CampaignStats,
    DataEnvelope, DateRange, OAuthErrorBody,
};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info};

/// Capability seam for the Revcontent API
///
/// Polymorphic over {create_campaign, get_campaign_stats}; backed by
/// [`HttpRevcontentClient`] in a live deployment and by
/// [`crate::services::MockRevcontentClient`] everywhere in this repository.
#[async_trait]
pub trait RevcontentClient: Send + Sync {
    /// Create a new campaign (Boost); the result carries a non-empty id
    async fn create_campaign(
        &self,
        request: &CampaignCreateRequest,
    ) -> AppResult<CampaignCreateResult>;

    /// Fetch performance statistics for a previously created campaign
    async fn get_campaign_stats(
        &self,
        campaign_id: &str,
        date_range: &DateRange,
    ) -> AppResult<CampaignStats>;
}

/// Live Revcontent API client
#[derive(Debug, Clone)]
pub struct HttpRevcontentClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
}

impl HttpRevcontentClient {
    /// Create a new client instance; call [`Self::authenticate`] before use
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            access_token: None,
        })
    }

    /// Authenticate with the OAuth2 client-credentials flow
    ///
    /// Stores the bearer token for subsequent requests. A 400 response
    /// surfaces its `error`/`error_description` body; a 200 response
    /// without an `access_token` is also an authentication failure.
    pub async fn authenticate(&mut self) -> AppResult<()> {
        let url = format!("{}/oauth/token", self.base_url);
        let payload = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        info!("Authenticating with Revcontent API");
        let response = self.client
            .post(&url)
            .header("Cache-Control", "no-cache")
            .form(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: AuthSuccess = response.json().await?;
                match body.access_token {
                    Some(token) if !token.is_empty() => {
                        self.access_token = Some(token);
                        info!("Authentication successful");
                        Ok(())
                    }
                    _ => {
                        error!("Access token not found in response");
                        Err(AppError::Authentication(
                            "Access token not found in response".to_string(),
                        ))
                    }
                }
            }
            StatusCode::BAD_REQUEST => {
                let body: OAuthErrorBody = response.json().await.unwrap_or(OAuthErrorBody {
                    error: None,
                    error_description: None,
                });
                let message = format!("400 Bad Request: {}", body.message());
                error!("Authentication failed: {}", message);
                Err(AppError::Authentication(message))
            }
            status => {
                let text = response.text().await.unwrap_or_default();
                error!("Authentication failed: {} {}", status, text);
                Err(AppError::Authentication(format!("{} {}", status, text)))
            }
        }
    }

    /// Bearer token, or an authentication error when `authenticate` was skipped
    fn token(&self) -> AppResult<&str> {
        self.access_token.as_deref().ok_or_else(|| {
            AppError::Authentication("Not authenticated, call authenticate() first".to_string())
        })
    }

    /// Map a non-success response to an API error
    ///
    /// 400 bodies carrying a structured `errors` list are joined as
    /// `[code] title - detail; ...`; everything else keeps status and text.
    async fn api_error(response: Response) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::BAD_REQUEST {
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                if let Some(message) = body.message() {
                    error!("400 Bad Request: {}", message);
                    return AppError::Api(format!("400 Bad Request: {}", message));
                }
            }
            error!("400 Bad Request: {}", text);
            AppError::Api(format!("400 Bad Request: {}", text))
        } else {
            error!("API request failed: {} {}", status, text);
            AppError::Api(format!("API request failed: {} {}", status, text))
        }
    }
}

#[async_trait]
impl RevcontentClient for HttpRevcontentClient {
    async fn create_campaign(
        &self,
        request: &CampaignCreateRequest,
    ) -> AppResult<CampaignCreateResult> {
        let token = self.token()?;
        let url = format!("{}/stats/api/v1.0/boosts/add", self.base_url);

        info!(
            "Creating campaign: {} (budget: {}, bid: {}, countries: {:?})",
            request.name, request.budget, request.bid_amount, request.country_codes
        );
        let response = self.client
            .post(&url)
            .bearer_auth(token)
            .header("Cache-Control", "no-cache")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            let envelope: DataEnvelope<serde_json::Value> = response.json().await?;
            let first = envelope.data.as_ref().and_then(|items| items.first());

            let id = first
                .and_then(|item| match item.get("id") {
                    Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                })
                .ok_or_else(|| {
                    error!("Create campaign response does not contain a campaign ID");
                    AppError::Api("Create campaign response does not contain a campaign ID".to_string())
                })?;

            let name = first
                .and_then(|item| item.get("name"))
                .and_then(|v| v.as_str())
                .map(String::from);

            info!("Campaign created successfully, ID: {}", id);
            Ok(CampaignCreateResult { id, name })
        } else {
            Err(Self::api_error(response).await)
        }
    }

    async fn get_campaign_stats(
        &self,
        campaign_id: &str,
        date_range: &DateRange,
    ) -> AppResult<CampaignStats> {
        let token = self.token()?;
        let url = format!("{}/stats/api/v1.0/boosts/performance", self.base_url);

        let from = date_range.from.format("%Y-%m-%d").to_string();
        let to = date_range.to.format("%Y-%m-%d").to_string();

        info!("Fetching stats for campaign: {}", campaign_id);
        let response = self.client
            .get(&url)
            .bearer_auth(token)
            .header("Cache-Control", "no-cache")
            .query(&[
                ("boost_id", campaign_id),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            let envelope: DataEnvelope<CampaignStats> = response.json().await?;
            let items = envelope.data.ok_or_else(|| {
                error!("Stats response does not contain a \"data\" key");
                AppError::Api("Stats response does not contain a \"data\" key".to_string())
            })?;

            // The performance endpoint returns a list; the first entry is the
            // requested campaign's aggregate.
            let stats = items.into_iter().next().ok_or_else(|| {
                AppError::Api(format!("No statistics returned for campaign {}", campaign_id))
            })?;

            debug!("Stats received for campaign {}", campaign_id);
            Ok(stats)
        } else {
            Err(Self::api_error(response).await)
        }
    }
}
