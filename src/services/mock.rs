//! Mocked Revcontent client
//!
//! Stand-in implementation of [`RevcontentClient`] that performs no I/O.
//! It returns canned data and records every call so tests can assert the
//! exact arguments via equality checks, without a mocking framework.

use crate::models::campaign::{
    CampaignCreateRequest, CampaignCreateResult, CampaignStats, DateRange,
};
use crate::services::client::RevcontentClient;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

/// One recorded client invocation with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CreateCampaign(CampaignCreateRequest),
    GetCampaignStats {
        campaign_id: String,
        date_range: DateRange,
    },
}

/// Mocked client returning predetermined values
pub struct MockRevcontentClient {
    result: CampaignCreateResult,
    stats: CampaignStats,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRevcontentClient {
    /// Create a mock returning the given canned values
    pub fn new(result: CampaignCreateResult, stats: CampaignStats) -> Self {
        Self {
            result,
            stats,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock with the default canned campaign and statistics
    pub fn canned() -> Self {
        Self::new(
            CampaignCreateResult {
                id: "12345".to_string(),
                name: None,
            },
            CampaignStats {
                impressions: 1000,
                clicks: 50,
                spend: 25.50,
                ctr: None,
                avg_cpc: None,
            },
        )
    }

    /// Snapshot of the calls recorded so far, in invocation order
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl RevcontentClient for MockRevcontentClient {
    async fn create_campaign(
        &self,
        request: &CampaignCreateRequest,
    ) -> AppResult<CampaignCreateResult> {
        info!("Mock create_campaign called: {}", request.name);
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall::CreateCampaign(request.clone()));
        Ok(self.result.clone())
    }

    async fn get_campaign_stats(
        &self,
        campaign_id: &str,
        date_range: &DateRange,
    ) -> AppResult<CampaignStats> {
        info!("Mock get_campaign_stats called: {}", campaign_id);
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall::GetCampaignStats {
                campaign_id: campaign_id.to_string(),
                date_range: *date_range,
            });
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_mock_returns_canned_values() {
        let mock = MockRevcontentClient::canned();
        let request = CampaignCreateRequest {
            name: "Test Campaign".to_string(),
            budget: 50.0,
            bid_amount: 0.10,
            country_codes: vec!["US".to_string()],
        };

        let result = mock.create_campaign(&request).await.unwrap();
        assert_eq!(result.id, "12345");

        let stats = mock.get_campaign_stats(&result.id, &sample_range()).await.unwrap();
        assert_eq!(stats.impressions, 1000);
        assert_eq!(stats.clicks, 50);
        assert_eq!(stats.spend, 25.50);
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mock = MockRevcontentClient::canned();
        let request = CampaignCreateRequest {
            name: "Test Campaign".to_string(),
            budget: 50.0,
            bid_amount: 0.10,
            country_codes: vec!["US".to_string()],
        };
        let range = sample_range();

        mock.create_campaign(&request).await.unwrap();
        mock.get_campaign_stats("12345", &range).await.unwrap();

        let calls = mock.recorded_calls();
        assert_eq!(
            calls,
            vec![
                RecordedCall::CreateCampaign(request),
                RecordedCall::GetCampaignStats {
                    campaign_id: "12345".to_string(),
                    date_range: range,
                },
            ]
        );
    }
}
