//! Configuration module integration tests

use revcontent_campaign::config::Settings;
use revcontent_campaign::AppError;
use std::env;
use std::sync::Mutex;

/// Environment variables are process-global, so env-driven tests serialize
/// through this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Setup test environment variables
fn setup_test_env() {
    env::set_var("API_URL", "https://api.revcontent.io");
    env::set_var("CLIENT_ID", "test-client-id");
    env::set_var("CLIENT_SECRET", "test-client-secret");
    env::set_var("REQUEST_TIMEOUT", "30");
    env::set_var("CAMPAIGN_NAME", "Test Campaign - Integration");
    env::set_var("CAMPAIGN_BUDGET", "50.0");
    env::set_var("CAMPAIGN_BID", "0.10");
    env::set_var("CAMPAIGN_COUNTRIES", "US,CA");
    env::set_var("STATS_OUTPUT_PATH", "campaign_stats.json");
    env::set_var("RUST_LOG", "info");
    env::set_var("LOG_FORMAT", "text");
}

/// Clean up test environment variables
fn cleanup_test_env() {
    let vars = [
        "API_URL", "CLIENT_ID", "CLIENT_SECRET", "REQUEST_TIMEOUT",
        "CAMPAIGN_NAME", "CAMPAIGN_BUDGET", "CAMPAIGN_BID", "CAMPAIGN_COUNTRIES",
        "STATS_OUTPUT_PATH", "RUST_LOG", "LOG_FORMAT", "REVCONTENT_LIVE",
    ];

    for var in &vars {
        env::remove_var(var);
    }
}

#[test]
fn test_settings_creation_with_valid_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();

    let settings = Settings::new().unwrap();
    assert_eq!(settings.api.base_url, "https://api.revcontent.io");
    assert_eq!(settings.api.client_id, "test-client-id");
    assert_eq!(settings.api.client_secret, "test-client-secret");
    assert_eq!(settings.api.timeout, 30);
    assert!(!settings.api.live);
    assert_eq!(settings.campaign.name, "Test Campaign - Integration");
    assert_eq!(settings.campaign.budget, 50.0);
    assert_eq!(settings.campaign.bid_amount, 0.10);
    assert_eq!(settings.campaign.country_codes, vec!["US", "CA"]);
    assert_eq!(settings.output.stats_path, "campaign_stats.json");

    cleanup_test_env();
}

#[test]
fn test_settings_missing_client_id_fails_fast() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::remove_var("CLIENT_ID");

    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("CLIENT_ID"));
    // A configuration failure halts before any client call can be made
    assert!(error.is_fatal_before_call());
    assert!(matches!(error, AppError::Configuration(_)));

    cleanup_test_env();
}

#[test]
fn test_settings_missing_client_secret_fails_fast() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::remove_var("CLIENT_SECRET");

    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("CLIENT_SECRET"));
    assert!(matches!(error, AppError::Configuration(_)));

    cleanup_test_env();
}

#[test]
fn test_settings_invalid_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("API_URL", "not-a-url");

    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("API_URL"));

    cleanup_test_env();
}

#[test]
fn test_settings_invalid_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("REQUEST_TIMEOUT", "abc");

    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("REQUEST_TIMEOUT"));

    cleanup_test_env();
}

#[test]
fn test_settings_invalid_budget() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("CAMPAIGN_BUDGET", "-1.0");

    let error = Settings::new().unwrap_err();
    assert!(error.to_string().contains("CAMPAIGN_BUDGET"));

    cleanup_test_env();
}

#[test]
fn test_settings_live_flag() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("REVCONTENT_LIVE", "true");

    let settings = Settings::new().unwrap();
    assert!(settings.api.live);

    cleanup_test_env();
}

#[test]
fn test_settings_defaults_applied() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("CLIENT_ID", "test-client-id");
    env::set_var("CLIENT_SECRET", "test-client-secret");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.campaign.budget, 50.0);
    assert_eq!(settings.campaign.bid_amount, 0.10);
    assert_eq!(settings.campaign.country_codes, vec!["US"]);
    assert_eq!(settings.output.stats_path, "campaign_stats.json");
    assert!(!settings.api.live);

    cleanup_test_env();
}
