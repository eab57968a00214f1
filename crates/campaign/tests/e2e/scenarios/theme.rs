//! Theme & Logo enable / disable Hummingbird campaigns.

use crate::helpers::assertions::*;
use crate::helpers::config::*;
use crate::helpers::fixtures::*;

use boprobe_campaign::{Campaign, CampaignError, run};

/// Enable then disable on the same session returns to Classic.
#[tokio::test]
async fn test_e2e_enable_then_disable_hummingbird() {
    let config = TestConfigBuilder::new().build();
    let backoffice = demo_backoffice().await;
    assert_eq!(backoffice.active_theme().await, "classic");

    let enable = run(Campaign::EnableHummingbird, &backoffice, &config).await;
    assert_all_passed(&enable);
    assert_step_order(
        &enable,
        &["loginBO", "goToThemeAndLogoPage", "enableThemeHummingbird"],
    );
    assert_eq!(enable.base_context, "commonTests-enableHummingbird");
    assert_eq!(backoffice.active_theme().await, "hummingbird");

    let disable = run(Campaign::DisableHummingbird, &backoffice, &config).await;
    assert_all_passed(&disable);
    assert_step_order(
        &disable,
        &["loginBO", "goToThemeAndLogoPage", "enableThemeClassic"],
    );
    assert_eq!(disable.base_context, "commonTests-disableHummingbird");
    assert_eq!(backoffice.active_theme().await, "classic");
}

/// Enabling the already active theme has no "use" button to click.
#[tokio::test]
async fn test_e2e_enable_active_theme_fails() {
    let config = TestConfigBuilder::new().build();
    let backoffice = backoffice_with(|f| f.active_theme = "hummingbird".to_owned()).await;

    let report = run(Campaign::EnableHummingbird, &backoffice, &config).await;

    assert_failed_at(&report, "enableThemeHummingbird");
    assert!(report.failure.as_ref().unwrap().error.as_boprobe().is_some());
}

/// A third installed theme breaks the theme count check.
#[tokio::test]
async fn test_e2e_unexpected_theme_count_fails() {
    let config = TestConfigBuilder::new().build();
    let backoffice = backoffice_with(|f| f.themes.push("child_classic".to_owned())).await;

    let report = run(Campaign::EnableHummingbird, &backoffice, &config).await;

    assert_failed_at(&report, "goToThemeAndLogoPage");
    assert!(matches!(
        report.failure.as_ref().unwrap().error,
        CampaignError::Assertion { .. }
    ));
}

/// The expected count follows configuration.
#[tokio::test]
async fn test_e2e_theme_count_from_config() {
    let config = TestConfigBuilder::new().expected_theme_count(3).build();
    let backoffice = backoffice_with(|f| f.themes.push("child_classic".to_owned())).await;

    let report = run(Campaign::EnableHummingbird, &backoffice, &config).await;
    assert_all_passed(&report);
}
