//! Attributes & Features help card campaign.

use crate::helpers::assertions::*;
use crate::helpers::config::*;
use crate::helpers::fixtures::*;

use boprobe_campaign::{Campaign, CampaignError, run};
use boprobe_core::driver::AdminPage;

const STEPS: [&str; 5] = [
    "loginBO",
    "goToAttributesPage",
    "openHelpSidebar",
    "checkDocumentLanguage",
    "closeHelpSidebar",
];

#[tokio::test]
async fn test_e2e_help_card_passes() {
    let config = TestConfigBuilder::new().build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::HelpCard, &backoffice, &config).await;

    assert_all_passed(&report);
    assert_step_order(&report, &STEPS);
    assert_eq!(backoffice.current_page().await, Some(AdminPage::Attributes));
}

#[tokio::test]
async fn test_e2e_help_card_follows_language() {
    let config = TestConfigBuilder::new().language("fr").build();
    let backoffice = backoffice_with(|f| f.language = "fr".to_owned()).await;

    let report = run(Campaign::HelpCard, &backoffice, &config).await;
    assert_all_passed(&report);
}

/// Document served in English while French is expected.
#[tokio::test]
async fn test_e2e_help_card_language_mismatch() {
    let config = TestConfigBuilder::new().language("fr").build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::HelpCard, &backoffice, &config).await;

    assert_failed_at(&report, "checkDocumentLanguage");
    let failure = report.failure.as_ref().unwrap();
    assert!(matches!(failure.error, CampaignError::Assertion { .. }));
    assert!(failure.message.contains("country=fr"));
}
