//! Stocks > Movements sort and pagination campaign.

use crate::helpers::assertions::*;
use crate::helpers::config::*;
use crate::helpers::fixtures::*;

use boprobe_campaign::{Campaign, CampaignError, StepStatus, run};
use boprobe_core::driver::{BackOffice, GridKind};
use boprobe_core::error::{BoprobeError, DriverError};

const STEPS: [&str; 18] = [
    "loginBO",
    "goToStocksPage",
    "bulkEditQuantity",
    "goToMovementsPage",
    "sortByDateDesc",
    "sortByDateAsc",
    "sortByProductIDAsc",
    "sortByProductIDDesc",
    "sortByProductNameAsc",
    "sortByProductNameDesc",
    "sortByReferenceAsc",
    "sortByReferenceDesc",
    "goToStocksPage2",
    "bulkEditQuantityFirstPage",
    "goToSecondPage",
    "goToMovementsPage2",
    "goToNextPage",
    "goBackToFirstPage",
];

/// Demo catalog -> every step passes in the documented order.
#[tokio::test]
async fn test_e2e_sort_and_pagination_passes() {
    let config = TestConfigBuilder::new().build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;

    assert_all_passed(&report);
    assert_step_order(&report, &STEPS);
    assert!(
        report
            .steps
            .iter()
            .all(|s| s.base_context == "functional_BO_catalog_stocks_movements_sortAndPagination")
    );
}

/// One filtered edit plus two full stock pages are recorded as movements.
#[tokio::test]
async fn test_e2e_bulk_edits_grow_movements_past_one_page() {
    let config = TestConfigBuilder::new().build();
    let backoffice = demo_backoffice().await;
    let movements = backoffice.grid(GridKind::Movements);
    assert_eq!(movements.row_count().await, 3);

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;
    assert_all_passed(&report);

    // 3 seeded + 1 filtered product + 10 on page one + 9 on page two
    assert_eq!(movements.row_count().await, 23);
    assert_eq!(movements.total_pages().await, 3);
}

/// Filter matching no product -> bulk edit fails, the rest is skipped.
#[tokio::test]
async fn test_e2e_unknown_product_fails_bulk_edit() {
    let config = TestConfigBuilder::new()
        .product_filter("no such product")
        .build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;

    assert_failed_at(&report, "bulkEditQuantity");
    assert_eq!(report.count(StepStatus::Skipped), STEPS.len() - 3);
    let failure = report.failure.as_ref().unwrap();
    assert!(matches!(
        failure.error,
        CampaignError::Boprobe(BoprobeError::Driver(DriverError::ElementNotFound { .. }))
    ));
}

/// Wrong password -> login fails and nothing else runs.
#[tokio::test]
async fn test_e2e_wrong_password_skips_everything() {
    let config = TestConfigBuilder::new().password("wrong").build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;

    assert_failed_at(&report, "loginBO");
    assert_eq!(report.steps.len(), STEPS.len());
    assert_eq!(report.count(StepStatus::Skipped), STEPS.len() - 1);
    assert!(backoffice.current_page().await.is_none());
}

/// The serialized report carries identifiers, statuses and the run id.
#[tokio::test]
async fn test_e2e_report_serializes() {
    let config = TestConfigBuilder::new().build();
    let backoffice = demo_backoffice().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;
    let json = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(json["campaign"], "sort-and-pagination");
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(STEPS.len()));
    assert_eq!(json["steps"][4]["test_identifier"], "sortByDateDesc");
    assert_eq!(json["steps"][4]["status"], "passed");
    assert!(json.get("failure").is_none());
    assert_eq!(json["run_id"], report.run_id.to_string());
}
