//! Failure injection: a movements grid whose sort headers do nothing.

use crate::helpers::assertions::*;
use crate::helpers::config::*;
use crate::helpers::fixtures::*;

use boprobe_campaign::{Campaign, CampaignError, StepStatus, run};
use boprobe_core::driver::{BackOffice, GridKind};
use boprobe_core::error::{BoprobeError, VerificationError};

/// The grid opens sorted by date descending, so the first case still holds
/// and the ascending case is the first to see the wrong order.
#[tokio::test]
async fn test_e2e_broken_sort_reports_order_mismatch() {
    let config = TestConfigBuilder::new().build();
    let backoffice = backoffice_with_broken_movements().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;

    assert_failed_at(&report, "sortByDateAsc");
    assert_eq!(
        report.step("sortByDateDesc").map(|s| s.status),
        Some(StepStatus::Passed)
    );

    let failure = report.failure.as_ref().unwrap();
    match &failure.error {
        CampaignError::Boprobe(BoprobeError::Verification(VerificationError::OrderMismatch {
            column,
            index,
            expected,
            actual,
        })) => {
            assert_eq!(column, "date_add");
            assert_eq!(*index, 0);
            assert_eq!(expected, "2024-03-04 09:05:13");
            assert!(actual.starts_with("2099-01-01"), "newest movement first: {actual}");
        }
        other => panic!("expected OrderMismatch, got {other:?}"),
    }
    assert!(failure.message.contains("order mismatch"));
}

/// Skipped steps never touch the back office.
#[tokio::test]
async fn test_e2e_skipped_steps_do_not_paginate() {
    let config = TestConfigBuilder::new().build();
    let backoffice = backoffice_with_broken_movements().await;

    let report = run(Campaign::SortAndPagination, &backoffice, &config).await;

    for id in ["goToStocksPage2", "goToNextPage", "goBackToFirstPage"] {
        let step = report.step(id).expect("step recorded");
        assert_eq!(step.status, StepStatus::Skipped);
        assert_eq!(step.duration_ms, 0);
        assert!(step.detail.is_none());
    }
    // only the filtered edit reached the movements grid
    assert_eq!(backoffice.grid(GridKind::Movements).row_count().await, 4);
}
