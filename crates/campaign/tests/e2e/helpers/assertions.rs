//! Campaign report assertion helpers.

use boprobe_campaign::{CampaignReport, StepStatus};

/// Assert that every step passed, printing the failure otherwise.
#[allow(dead_code)]
pub fn assert_all_passed(report: &CampaignReport) {
    if let Some(failure) = &report.failure {
        panic!(
            "campaign {} failed at {}: {}",
            report.campaign, failure.test_identifier, failure.message
        );
    }
    assert!(
        report.steps.iter().all(|s| s.status == StepStatus::Passed),
        "all steps should pass: {:?}",
        report.steps
    );
}

/// Assert the step identifiers in execution order.
#[allow(dead_code)]
pub fn assert_step_order(report: &CampaignReport, expected: &[&str]) {
    let actual: Vec<&str> = report
        .steps
        .iter()
        .map(|s| s.test_identifier.as_str())
        .collect();
    assert_eq!(actual, expected);
}

/// Assert that `step` failed and every later step was skipped.
#[allow(dead_code)]
pub fn assert_failed_at(report: &CampaignReport, step: &str) {
    let index = report
        .steps
        .iter()
        .position(|s| s.test_identifier == step)
        .unwrap_or_else(|| panic!("step {step} not in report"));

    for earlier in &report.steps[..index] {
        assert_eq!(earlier.status, StepStatus::Passed, "{}", earlier.test_identifier);
    }
    assert_eq!(report.steps[index].status, StepStatus::Failed);
    assert!(report.steps[index].detail.is_some());
    for later in &report.steps[index + 1..] {
        assert_eq!(later.status, StepStatus::Skipped, "{}", later.test_identifier);
    }

    let failure = report.failure.as_ref().expect("report should carry failure");
    assert_eq!(failure.test_identifier, step);
    assert!(!report.passed());
}
