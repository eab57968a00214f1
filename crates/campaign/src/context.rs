//! 단계 실행 컨텍스트
//!
//! [`CampaignRun`]은 단계를 순서대로 실행하며 결과를 기록합니다.
//! 한 단계가 실패하면 이후 단계는 실행하지 않고 `Skipped`로 기록합니다.
//! 단계는 지연 평가되는 future로 전달되므로, 건너뛴 단계의 동작은 시작되지 않습니다.

use std::future::Future;
use std::time::Instant;

use boprobe_core::metrics as m;
use metrics::{counter, histogram};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::campaigns::Campaign;
use crate::error::CampaignError;
use crate::report::{CampaignReport, StepFailure, StepReport, StepStatus};

/// 캠페인 실행 하나의 단계 기록기
pub struct CampaignRun {
    run_id: Uuid,
    campaign: Campaign,
    started: Instant,
    steps: Vec<StepReport>,
    failure: Option<StepFailure>,
}

impl CampaignRun {
    /// 새 실행을 시작합니다.
    pub fn new(campaign: Campaign) -> Self {
        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            campaign = campaign.name(),
            base_context = campaign.base_context(),
            "campaign started"
        );
        Self {
            run_id,
            campaign,
            started: Instant::now(),
            steps: Vec::new(),
            failure: None,
        }
    }

    /// 실행 ID
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// 앞 단계가 실패했는지 여부
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// 단계를 실행하고 결과를 기록합니다.
    ///
    /// 앞 단계가 실패했으면 `action`을 폴링하지 않고 `None`을 반환합니다.
    pub async fn step<T, F>(&mut self, test_identifier: &str, action: F) -> Option<T>
    where
        F: Future<Output = Result<T, CampaignError>>,
    {
        if self.failure.is_some() {
            debug!(run_id = %self.run_id, test_identifier, "step skipped");
            self.record(test_identifier, StepStatus::Skipped, 0, None);
            return None;
        }

        let started = Instant::now();
        let result = action.await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(value) => {
                info!(run_id = %self.run_id, test_identifier, duration_ms, "step passed");
                self.record(test_identifier, StepStatus::Passed, duration_ms, None);
                Some(value)
            }
            Err(error) => {
                let message = error.to_string();
                warn!(
                    run_id = %self.run_id,
                    test_identifier,
                    duration_ms,
                    error = %message,
                    "step failed"
                );
                self.record(
                    test_identifier,
                    StepStatus::Failed,
                    duration_ms,
                    Some(message.clone()),
                );
                self.failure = Some(StepFailure {
                    test_identifier: test_identifier.to_owned(),
                    message,
                    error,
                });
                None
            }
        }
    }

    fn record(
        &mut self,
        test_identifier: &str,
        status: StepStatus,
        duration_ms: u64,
        detail: Option<String>,
    ) {
        counter!(
            m::CAMPAIGN_STEPS_TOTAL,
            m::LABEL_CAMPAIGN => self.campaign.name(),
            m::LABEL_RESULT => status.as_str()
        )
        .increment(1);

        self.steps.push(StepReport {
            test_identifier: test_identifier.to_owned(),
            base_context: self.campaign.base_context().to_owned(),
            status,
            duration_ms,
            detail,
        });
    }

    /// 실행을 마치고 보고서를 만듭니다.
    pub fn finish(self) -> CampaignReport {
        let elapsed = self.started.elapsed();
        histogram!(m::CAMPAIGN_DURATION_SECONDS, m::LABEL_CAMPAIGN => self.campaign.name())
            .record(elapsed.as_secs_f64());

        let report = CampaignReport {
            run_id: self.run_id,
            campaign: self.campaign,
            base_context: self.campaign.base_context().to_owned(),
            steps: self.steps,
            duration_ms: elapsed.as_millis() as u64,
            failure: self.failure,
        };

        info!(
            run_id = %report.run_id,
            campaign = report.campaign.name(),
            passed = report.count(StepStatus::Passed),
            failed = report.count(StepStatus::Failed),
            skipped = report.count(StepStatus::Skipped),
            duration_ms = report.duration_ms,
            "campaign finished"
        );
        report
    }
}
