//! 캠페인 실행 보고서
//!
//! 단계별 결과와 첫 번째 실패를 담습니다. CLI가 텍스트 또는 JSON으로 출력합니다.

use serde::Serialize;
use uuid::Uuid;

use crate::campaigns::Campaign;
use crate::error::CampaignError;

/// 단계 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// 성공
    Passed,
    /// 실패 (캠페인 중단)
    Failed,
    /// 앞 단계 실패로 실행하지 않음
    Skipped,
}

impl StepStatus {
    /// 메트릭 레이블 값
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "pass",
            Self::Failed => "fail",
            Self::Skipped => "skipped",
        }
    }
}

/// 단계 하나의 결과
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// 단계 식별자 (예: `sortByDateDesc`)
    pub test_identifier: String,
    /// 캠페인 기본 컨텍스트
    pub base_context: String,
    /// 결과
    pub status: StepStatus,
    /// 소요 시간 (밀리초), 건너뛴 단계는 0
    pub duration_ms: u64,
    /// 실패 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// 캠페인을 중단시킨 실패
#[derive(Debug, Serialize)]
pub struct StepFailure {
    /// 실패한 단계 식별자
    pub test_identifier: String,
    /// 에러 메시지
    pub message: String,
    /// 원본 에러
    #[serde(skip)]
    pub error: CampaignError,
}

/// 캠페인 실행 보고서
#[derive(Debug, Serialize)]
pub struct CampaignReport {
    /// 실행 ID
    pub run_id: Uuid,
    /// 캠페인
    pub campaign: Campaign,
    /// 기본 컨텍스트
    pub base_context: String,
    /// 실행 순서대로의 단계 결과
    pub steps: Vec<StepReport>,
    /// 전체 소요 시간 (밀리초)
    pub duration_ms: u64,
    /// 첫 번째 실패
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<StepFailure>,
}

impl CampaignReport {
    /// 모든 단계가 성공했는지 여부
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// 특정 결과의 단계 수
    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    /// 식별자로 단계 결과를 찾습니다.
    pub fn step(&self, test_identifier: &str) -> Option<&StepReport> {
        self.steps
            .iter()
            .find(|s| s.test_identifier == test_identifier)
    }
}
