//! 메트릭 상수 및 설명 등록
//!
//! 검증기, 드라이버, 캠페인이 기록하는 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 모듈은 이 상수를 사용하여 `metrics::counter!()`, `metrics::histogram!()`
//! 매크로를 호출합니다. 레코더가 설치되지 않았으면 기록은 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `boprobe_`
//! - 접미어: `_total` (counter), `_seconds` (histogram/latency)
//!
//! # 사용 예시
//!
//! ```ignore
//! use boprobe_core::metrics as m;
//! use metrics::counter;
//!
//! counter!(m::VERIFICATIONS_TOTAL, m::LABEL_RESULT => "pass").increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 드라이버 동작 레이블 키 (sort, paginate, bulk_edit, navigate)
pub const LABEL_ACTION: &str = "action";

/// 결과 레이블 키 (pass, fail, skipped)
pub const LABEL_RESULT: &str = "result";

/// 캠페인 레이블 키 (sort_and_pagination, enable_hummingbird, ...)
pub const LABEL_CAMPAIGN: &str = "campaign";

// ─── 검증 메트릭 ────────────────────────────────────────────────────

/// 정렬/페이지 검증 수 (counter, label: result)
pub const VERIFICATIONS_TOTAL: &str = "boprobe_verifications_total";

/// 드라이버 동작 소요 시간 (histogram, 초, label: action)
pub const DRIVER_ACTION_DURATION_SECONDS: &str = "boprobe_driver_action_duration_seconds";

// ─── 캠페인 메트릭 ──────────────────────────────────────────────────

/// 실행된 캠페인 단계 수 (counter, label: campaign, result)
pub const CAMPAIGN_STEPS_TOTAL: &str = "boprobe_campaign_steps_total";

/// 캠페인 전체 소요 시간 (histogram, 초, label: campaign)
pub const CAMPAIGN_DURATION_SECONDS: &str = "boprobe_campaign_duration_seconds";

// ─── WebDriver 메트릭 ───────────────────────────────────────────────

/// WebDriver HTTP 요청 수 (counter, label: result)
pub const WEBDRIVER_REQUESTS_TOTAL: &str = "boprobe_webdriver_requests_total";

/// 조건 대기 타임아웃 수 (counter)
pub const WEBDRIVER_WAIT_TIMEOUTS_TOTAL: &str = "boprobe_webdriver_wait_timeouts_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// 레코더 설치 후 한 번 호출합니다. 레코더가 없어도 패닉하지 않습니다.
pub fn describe_all() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(
        VERIFICATIONS_TOTAL,
        "Total number of sort and pagination checks, by result"
    );
    describe_histogram!(
        DRIVER_ACTION_DURATION_SECONDS,
        "Time spent in a single UI driver action in seconds"
    );
    describe_counter!(
        CAMPAIGN_STEPS_TOTAL,
        "Total number of campaign steps, by campaign and result"
    );
    describe_histogram!(
        CAMPAIGN_DURATION_SECONDS,
        "Wall time of a full campaign run in seconds"
    );
    describe_counter!(
        WEBDRIVER_REQUESTS_TOTAL,
        "Total number of WebDriver HTTP requests, by result"
    );
    describe_counter!(
        WEBDRIVER_WAIT_TIMEOUTS_TOTAL,
        "Total number of WebDriver condition waits that timed out"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METRIC_NAMES: &[&str] = &[
        VERIFICATIONS_TOTAL,
        DRIVER_ACTION_DURATION_SECONDS,
        CAMPAIGN_STEPS_TOTAL,
        CAMPAIGN_DURATION_SECONDS,
        WEBDRIVER_REQUESTS_TOTAL,
        WEBDRIVER_WAIT_TIMEOUTS_TOTAL,
    ];

    #[test]
    fn all_metrics_start_with_boprobe_prefix() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.starts_with("boprobe_"),
                "Metric '{}' does not start with 'boprobe_' prefix",
                name
            );
        }
    }

    #[test]
    fn describe_all_does_not_panic() {
        describe_all();
    }

    #[test]
    fn label_keys_are_lowercase() {
        for label in [LABEL_ACTION, LABEL_RESULT, LABEL_CAMPAIGN] {
            assert_eq!(label.to_lowercase(), label);
        }
    }
}
