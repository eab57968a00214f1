//! 캠페인 에러 타입
//!
//! [`CampaignError`]는 단계 실행 중 발생한 모든 실패를 표현합니다.
//! 드라이버/검증 에러는 [`BoprobeError`]를 그대로 감싸고,
//! 화면 값에 대한 기대 불일치는 [`CampaignError::Assertion`]으로 표현합니다.

use std::fmt::Display;

use boprobe_core::error::BoprobeError;

/// 캠페인 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// 드라이버, 검증, 설정, I/O 에러
    #[error(transparent)]
    Boprobe(#[from] BoprobeError),

    /// 화면에 표시된 값이 기대와 다름
    #[error("assertion failed for {what}: expected {expected}, got '{actual}'")]
    Assertion {
        /// 검사 대상 (예: `page title`)
        what: String,
        /// 기대 조건
        expected: String,
        /// 실제 값
        actual: String,
    },

    /// 알 수 없는 캠페인 이름
    #[error("unknown campaign: {0} (expected: sort-and-pagination, enable-hummingbird, disable-hummingbird, help-card)")]
    UnknownCampaign(String),
}

impl CampaignError {
    /// 감싼 [`BoprobeError`]가 있으면 반환합니다.
    pub fn as_boprobe(&self) -> Option<&BoprobeError> {
        match self {
            Self::Boprobe(e) => Some(e),
            _ => None,
        }
    }
}

/// `actual`이 `needle`을 포함하는지 확인합니다.
pub(crate) fn ensure_contains(what: &str, actual: &str, needle: &str) -> Result<(), CampaignError> {
    if actual.contains(needle) {
        return Ok(());
    }
    Err(CampaignError::Assertion {
        what: what.to_owned(),
        expected: format!("to contain '{needle}'"),
        actual: actual.to_owned(),
    })
}

/// `actual == expected`인지 확인합니다.
pub(crate) fn ensure_eq<T>(what: &str, actual: T, expected: T) -> Result<(), CampaignError>
where
    T: PartialEq + Display,
{
    if actual == expected {
        return Ok(());
    }
    Err(CampaignError::Assertion {
        what: what.to_owned(),
        expected: format!("'{expected}'"),
        actual: actual.to_string(),
    })
}
