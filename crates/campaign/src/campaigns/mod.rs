//! 캠페인 정의와 실행 디스패처
//!
//! 각 캠페인은 하나의 [`BackOffice`] 세션을 독점적으로 사용하는 단계 목록입니다.
//! 단계 식별자와 기본 컨텍스트는 보고서와 로그에 그대로 남습니다.

pub mod help_card;
pub mod sort_pagination;
pub mod theme;

use std::fmt;
use std::str::FromStr;

use boprobe_core::config::{BackOfficeConfig, BoprobeConfig};
use boprobe_core::driver::{AdminPage, BackOffice};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CampaignError, ensure_contains};
use crate::report::CampaignReport;

/// 실행 가능한 캠페인
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Campaign {
    /// Catalog > Stocks > Movements 정렬과 페이지네이션
    SortAndPagination,
    /// Hummingbird 테마 활성화
    EnableHummingbird,
    /// Classic 테마로 복귀
    DisableHummingbird,
    /// Attributes 페이지 도움말 카드
    HelpCard,
}

impl Campaign {
    /// 모든 캠페인
    pub const ALL: [Campaign; 4] = [
        Self::SortAndPagination,
        Self::EnableHummingbird,
        Self::DisableHummingbird,
        Self::HelpCard,
    ];

    /// CLI와 메트릭에서 쓰는 이름
    pub fn name(&self) -> &'static str {
        match self {
            Self::SortAndPagination => "sort-and-pagination",
            Self::EnableHummingbird => "enable-hummingbird",
            Self::DisableHummingbird => "disable-hummingbird",
            Self::HelpCard => "help-card",
        }
    }

    /// 단계 보고서에 붙는 기본 컨텍스트
    pub fn base_context(&self) -> &'static str {
        match self {
            Self::SortAndPagination => sort_pagination::BASE_CONTEXT,
            Self::EnableHummingbird => theme::ENABLE_BASE_CONTEXT,
            Self::DisableHummingbird => theme::DISABLE_BASE_CONTEXT,
            Self::HelpCard => help_card::BASE_CONTEXT,
        }
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Campaign {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| CampaignError::UnknownCampaign(s.to_owned()))
    }
}

/// 캠페인을 실행하고 보고서를 반환합니다.
///
/// 단계 실패는 에러가 아니라 보고서의 `failure`로 표현됩니다.
pub async fn run<B: BackOffice>(
    campaign: Campaign,
    backoffice: &B,
    config: &BoprobeConfig,
) -> CampaignReport {
    match campaign {
        Campaign::SortAndPagination => {
            sort_pagination::run(backoffice, &config.backoffice, &config.campaign).await
        }
        Campaign::EnableHummingbird => {
            theme::run(
                campaign,
                theme::HUMMINGBIRD,
                backoffice,
                &config.backoffice,
                &config.campaign,
            )
            .await
        }
        Campaign::DisableHummingbird => {
            theme::run(
                campaign,
                theme::CLASSIC,
                backoffice,
                &config.backoffice,
                &config.campaign,
            )
            .await
        }
        Campaign::HelpCard => help_card::run(backoffice, &config.backoffice).await,
    }
}

// ─── 공통 단계 ──────────────────────────────────────────────────────

/// 로그인 후 대시보드 제목을 확인합니다.
pub(crate) async fn login<B: BackOffice>(
    backoffice: &B,
    config: &BackOfficeConfig,
) -> Result<(), CampaignError> {
    let title = backoffice.login(&config.email, &config.password).await?;
    ensure_contains(
        "dashboard page title",
        &title,
        AdminPage::Dashboard.expected_title(),
    )
}

/// 페이지로 이동하고 제목을 확인합니다. `close_toolbar`이면 Symfony 툴바를 닫습니다.
pub(crate) async fn go_to<B: BackOffice>(
    backoffice: &B,
    page: AdminPage,
    close_toolbar: bool,
) -> Result<(), CampaignError> {
    let title = backoffice.go_to_page(page).await?;
    if close_toolbar {
        backoffice.close_sf_toolbar().await?;
    }
    debug!(%page, title = %title, "page reached");
    ensure_contains("page title", &title, page.expected_title())
}
