//! Design > Theme & Logo 테마 전환 캠페인
//!
//! 같은 단계 구성으로 Hummingbird를 켜거나 Classic으로 되돌립니다.

use boprobe_core::config::{BackOfficeConfig, CampaignConfig};
use boprobe_core::driver::{AdminPage, BackOffice, THEME_UPDATE_SUCCESS};

use super::{Campaign, go_to, login};
use crate::context::CampaignRun;
use crate::error::{CampaignError, ensure_eq};
use crate::report::CampaignReport;

/// Hummingbird 활성화 기본 컨텍스트
pub const ENABLE_BASE_CONTEXT: &str = "commonTests-enableHummingbird";

/// Classic 복귀 기본 컨텍스트
pub const DISABLE_BASE_CONTEXT: &str = "commonTests-disableHummingbird";

/// Hummingbird 테마 이름
pub const HUMMINGBIRD: &str = "hummingbird";

/// Classic 테마 이름
pub const CLASSIC: &str = "classic";

/// 테마 활성화 단계 식별자 (`enableThemeHummingbird`, `enableThemeClassic`)
pub fn enable_step_identifier(theme: &str) -> String {
    let mut chars = theme.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("enableTheme{capitalized}")
}

/// 캠페인을 실행합니다.
pub async fn run<B: BackOffice>(
    campaign: Campaign,
    theme: &str,
    backoffice: &B,
    bo_config: &BackOfficeConfig,
    config: &CampaignConfig,
) -> CampaignReport {
    let mut run = CampaignRun::new(campaign);

    run.step("loginBO", login(backoffice, bo_config)).await;
    run.step(
        "goToThemeAndLogoPage",
        go_to_theme_page(backoffice, config.expected_theme_count),
    )
    .await;
    run.step(&enable_step_identifier(theme), enable(backoffice, theme))
        .await;

    run.finish()
}

async fn go_to_theme_page<B: BackOffice>(
    backoffice: &B,
    expected_themes: usize,
) -> Result<(), CampaignError> {
    go_to(backoffice, AdminPage::ThemeAndLogo, true).await?;
    let themes = backoffice.number_of_themes().await?;
    ensure_eq("number of themes", themes, expected_themes)
}

async fn enable<B: BackOffice>(backoffice: &B, theme: &str) -> Result<(), CampaignError> {
    let message = backoffice.enable_theme(theme).await?;
    ensure_eq("theme update message", message.as_str(), THEME_UPDATE_SUCCESS)
}
