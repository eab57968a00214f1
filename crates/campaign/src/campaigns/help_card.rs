//! Catalog > Attributes & Features 도움말 카드 캠페인

use boprobe_core::config::BackOfficeConfig;
use boprobe_core::driver::{AdminPage, BackOffice};

use super::{Campaign, go_to, login};
use crate::context::CampaignRun;
use crate::error::{CampaignError, ensure_contains, ensure_eq};
use crate::report::CampaignReport;

/// 기본 컨텍스트
pub const BASE_CONTEXT: &str =
    "functional_BO_catalog_attributesAndFeatures_attributes_attributes_helpCard";

/// 캠페인을 실행합니다.
pub async fn run<B: BackOffice>(backoffice: &B, bo_config: &BackOfficeConfig) -> CampaignReport {
    let mut run = CampaignRun::new(Campaign::HelpCard);

    run.step("loginBO", login(backoffice, bo_config)).await;
    run.step(
        "goToAttributesPage",
        go_to(backoffice, AdminPage::Attributes, true),
    )
    .await;
    run.step("openHelpSidebar", async {
        let visible = backoffice.open_help_sidebar().await?;
        ensure_eq("help sidebar visible", visible, true)
    })
    .await;
    run.step(
        "checkDocumentLanguage",
        check_document_language(backoffice, &bo_config.language),
    )
    .await;
    run.step("closeHelpSidebar", async {
        let closed = backoffice.close_help_sidebar().await?;
        ensure_eq("help sidebar closed", closed, true)
    })
    .await;

    run.finish()
}

async fn check_document_language<B: BackOffice>(
    backoffice: &B,
    language: &str,
) -> Result<(), CampaignError> {
    let url = backoffice.help_document_url().await?;
    ensure_contains("help document url", &url, &format!("country={language}"))
}
