//! Catalog > Stocks > Movements 정렬과 페이지네이션 캠페인
//!
//! 1. 로그인 후 Stocks로 이동해 상품 하나의 수량을 일괄 수정합니다 (이동 내역 생성).
//! 2. Movements에서 여덟 가지 정렬을 검증합니다.
//! 3. Stocks의 두 페이지를 일괄 수정해 이동 내역을 한 페이지 이상으로 늘립니다.
//! 4. Movements에서 2페이지로 이동한 뒤 1페이지로 돌아옵니다.

use boprobe_core::config::{BackOfficeConfig, CampaignConfig};
use boprobe_core::driver::{AdminPage, BackOffice, GridKind, STOCK_UPDATE_SUCCESS, TableDriver};
use boprobe_core::table::TableVerifier;
use boprobe_core::types::{SortDirection, SortSpec, ValueKind};

use super::{Campaign, go_to, login};
use crate::context::CampaignRun;
use crate::error::{CampaignError, ensure_contains, ensure_eq};
use crate::report::CampaignReport;

/// 기본 컨텍스트
pub const BASE_CONTEXT: &str = "functional_BO_catalog_stocks_movements_sortAndPagination";

/// Movements 그리드 정렬 케이스 하나
#[derive(Debug, Clone, Copy)]
pub struct SortCase {
    /// 단계 식별자
    pub test_identifier: &'static str,
    /// 컬럼 키
    pub column: &'static str,
    /// 정렬 방향
    pub direction: SortDirection,
    /// 값 비교 방식
    pub value_kind: ValueKind,
}

impl SortCase {
    const fn new(
        test_identifier: &'static str,
        column: &'static str,
        direction: SortDirection,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            test_identifier,
            column,
            direction,
            value_kind,
        }
    }

    /// 검증기에 넘길 정렬 명세
    pub fn spec(&self) -> SortSpec {
        SortSpec {
            column: self.column.to_owned(),
            direction: self.direction,
            value_kind: self.value_kind,
        }
    }
}

/// 검증 순서대로의 정렬 케이스
pub const SORT_CASES: [SortCase; 8] = [
    SortCase::new("sortByDateDesc", "date_add", SortDirection::Desc, ValueKind::String),
    SortCase::new("sortByDateAsc", "date_add", SortDirection::Asc, ValueKind::String),
    SortCase::new("sortByProductIDAsc", "product_id", SortDirection::Asc, ValueKind::Numeric),
    SortCase::new("sortByProductIDDesc", "product_id", SortDirection::Desc, ValueKind::Numeric),
    SortCase::new("sortByProductNameAsc", "product_name", SortDirection::Asc, ValueKind::String),
    SortCase::new("sortByProductNameDesc", "product_name", SortDirection::Desc, ValueKind::String),
    SortCase::new("sortByReferenceAsc", "reference", SortDirection::Asc, ValueKind::String),
    SortCase::new("sortByReferenceDesc", "reference", SortDirection::Desc, ValueKind::String),
];

/// 캠페인을 실행합니다.
pub async fn run<B: BackOffice>(
    backoffice: &B,
    bo_config: &BackOfficeConfig,
    config: &CampaignConfig,
) -> CampaignReport {
    let mut run = CampaignRun::new(Campaign::SortAndPagination);

    run.step("loginBO", login(backoffice, bo_config)).await;
    run.step("goToStocksPage", go_to(backoffice, AdminPage::Stocks, true))
        .await;
    run.step(
        "bulkEditQuantity",
        filter_and_bulk_edit(backoffice, &config.product_filter, config.bulk_quantity),
    )
    .await;
    run.step(
        "goToMovementsPage",
        go_to(backoffice, AdminPage::Movements, false),
    )
    .await;

    for case in SORT_CASES {
        run.step(case.test_identifier, check_sort(backoffice, case))
            .await;
    }

    run.step("goToStocksPage2", go_to(backoffice, AdminPage::Stocks, false))
        .await;
    run.step(
        "bulkEditQuantityFirstPage",
        bulk_edit(backoffice, config.bulk_quantity),
    )
    .await;
    run.step(
        "goToSecondPage",
        paginate_and_bulk_edit(backoffice, 2, config.bulk_quantity),
    )
    .await;
    run.step(
        "goToMovementsPage2",
        go_to(backoffice, AdminPage::Movements, false),
    )
    .await;
    run.step("goToNextPage", paginate(backoffice, GridKind::Movements, 2))
        .await;
    run.step(
        "goBackToFirstPage",
        paginate(backoffice, GridKind::Movements, 1),
    )
    .await;

    run.finish()
}

async fn bulk_edit<B: BackOffice>(backoffice: &B, quantity: i64) -> Result<(), CampaignError> {
    let message = backoffice
        .grid(GridKind::Stocks)
        .bulk_edit_quantity_with_input(quantity)
        .await?;
    ensure_contains("bulk edit message", &message, STOCK_UPDATE_SUCCESS)
}

async fn filter_and_bulk_edit<B: BackOffice>(
    backoffice: &B,
    product: &str,
    quantity: i64,
) -> Result<(), CampaignError> {
    backoffice.filter_stocks(product).await?;
    bulk_edit(backoffice, quantity).await
}

async fn paginate<B: BackOffice>(
    backoffice: &B,
    kind: GridKind,
    page: u32,
) -> Result<(), CampaignError> {
    let shown = TableVerifier::new(backoffice.grid(kind))
        .paginate_to(page)
        .await?;
    ensure_eq("current page", shown, page)
}

async fn paginate_and_bulk_edit<B: BackOffice>(
    backoffice: &B,
    page: u32,
    quantity: i64,
) -> Result<(), CampaignError> {
    paginate(backoffice, GridKind::Stocks, page).await?;
    bulk_edit(backoffice, quantity).await
}

async fn check_sort<B: BackOffice>(backoffice: &B, case: SortCase) -> Result<(), CampaignError> {
    TableVerifier::new(backoffice.grid(GridKind::Movements))
        .check_sort(&case.spec())
        .await?;
    Ok(())
}
