//! UI 드라이버 trait - 관리자 화면 조작의 확장 포인트
//!
//! 검증 로직은 렌더링된 관리자 화면을 직접 알지 못하고 이 trait들을 통해서만 접근합니다.
//! 실제 브라우저는 `boprobe-webdriver`가, 테스트와 드라이런은 [`crate::simulate`]가 구현합니다.
//!
//! 모든 메서드는 UI 동작의 완료(네트워크/렌더링 안정화 포함)를 기다린 뒤 반환해야 합니다.
//! 호출자는 이전 동작이 끝나기 전에 다음 동작을 시작하지 않습니다.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::BoprobeError;
use crate::types::SortDirection;

/// 재고 일괄 수정 성공 시 표시되는 알림 메시지
pub const STOCK_UPDATE_SUCCESS: &str = "Stock successfully updated";

/// 테마 활성화 성공 시 표시되는 알림 메시지
pub const THEME_UPDATE_SUCCESS: &str = "Successful update";

/// 렌더링된 그리드 하나를 조작하는 trait
pub trait TableDriver: Send + Sync {
    /// 현재 표시된 모든 행의 해당 컬럼 값을 표시 순서대로 읽습니다.
    ///
    /// 컬럼이 없으면 `VerificationError::ColumnNotFound`를 반환합니다.
    fn get_all_rows_column_content(
        &self,
        column: &str,
    ) -> impl Future<Output = Result<Vec<String>, BoprobeError>> + Send;

    /// 컬럼 헤더를 조작하여 지정한 방향으로 정렬합니다.
    fn sort_table(
        &self,
        column: &str,
        direction: SortDirection,
    ) -> impl Future<Output = Result<(), BoprobeError>> + Send;

    /// 지정한 페이지로 이동하고, 이동 후 표시된 페이지 번호를 반환합니다.
    fn paginate_to(&self, page: u32) -> impl Future<Output = Result<u32, BoprobeError>> + Send;

    /// 현재 페이지의 모든 행을 선택하여 수량을 일괄 수정하고 결과 메시지를 반환합니다.
    fn bulk_edit_quantity_with_input(
        &self,
        quantity: i64,
    ) -> impl Future<Output = Result<String, BoprobeError>> + Send;
}

/// 관리자 화면의 그리드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    /// Catalog > Stocks 재고 목록
    Stocks,
    /// Catalog > Stocks > Movements 재고 이동 내역
    Movements,
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stocks => write!(f, "stocks"),
            Self::Movements => write!(f, "movements"),
        }
    }
}

/// 캠페인이 이동하는 관리자 페이지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPage {
    /// 대시보드 (로그인 직후)
    Dashboard,
    /// Catalog > Stocks
    Stocks,
    /// Stocks 페이지의 Movements 하위 탭
    Movements,
    /// Design > Theme & Logo
    ThemeAndLogo,
    /// Catalog > Attributes & Features
    Attributes,
}

impl AdminPage {
    /// 페이지 제목에 포함되어야 하는 문자열
    pub fn expected_title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Stocks | Self::Movements => "Stock",
            Self::ThemeAndLogo => "Theme & Logo",
            Self::Attributes => "Attributes",
        }
    }

    /// 메뉴 경로 표기 (로그용)
    pub fn menu_path(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Stocks => "Catalog > Stocks",
            Self::Movements => "Catalog > Stocks > Movements",
            Self::ThemeAndLogo => "Design > Theme & Logo",
            Self::Attributes => "Catalog > Attributes & Features",
        }
    }
}

impl fmt::Display for AdminPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_path())
    }
}

/// 브라우저 세션 하나에 해당하는 관리자 화면 trait
///
/// 전역 페이지 객체 대신 시나리오에 명시적으로 전달됩니다.
/// 한 시나리오가 독점적으로 소유하며 다른 시나리오와 상태를 공유하지 않습니다.
pub trait BackOffice: Send + Sync {
    /// 그리드 드라이버 타입
    type Grid: TableDriver;

    /// 로그인하고 이동한 페이지의 제목을 반환합니다.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, BoprobeError>> + Send;

    /// 메뉴를 통해 페이지로 이동하고 페이지 제목을 반환합니다.
    fn go_to_page(
        &self,
        page: AdminPage,
    ) -> impl Future<Output = Result<String, BoprobeError>> + Send;

    /// Symfony 디버그 툴바가 열려 있으면 닫습니다.
    fn close_sf_toolbar(&self) -> impl Future<Output = Result<(), BoprobeError>> + Send;

    /// 그리드 드라이버를 반환합니다.
    fn grid(&self, kind: GridKind) -> &Self::Grid;

    /// Stocks 페이지의 간단 검색 필터를 적용합니다.
    fn filter_stocks(&self, query: &str)
    -> impl Future<Output = Result<(), BoprobeError>> + Send;

    /// 설치된 테마 수
    fn number_of_themes(&self) -> impl Future<Output = Result<usize, BoprobeError>> + Send;

    /// 테마를 활성화하고 결과 메시지를 반환합니다.
    fn enable_theme(
        &self,
        theme: &str,
    ) -> impl Future<Output = Result<String, BoprobeError>> + Send;

    /// 도움말 사이드바를 열고 표시 여부를 반환합니다.
    fn open_help_sidebar(&self) -> impl Future<Output = Result<bool, BoprobeError>> + Send;

    /// 도움말 사이드바에 로드된 문서 URL
    fn help_document_url(&self) -> impl Future<Output = Result<String, BoprobeError>> + Send;

    /// 도움말 사이드바를 닫고 닫힘 여부를 반환합니다.
    fn close_help_sidebar(&self) -> impl Future<Output = Result<bool, BoprobeError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stocks_and_movements_share_title() {
        assert_eq!(
            AdminPage::Stocks.expected_title(),
            AdminPage::Movements.expected_title()
        );
    }

    #[test]
    fn admin_page_display_is_menu_path() {
        assert_eq!(
            AdminPage::ThemeAndLogo.to_string(),
            "Design > Theme & Logo"
        );
    }

    #[test]
    fn grid_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GridKind::Movements).unwrap(),
            "\"movements\""
        );
    }
}
