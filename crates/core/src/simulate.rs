//! 시뮬레이션 관리자 화면 - 브라우저 없이 캠페인과 검증기를 실행하기 위한 인메모리 구현
//!
//! [`SimulatedGrid`]는 컬럼/행/페이지 크기/정렬 상태를 가진 그리드이고,
//! [`SimulatedBackOffice`]는 Stocks/Movements 그리드와 테마, 도움말 사이드바 상태를 묶습니다.
//!
//! 캠페인이 관찰하는 상태만 모델링합니다. 상품/재고 도메인 규칙은 재현하지 않습니다.
//! Stocks 그리드의 일괄 수량 수정은 Movements 그리드에 이동 내역 행을 추가하므로,
//! 실제 화면처럼 수정이 누적되면 Movements 테이블이 여러 페이지로 늘어납니다.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::driver::{
    AdminPage, BackOffice, GridKind, STOCK_UPDATE_SUCCESS, TableDriver, THEME_UPDATE_SUCCESS,
};
use crate::error::{BoprobeError, ConfigError, DriverError, VerificationError};
use crate::sort::parse_leading_int;
use crate::types::{SortDirection, ValueKind};

/// 그리드 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 컬럼 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// 컬럼 키
    pub key: String,
    /// 정렬 시 값 비교 방식
    #[serde(default)]
    pub kind: ValueKind,
}

/// JSON 픽스처의 그리드 섹션
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFixture {
    /// 컬럼 정의
    pub columns: Vec<ColumnDef>,
    /// 초기 표시 순서의 행
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    /// 페이지 크기
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// 페이지를 새로 열 때 적용되는 기본 정렬
    #[serde(default)]
    pub default_sort: Option<(String, SortDirection)>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// JSON 픽스처 전체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackOfficeFixture {
    /// Stocks 그리드
    pub stocks: GridFixture,
    /// Movements 그리드
    pub movements: GridFixture,
    /// 설치된 테마
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,
    /// 활성 테마
    #[serde(default = "default_active_theme")]
    pub active_theme: String,
    /// 도움말 문서 언어
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_themes() -> Vec<String> {
    vec!["classic".to_owned(), "hummingbird".to_owned()]
}

fn default_active_theme() -> String {
    "classic".to_owned()
}

fn default_language() -> String {
    "en".to_owned()
}

impl BackOfficeFixture {
    /// JSON 파일에서 픽스처를 로드합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BoprobeError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoprobeError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                BoprobeError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// JSON 문자열에서 픽스처를 파싱하고 행 길이와 활성 테마를 검증합니다.
    pub fn parse(json: &str) -> Result<Self, BoprobeError> {
        let fixture: Self = serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        fixture.stocks.validate("stocks")?;
        fixture.movements.validate("movements")?;
        if !fixture.themes.contains(&fixture.active_theme) {
            return Err(ConfigError::InvalidValue {
                field: "active_theme".to_owned(),
                reason: format!(
                    "'{}' is not one of the installed themes: {}",
                    fixture.active_theme,
                    fixture.themes.join(", ")
                ),
            }
            .into());
        }
        Ok(fixture)
    }
}

impl GridFixture {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: format!("{name}.page_size"),
                reason: "page size must be greater than 0".to_owned(),
            });
        }
        if let Some(pos) = self.rows.iter().position(|r| r.len() != self.columns.len()) {
            return Err(ConfigError::InvalidValue {
                field: format!("{name}.rows[{pos}]"),
                reason: format!(
                    "row has {} cells, expected {}",
                    self.rows[pos].len(),
                    self.columns.len()
                ),
            });
        }
        Ok(())
    }
}

// ─── SimulatedGrid ──────────────────────────────────────────────────

#[derive(Debug)]
struct GridState {
    columns: Vec<ColumnDef>,
    rows: Vec<Vec<String>>,
    filter: Option<String>,
    page_size: usize,
    page: u32,
    default_sort: Option<(String, SortDirection)>,
    sort_enabled: bool,
    movement_log: Option<SimulatedGrid>,
    movements_recorded: u32,
}

impl GridState {
    fn column_index(&self, column: &str) -> Result<usize, VerificationError> {
        self.columns
            .iter()
            .position(|c| c.key == column)
            .ok_or_else(|| VerificationError::ColumnNotFound {
                column: column.to_owned(),
            })
    }

    /// 필터를 통과한 행의 `rows` 인덱스 (표시 순서)
    fn visible_indices(&self) -> Vec<usize> {
        match &self.filter {
            None => (0..self.rows.len()).collect(),
            Some(query) => {
                let query = query.to_lowercase();
                self.rows
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| row.iter().any(|cell| cell.to_lowercase().contains(&query)))
                    .map(|(i, _)| i)
                    .collect()
            }
        }
    }

    fn visible(&self) -> Vec<&Vec<String>> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    fn total_pages(&self) -> u32 {
        let visible = self.visible().len();
        let pages = visible.div_ceil(self.page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    fn page_range(&self) -> std::ops::Range<usize> {
        let visible = self.visible().len();
        let start = (self.page as usize - 1).saturating_mul(self.page_size).min(visible);
        let end = start.saturating_add(self.page_size).min(visible);
        start..end
    }

    fn apply_sort(&mut self, index: usize, direction: SortDirection) {
        let kind = self.columns[index].kind;
        match kind {
            ValueKind::String => self.rows.sort_by(|a, b| a[index].cmp(&b[index])),
            ValueKind::Numeric => self.rows.sort_by_cached_key(|row| {
                parse_leading_int(&row[index]).map_or((true, 0), |n| (false, n))
            }),
        }
        if direction == SortDirection::Desc {
            self.rows.reverse();
        }
    }

    fn reset_view(&mut self) {
        self.filter = None;
        self.page = 1;
        if let Some((column, direction)) = self.default_sort.clone() {
            if let Ok(index) = self.column_index(&column) {
                self.apply_sort(index, direction);
            }
        }
    }
}

/// 인메모리 그리드
///
/// 복제본은 같은 상태를 공유합니다.
#[derive(Debug, Clone)]
pub struct SimulatedGrid {
    state: Arc<Mutex<GridState>>,
}

impl SimulatedGrid {
    /// 컬럼 키로 빌더를 시작합니다. 모든 컬럼은 문자열 컬럼으로 시작합니다.
    pub fn builder<I, S>(columns: I) -> SimulatedGridBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SimulatedGridBuilder {
            fixture: GridFixture {
                columns: columns
                    .into_iter()
                    .map(|key| ColumnDef {
                        key: key.into(),
                        kind: ValueKind::String,
                    })
                    .collect(),
                rows: Vec::new(),
                page_size: DEFAULT_PAGE_SIZE,
                default_sort: None,
            },
            sort_enabled: true,
        }
    }

    /// 픽스처로 그리드를 생성합니다.
    pub fn from_fixture(fixture: GridFixture) -> Self {
        Self::with_options(fixture, true)
    }

    fn with_options(fixture: GridFixture, sort_enabled: bool) -> Self {
        let mut state = GridState {
            columns: fixture.columns,
            rows: fixture.rows,
            filter: None,
            page_size: fixture.page_size.max(1),
            page: 1,
            default_sort: fixture.default_sort,
            sort_enabled,
            movement_log: None,
            movements_recorded: 0,
        };
        state.reset_view();
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// 일괄 수정 시 이동 내역을 기록할 그리드를 연결합니다.
    pub async fn record_movements_into(&self, movements: &SimulatedGrid) {
        self.state.lock().await.movement_log = Some(movements.clone());
    }

    /// 필터와 무관한 전체 행 수
    pub async fn row_count(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    /// 현재 필터 기준 총 페이지 수
    pub async fn total_pages(&self) -> u32 {
        self.state.lock().await.total_pages()
    }

    /// 페이지를 새로 연 상태(필터 해제, 1페이지, 기본 정렬)로 되돌립니다.
    pub async fn reset_view(&self) {
        self.state.lock().await.reset_view();
    }

    /// 모든 셀에 대해 대소문자 무시 부분 일치 필터를 적용하고 1페이지로 이동합니다.
    pub async fn apply_filter(&self, query: &str) {
        let mut state = self.state.lock().await;
        state.filter = Some(query.to_owned());
        state.page = 1;
    }

    async fn append_movement(&self, source_columns: &[ColumnDef], source: &[String], quantity: i64) {
        let mut state = self.state.lock().await;
        state.movements_recorded += 1;
        let seq = state.movements_recorded;
        let row: Vec<String> = state
            .columns
            .iter()
            .map(|column| {
                if let Some(pos) = source_columns.iter().position(|c| c.key == column.key) {
                    return source[pos].clone();
                }
                match column.key.as_str() {
                    "date_add" => format!(
                        "2099-01-01 {:02}:{:02}:{:02}",
                        seq / 3600 % 24,
                        seq / 60 % 60,
                        seq % 60
                    ),
                    "quantity" => format!("{quantity:+}"),
                    _ => String::new(),
                }
            })
            .collect();
        state.rows.insert(0, row);
    }
}

impl TableDriver for SimulatedGrid {
    async fn get_all_rows_column_content(&self, column: &str) -> Result<Vec<String>, BoprobeError> {
        let state = self.state.lock().await;
        let index = state.column_index(column)?;
        let range = state.page_range();
        Ok(state.visible()[range]
            .iter()
            .map(|row| row[index].clone())
            .collect())
    }

    async fn sort_table(&self, column: &str, direction: SortDirection) -> Result<(), BoprobeError> {
        let mut state = self.state.lock().await;
        let index = state.column_index(column)?;
        if state.sort_enabled {
            state.apply_sort(index, direction);
        }
        state.page = 1;
        debug!(column, %direction, "simulated grid sorted");
        Ok(())
    }

    async fn paginate_to(&self, page: u32) -> Result<u32, BoprobeError> {
        let mut state = self.state.lock().await;
        let shown = page.clamp(1, state.total_pages());
        state.page = shown;
        Ok(shown)
    }

    async fn bulk_edit_quantity_with_input(&self, quantity: i64) -> Result<String, BoprobeError> {
        let (columns, edited, log) = {
            let mut state = self.state.lock().await;
            let range = state.page_range();
            if range.is_empty() {
                return Err(DriverError::ElementNotFound {
                    selector: "bulk edit checkbox (no rows on page)".to_owned(),
                }
                .into());
            }
            let physical = state.column_index("physical").ok();
            // 현재 페이지의 행만 위치로 고릅니다. 내용이 같은 다른 페이지의 행은 건드리지 않습니다.
            let on_page: Vec<usize> = state.visible_indices()[range].to_vec();
            let visible: Vec<Vec<String>> =
                on_page.iter().map(|&i| state.rows[i].clone()).collect();
            if let Some(index) = physical {
                for &i in &on_page {
                    let cell = &mut state.rows[i][index];
                    let current = parse_leading_int(cell).unwrap_or(0);
                    *cell = current.saturating_add(quantity).to_string();
                }
            }
            (state.columns.clone(), visible, state.movement_log.clone())
        };

        if let Some(log) = log {
            for row in &edited {
                log.append_movement(&columns, row, quantity).await;
            }
        }
        debug!(rows = edited.len(), quantity, "simulated bulk edit applied");
        Ok(STOCK_UPDATE_SUCCESS.to_owned())
    }
}

/// [`SimulatedGrid`] 빌더
pub struct SimulatedGridBuilder {
    fixture: GridFixture,
    sort_enabled: bool,
}

impl SimulatedGridBuilder {
    /// 행을 추가합니다.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixture
            .rows
            .push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// 컬럼을 숫자 컬럼으로 지정합니다.
    pub fn numeric(mut self, column: &str) -> Self {
        if let Some(def) = self.fixture.columns.iter_mut().find(|c| c.key == column) {
            def.kind = ValueKind::Numeric;
        }
        self
    }

    /// 페이지 크기
    pub fn page_size(mut self, size: usize) -> Self {
        self.fixture.page_size = size;
        self
    }

    /// 페이지를 열 때 적용되는 기본 정렬
    pub fn default_sort(mut self, column: &str, direction: SortDirection) -> Self {
        self.fixture.default_sort = Some((column.to_owned(), direction));
        self
    }

    /// 헤더 클릭이 정렬을 바꾸지 않는 고장난 그리드를 만듭니다 (실패 주입용).
    pub fn broken_sort(mut self) -> Self {
        self.sort_enabled = false;
        self
    }

    /// 그리드를 생성합니다.
    pub fn build(self) -> SimulatedGrid {
        SimulatedGrid::with_options(self.fixture, self.sort_enabled)
    }
}

// ─── SimulatedBackOffice ────────────────────────────────────────────

#[derive(Debug)]
struct SessionState {
    logged_in: bool,
    page: Option<AdminPage>,
    sf_toolbar_open: bool,
    help_open: bool,
    themes: Vec<String>,
    active_theme: String,
}

/// 인메모리 관리자 화면
pub struct SimulatedBackOffice {
    stocks: SimulatedGrid,
    movements: SimulatedGrid,
    session: Mutex<SessionState>,
    credentials: Option<(String, String)>,
    language: String,
}

impl SimulatedBackOffice {
    /// 두 그리드로 관리자 화면을 구성합니다. Stocks의 일괄 수정은 Movements에 기록됩니다.
    pub async fn new(stocks: SimulatedGrid, movements: SimulatedGrid) -> Self {
        stocks.record_movements_into(&movements).await;
        Self {
            stocks,
            movements,
            session: Mutex::new(SessionState {
                logged_in: false,
                page: None,
                sf_toolbar_open: false,
                help_open: false,
                themes: default_themes(),
                active_theme: default_active_theme(),
            }),
            credentials: None,
            language: default_language(),
        }
    }

    /// 픽스처로 관리자 화면을 구성합니다.
    pub async fn from_fixture(fixture: BackOfficeFixture) -> Self {
        let mut office = Self::new(
            SimulatedGrid::from_fixture(fixture.stocks),
            SimulatedGrid::from_fixture(fixture.movements),
        )
        .await;
        {
            let session = office.session.get_mut();
            session.themes = fixture.themes;
            session.active_theme = fixture.active_theme;
        }
        office.language = fixture.language;
        office
    }

    /// 데모 카탈로그 (19개 상품, 페이지 크기 10) 로 구성합니다.
    pub async fn demo() -> Self {
        Self::from_fixture(demo_fixture()).await
    }

    /// 로그인에 허용할 계정을 지정합니다. 지정하지 않으면 비어 있지 않은 모든 계정을 허용합니다.
    pub fn with_credentials(mut self, email: &str, password: &str) -> Self {
        self.credentials = Some((email.to_owned(), password.to_owned()));
        self
    }

    /// 도움말 문서 URL의 `country` 언어를 지정합니다.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_owned();
        self
    }

    /// 현재 활성 테마
    pub async fn active_theme(&self) -> String {
        self.session.lock().await.active_theme.clone()
    }

    /// 현재 페이지
    pub async fn current_page(&self) -> Option<AdminPage> {
        self.session.lock().await.page
    }

    async fn require_page(&self, expected: &[AdminPage]) -> Result<(), BoprobeError> {
        let session = self.session.lock().await;
        if !session.logged_in {
            return Err(DriverError::Session("not logged in".to_owned()).into());
        }
        match session.page {
            Some(page) if expected.contains(&page) => Ok(()),
            other => Err(DriverError::Unsupported(format!(
                "action requires {:?}, current page is {:?}",
                expected, other
            ))
            .into()),
        }
    }
}

fn page_title(page: AdminPage) -> String {
    format!("{} • PrestaShop", page.expected_title())
}

impl BackOffice for SimulatedBackOffice {
    type Grid = SimulatedGrid;

    async fn login(&self, email: &str, password: &str) -> Result<String, BoprobeError> {
        let accepted = match &self.credentials {
            Some((e, p)) => e == email && p == password,
            None => !email.is_empty() && !password.is_empty(),
        };
        if !accepted {
            return Err(DriverError::Session("authentication failed".to_owned()).into());
        }
        let mut session = self.session.lock().await;
        session.logged_in = true;
        session.page = Some(AdminPage::Dashboard);
        session.sf_toolbar_open = true;
        Ok(page_title(AdminPage::Dashboard))
    }

    async fn go_to_page(&self, page: AdminPage) -> Result<String, BoprobeError> {
        {
            let mut session = self.session.lock().await;
            if !session.logged_in {
                return Err(DriverError::Session("not logged in".to_owned()).into());
            }
            session.page = Some(page);
            session.sf_toolbar_open = true;
            session.help_open = false;
        }
        match page {
            AdminPage::Stocks => self.stocks.reset_view().await,
            AdminPage::Movements => self.movements.reset_view().await,
            _ => {}
        }
        Ok(page_title(page))
    }

    async fn close_sf_toolbar(&self) -> Result<(), BoprobeError> {
        self.session.lock().await.sf_toolbar_open = false;
        Ok(())
    }

    fn grid(&self, kind: GridKind) -> &SimulatedGrid {
        match kind {
            GridKind::Stocks => &self.stocks,
            GridKind::Movements => &self.movements,
        }
    }

    async fn filter_stocks(&self, query: &str) -> Result<(), BoprobeError> {
        self.require_page(&[AdminPage::Stocks]).await?;
        self.stocks.apply_filter(query).await;
        Ok(())
    }

    async fn number_of_themes(&self) -> Result<usize, BoprobeError> {
        self.require_page(&[AdminPage::ThemeAndLogo]).await?;
        Ok(self.session.lock().await.themes.len())
    }

    async fn enable_theme(&self, theme: &str) -> Result<String, BoprobeError> {
        self.require_page(&[AdminPage::ThemeAndLogo]).await?;
        let mut session = self.session.lock().await;
        if !session.themes.iter().any(|t| t == theme) || session.active_theme == theme {
            return Err(DriverError::ElementNotFound {
                selector: format!("use theme button for '{theme}'"),
            }
            .into());
        }
        session.active_theme = theme.to_owned();
        Ok(THEME_UPDATE_SUCCESS.to_owned())
    }

    async fn open_help_sidebar(&self) -> Result<bool, BoprobeError> {
        self.require_page(&[AdminPage::Attributes, AdminPage::Stocks, AdminPage::ThemeAndLogo])
            .await?;
        let mut session = self.session.lock().await;
        session.help_open = true;
        Ok(session.help_open)
    }

    async fn help_document_url(&self) -> Result<String, BoprobeError> {
        let session = self.session.lock().await;
        if !session.help_open {
            return Err(DriverError::ElementNotFound {
                selector: "help sidebar iframe".to_owned(),
            }
            .into());
        }
        let controller = match session.page {
            Some(AdminPage::Stocks) => "AdminStockManagement",
            Some(AdminPage::ThemeAndLogo) => "AdminThemes",
            _ => "AdminAttributesGroups",
        };
        Ok(format!(
            "https://help.prestashop-project.org/{lang}/doc/{controller}?version=9.0.0&country={lang}",
            lang = self.language
        ))
    }

    async fn close_help_sidebar(&self) -> Result<bool, BoprobeError> {
        let mut session = self.session.lock().await;
        session.help_open = false;
        Ok(!session.help_open)
    }
}

const DEMO_PRODUCTS: [&str; 19] = [
    "Hummingbird printed t-shirt",
    "Hummingbird printed sweater",
    "The best is yet to come' Framed poster",
    "The adventure begins Framed poster",
    "Today is a good day Framed poster",
    "Mug The best is yet to come",
    "Mug The adventure begins",
    "Mug Today is a good day",
    "Mountain fox cushion",
    "Brown bear cushion",
    "Hummingbird cushion",
    "Mountain fox - Vector graphics",
    "Brown bear - Vector graphics",
    "Hummingbird - Vector graphics",
    "Pack Mug + Framed poster",
    "Mountain fox notebook",
    "Brown bear notebook",
    "Hummingbird notebook",
    "Customizable mug",
];

/// 데모 카탈로그 픽스처
pub fn demo_fixture() -> BackOfficeFixture {
    let stock_rows = DEMO_PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = i + 1;
            vec![
                id.to_string(),
                (*name).to_owned(),
                format!("demo_{id}"),
                (300 + id * 7 % 50).to_string(),
            ]
        })
        .collect();

    let movement_rows = vec![
        vec!["2024-03-05 10:12:01", "6", "Mug The best is yet to come", "demo_6", "+12"],
        vec!["2024-03-04 16:40:22", "2", "Hummingbird printed sweater", "demo_2", "-3"],
        vec!["2024-03-04 09:05:13", "11", "Hummingbird cushion", "demo_11", "+25"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(str::to_owned).collect())
    .collect();

    BackOfficeFixture {
        stocks: GridFixture {
            columns: vec![
                ColumnDef { key: "product_id".to_owned(), kind: ValueKind::Numeric },
                ColumnDef { key: "product_name".to_owned(), kind: ValueKind::String },
                ColumnDef { key: "reference".to_owned(), kind: ValueKind::String },
                ColumnDef { key: "physical".to_owned(), kind: ValueKind::Numeric },
            ],
            rows: stock_rows,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: Some(("product_id".to_owned(), SortDirection::Asc)),
        },
        movements: GridFixture {
            columns: vec![
                ColumnDef { key: "date_add".to_owned(), kind: ValueKind::String },
                ColumnDef { key: "product_id".to_owned(), kind: ValueKind::Numeric },
                ColumnDef { key: "product_name".to_owned(), kind: ValueKind::String },
                ColumnDef { key: "reference".to_owned(), kind: ValueKind::String },
                ColumnDef { key: "quantity".to_owned(), kind: ValueKind::Numeric },
            ],
            rows: movement_rows,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: Some(("date_add".to_owned(), SortDirection::Desc)),
        },
        themes: default_themes(),
        active_theme: default_active_theme(),
        language: default_language(),
    }
}
