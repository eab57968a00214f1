//! boprobe 공통 크레이트
//!
//! 관리자 화면 그리드의 정렬/페이지네이션 검증 로직과, 검증 로직이 UI에 접근하는
//! 드라이버 trait을 정의합니다. 브라우저 구현은 `boprobe-webdriver`,
//! 시나리오 스크립트는 `boprobe-campaign`에 있습니다.

pub mod config;
pub mod driver;
pub mod error;
pub mod finder;
pub mod metrics;
pub mod simulate;
pub mod sort;
pub mod table;
pub mod types;

// --- 주요 타입 re-export ---

// 에러
pub use error::{BoprobeError, ConfigError, DriverError, VerificationError};

// 설정
pub use config::BoprobeConfig;

// 드라이버 trait
pub use driver::{AdminPage, BackOffice, GridKind, TableDriver};

// 검증
pub use sort::{apply_sort_direction, check_order, compute_expected_order, verify};
pub use table::{SortCheck, TableVerifier};

// 도메인 타입
pub use types::{ColumnSnapshot, PageCursor, SortDirection, SortSpec, ValueKind};
