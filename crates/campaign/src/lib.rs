//! boprobe 캠페인 크레이트
//!
//! 관리자 화면 검증 시나리오를 [`BackOffice`](boprobe_core::driver::BackOffice) 위에서 실행합니다.
//! 같은 캠페인이 실제 브라우저(`boprobe-webdriver`)와 시뮬레이터
//! ([`SimulatedBackOffice`](boprobe_core::simulate::SimulatedBackOffice)) 양쪽에서 동작합니다.
//!
//! # 사용 예시
//!
//! ```ignore
//! use boprobe_campaign::{Campaign, run};
//! use boprobe_core::simulate::SimulatedBackOffice;
//!
//! let backoffice = SimulatedBackOffice::demo().await;
//! let report = run(Campaign::SortAndPagination, &backoffice, &config).await;
//! assert!(report.passed());
//! ```

pub mod campaigns;
pub mod context;
pub mod error;
pub mod report;

pub use campaigns::{Campaign, run};
pub use context::CampaignRun;
pub use error::CampaignError;
pub use report::{CampaignReport, StepFailure, StepReport, StepStatus};
