//! 테이블 검증기 - 드라이버를 통해 스냅샷을 읽고 정렬/페이지네이션 결과를 확인
//!
//! [`TableVerifier`]는 [`TableDriver`]를 빌려 사용하며 상태를 갖지 않습니다.
//! 실패는 [`VerificationError`]로 상위 시나리오에 전파되고, 재시도는 하지 않습니다.

use std::time::Instant;

use metrics::{counter, histogram};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::driver::TableDriver;
use crate::error::{BoprobeError, VerificationError};
use crate::metrics as m;
use crate::sort;
use crate::types::{ColumnSnapshot, PageCursor, SortSpec};

/// 정렬 검증 결과
///
/// 성공한 검증의 근거 데이터를 보고서에 남기기 위해 사용합니다.
#[derive(Debug, Clone, Serialize)]
pub struct SortCheck {
    /// 검증한 정렬 명세
    pub spec: SortSpec,
    /// 정렬 전 스냅샷
    pub before: ColumnSnapshot,
    /// 계산된 기대 순서
    pub expected: ColumnSnapshot,
    /// 정렬 후 실제 스냅샷
    pub actual: ColumnSnapshot,
}

/// 그리드 하나에 대한 검증기
pub struct TableVerifier<'a, D> {
    driver: &'a D,
}

impl<'a, D: TableDriver> TableVerifier<'a, D> {
    /// 드라이버를 빌려 검증기를 생성합니다.
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// 현재 렌더링된 컬럼 값을 스냅샷으로 읽습니다. 화면 상태는 변경하지 않습니다.
    pub async fn extract_column(&self, column: &str) -> Result<ColumnSnapshot, BoprobeError> {
        let values = self.driver.get_all_rows_column_content(column).await?;
        debug!(column, rows = values.len(), "column extracted");
        Ok(ColumnSnapshot::new(column, values))
    }

    /// 정렬을 트리거하고 결과 순서가 기대 순서와 일치하는지 검증합니다.
    ///
    /// 1. 정렬 전 스냅샷 추출
    /// 2. 헤더 정렬 동작 (완료까지 대기)
    /// 3. 정렬 후 스냅샷 추출
    /// 4. 기대 순서 계산 후 비교 (숫자 컬럼은 파싱된 값으로 비교)
    pub async fn check_sort(&self, spec: &SortSpec) -> Result<SortCheck, BoprobeError> {
        let before = self.extract_column(&spec.column).await?;

        let started = Instant::now();
        self.driver.sort_table(&spec.column, spec.direction).await?;
        histogram!(m::DRIVER_ACTION_DURATION_SECONDS, m::LABEL_ACTION => "sort")
            .record(started.elapsed().as_secs_f64());

        let actual = self.extract_column(&spec.column).await?;
        let expected = sort::expected_for(&before, spec);

        match sort::check_order_as(&actual, &expected, spec.value_kind) {
            Ok(()) => {
                counter!(m::VERIFICATIONS_TOTAL, m::LABEL_RESULT => "pass").increment(1);
                info!(%spec, rows = actual.len(), "sort order verified");
                Ok(SortCheck {
                    spec: spec.clone(),
                    before,
                    expected,
                    actual,
                })
            }
            Err(e) => {
                counter!(m::VERIFICATIONS_TOTAL, m::LABEL_RESULT => "fail").increment(1);
                warn!(%spec, error = %e, "sort order mismatch");
                Err(e.into())
            }
        }
    }

    /// 지정한 페이지로 이동하고, 표시된 페이지가 요청과 같은지 확인합니다.
    pub async fn paginate_to(&self, page: u32) -> Result<u32, BoprobeError> {
        let requested = PageCursor::new(page)?;

        let started = Instant::now();
        let shown = self.driver.paginate_to(requested.get()).await?;
        histogram!(m::DRIVER_ACTION_DURATION_SECONDS, m::LABEL_ACTION => "paginate")
            .record(started.elapsed().as_secs_f64());

        if shown != requested.get() {
            counter!(m::VERIFICATIONS_TOTAL, m::LABEL_RESULT => "fail").increment(1);
            return Err(VerificationError::PageMismatch {
                requested: requested.get(),
                actual: shown,
            }
            .into());
        }

        counter!(m::VERIFICATIONS_TOTAL, m::LABEL_RESULT => "pass").increment(1);
        info!(page = shown, "pagination verified");
        Ok(shown)
    }
}
