//! 에러 타입 - 도메인별 에러 정의

/// boprobe 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum BoprobeError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 테이블 검증 실패
    #[error("verification failed: {0}")]
    Verification(#[from] VerificationError),

    /// UI 드라이버 에러
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 테이블 정렬/페이지네이션 검증 에러
///
/// 모든 변형은 현재 시나리오를 종료시키는 치명적 실패입니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// 렌더링된 테이블에 요청한 컬럼이 없음
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    /// 기대 순서와 실제 순서가 특정 인덱스에서 다름
    #[error("order mismatch in column '{column}' at index {index}: expected '{expected}', got '{actual}'")]
    OrderMismatch {
        column: String,
        index: usize,
        expected: String,
        actual: String,
    },

    /// 스냅샷 길이가 다름
    #[error("length mismatch in column '{column}': expected {expected} rows, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// 요청한 페이지와 이동 후 표시된 페이지가 다름
    #[error("page mismatch: requested page {requested}, table shows page {actual}")]
    PageMismatch { requested: u32, actual: u32 },

    /// 1 미만의 페이지 번호
    #[error("invalid page number: {0} (pages are 1-indexed)")]
    InvalidPage(u32),
}

/// UI 드라이버 에러
///
/// 브라우저 자동화 계층(WebDriver, 시뮬레이터)에서 발생하는 에러를 표현합니다.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// 브라우저 세션 생성/종료 실패
    #[error("session error: {0}")]
    Session(String),

    /// 셀렉터에 해당하는 요소가 없음
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// 대기 시간 초과
    #[error("timed out after {timeout_ms}ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u64 },

    /// 프로토콜 응답 해석 실패 또는 원격 에러
    #[error("protocol error: {0}")]
    Protocol(String),

    /// HTTP 전송 실패
    #[error("http error: {0}")]
    Http(String),

    /// 시뮬레이터가 지원하지 않는 동작
    #[error("unsupported action: {0}")]
    Unsupported(String),
}
