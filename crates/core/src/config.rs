//! 설정 관리 - boprobe.toml 파싱 및 런타임 설정
//!
//! [`BoprobeConfig`]는 모든 크레이트의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`BOPROBE_WEBDRIVER_ENDPOINT=http://localhost:4444` 형식)
//! 3. 설정 파일 (`boprobe.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), boprobe_core::error::BoprobeError> {
//! use boprobe_core::config::BoprobeConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = BoprobeConfig::load("boprobe.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = BoprobeConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BoprobeError, ConfigError};

/// Boprobe 통합 설정
///
/// `boprobe.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoprobeConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 관리자 화면 접속 설정
    #[serde(default)]
    pub backoffice: BackOfficeConfig,
    /// WebDriver 설정
    #[serde(default)]
    pub webdriver: WebDriverConfig,
    /// 캠페인 파라미터
    #[serde(default)]
    pub campaign: CampaignConfig,
}

impl BoprobeConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BoprobeError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, BoprobeError> {
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
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, BoprobeError> {
        toml::from_str(toml_str).map_err(|e| {
            BoprobeError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `BOPROBE_{SECTION}_{FIELD}`
    /// 예: `BOPROBE_BACKOFFICE_PASSWORD=secret`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "BOPROBE_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "BOPROBE_GENERAL_LOG_FORMAT");

        // Back office
        override_string(&mut self.backoffice.url, "BOPROBE_BACKOFFICE_URL");
        override_string(&mut self.backoffice.email, "BOPROBE_BACKOFFICE_EMAIL");
        override_string(&mut self.backoffice.password, "BOPROBE_BACKOFFICE_PASSWORD");
        override_string(&mut self.backoffice.language, "BOPROBE_BACKOFFICE_LANGUAGE");

        // WebDriver
        override_string(&mut self.webdriver.endpoint, "BOPROBE_WEBDRIVER_ENDPOINT");
        override_string(&mut self.webdriver.browser, "BOPROBE_WEBDRIVER_BROWSER");
        override_bool(&mut self.webdriver.headless, "BOPROBE_WEBDRIVER_HEADLESS");
        override_u64(
            &mut self.webdriver.timeout_secs,
            "BOPROBE_WEBDRIVER_TIMEOUT_SECS",
        );
        override_u64(
            &mut self.webdriver.poll_interval_ms,
            "BOPROBE_WEBDRIVER_POLL_INTERVAL_MS",
        );

        // Campaign
        override_string(
            &mut self.campaign.product_filter,
            "BOPROBE_CAMPAIGN_PRODUCT_FILTER",
        );
        override_i64(
            &mut self.campaign.bulk_quantity,
            "BOPROBE_CAMPAIGN_BULK_QUANTITY",
        );
        override_usize(
            &mut self.campaign.expected_theme_count,
            "BOPROBE_CAMPAIGN_EXPECTED_THEME_COUNT",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), BoprobeError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(invalid(
                "general.log_level",
                format!("must be one of: {}", valid_levels.join(", ")),
            ));
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(invalid(
                "general.log_format",
                format!("must be one of: {}", valid_formats.join(", ")),
            ));
        }

        if !is_http_url(&self.backoffice.url) {
            return Err(invalid(
                "backoffice.url",
                "must be an http:// or https:// URL".to_owned(),
            ));
        }

        if self.backoffice.language.is_empty() {
            return Err(invalid(
                "backoffice.language",
                "language must not be empty".to_owned(),
            ));
        }

        if !is_http_url(&self.webdriver.endpoint) {
            return Err(invalid(
                "webdriver.endpoint",
                "must be an http:// or https:// URL".to_owned(),
            ));
        }

        let valid_browsers = ["chrome", "firefox"];
        if !valid_browsers.contains(&self.webdriver.browser.as_str()) {
            return Err(invalid(
                "webdriver.browser",
                format!("must be one of: {}", valid_browsers.join(", ")),
            ));
        }

        if self.webdriver.timeout_secs == 0 {
            return Err(invalid(
                "webdriver.timeout_secs",
                "timeout must be greater than 0".to_owned(),
            ));
        }

        if self.webdriver.poll_interval_ms == 0 {
            return Err(invalid(
                "webdriver.poll_interval_ms",
                "poll interval must be greater than 0".to_owned(),
            ));
        }

        if self.campaign.product_filter.trim().is_empty() {
            return Err(invalid(
                "campaign.product_filter",
                "product filter must not be empty".to_owned(),
            ));
        }

        Ok(())
    }

    /// 비밀번호를 가린 사본 (`config show` 출력용)
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.backoffice.password.is_empty() {
            copy.backoffice.password = "***REDACTED***".to_owned();
        }
        copy
    }
}

fn invalid(field: &str, reason: String) -> BoprobeError {
    ConfigError::InvalidValue {
        field: field.to_owned(),
        reason,
    }
    .into()
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    matches!(rest, Some(host) if !host.is_empty())
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 관리자 화면 접속 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackOfficeConfig {
    /// 관리자 화면 URL (예: `http://localhost:8001/admin-dev/`)
    pub url: String,
    /// 로그인 이메일
    pub email: String,
    /// 로그인 비밀번호
    pub password: String,
    /// 관리자 언어 (도움말 문서의 `country` 파라미터)
    pub language: String,
}

impl Default for BackOfficeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8001/admin-dev/".to_owned(),
            email: "demo@prestashop.com".to_owned(),
            password: String::new(),
            language: "en".to_owned(),
        }
    }
}

/// WebDriver 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebDriverConfig {
    /// WebDriver 서버 주소 (chromedriver, geckodriver, selenium)
    pub endpoint: String,
    /// 브라우저 (chrome, firefox)
    pub browser: String,
    /// 헤드리스 실행 여부
    pub headless: bool,
    /// 요소/조건 대기 타임아웃 (초)
    pub timeout_secs: u64,
    /// 조건 폴링 간격 (밀리초)
    pub poll_interval_ms: u64,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4444".to_owned(),
            browser: "chrome".to_owned(),
            headless: true,
            timeout_secs: 30,
            poll_interval_ms: 250,
        }
    }
}

/// 캠페인 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// 사전 수량 수정에 사용할 상품 이름
    pub product_filter: String,
    /// 일괄 수정 수량
    pub bulk_quantity: i64,
    /// 설치되어 있어야 하는 테마 수
    pub expected_theme_count: usize,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            product_filter: "Hummingbird printed t-shirt".to_owned(),
            bulk_quantity: 301,
            expected_theme_count: 2,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}

fn override_u64(target: &mut u64, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<u64>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse u64 from env var, ignoring"
            ),
        }
    }
}

fn override_i64(target: &mut i64, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<i64>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse i64 from env var, ignoring"
            ),
        }
    }
}
