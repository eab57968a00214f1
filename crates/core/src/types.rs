//! 도메인 타입 - 테이블 검증에서 사용되는 공통 타입
//!
//! 컬럼 스냅샷, 정렬 명세, 페이지 커서를 정의합니다.
//! 모든 크레이트가 이 타입들을 사용하여 드라이버와 검증 로직 사이에서 데이터를 교환합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerificationError;

/// 한 컬럼의 셀 값을 표시 순서대로 담은 불변 스냅샷
///
/// 추출할 때마다 새로 생성되며, 생성 이후에는 변경되지 않습니다.
/// 정렬 전후로 길이는 동일해야 합니다 (같은 행 집합의 재배열).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    column: String,
    values: Vec<String>,
}

impl ColumnSnapshot {
    /// 컬럼 키와 값 목록으로 스냅샷을 생성합니다.
    pub fn new(column: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            column: column.into(),
            values,
        }
    }

    /// 스냅샷을 읽어온 컬럼 키
    pub fn column(&self) -> &str {
        &self.column
    }

    /// 표시 순서의 셀 값
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// 행 수
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 행이 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 값 목록을 소유권과 함께 꺼냅니다.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl fmt::Display for ColumnSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.column, self.values.join(", "))
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// 오름차순
    #[default]
    Asc,
    /// 내림차순
    Desc,
}

impl SortDirection {
    /// 관리자 화면의 정렬 파라미터 표기 (`asc`, `desc`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("invalid sort direction: {other} (expected: asc, desc)")),
        }
    }
}

/// 컬럼 값의 비교 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// 코드 포인트 순서 문자열 비교
    #[default]
    String,
    /// 10진 정수 비교
    Numeric,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// 정렬 명세
///
/// 어떤 컬럼을 어느 방향으로, 어떤 값 비교 방식으로 정렬하는지 나타냅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// 컬럼 키 (예: `product_id`)
    pub column: String,
    /// 정렬 방향
    pub direction: SortDirection,
    /// 값 비교 방식
    #[serde(default)]
    pub value_kind: ValueKind,
}

impl SortSpec {
    /// 문자열 컬럼 정렬 명세를 생성합니다.
    pub fn string(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
            value_kind: ValueKind::String,
        }
    }

    /// 숫자 컬럼 정렬 명세를 생성합니다.
    pub fn numeric(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
            value_kind: ValueKind::Numeric,
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.column, self.direction, self.value_kind)
    }
}

/// 1부터 시작하는 페이지 번호
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageCursor(u32);

impl PageCursor {
    /// 첫 페이지
    pub const FIRST: Self = Self(1);

    /// 페이지 번호를 검증하여 커서를 생성합니다. 0은 거부됩니다.
    pub fn new(page: u32) -> Result<Self, VerificationError> {
        if page == 0 {
            return Err(VerificationError::InvalidPage(page));
        }
        Ok(Self(page))
    }

    /// 페이지 번호
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PageCursor {
    type Error = VerificationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageCursor> for u32 {
    fn from(cursor: PageCursor) -> Self {
        cursor.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_direction_parse_loose() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(
            "Descending".parse::<SortDirection>(),
            Ok(SortDirection::Desc)
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn sort_direction_serializes_lowercase() {
        let json = serde_json::to_string(&SortDirection::Desc).unwrap();
        assert_eq!(json, "\"desc\"");
    }

    #[test]
    fn sort_spec_display() {
        let spec = SortSpec::numeric("product_id", SortDirection::Desc);
        assert_eq!(spec.to_string(), "product_id desc (numeric)");
    }

    #[test]
    fn sort_spec_value_kind_defaults_to_string() {
        let spec: SortSpec =
            serde_json::from_str(r#"{"column":"reference","direction":"asc"}"#).unwrap();
        assert_eq!(spec.value_kind, ValueKind::String);
    }

    #[test]
    fn page_cursor_rejects_zero() {
        assert_eq!(PageCursor::new(0), Err(VerificationError::InvalidPage(0)));
        assert_eq!(PageCursor::new(2).unwrap().get(), 2);
    }

    #[test]
    fn page_cursor_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<PageCursor>("0").is_err());
        let cursor: PageCursor = serde_json::from_str("3").unwrap();
        assert_eq!(cursor.get(), 3);
    }

    #[test]
    fn snapshot_accessors() {
        let snapshot = ColumnSnapshot::new("reference", vec!["B".into(), "A".into()]);
        assert_eq!(snapshot.column(), "reference");
        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.to_string(), "reference[B, A]");
    }
}
