//! 카테고리 메뉴 썸네일 검색
//!
//! 카테고리 이미지 디렉토리와 그 하위 디렉토리에서 `<카테고리 ID>-<숫자?>_thumb.jpg`
//! 형식의 파일을 찾습니다.

use std::path::{Path, PathBuf};

use regex::RegexBuilder;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::BoprobeError;

/// 카테고리의 메뉴 썸네일 파일 경로를 정렬된 순서로 반환합니다.
///
/// `dir` 아래의 모든 일반 파일 중 파일 이름이 `^<category_id>-([0-9])?_thumb\.jpg`와
/// 대소문자 구분 없이 일치하는 파일을 포함합니다. 하위 디렉토리도 재귀적으로 탐색하며,
/// 심볼릭 링크는 따라가지 않습니다.
///
/// # Errors
/// 디렉토리를 읽을 수 없으면 [`BoprobeError::Io`]를 반환합니다.
pub fn find_menu_thumbnails(dir: impl AsRef<Path>, category_id: u32) -> Result<Vec<PathBuf>, BoprobeError> {
    let dir = dir.as_ref();
    let pattern = RegexBuilder::new(&format!(r"^{category_id}-([0-9])?_thumb\.jpg"))
        .case_insensitive(true)
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(|n| pattern.is_match(n)) {
            found.push(entry.into_path());
        }
    }
    found.sort();

    debug!(dir = %dir.display(), category_id, count = found.len(), "menu thumbnails found");
    Ok(found)
}
