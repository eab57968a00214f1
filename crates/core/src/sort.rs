//! 정렬 기대값 계산 및 스냅샷 비교
//!
//! 정렬 전 스냅샷에서 기대 순서를 계산하고, 정렬 후 실제 스냅샷과 비교합니다.
//! 모든 함수는 입력을 변경하지 않고 새 스냅샷을 반환합니다.
//!
//! # 동점 처리
//! 정렬은 안정 정렬(stable sort)입니다. 같은 키를 가진 행은 정렬 전 표시 순서를 유지하며,
//! 내림차순은 오름차순 결과를 그대로 뒤집은 것입니다.

use std::cmp::Ordering;

use crate::error::VerificationError;
use crate::types::{ColumnSnapshot, SortDirection, SortSpec, ValueKind};

/// 문자열 앞부분의 10진 정수를 파싱합니다.
///
/// 앞뒤 공백과 부호를 허용하고, 숫자 뒤에 오는 문자는 무시합니다 (`"12 pcs"` → 12).
/// 숫자로 시작하지 않으면 `None`을 반환합니다. 범위를 넘으면 `i64` 경계값으로 포화됩니다.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    }

    seen_digit.then_some(value)
}

/// 숫자 정렬 키. 정수로 파싱되지 않는 값은 모든 숫자 뒤에 옵니다.
fn numeric_key(text: &str) -> (bool, i64) {
    match parse_leading_int(text) {
        Some(n) => (false, n),
        None => (true, 0),
    }
}

/// 스냅샷의 오름차순 기대 순서를 계산합니다.
///
/// - [`ValueKind::Numeric`]: 10진 정수 값 기준 (사전식 아님: `["9","10","2"]` → `["2","9","10"]`)
/// - [`ValueKind::String`]: 코드 포인트 순서 비교
pub fn compute_expected_order(snapshot: &ColumnSnapshot, kind: ValueKind) -> ColumnSnapshot {
    let mut values = snapshot.values().to_vec();
    match kind {
        ValueKind::String => values.sort(),
        ValueKind::Numeric => values.sort_by_cached_key(|v| numeric_key(v)),
    }
    ColumnSnapshot::new(snapshot.column(), values)
}

/// 오름차순 스냅샷에 정렬 방향을 적용합니다.
pub fn apply_sort_direction(ascending: ColumnSnapshot, direction: SortDirection) -> ColumnSnapshot {
    match direction {
        SortDirection::Asc => ascending,
        SortDirection::Desc => {
            let column = ascending.column().to_owned();
            let mut values = ascending.into_values();
            values.reverse();
            ColumnSnapshot::new(column, values)
        }
    }
}

/// 정렬 명세 전체(값 비교 방식 + 방향)를 적용한 기대 순서
pub fn expected_for(snapshot: &ColumnSnapshot, spec: &SortSpec) -> ColumnSnapshot {
    apply_sort_direction(
        compute_expected_order(snapshot, spec.value_kind),
        spec.direction,
    )
}

/// 두 스냅샷이 같은 길이이고 모든 인덱스에서 값이 같은지 확인합니다.
pub fn verify(actual: &ColumnSnapshot, expected: &ColumnSnapshot) -> bool {
    actual.values() == expected.values()
}

/// [`verify`]와 같은 비교를 수행하되, 실패 시 첫 불일치 위치를 담은 에러를 반환합니다.
pub fn check_order(
    actual: &ColumnSnapshot,
    expected: &ColumnSnapshot,
) -> Result<(), VerificationError> {
    check_with(actual, expected, |a, e| a == e)
}

/// 값 비교 방식에 따라 스냅샷을 비교합니다.
///
/// 숫자 컬럼은 파싱된 정수로 비교하므로 `"010"`과 `"10"`은 같은 값입니다.
/// 문자열 컬럼은 [`check_order`]와 동일합니다.
pub fn check_order_as(
    actual: &ColumnSnapshot,
    expected: &ColumnSnapshot,
    kind: ValueKind,
) -> Result<(), VerificationError> {
    match kind {
        ValueKind::String => check_order(actual, expected),
        ValueKind::Numeric => check_with(actual, expected, |a, e| {
            numeric_key(a).cmp(&numeric_key(e)) == Ordering::Equal
        }),
    }
}

fn check_with(
    actual: &ColumnSnapshot,
    expected: &ColumnSnapshot,
    same: impl Fn(&str, &str) -> bool,
) -> Result<(), VerificationError> {
    if actual.len() != expected.len() {
        return Err(VerificationError::LengthMismatch {
            column: expected.column().to_owned(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mismatch = actual
        .values()
        .iter()
        .zip(expected.values())
        .position(|(a, e)| !same(a, e));

    match mismatch {
        None => Ok(()),
        Some(index) => Err(VerificationError::OrderMismatch {
            column: expected.column().to_owned(),
            index,
            expected: expected.values()[index].clone(),
            actual: actual.values()[index].clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(values: &[&str]) -> ColumnSnapshot {
        ColumnSnapshot::new("col", values.iter().map(|v| (*v).to_owned()).collect())
    }

    #[test]
    fn string_ascending_scenario() {
        let expected = expected_for(
            &snap(&["B", "A", "C"]),
            &SortSpec::string("col", SortDirection::Asc),
        );
        assert_eq!(expected.values(), ["A", "B", "C"]);
    }

    #[test]
    fn numeric_descending_scenario() {
        let expected = expected_for(
            &snap(&["10", "2", "9"]),
            &SortSpec::numeric("col", SortDirection::Desc),
        );
        assert_eq!(expected.values(), ["10", "9", "2"]);
    }

    #[test]
    fn numeric_order_is_by_value_not_lexicographic() {
        let ordered = compute_expected_order(&snap(&["9", "10", "2"]), ValueKind::Numeric);
        assert_eq!(ordered.values(), ["2", "9", "10"]);

        let lexical = compute_expected_order(&snap(&["9", "10", "2"]), ValueKind::String);
        assert_eq!(lexical.values(), ["10", "2", "9"]);
    }

    #[test]
    fn string_order_is_ordinal() {
        // 대문자(0x41..)가 소문자(0x61..)보다 앞, 비 ASCII는 뒤
        let ordered = compute_expected_order(&snap(&["b", "É", "a", "B"]), ValueKind::String);
        assert_eq!(ordered.values(), ["B", "a", "b", "É"]);
    }

    #[test]
    fn ascending_is_non_decreasing() {
        let input = snap(&["mug", "Hummingbird", "poster", "cushion", "T-shirt", "notebook"]);
        let ordered = apply_sort_direction(
            compute_expected_order(&input, ValueKind::String),
            SortDirection::Asc,
        );
        assert!(ordered.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let input = snap(&["delta", "alpha", "charlie", "bravo"]);
        let asc = expected_for(&input, &SortSpec::string("col", SortDirection::Asc));
        let desc = expected_for(&input, &SortSpec::string("col", SortDirection::Desc));
        let mut reversed = asc.values().to_vec();
        reversed.reverse();
        assert_eq!(desc.values(), reversed.as_slice());
    }

    #[test]
    fn numeric_ties_keep_original_order() {
        let ordered = compute_expected_order(&snap(&["7", "007", "3", "+7"]), ValueKind::Numeric);
        assert_eq!(ordered.values(), ["3", "7", "007", "+7"]);
    }

    #[test]
    fn compute_does_not_mutate_input() {
        let input = snap(&["3", "1", "2"]);
        let _ = compute_expected_order(&input, ValueKind::Numeric);
        assert_eq!(input.values(), ["3", "1", "2"]);
    }

    #[test]
    fn non_numeric_values_sort_last() {
        let ordered = compute_expected_order(&snap(&["n/a", "5", "-1", ""]), ValueKind::Numeric);
        assert_eq!(ordered.values(), ["-1", "5", "n/a", ""]);
    }

    #[test]
    fn parse_leading_int_rules() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -17 units"), Some(-17));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn verify_requires_equal_length_and_values() {
        assert!(verify(&snap(&["a", "b"]), &snap(&["a", "b"])));
        assert!(!verify(&snap(&["a", "b"]), &snap(&["b", "a"])));
        assert!(!verify(&snap(&["a"]), &snap(&["a", "b"])));
        assert!(verify(&snap(&[]), &snap(&[])));
    }

    #[test]
    fn check_order_reports_first_mismatch() {
        let err = check_order(&snap(&["1", "3", "2"]), &snap(&["1", "2", "3"])).unwrap_err();
        assert_eq!(
            err,
            VerificationError::OrderMismatch {
                column: "col".to_owned(),
                index: 1,
                expected: "2".to_owned(),
                actual: "3".to_owned(),
            }
        );
    }

    #[test]
    fn check_order_reports_length_mismatch_first() {
        let err = check_order(&snap(&["1"]), &snap(&["2", "1"])).unwrap_err();
        assert!(matches!(
            err,
            VerificationError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn numeric_check_compares_parsed_values() {
        let actual = snap(&["010", "2"]);
        let expected = snap(&["10", "2"]);
        assert!(check_order(&actual, &expected).is_err());
        assert!(check_order_as(&actual, &expected, ValueKind::Numeric).is_ok());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(values: Vec<String>) -> ColumnSnapshot {
        ColumnSnapshot::new("col", values)
    }

    /// 숫자, 접미사 붙은 숫자, 공백/부호가 섞인 숫자, 숫자가 아닌 값을 섞은 셀
    fn numeric_cell() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<i32>().prop_map(|n| n.to_string()),
            (0u16..500, "[a-z ]{0,4}").prop_map(|(n, suffix)| format!("{n}{suffix}")),
            (0u16..500).prop_map(|n| format!(" +{n:03}")),
            "[a-zA-Z]{1,5}",
        ]
    }

    proptest! {
        #[test]
        fn string_ascending_is_non_decreasing(values in prop::collection::vec("\\PC{0,8}", 0..40)) {
            let ordered = compute_expected_order(&snapshot(values), ValueKind::String);
            prop_assert!(ordered.values().windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn descending_is_reverse_of_ascending(
            values in prop::collection::vec(numeric_cell(), 0..40),
            numeric in any::<bool>(),
        ) {
            let kind = if numeric { ValueKind::Numeric } else { ValueKind::String };
            let input = snapshot(values);
            let ascending = compute_expected_order(&input, kind);
            let descending = apply_sort_direction(ascending.clone(), SortDirection::Desc);

            let mut reversed = ascending.into_values();
            reversed.reverse();
            prop_assert_eq!(descending.values(), reversed.as_slice());
        }

        #[test]
        fn numeric_order_is_by_parsed_value(values in prop::collection::vec(numeric_cell(), 0..40)) {
            let ordered = compute_expected_order(&snapshot(values), ValueKind::Numeric);
            let keys: Vec<_> = ordered.values().iter().map(|v| numeric_key(v)).collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
            // 숫자가 아닌 값은 모든 숫자 뒤
            if let Some(first_text) = keys.iter().position(|(text, _)| *text) {
                prop_assert!(keys[first_text..].iter().all(|(text, _)| *text));
            }
        }

        #[test]
        fn numeric_ties_keep_displayed_order(values in prop::collection::vec(numeric_cell(), 0..40)) {
            let input = snapshot(values);
            let ordered = compute_expected_order(&input, ValueKind::Numeric);
            for value in input.values() {
                let key = numeric_key(value);
                let before: Vec<_> = input.values().iter().filter(|v| numeric_key(v) == key).collect();
                let after: Vec<_> = ordered.values().iter().filter(|v| numeric_key(v) == key).collect();
                prop_assert_eq!(before, after);
            }
        }

        #[test]
        fn compute_never_mutates_input(
            values in prop::collection::vec(numeric_cell(), 0..40),
            numeric in any::<bool>(),
        ) {
            let kind = if numeric { ValueKind::Numeric } else { ValueKind::String };
            let input = snapshot(values);
            let original = input.clone();
            let ordered = compute_expected_order(&input, kind);

            prop_assert_eq!(&input, &original);
            let mut a = input.into_values();
            let mut b = ordered.into_values();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b, "result must be a permutation of the input");
        }

        #[test]
        fn verify_iff_same_length_and_values(
            a in prop::collection::vec("[ab]{0,2}", 0..6),
            b in prop::collection::vec("[ab]{0,2}", 0..6),
        ) {
            let same = a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y);
            let (actual, expected) = (snapshot(a), snapshot(b));
            prop_assert_eq!(verify(&actual, &expected), same);
            prop_assert_eq!(check_order(&actual, &expected).is_ok(), same);
            prop_assert!(verify(&actual, &actual.clone()));
        }
    }
}
