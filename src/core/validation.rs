//! Field validation as pure functions of a [`FormSnapshot`].
//!
//! Nothing here touches the page. The controller takes a snapshot, asks these
//! functions what the markers should be, then writes them back.

use crate::domain::model::{FieldId, FieldSnapshot, FormSnapshot, MarkerUpdate, SubmitPlan};

/// Numeric fields checked on submit, in order.
pub const NUMBER_FIELDS: [FieldId; 2] = [FieldId::Year, FieldId::KiloDriven];

/// Leading-integer parse: optional whitespace and sign, then digits (or a
/// `0x` hex run). Anything after the digits is ignored, so `"2020.9"` is
/// `2020`. Returns `None` when no digit is found. Overflow saturates.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Whether a number input holds an acceptable value. Absent or unparseable
/// bounds are unbounded.
pub fn validate_number_input(field: &FieldSnapshot) -> bool {
    if field.is_empty() {
        return !field.required;
    }

    let Some(n) = parse_int(&field.value) else {
        return false;
    };
    let min = field.min.as_deref().and_then(parse_int);
    let max = field.max.as_deref().and_then(parse_int);

    min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi)
}

/// Marker for a number input after validation. Disabled fields stay clear.
pub fn number_input_marker(field: &FieldSnapshot) -> bool {
    !validate_number_input(field) && !field.disabled
}

/// Reconciles the invalid marker with a caller-supplied verdict.
///
/// A required, empty, enabled field is always marked no matter what
/// `is_valid` says. An empty optional field is never marked, and disabled
/// fields never are.
pub fn input_style_marker(field: &FieldSnapshot, is_valid: bool) -> bool {
    if field.required && field.is_empty() && !field.disabled {
        true
    } else if is_valid {
        false
    } else {
        (!field.is_empty() || field.required) && !field.disabled
    }
}

/// Decides every marker write for a submit attempt and whether it may proceed.
pub fn plan_submit(snapshot: &FormSnapshot) -> SubmitPlan {
    let mut markers = Vec::new();
    let mut missing = Vec::new();
    let mut valid = true;

    for field in snapshot.fields.iter().filter(|f| f.required) {
        if field.id == FieldId::CarModel && field.disabled {
            valid = false;
            // 還沒選品牌時，把錯誤標在品牌欄位上
            let target = match snapshot.field(FieldId::Company) {
                Some(company) if company.is_empty() => company,
                _ => field,
            };
            markers.push(MarkerUpdate {
                field: target.id,
                invalid: input_style_marker(target, false),
            });
        } else if field.is_empty() {
            valid = false;
            missing.push(field.id);
            markers.push(MarkerUpdate {
                field: field.id,
                invalid: input_style_marker(field, false),
            });
        } else {
            markers.push(MarkerUpdate {
                field: field.id,
                invalid: input_style_marker(field, true),
            });
        }
    }

    for id in NUMBER_FIELDS {
        if let Some(field) = snapshot.field(id) {
            if !validate_number_input(field) {
                valid = false;
            }
            markers.push(MarkerUpdate {
                field: id,
                invalid: number_input_marker(field),
            });
        }
    }

    SubmitPlan {
        markers,
        missing,
        valid,
    }
}
