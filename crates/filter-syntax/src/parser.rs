//! Hand-written parser for the compact filter grammar.
//!
//! Grammar: filters are separated by `;`; each filter is
//! `name[ OPERATOR]=value` with the operator token separated from the name
//! by a blank space (a `+` is accepted too, since the syntax usually
//! arrives URL-decoded). IN/NOTIN values are comma-separated lists,
//! optionally wrapped in a single pair of parentheses.

use crate::descriptor::{FilterDescriptor, FilterOperator, FilterValue, Scalar, ValueKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

const DATE_PATTERN: &str = "%Y-%m-%d";
const ISO_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parses a compact filter string into an ordered descriptor list.
///
/// Never fails: fragments without an `=` are dropped silently.
pub fn parse(input: &str) -> Vec<FilterDescriptor> {
    let mut descriptors = Vec::new();
    for fragment in input.split(';') {
        if fragment.trim().is_empty() {
            continue;
        }
        match parse_fragment(fragment) {
            Some(descriptor) => descriptors.push(descriptor),
            None => trace!(fragment, "dropping filter fragment without '='"),
        }
    }
    descriptors
}

fn parse_fragment(fragment: &str) -> Option<FilterDescriptor> {
    let (name_part, value_part) = fragment.split_once('=')?;
    let (field, operator) = split_operator(name_part);

    let (value, kind) = if operator.is_multi_valued() {
        let elements = parse_list(value_part);
        // Declared kind is the first element's; later elements keep their
        // own inferred types.
        let kind = elements.first().map_or(ValueKind::Text, Scalar::kind);
        (FilterValue::List(elements), kind)
    } else {
        let scalar = infer(value_part.trim());
        let kind = scalar.kind();
        (FilterValue::Scalar(scalar), kind)
    };

    Some(FilterDescriptor {
        field,
        operator,
        value,
        kind,
        raw: fragment.to_string(),
    })
}

/// Splits a trailing operator token off the field name; everything else is
/// the name and the operator defaults to Equal.
fn split_operator(name_part: &str) -> (String, FilterOperator) {
    let trimmed = name_part.trim();
    if let Some((name, token)) = trimmed.rsplit_once([' ', '+'])
        && let Some(operator) = FilterOperator::from_token(token)
    {
        return (name.trim().to_string(), operator);
    }
    (trimmed.to_string(), FilterOperator::Equal)
}

fn parse_list(raw: &str) -> Vec<Scalar> {
    let mut body = raw.trim();
    body = body.strip_prefix('(').unwrap_or(body);
    body = body.strip_suffix(')').unwrap_or(body);
    // Empty tokens (an empty value, `()`, or doubled commas) carry nothing
    // to infer and are dropped.
    body.split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(infer)
        .collect()
}

/// Type inference for one scalar token: number, then date, then text.
fn infer(token: &str) -> Scalar {
    if looks_numeric(token)
        && let Ok(number) = token.parse::<f64>()
    {
        return Scalar::Number(number);
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, DATE_PATTERN) {
        return Scalar::Date(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(token, ISO_PATTERN) {
        return Scalar::Date(datetime);
    }
    Scalar::Text(token.to_string())
}

/// Restricts number inference to plain decimal notation; `parse::<f64>`
/// alone would also accept `inf`, `NaN` and exponent forms.
fn looks_numeric(token: &str) -> bool {
    !token.is_empty()
        && token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}
