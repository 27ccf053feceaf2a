//! Node parameter extraction.
//!
//! Turns the raw JSON values a host resolves for one item into a
//! [`SearchRequest`]. Missing parameters fall back to their defaults; present
//! parameters of the wrong type fail the item.

use serde_json::Value;

use crate::config::params;
use crate::error::ValidationError;
use crate::models::{SearchRequest, Source};

/// Build a request from a parameter lookup.
///
/// `lookup` returns the resolved value of a parameter by name, or `None` when
/// the parameter is unset. Year bounds that are `null` or an empty string count
/// as unset.
///
/// # Errors
///
/// Returns [`ValidationError`] for wrongly typed values, an unknown source,
/// a limit below the minimum or an inverted year range.
pub fn extract_search_request<F>(lookup: F) -> Result<SearchRequest, ValidationError>
where
    F: Fn(&str) -> Option<Value>,
{
    let query = match lookup(params::QUERY) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(ValidationError::parameter(
                params::QUERY,
                format!("expected a string, got {}", type_name(&other)),
            ));
        }
    };

    let source = match lookup(params::SOURCE) {
        None | Some(Value::Null) => Source::default(),
        Some(Value::String(s)) => s
            .parse::<Source>()
            .map_err(|e| ValidationError::parameter(params::SOURCE, e.to_string()))?,
        Some(other) => {
            return Err(ValidationError::parameter(
                params::SOURCE,
                format!("expected a string, got {}", type_name(&other)),
            ));
        }
    };

    let limit = match optional_integer(params::LIMIT, lookup(params::LIMIT))? {
        None => params::DEFAULT_LIMIT,
        Some(limit) => limit,
    };
    if limit < params::MIN_LIMIT {
        return Err(ValidationError::LimitOutOfRange(limit));
    }
    let limit = u32::try_from(limit)
        .map_err(|_| ValidationError::parameter(params::LIMIT, format!("{limit} is too large")))?;

    let min_year = optional_year(params::MIN_YEAR, lookup(params::MIN_YEAR))?;
    let max_year = optional_year(params::MAX_YEAR, lookup(params::MAX_YEAR))?;

    let request = SearchRequest::new(query, source, limit).with_years(min_year, max_year);
    request.validate()?;
    Ok(request)
}

fn optional_year(name: &str, value: Option<Value>) -> Result<Option<i32>, ValidationError> {
    optional_integer(name, value)?
        .map(|year| {
            i32::try_from(year).map_err(|_| {
                ValidationError::parameter(name, format!("{year} is not a valid year"))
            })
        })
        .transpose()
}

/// Read an integer parameter. Accepts JSON integers, whole floats and
/// numeric strings; `null` and `""` are treated as unset.
fn optional_integer(name: &str, value: Option<Value>) -> Result<Option<i64>, ValidationError> {
    let invalid =
        |got: &str| ValidationError::parameter(name, format!("expected an integer, got {got}"));

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(Some(f as i64))
                }
                _ => Err(invalid(&n.to_string())),
            }
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<i64>().map(Some).map_err(|_| invalid(&format!("\"{s}\"")))
        }
        Some(other) => Err(invalid(type_name(&other))),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
