//! Field value resolution.
//!
//! A field's display value comes from the first source that has one:
//!
//! 1. old input submitted on the previous request,
//! 2. the value passed explicitly by the caller,
//! 3. the bound model's attribute,
//! 4. the form-wide default,
//! 5. otherwise the empty string.
//!
//! Every step checks presence, never truthiness: an explicit `0` is a
//! real value and renders as `"0"`.

use serde_json::Value;
use tracing::debug;

use crate::state::{normalize_field_name, FormState};

/// The value a control should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// A display value for text-like controls and selects.
    Text(String),
    /// A checked state for radios and checkboxes.
    Checked(bool),
}

impl ResolvedValue {
    /// Returns the value as display text.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Checked(true) => "1",
            Self::Checked(false) => "",
        }
    }

    /// Returns whether a checkable control should be checked.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Text(s) => is_truthy(s),
            Self::Checked(b) => *b,
        }
    }
}

impl Default for ResolvedValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Resolves the value to render for `name`.
///
/// `compare_to` is the candidate value of a radio or checkbox. When set,
/// the result is a [`ResolvedValue::Checked`] saying whether the stored
/// value matches the candidate.
pub fn resolve_value(
    name: &str,
    explicit: Option<&Value>,
    state: &FormState,
    compare_to: Option<&str>,
) -> ResolvedValue {
    let field = normalize_field_name(name);

    if let Some(old) = state.old_input().get(&field) {
        debug!(field = %name, source = "old_input", "resolved field value");
        return match compare_to {
            Some(candidate) => ResolvedValue::Checked(old == candidate),
            None => ResolvedValue::Text(old.to_string()),
        };
    }

    if let Some(value) = explicit.filter(|v| is_present(v)) {
        debug!(field = %name, source = "explicit", "resolved field value");
        return match (value, compare_to) {
            (Value::Bool(checked), Some(_)) => ResolvedValue::Checked(*checked),
            _ => settle(value, compare_to),
        };
    }

    if let Some(value) = state.model().and_then(|m| m.attribute(&field)) {
        debug!(field = %name, source = "model", "resolved field value");
        return settle(&value, compare_to);
    }

    if let Some(value) = state.default_value(&field) {
        debug!(field = %name, source = "default", "resolved field value");
        return settle(value, compare_to);
    }

    match compare_to {
        Some(_) => ResolvedValue::Checked(false),
        None => ResolvedValue::default(),
    }
}

/// Converts a JSON value into its display text.
///
/// Numbers keep their decimal form, so `0` becomes `"0"`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

/// Compares a stored value with a control's candidate value.
pub fn loosely_equals(value: &Value, candidate: &str) -> bool {
    match value {
        Value::String(s) => s == candidate,
        Value::Number(n) => {
            n.to_string() == candidate
                || candidate
                    .parse::<f64>()
                    .ok()
                    .zip(n.as_f64())
                    .is_some_and(|(a, b)| (a - b).abs() < f64::EPSILON)
        }
        Value::Bool(b) => *b == is_truthy(candidate),
        Value::Null => candidate.is_empty(),
        Value::Array(items) => items.iter().any(|item| loosely_equals(item, candidate)),
        Value::Object(_) => false,
    }
}

fn settle(value: &Value, compare_to: Option<&str>) -> ResolvedValue {
    match compare_to {
        Some(candidate) => ResolvedValue::Checked(loosely_equals(value, candidate)),
        None => ResolvedValue::Text(display_value(value)),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn is_truthy(s: &str) -> bool {
    !s.is_empty() && s != "0"
}
