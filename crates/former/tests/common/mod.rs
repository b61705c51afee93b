#![allow(dead_code)]

use std::collections::HashMap;

use former::{keys, Former, Options};
use former_html::HtmlRenderer;
use serde_json::{Map, Value};

/// A form with no id prefix, matching an application that sets
/// `idPrefix` to the empty string.
pub fn form() -> Former {
    let mut options = Options::default();
    options.set(keys::ID_PREFIX, "");
    Former::with_renderer(HtmlRenderer, options)
}

pub fn old_input(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected JSON object, got {other:?}"),
    }
}
