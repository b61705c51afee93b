//! Models bound to a form.

use std::collections::HashMap;

use former_html::SelectOptions;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{FormerError, Result};

/// An entity being edited by a form.
///
/// Field names passed in are already normalized (brackets removed).
pub trait FormModel {
    /// Returns the value of a named attribute.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Returns the select options for a field, if the model provides them.
    fn options_for(&self, _name: &str) -> Option<SelectOptions> {
        None
    }
}

/// A model backed by a JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonModel {
    attributes: Map<String, Value>,
    options: HashMap<String, SelectOptions>,
}

impl JsonModel {
    /// Creates a model from a map of attributes.
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self {
            attributes,
            options: HashMap::new(),
        }
    }

    /// Creates a model from any serializable value.
    ///
    /// The value must serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value).map_err(FormerError::Model)? {
            Value::Object(attributes) => Ok(Self::new(attributes)),
            other => Err(FormerError::ModelNotObject(json_kind(&other))),
        }
    }

    /// Registers select options for a field.
    #[must_use]
    pub fn with_options(mut self, field: impl Into<String>, options: SelectOptions) -> Self {
        self.options.insert(field.into(), options);
        self
    }

    /// Sets an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }
}

impl FormModel for JsonModel {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).filter(|v| !v.is_null()).cloned()
    }

    fn options_for(&self, name: &str) -> Option<SelectOptions> {
        self.options.get(name).cloned()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
