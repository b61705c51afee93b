//! Style options and their configuration defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormerError, Result};

/// Option keys understood by the form builder.
pub mod keys {
    /// Class added to every `<form>`.
    pub const FORM_CLASS: &str = "formClass";
    /// Class of the container around each control.
    pub const FORM_GROUP_CLASS: &str = "formGroupClass";
    /// Default `autocomplete` attribute for `<form>`.
    pub const AUTOCOMPLETE: &str = "autocomplete";
    /// Derive element ids from field names.
    pub const NAME_AS_ID: &str = "nameAsId";
    /// Prefix for derived ids.
    pub const ID_PREFIX: &str = "idPrefix";
    /// Label suffix that marks a field as required.
    pub const REQUIRED_LABEL: &str = "requiredLabel";
    /// Text placed before a required label.
    pub const REQUIRED_PREFIX: &str = "requiredPrefix";
    /// Text placed after a required label.
    pub const REQUIRED_SUFFIX: &str = "requiredSuffix";
    /// Class added to required labels.
    pub const REQUIRED_CLASS: &str = "requiredClass";
    /// Class added to the group when the field has an error.
    pub const CONTROL_GROUP_ERROR: &str = "controlGroupError";
    /// Print the error message after the control.
    pub const DISPLAY_INLINE_ERRORS: &str = "displayInlineErrors";
    /// Class of the comment block.
    pub const COMMENT_CLASS: &str = "commentClass";
    /// Wrap controls in Bootstrap markup at all.
    pub const BOOTSTRAP: &str = "bootstrap";
}

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl OptionValue {
    fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(true) => "1".to_string(),
            Self::Flag(false) => String::new(),
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::Flag(b) => *b,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Resolved style options.
///
/// Lookups never fail: an unset key reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    /// Creates an option set with no keys at all.
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builds options from a configuration.
    pub fn from_config(config: &FormerConfig) -> Self {
        let mut options = Self::empty();
        options.set(keys::FORM_CLASS, config.form_class.as_str());
        options.set(keys::FORM_GROUP_CLASS, config.form_group_class.as_str());
        options.set(keys::AUTOCOMPLETE, config.autocomplete.as_str());
        options.set(keys::NAME_AS_ID, config.name_as_id);
        options.set(keys::ID_PREFIX, config.id_prefix.as_str());
        options.set(keys::REQUIRED_LABEL, config.required_label.as_str());
        options.set(keys::REQUIRED_PREFIX, config.required_prefix.as_str());
        options.set(keys::REQUIRED_SUFFIX, config.required_suffix.as_str());
        options.set(keys::REQUIRED_CLASS, config.required_class.as_str());
        options.set(keys::CONTROL_GROUP_ERROR, config.control_group_error.as_str());
        options.set(keys::DISPLAY_INLINE_ERRORS, config.display_inline_errors);
        options.set(keys::COMMENT_CLASS, config.comment_class.as_str());
        options.set(keys::BOOTSTRAP, config.bootstrap);
        options
    }

    /// Sets a single option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merges a map of options; keys in `values` replace existing ones.
    pub fn merge<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (key, value) in values {
            self.set(key, value);
        }
    }

    /// Returns the raw value of an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Returns an option as text, or the empty string when unset.
    pub fn text(&self, key: &str) -> String {
        self.values
            .get(key)
            .map(OptionValue::as_text)
            .unwrap_or_default()
    }

    /// Returns whether an option is set to a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(OptionValue::is_truthy)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&FormerConfig::default())
    }
}

/// Static configuration for the form builder.
///
/// Deserializes from JSON with `camelCase` keys; missing keys keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormerConfig {
    pub form_class: String,
    pub form_group_class: String,
    pub autocomplete: String,
    pub name_as_id: bool,
    pub id_prefix: String,
    pub required_label: String,
    pub required_prefix: String,
    pub required_suffix: String,
    pub required_class: String,
    pub control_group_error: String,
    pub display_inline_errors: bool,
    pub comment_class: String,
    pub bootstrap: bool,
}

impl Default for FormerConfig {
    fn default() -> Self {
        Self {
            form_class: "form-horizontal".to_string(),
            form_group_class: "form-group".to_string(),
            autocomplete: "off".to_string(),
            name_as_id: true,
            id_prefix: "field_".to_string(),
            required_label: ".req".to_string(),
            required_prefix: String::new(),
            required_suffix: " *".to_string(),
            required_class: "label-required".to_string(),
            control_group_error: "has-error".to_string(),
            display_inline_errors: false,
            comment_class: "help-block".to_string(),
            bootstrap: true,
        }
    }
}

impl FormerConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormerError::Config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Converts the configuration into resolved options.
    pub fn to_options(&self) -> Options {
        Options::from_config(self)
    }
}
