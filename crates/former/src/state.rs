//! Per-form state shared by value resolution and wrapping.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationErrors;
use crate::input::{ErrorSource, OldInput};
use crate::model::FormModel;
use crate::options::{OptionValue, Options};

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]]").expect("bracket pattern is valid"));

/// Strips array bracket notation from a field name.
///
/// `tags[]` becomes `tags` and `items[0]` becomes `items0`.
pub fn normalize_field_name(name: &str) -> String {
    BRACKETS.replace_all(name, "").into_owned()
}

/// State for one rendered form.
///
/// Comments and errors are keyed by the raw field name. Old input,
/// model attributes and defaults are looked up by the normalized name.
pub struct FormState {
    options: Options,
    comments: HashMap<String, String>,
    errors: Box<dyn ErrorSource>,
    defaults: Option<Map<String, Value>>,
    model: Option<Box<dyn FormModel>>,
    old_input: Box<dyn OldInput>,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("options", &self.options)
            .field("comments", &self.comments)
            .field("defaults", &self.defaults)
            .field("has_model", &self.model.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl FormState {
    /// Creates state with the given options and no inputs.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            comments: HashMap::new(),
            errors: Box::new(ValidationErrors::new()),
            defaults: None,
            model: None,
            old_input: Box::new(HashMap::<String, String>::new()),
        }
    }

    /// Returns the style options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Sets a single option.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.set(key, value);
    }

    /// Merges several options at once.
    pub fn set_options<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.options.merge(values);
    }

    /// Registers a comment for a raw field name.
    pub fn set_comment(&mut self, name: impl Into<String>, comment: impl Into<String>) {
        self.comments.insert(name.into(), comment.into());
    }

    /// Merges several comments at once.
    pub fn set_comments<I, K, V>(&mut self, comments: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, comment) in comments {
            self.set_comment(name, comment);
        }
    }

    /// Returns the comment registered for a raw field name.
    pub fn comment(&self, name: &str) -> Option<&str> {
        self.comments.get(name).map(String::as_str)
    }

    /// Sets the form-wide defaults. An empty map leaves existing defaults alone.
    pub fn set_defaults(&mut self, defaults: Map<String, Value>) {
        if !defaults.is_empty() {
            self.defaults = Some(defaults);
        }
    }

    /// Returns the form-wide default for a normalized field name.
    pub fn default_value(&self, field: &str) -> Option<&Value> {
        self.defaults
            .as_ref()
            .and_then(|d| d.get(field))
            .filter(|v| !v.is_null())
    }

    /// Binds a model.
    pub fn set_model(&mut self, model: impl FormModel + 'static) {
        self.model = Some(Box::new(model));
    }

    /// Returns the bound model.
    pub fn model(&self) -> Option<&dyn FormModel> {
        self.model.as_deref()
    }

    /// Sets the validation error source.
    pub fn set_errors(&mut self, errors: impl ErrorSource + 'static) {
        self.errors = Box::new(errors);
    }

    /// Returns the first validation error for a raw field name. An empty
    /// message counts as no error.
    pub fn first_error(&self, name: &str) -> Option<&str> {
        self.errors.first(name).filter(|e| !e.is_empty())
    }

    /// Sets the old input source.
    pub fn set_old_input(&mut self, old_input: impl OldInput + 'static) {
        self.old_input = Box::new(old_input);
    }

    /// Returns the old input source.
    pub fn old_input(&self) -> &dyn OldInput {
        self.old_input.as_ref()
    }
}
