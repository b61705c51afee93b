//! The form builder surface.

use former_html::{Attributes, ElementRenderer, HtmlRenderer, SelectOptions};
use serde_json::{Map, Value};
use tracing::warn;

use crate::attributes::prepare_attributes;
use crate::error::{FormerError, Result};
use crate::input::{ErrorSource, OldInput};
use crate::model::FormModel;
use crate::options::{keys, FormerConfig, OptionValue, Options};
use crate::state::{normalize_field_name, FormState};
use crate::value::resolve_value;
use crate::wrapper::{build_label, wrap};

/// Name of the hidden CSRF input emitted after the form opening tag.
pub const CSRF_FIELD: &str = "_token";

const DEFAULT_TEXTAREA_ROWS: usize = 4;
const BUTTON_CLASS: &str = "btn";

/// Builds Bootstrap-styled form controls for one form.
///
/// A `Former` is created per rendered form. Values are resolved from old
/// input, the explicit value, the bound model and the form defaults, in
/// that order, and every labeled control is wrapped in its form group.
///
/// ```rust
/// use former::{Former, FormerConfig, ValidationErrors};
/// use former_html::Attributes;
/// use serde_json::json;
///
/// let mut form = Former::new(&FormerConfig::default())
///     .with_errors(ValidationErrors::new().with("email", "Invalid address"));
///
/// let html = form.text("email", Some("Email.req"), Some(json!("bob@")), Attributes::new());
/// assert!(html.contains("has-error"));
/// assert!(html.contains("Email *"));
/// assert!(html.contains(r#"value="bob@""#));
/// ```
#[derive(Debug)]
pub struct Former<R: ElementRenderer = HtmlRenderer> {
    renderer: R,
    state: FormState,
    csrf_token: Option<String>,
}

impl Former<HtmlRenderer> {
    /// Creates a builder rendering plain HTML with the given configuration.
    pub fn new(config: &FormerConfig) -> Self {
        Self::with_renderer(HtmlRenderer, Options::from_config(config))
    }
}

impl Default for Former<HtmlRenderer> {
    fn default() -> Self {
        Self::with_renderer(HtmlRenderer, Options::default())
    }
}

impl<R: ElementRenderer> Former<R> {
    /// Creates a builder around a custom element renderer.
    pub fn with_renderer(renderer: R, options: Options) -> Self {
        Self {
            renderer,
            state: FormState::new(options),
            csrf_token: None,
        }
    }

    /// Sets form-wide defaults.
    #[must_use]
    pub fn make(mut self, defaults: Map<String, Value>) -> Self {
        self.state.set_defaults(defaults);
        self
    }

    /// Binds a model.
    #[must_use]
    pub fn with_model(mut self, model: impl FormModel + 'static) -> Self {
        self.state.set_model(model);
        self
    }

    /// Sets the validation error source.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorSource + 'static) -> Self {
        self.state.set_errors(errors);
        self
    }

    /// Sets the old input source.
    #[must_use]
    pub fn with_old_input(mut self, old_input: impl OldInput + 'static) -> Self {
        self.state.set_old_input(old_input);
        self
    }

    /// Sets the CSRF token emitted by [`Former::open`].
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Sets form-wide defaults.
    pub fn set_defaults(&mut self, defaults: Map<String, Value>) -> &mut Self {
        self.state.set_defaults(defaults);
        self
    }

    /// Binds a model.
    pub fn set_model(&mut self, model: impl FormModel + 'static) -> &mut Self {
        self.state.set_model(model);
        self
    }

    /// Sets a single option.
    pub fn set_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> &mut Self {
        self.state.set_option(key, value);
        self
    }

    /// Merges several options.
    pub fn set_options<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.state.set_options(values);
        self
    }

    /// Registers a comment for a field.
    pub fn set_comment(&mut self, name: impl Into<String>, comment: impl Into<String>) -> &mut Self {
        self.state.set_comment(name, comment);
        self
    }

    /// Registers several comments.
    pub fn set_comments<I, K, V>(&mut self, comments: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.state.set_comments(comments);
        self
    }

    /// Returns the form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the form state mutably.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Opens the form.
    ///
    /// The `formClass` option is used as the class, or appended when the
    /// caller's class has no `form-` class of its own.
    pub fn open(&self, mut attrs: Attributes) -> String {
        let options = self.state.options();
        let form_class = options.text(keys::FORM_CLASS);
        let existing = attrs.get_text("class").map(str::to_owned);
        match existing.as_deref() {
            None | Some("") => {
                if !form_class.is_empty() {
                    attrs.set("class", form_class);
                }
            }
            Some(class) if !class.contains("form-") => attrs.append_class(&form_class),
            Some(_) => {}
        }

        let autocomplete = options.text(keys::AUTOCOMPLETE);
        if !autocomplete.is_empty() && !attrs.contains("autocomplete") {
            attrs.set("autocomplete", autocomplete);
        }

        let mut html = self.renderer.open_form(&attrs);
        if let Some(token) = &self.csrf_token {
            html.push_str(&self.renderer.hidden(CSRF_FIELD, Some(token), &Attributes::new()));
        }
        html
    }

    /// Closes the form.
    pub fn close(&self) -> String {
        self.renderer.close_form()
    }

    /// Renders a hidden input. Hidden inputs are never wrapped.
    pub fn hidden(&self, name: &str, value: Option<Value>, attrs: Attributes) -> String {
        let value = resolve_value(name, value.as_ref(), &self.state, None);
        self.renderer.hidden(name, Some(value.as_text()), &attrs)
    }

    /// Renders a wrapped text input.
    pub fn text(
        &mut self,
        name: &str,
        label: Option<&str>,
        value: Option<Value>,
        attrs: Attributes,
    ) -> String {
        let value = resolve_value(name, value.as_ref(), &self.state, None);
        let attrs = prepare_attributes(&mut self.state, name, attrs, true);
        let field = self.renderer.text(name, Some(value.as_text()), &attrs);
        wrap(&self.renderer, &self.state, &field, name, label, false)
    }

    /// Renders a wrapped textarea, four rows high unless `rows` is given.
    pub fn textarea(
        &mut self,
        name: &str,
        label: Option<&str>,
        value: Option<Value>,
        attrs: Attributes,
    ) -> String {
        let value = resolve_value(name, value.as_ref(), &self.state, None);
        let mut attrs = prepare_attributes(&mut self.state, name, attrs, true);
        if !attrs.contains("rows") {
            attrs.set("rows", DEFAULT_TEXTAREA_ROWS);
        }
        let field = self.renderer.textarea(name, Some(value.as_text()), &attrs);
        wrap(&self.renderer, &self.state, &field, name, label, false)
    }

    /// Renders a wrapped password input. Passwords are never repopulated.
    pub fn password(&mut self, name: &str, label: Option<&str>, attrs: Attributes) -> String {
        let attrs = prepare_attributes(&mut self.state, name, attrs, true);
        let field = self.renderer.password(name, &attrs);
        wrap(&self.renderer, &self.state, &field, name, label, false)
    }

    /// Renders a wrapped select.
    ///
    /// Without explicit `options` the bound model's options for the field
    /// are used; a field with no options at all renders an empty select.
    pub fn select(
        &mut self,
        name: &str,
        label: Option<&str>,
        options: Option<SelectOptions>,
        selected: Option<Value>,
        attrs: Attributes,
    ) -> String {
        let options = options
            .or_else(|| self.model_options(name))
            .unwrap_or_else(|| {
                warn!(field = %name, "no select options given or provided by the model");
                SelectOptions::new()
            });
        self.render_select(name, label, &options, selected, attrs)
    }

    /// Renders a wrapped select whose options must come from the model.
    pub fn try_select_from_model(
        &mut self,
        name: &str,
        label: Option<&str>,
        selected: Option<Value>,
        attrs: Attributes,
    ) -> Result<String> {
        let options = self
            .model_options(name)
            .ok_or_else(|| FormerError::MissingModelOptions {
                field: name.to_string(),
            })?;
        Ok(self.render_select(name, label, &options, selected, attrs))
    }

    fn render_select(
        &mut self,
        name: &str,
        label: Option<&str>,
        options: &SelectOptions,
        selected: Option<Value>,
        attrs: Attributes,
    ) -> String {
        let selected = resolve_value(name, selected.as_ref(), &self.state, None);
        let attrs = prepare_attributes(&mut self.state, name, attrs, true);
        let field = self
            .renderer
            .select(name, options, Some(selected.as_text()), &attrs);
        wrap(&self.renderer, &self.state, &field, name, label, false)
    }

    fn model_options(&self, name: &str) -> Option<SelectOptions> {
        self.state
            .model()
            .and_then(|model| model.options_for(&normalize_field_name(name)))
    }

    /// Renders a wrapped checkbox.
    ///
    /// The checkbox is checked when the resolved value matches `value`, or
    /// when `checked` is given and nothing was submitted.
    pub fn checkbox(
        &mut self,
        name: &str,
        label: Option<&str>,
        value: &str,
        checked: Option<bool>,
        attrs: Attributes,
    ) -> String {
        let explicit = checked.map(Value::Bool);
        let checked = resolve_value(name, explicit.as_ref(), &self.state, Some(value));
        let attrs = prepare_attributes(&mut self.state, name, attrs, false);
        let field = self
            .renderer
            .checkbox(name, value, checked.is_checked(), &attrs);
        wrap(&self.renderer, &self.state, &field, name, label, true)
    }

    /// Renders a radio button. Radios are never wrapped.
    pub fn radio(
        &mut self,
        name: &str,
        value: &str,
        checked: Option<bool>,
        attrs: Attributes,
    ) -> String {
        let explicit = checked.map(Value::Bool);
        let checked = resolve_value(name, explicit.as_ref(), &self.state, Some(value));
        let attrs = prepare_attributes(&mut self.state, name, attrs, false);
        self.renderer
            .radio(name, value, checked.is_checked(), &attrs)
    }

    /// Renders a wrapped file input.
    pub fn file(&mut self, name: &str, attrs: Attributes) -> String {
        let attrs = prepare_attributes(&mut self.state, name, attrs, true);
        let field = self.renderer.file(name, &attrs);
        wrap(&self.renderer, &self.state, &field, name, Some(""), false)
    }

    /// Renders a label for a field.
    pub fn label(&self, name: &str, text: Option<&str>, attrs: Attributes) -> String {
        build_label(&self.renderer, &self.state, name, text, attrs)
    }

    /// Renders a submit button with the `btn` class.
    pub fn submit(&self, text: &str, mut attrs: Attributes) -> String {
        attrs.set("type", "submit");
        let has_btn = attrs
            .get_text("class")
            .is_some_and(|class| class.contains(BUTTON_CLASS));
        if !has_btn {
            attrs.append_class(BUTTON_CLASS);
        }
        self.button(text, attrs)
    }

    /// Renders a reset button with the `btn` class.
    pub fn reset(&self, text: &str, mut attrs: Attributes) -> String {
        attrs.set("type", "reset");
        attrs.append_class(BUTTON_CLASS);
        self.button(text, attrs)
    }

    /// Renders a button.
    pub fn button(&self, text: &str, attrs: Attributes) -> String {
        self.renderer.button(text, &attrs)
    }
}
