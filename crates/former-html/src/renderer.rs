//! Raw form element rendering.

use crate::{html_escape, Attributes, SelectOptions};

/// Renders bare HTML form elements.
///
/// Implementations only build tags. Value resolution, labels, errors and
/// Bootstrap wrapping happen in the caller.
pub trait ElementRenderer {
    /// Renders an opening `<form>` tag.
    fn open_form(&self, attrs: &Attributes) -> String;

    /// Renders a closing `</form>` tag.
    fn close_form(&self) -> String {
        "</form>".to_string()
    }

    /// Renders an `<input>` of the given type.
    fn input(&self, input_type: &str, name: &str, value: Option<&str>, attrs: &Attributes)
        -> String;

    /// Renders a text input.
    fn text(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        self.input("text", name, value, attrs)
    }

    /// Renders a password input. Passwords never carry a value.
    fn password(&self, name: &str, attrs: &Attributes) -> String {
        self.input("password", name, None, attrs)
    }

    /// Renders a hidden input.
    fn hidden(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        self.input("hidden", name, value, attrs)
    }

    /// Renders a file input.
    fn file(&self, name: &str, attrs: &Attributes) -> String {
        self.input("file", name, None, attrs)
    }

    /// Renders a `<textarea>`.
    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String;

    /// Renders a `<select>` with its options.
    fn select(
        &self,
        name: &str,
        options: &SelectOptions,
        selected: Option<&str>,
        attrs: &Attributes,
    ) -> String;

    /// Renders a checkbox or radio input.
    fn checkable(
        &self,
        input_type: &str,
        name: &str,
        value: &str,
        checked: bool,
        attrs: &Attributes,
    ) -> String;

    /// Renders a checkbox.
    fn checkbox(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        self.checkable("checkbox", name, value, checked, attrs)
    }

    /// Renders a radio button.
    fn radio(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        self.checkable("radio", name, value, checked, attrs)
    }

    /// Renders a `<label>` pointing at `target`.
    fn label(&self, target: &str, text: &str, attrs: &Attributes) -> String;

    /// Renders a `<button>`.
    fn button(&self, text: &str, attrs: &Attributes) -> String;
}

/// Plain HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ElementRenderer for HtmlRenderer {
    fn open_form(&self, attrs: &Attributes) -> String {
        let mut attrs = attrs.clone();
        let method = attrs
            .remove("method")
            .and_then(|m| m.as_text().map(str::to_uppercase))
            .unwrap_or_else(|| "POST".to_string());
        format!(
            r#"<form method="{}" accept-charset="UTF-8"{}>"#,
            html_escape(&method),
            attrs.to_html_suffix()
        )
    }

    fn input(
        &self,
        input_type: &str,
        name: &str,
        value: Option<&str>,
        attrs: &Attributes,
    ) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="{input_type}" name="{}"{value_attr}{}>"#,
            html_escape(name),
            attrs.to_html_suffix()
        )
    }

    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}"{}>{content}</textarea>"#,
            html_escape(name),
            attrs.to_html_suffix()
        )
    }

    fn select(
        &self,
        name: &str,
        options: &SelectOptions,
        selected: Option<&str>,
        attrs: &Attributes,
    ) -> String {
        let options_html: String = options
            .iter()
            .map(|(opt_value, label)| {
                let selected_attr = if selected == Some(opt_value.as_str()) {
                    r#" selected="selected""#
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected_attr}>{}</option>"#,
                    html_escape(opt_value),
                    html_escape(label)
                )
            })
            .collect();

        format!(
            r#"<select name="{}"{}>{options_html}</select>"#,
            html_escape(name),
            attrs.to_html_suffix()
        )
    }

    fn checkable(
        &self,
        input_type: &str,
        name: &str,
        value: &str,
        checked: bool,
        attrs: &Attributes,
    ) -> String {
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        format!(
            r#"<input type="{input_type}" name="{}" value="{}"{checked_attr}{}>"#,
            html_escape(name),
            html_escape(value),
            attrs.to_html_suffix()
        )
    }

    fn label(&self, target: &str, text: &str, attrs: &Attributes) -> String {
        format!(
            r#"<label for="{}"{}>{}</label>"#,
            html_escape(target),
            attrs.to_html_suffix(),
            html_escape(text)
        )
    }

    fn button(&self, text: &str, attrs: &Attributes) -> String {
        format!(
            "<button{}>{}</button>",
            attrs.to_html_suffix(),
            html_escape(text)
        )
    }
}
