//! # former-html
//!
//! Bare HTML form element rendering.
//!
//! This crate builds the individual tags (`<input>`, `<select>`,
//! `<label>`, ...) from a name, a value and an ordered attribute set.
//! It knows nothing about Bootstrap, old input or validation errors;
//! the `former` crate layers those on top through the
//! [`ElementRenderer`] trait.
//!
//! ```rust
//! use former_html::{Attributes, ElementRenderer, HtmlRenderer};
//!
//! let attrs = Attributes::new().with("class", "form-control");
//! let html = HtmlRenderer.text("email", Some("user@example.com"), &attrs);
//! assert_eq!(
//!     html,
//!     r#"<input type="text" name="email" value="user@example.com" class="form-control">"#
//! );
//! ```

mod attrs;
mod renderer;

pub use attrs::{AttrValue, Attributes};
pub use renderer::{ElementRenderer, HtmlRenderer};

/// Ordered `(value, label)` pairs for a `<select>`.
pub type SelectOptions = Vec<(String, String)>;

/// Builds [`SelectOptions`] from any iterator of value/label pairs.
pub fn select_options<I, V, L>(options: I) -> SelectOptions
where
    I: IntoIterator<Item = (V, L)>,
    V: Into<String>,
    L: Into<String>,
{
    options
        .into_iter()
        .map(|(v, l)| (v.into(), l.into()))
        .collect()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
