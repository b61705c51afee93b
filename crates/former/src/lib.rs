//! # former
//!
//! Bootstrap-styled form markup for server-rendered views.
//!
//! This crate provides:
//! - Value resolution from old input, explicit values, a bound model and
//!   form-wide defaults
//! - Form group wrapping with labels, inline errors and help comments
//! - Required-label decoration
//! - JSON configuration of the style options
//!
//! Raw tags are produced by an [`ElementRenderer`](former_html::ElementRenderer)
//! from the `former-html` crate; this crate decides what goes into them
//! and what goes around them.
//!
//! ## Quick Start
//!
//! ```rust
//! use former::{Former, FormerConfig, JsonModel};
//! use former_html::Attributes;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let model = JsonModel::new(
//!     json!({"title": "Hello", "price": 0}).as_object().cloned().unwrap(),
//! );
//!
//! let mut form = Former::new(&FormerConfig::default())
//!     .with_model(model)
//!     .with_old_input(HashMap::<String, String>::new());
//!
//! let open = form.open(Attributes::new());
//! let title = form.text("title", Some("Title.req"), None, Attributes::new());
//! let price = form.text("price", Some("Price"), None, Attributes::new());
//! let submit = form.submit("Save", Attributes::new());
//!
//! assert!(open.contains("form-horizontal"));
//! assert!(title.contains(r#"value="Hello""#));
//! assert!(title.contains("Title *"));
//! assert!(price.contains(r#"value="0""#));
//! assert_eq!(submit, r#"<button type="submit" class="btn">Save</button>"#);
//! ```
//!
//! ## Options
//!
//! Options come from [`FormerConfig`] and can be overridden per form with
//! [`Former::set_option`] or [`Former::set_options`]. Unknown or unset
//! options read as the empty string.
//!
//! ```rust
//! use former::{keys, Former};
//! use former_html::Attributes;
//!
//! let mut form = Former::default();
//! form.set_option(keys::BOOTSTRAP, false);
//!
//! let html = form.text("q", Some("Search"), None, Attributes::new());
//! assert!(html.starts_with("<input"));
//! ```

mod attributes;
mod builder;
mod error;
mod input;
mod model;
mod options;
mod state;
mod value;
mod wrapper;

pub use attributes::{prepare_attributes, COMMENT_ATTR, CONTROL_CLASS};
pub use builder::{Former, CSRF_FIELD};
pub use error::{FormerError, Result, ValidationErrors};
pub use input::{ErrorSource, OldInput};
pub use model::{FormModel, JsonModel};
pub use options::{keys, FormerConfig, OptionValue, Options};
pub use state::{normalize_field_name, FormState};
pub use value::{display_value, loosely_equals, resolve_value, ResolvedValue};
pub use wrapper::{build_label, wrap};
