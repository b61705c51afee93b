//! Attribute preparation for rendered controls.

use former_html::Attributes;

use crate::options::keys;
use crate::state::FormState;

/// Class added to text-like controls.
pub const CONTROL_CLASS: &str = "form-control";

/// Pseudo-attribute carrying a help comment for the field.
pub const COMMENT_ATTR: &str = "comment";

/// Prepares the attributes of a control before it is rendered.
///
/// - a `comment` pseudo-attribute moves into the form's comments,
/// - `id` is derived from the field name when `nameAsId` is on,
/// - a falsy `disabled` is dropped, since browsers disable on presence,
/// - `form-control` is appended unless `control_class` is false.
pub fn prepare_attributes(
    state: &mut FormState,
    name: &str,
    mut attrs: Attributes,
    control_class: bool,
) -> Attributes {
    if let Some(comment) = attrs.remove(COMMENT_ATTR) {
        match comment.as_text() {
            Some(text) if !text.is_empty() => state.set_comment(name, text),
            _ => {}
        }
    }

    let options = state.options();
    if options.flag(keys::NAME_AS_ID) && !attrs.contains("id") {
        attrs.set("id", format!("{}{name}", options.text(keys::ID_PREFIX)));
    }

    if attrs.get("disabled").is_some_and(|d| !d.is_truthy()) {
        attrs.remove("disabled");
    }

    if control_class {
        attrs.append_class(CONTROL_CLASS);
    }

    attrs
}
