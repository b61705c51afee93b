//! Bootstrap markup around rendered controls.

use former_html::{html_escape, Attributes, ElementRenderer};
use ironhtml::html;
use ironhtml_elements::Label;
use tracing::debug;

use crate::options::keys;
use crate::state::FormState;

const CONTROL_LABEL_CLASS: &str = "control-label";
const CHECKBOX_LABEL_CLASS: &str = "checkbox";

/// Wraps a rendered control in its form group.
///
/// The group holds the label, the control, the inline error (when
/// enabled) and the field comment. For checkboxes the control and
/// comment sit inside a `<label class="checkbox">`, unless the control is
/// empty or `label` is `None`.
///
/// With the `bootstrap` option off, `control` is returned unchanged.
pub fn wrap<R: ElementRenderer + ?Sized>(
    renderer: &R,
    state: &FormState,
    control: &str,
    name: &str,
    label: Option<&str>,
    checkbox: bool,
) -> String {
    let options = state.options();
    if !options.flag(keys::BOOTSTRAP) {
        return control.to_string();
    }

    let error = state.first_error(name);
    debug!(field = %name, has_error = error.is_some(), checkbox, "wrapping control");

    let comment = state
        .comment(name)
        .filter(|c| !c.is_empty())
        .map(|c| comment_block(&options.text(keys::COMMENT_CLASS), c))
        .unwrap_or_default();

    let mut class = options.text(keys::FORM_GROUP_CLASS);
    let group_error = options.text(keys::CONTROL_GROUP_ERROR);
    if error.is_some() && !group_error.is_empty() {
        class = format!("{class} {group_error}");
    }

    let group_id = options
        .flag(keys::NAME_AS_ID)
        .then(|| format!("form-group-{name}"));

    let label_html = build_label(renderer, state, name, label, Attributes::new());

    let inline_error = error
        .filter(|_| options.flag(keys::DISPLAY_INLINE_ERRORS))
        .map(html_escape)
        .unwrap_or_default();

    let body = format!("{control}{inline_error}{comment}");
    let checkbox_label = checkbox && !control.is_empty() && label.is_some();

    let group = html! { div.class(#class) }
        .when(group_id.is_some(), |d| {
            d.attr("id", group_id.as_deref().unwrap_or_default())
        })
        .raw(&label_html);

    let group = if checkbox_label {
        group.child::<Label, _>(|l| l.class(CHECKBOX_LABEL_CLASS).raw(&body))
    } else {
        group.raw(&body)
    };

    format!("{}\n", group.render())
}

/// Builds the label for a field.
///
/// Returns an empty string when `label` is `None` or empty. A label ending
/// with the `requiredLabel` marker has the marker replaced by the
/// required prefix/suffix decoration and gets the required class.
pub fn build_label<R: ElementRenderer + ?Sized>(
    renderer: &R,
    state: &FormState,
    name: &str,
    label: Option<&str>,
    mut attrs: Attributes,
) -> String {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let options = state.options();
    attrs.append_class(CONTROL_LABEL_CLASS);

    let marker = options.text(keys::REQUIRED_LABEL);
    let text = match label.strip_suffix(marker.as_str()) {
        Some(stripped) if !marker.is_empty() => {
            attrs.append_class(&options.text(keys::REQUIRED_CLASS));
            format!(
                "{}{stripped}{}",
                options.text(keys::REQUIRED_PREFIX),
                options.text(keys::REQUIRED_SUFFIX)
            )
        }
        _ => label.to_string(),
    };

    let target = format!("{}{name}", options.text(keys::ID_PREFIX));
    renderer.label(&target, &text, &attrs)
}

fn comment_block(class: &str, comment: &str) -> String {
    html! { div.class(#class) }.raw(comment).render()
}
