//! Tests for value precedence and the wrapper options.

mod common;
use common::*;

use former::{keys, resolve_value, wrap, FormState, JsonModel, ResolvedValue, ValidationErrors};
use former_html::{Attributes, ElementRenderer, HtmlRenderer};
use serde_json::json;

fn full_state(old: &[(&str, &str)]) -> FormState {
    let mut state = FormState::default();
    state.set_old_input(old_input(old));
    state.set_model(JsonModel::new(object(json!({"price": 10, "title": "Model"}))));
    state.set_defaults(object(json!({"price": 20, "title": "Default"})));
    state
}

#[test]
fn old_input_takes_precedence_over_everything() {
    for old in ["0", "", "5"] {
        let state = full_state(&[("price", old)]);
        let value = resolve_value("price", Some(&json!(30)), &state, None);
        assert_eq!(value, ResolvedValue::Text(old.to_string()));
    }
}

#[test]
fn explicit_zero_resolves_to_zero() {
    let state = full_state(&[]);
    let value = resolve_value("price", Some(&json!(0)), &state, None);
    assert_eq!(value.as_text(), "0");
}

#[test]
fn scenario_zero_with_empty_sources() {
    let mut state = FormState::default();
    state.set_old_input(old_input(&[]));
    state.set_defaults(object(json!({})));
    let value = resolve_value("price", Some(&json!(0)), &state, None);
    assert_eq!(value.as_text(), "0");
}

#[test]
fn precedence_falls_through_in_order() {
    let state = full_state(&[]);
    assert_eq!(resolve_value("price", None, &state, None).as_text(), "10");

    let mut state = FormState::default();
    state.set_defaults(object(json!({"price": 20})));
    assert_eq!(resolve_value("price", None, &state, None).as_text(), "20");
    assert_eq!(resolve_value("missing", None, &state, None).as_text(), "");
}

#[test]
fn model_zero_is_not_empty() {
    let mut state = FormState::default();
    state.set_model(JsonModel::new(object(json!({"stock": 0}))));
    state.set_defaults(object(json!({"stock": 7})));
    assert_eq!(resolve_value("stock", None, &state, None).as_text(), "0");
}

#[test]
fn wrap_without_bootstrap_is_byte_for_byte() {
    let control = r#"<input type="text" name="email" value="a&amp;b">"#;
    let mut state = FormState::default();
    state.set_option(keys::BOOTSTRAP, false);
    state.set_errors(ValidationErrors::new().with("email", "Invalid address"));
    assert_eq!(
        wrap(&HtmlRenderer, &state, control, "email", Some("Email"), true),
        control
    );
}

#[test]
fn scenario_inline_error_in_output() {
    let mut state = FormState::default();
    state.set_errors(ValidationErrors::new().with("email", "Invalid address"));
    state.set_option(keys::DISPLAY_INLINE_ERRORS, true);

    let control = HtmlRenderer.text("email", Some(""), &Attributes::new());
    let html = wrap(&HtmlRenderer, &state, &control, "email", Some("Email"), false);
    assert!(html.contains("Invalid address"));
    assert!(html.contains(&state.options().text(keys::CONTROL_GROUP_ERROR)));

    state.set_option(keys::DISPLAY_INLINE_ERRORS, false);
    let html = wrap(&HtmlRenderer, &state, &control, "email", Some("Email"), false);
    assert!(!html.contains("Invalid address"));
}

#[test]
fn errors_use_raw_field_name() {
    let mut state = FormState::default();
    state.set_errors(ValidationErrors::new().with("tags[]", "Pick one"));
    state.set_option(keys::DISPLAY_INLINE_ERRORS, true);

    let html = wrap(&HtmlRenderer, &state, "<select></select>", "tags[]", None, false);
    assert!(html.contains("Pick one"));

    let html = wrap(&HtmlRenderer, &state, "<select></select>", "tags", None, false);
    assert!(!html.contains("Pick one"));
}
