//! Tests for the rendered form controls.

mod common;
use common::*;

use former::{FormerError, JsonModel, ValidationErrors, CSRF_FIELD};
use former_html::{select_options, Attributes};
use serde_json::json;

#[test]
fn open_adds_form_class_and_csrf_token() {
    let form = form().with_csrf_token("test");
    let html = form.open(Attributes::new());

    assert!(html.contains(r#"class="form-horizontal""#));
    assert!(html.contains(r#"autocomplete="off""#));
    assert!(html.contains(CSRF_FIELD));
    assert!(html.ends_with(r#"value="test">"#));
}

#[test]
fn open_appends_form_class_to_custom_class() {
    let form = form();
    let html = form.open(Attributes::new().with("class", "wide"));
    assert!(html.contains(r#"class="wide form-horizontal""#));

    let html = form.open(Attributes::new().with("class", "form-inline"));
    assert!(html.contains(r#"class="form-inline""#));
    assert!(!html.contains("form-horizontal"));
}

#[test]
fn close_form() {
    assert_eq!(form().close(), "</form>");
}

#[test]
fn text_with_required_label_and_default() {
    let mut form = form();
    let html = form.text(
        "name",
        Some("Text.req"),
        Some(json!("default value")),
        Attributes::new().with("class", "custom-class"),
    );

    assert!(html.contains(r#"for="name""#));
    assert!(html.contains("Text *"));
    assert!(html.contains("label-required"));
    assert!(html.contains("default value"));
    assert!(html.contains("custom-class form-control"));
}

#[test]
fn text_without_label_keeps_custom_attributes() {
    let mut form = form();
    let html = form.text(
        "foobar",
        None,
        None,
        Attributes::new().with("attribute", "something"),
    );
    assert!(html.contains(r#"name="foobar""#));
    assert!(html.contains(r#"attribute="something""#));
    assert!(!html.contains("<label"));
}

#[test]
fn zero_values_are_rendered() {
    let mut form = form();

    let html = form.text("name", Some("label"), Some(json!(0)), Attributes::new());
    assert!(html.contains(r#"value="0""#));

    let html = form.textarea("name", Some("label"), Some(json!(0)), Attributes::new());
    assert!(html.contains("0</textarea>"));

    let html = form.checkbox("name", Some("label"), "0", Some(true), Attributes::new());
    assert!(html.contains(r#"value="0""#));
    assert!(html.contains(r#"checked="checked""#));

    let html = form.hidden("name", Some(json!(0)), Attributes::new());
    assert!(html.contains(r#"value="0""#));
}

#[test]
fn textarea_defaults_to_four_rows() {
    let mut form = form();
    let html = form.textarea("body", Some("Body"), None, Attributes::new());
    assert!(html.contains(r#"rows="4""#));

    let html = form.textarea("body", Some("Body"), None, Attributes::new().with("rows", "8"));
    assert!(html.contains(r#"rows="8""#));
}

#[test]
fn password_is_never_repopulated() {
    let mut form = form().with_old_input(old_input(&[("secret", "hunter2")]));
    let html = form.password("secret", Some("Password"), Attributes::new());
    assert!(html.contains(r#"type="password""#));
    assert!(!html.contains("hunter2"));
}

#[test]
fn checkbox_with_label() {
    let mut form = form();
    let html = form.checkbox("foobar", Some("Label"), "1", None, Attributes::new());
    assert!(html.contains(r#"name="foobar""#));
    assert!(html.contains("Label"));
    assert!(html.contains(r#"<label class="checkbox">"#));
    assert!(!html.contains("form-control"));
}

#[test]
fn checkbox_null_label() {
    let mut form = form();
    let html = form.checkbox(
        "foobar",
        None,
        "1",
        Some(true),
        Attributes::new().with("class", "bar"),
    );
    assert!(html.contains(r#"name="foobar""#));
    assert!(!html.contains("label"));
    assert!(html.contains(r#"value="1""#));
    assert!(html.contains(r#"checked="checked""#));
    assert!(html.contains(r#"class="bar"#));
}

#[test]
fn checkbox_rechecked_from_old_input() {
    let mut form = form().with_old_input(old_input(&[("agree", "1")]));
    let html = form.checkbox("agree", Some("Agree"), "1", Some(false), Attributes::new());
    assert!(html.contains(r#"checked="checked""#));
}

#[test]
fn radio_is_not_wrapped() {
    let mut form = form().make(object(json!({"color": "red"})));
    let red = form.radio("color", "red", None, Attributes::new());
    let blue = form.radio("color", "blue", None, Attributes::new());

    assert!(red.starts_with("<input"));
    assert!(red.contains(r#"checked="checked""#));
    assert!(!blue.contains("checked"));
    assert!(!red.contains("form-control"));
}

#[test]
fn select_with_options() {
    let mut form = form();
    let options = select_options([("0", "Example"), ("1", "First"), ("2", "Second")]);
    let html = form.select("foobar", Some("Label"), Some(options), None, Attributes::new());
    assert!(html.contains(r#"name="foobar""#));
    assert!(html.contains("Label"));
    assert!(html.contains(r#"<option value="1">First</option>"#));
}

#[test]
fn select_without_options() {
    let mut form = form();
    let html = form.select("test", None, Some(Vec::new()), None, Attributes::new());
    assert!(!html.contains("option"));

    let html = form.select("test", None, None, None, Attributes::new());
    assert!(!html.contains("option"));
}

#[test]
fn file_input() {
    let mut form = form();
    let html = form.file("test", Attributes::new());
    assert!(html.contains(r#"name="test""#));
    assert!(html.contains(r#"type="file""#));

    let html = form.file("foobar", Attributes::new().with("class", "something"));
    assert!(html.contains(r#"name="foobar""#));
    assert!(html.contains(r#"class="something"#));
}

#[test]
fn label_helper() {
    let form = form();
    assert_eq!(
        form.label("email", Some("Email.req"), Attributes::new()),
        r#"<label for="email" class="control-label label-required">Email *</label>"#
    );
}

#[test]
fn submit_and_reset_buttons() {
    let form = form();
    assert_eq!(
        form.submit("Submit", Attributes::new()),
        r#"<button type="submit" class="btn">Submit</button>"#
    );

    let html = form.submit("Submit", Attributes::new().with("class", "foobar"));
    assert!(html.contains("foobar btn"));

    let html = form.submit("Go", Attributes::new().with("class", "btn btn-primary"));
    assert!(html.contains(r#"class="btn btn-primary""#));

    let html = form.reset("Reset", Attributes::new());
    assert_eq!(html, r#"<button type="reset" class="btn">Reset</button>"#);
}

#[test]
fn old_input_populates_text() {
    let mut form = form().with_old_input(old_input(&[("test", "foobar")]));
    let html = form.text("test", None, None, Attributes::new());
    assert!(html.contains("foobar"));
}

#[test]
fn model_populates_text_and_select() {
    let model = JsonModel::new(object(json!({"test": "foobar", "id": 3})));
    let mut form = form().with_model(model);

    let html = form.text("test", None, None, Attributes::new());
    assert!(html.contains("foobar"));

    let options = select_options([("1", "foo"), ("2", "bar"), ("3", "test"), ("4", "foobar")]);
    let html = form.select("id", None, Some(options), None, Attributes::new());
    assert!(html.contains(r#"value="3" selected"#));
}

#[test]
fn array_field_names() {
    let model = JsonModel::new(object(json!({"test": "foobar"})))
        .with_options("test_select", select_options([("1", "a"), ("2", "b"), ("3", "c")]));
    let mut form = form().with_model(model);

    let html = form.text("test[]", None, None, Attributes::new());
    assert!(html.contains(r#"name="test[]""#));
    assert!(html.contains(r#"value="foobar""#));

    let html = form.text("value[1]", Some("Label"), Some(json!("foo")), Attributes::new());
    assert!(html.contains(r#"name="value[1]""#));

    let html = form.select("test_select[]", None, None, None, Attributes::new());
    assert!(html.contains(r#"name="test_select[]""#));
    assert!(html.contains(r#"<option value="1">a</option>"#));
    assert!(html.contains(r#"<option value="2">b</option>"#));
    assert!(html.contains(r#"<option value="3">c</option>"#));

    let options = select_options([("0", "a"), ("1", "b"), ("2", "c")]);
    let html = form.select("test_select[1]", Some("Label.req"), Some(options), None, Attributes::new());
    assert!(html.contains(r#"name="test_select[1]""#));
}

#[test]
fn select_from_model_requires_options() {
    let mut form = form().with_model(JsonModel::default());
    let err = form
        .try_select_from_model("category", None, None, Attributes::new())
        .unwrap_err();
    assert!(matches!(err, FormerError::MissingModelOptions { ref field } if field == "category"));

    let model = JsonModel::default().with_options("category", select_options([("1", "News")]));
    let mut form = form.with_model(model);
    let html = form
        .try_select_from_model("category", Some("Category"), None, Attributes::new())
        .unwrap();
    assert!(html.contains(r#"<option value="1">News</option>"#));
}

#[test]
fn errors_mark_the_group() {
    let errors = ValidationErrors::new().with("test", "Error message.");
    let mut form = form().with_errors(errors);
    let html = form.text("test", None, None, Attributes::new());
    assert!(html.contains("has-error"));
}

#[test]
fn comment_attribute_is_rendered_as_help_block() {
    let mut form = form();
    let html = form.text(
        "email",
        Some("Email"),
        None,
        Attributes::new().with("comment", "We never share it"),
    );
    assert!(html.contains("help-block"));
    assert!(html.contains("We never share it</div>"));
    assert!(!html.contains(r#"comment=""#));
    assert_eq!(form.state().comment("email"), Some("We never share it"));
}
