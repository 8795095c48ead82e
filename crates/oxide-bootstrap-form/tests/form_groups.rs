//! Integration tests for form groups around single fields.

mod common;

use common::{catalog, invalid_user, valid_user};
use oxide_bootstrap_form::{
    FieldOptions, FormBuilder, FormSettings, GroupOptions, LabelDescriptor, Layout,
};

#[test]
fn test_horizontal_email_with_inline_error() {
    let user = invalid_user();
    let form = FormBuilder::for_object(&user, FormSettings::horizontal());
    let html = form.email_field("email", &FieldOptions::new());

    assert!(html.starts_with(r#"<div class="form-group">"#));
    assert!(html.contains(r#"class="control-label col-sm-2 required""#));
    assert!(html.contains(r#"for="user_email""#));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"class="form-control is-invalid""#));
    assert!(html.contains(r#"<div class="col-sm-10">"#));
    assert!(html.contains(r#"class="invalid-feedback""#));
    assert!(html.contains("be blank"));
}

#[test]
fn test_label_errors_replace_inline_feedback() {
    let user = invalid_user();
    let settings = FormSettings::new().label_errors(true).inline_errors(false);
    let form = FormBuilder::for_object(&user, settings);
    let html = form.text_field("name", &FieldOptions::new());

    assert!(html.contains("Name is too short"));
    assert!(!html.contains("invalid-feedback"));
    assert!(!html.contains("is-invalid"));
}

#[test]
fn test_unlabeled_horizontal_group_is_offset() {
    let user = valid_user();
    let form = FormBuilder::for_object(&user, FormSettings::horizontal());
    let html = form.form_group(None, &GroupOptions::new(), || "<p>Hi</p>".to_string());

    assert!(html.contains(r#"class="col-sm-10 col-sm-offset-2""#));
    assert!(!html.contains("<label"));
}

#[test]
fn test_label_descriptor_wins_over_field_id() {
    let user = valid_user();
    let form = FormBuilder::for_object(&user, FormSettings::new());
    let options = GroupOptions::new()
        .id("custom_id")
        .label(LabelDescriptor::new().text("Mail").class("lead").for_id("other"));
    let html = form.form_group(Some("email"), &options, String::new);

    assert!(html.contains(r#"for="other""#));
    assert!(html.contains("lead control-label required"));
    assert!(html.contains("Mail"));
}

#[test]
fn test_help_from_catalog_and_explicit_help() {
    let user = valid_user();
    let catalog = catalog();
    let form = FormBuilder::for_object(&user, FormSettings::new()).with_translator(&catalog);

    let from_catalog = form.email_field("email", &FieldOptions::new());
    assert!(from_catalog.contains(r#"class="form-text""#));
    assert!(from_catalog.contains("We never share it"));

    let explicit = form.email_field("email", &FieldOptions::new().help("Work address"));
    assert!(explicit.contains("Work address"));
    assert!(!explicit.contains("We never share it"));

    let suppressed = form.email_field("email", &FieldOptions::new().no_help());
    assert!(!suppressed.contains("form-text"));
}

#[test]
fn test_placeholder_scope_and_hidden_label() {
    let user = valid_user();
    let catalog = catalog();
    let form = FormBuilder::for_object(&user, FormSettings::new()).with_translator(&catalog);
    let options = FieldOptions::new()
        .placeholder_scope("placeholders.user")
        .hide_label();
    let html = form.text_field("name", &options);

    assert!(html.contains(r#"placeholder="Your name""#));
    assert!(html.contains("sr-only"));
}

#[test]
fn test_field_layout_overrides_form_layout() {
    let user = valid_user();
    let form = FormBuilder::for_object(&user, FormSettings::horizontal());
    let html = form.text_field("name", &FieldOptions::new().layout(Layout::Default));

    assert!(!html.contains("col-sm-2"));
    assert!(!html.contains("col-sm-10"));
}

#[test]
fn test_without_wrapper_renders_bare_control() {
    let user = valid_user();
    let form = FormBuilder::for_object(&user, FormSettings::new());
    let html = form.text_field("name", &FieldOptions::new().no_wrapper());

    assert!(html.starts_with("<input"));
    assert!(!html.contains("form-group"));
}
