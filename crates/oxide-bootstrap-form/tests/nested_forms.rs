//! Integration tests for nested builders.

mod common;

use common::{address, invalid_user};
use oxide_bootstrap_form::{FieldOptions, FormBuilder, FormObject, FormSettings};

#[test]
fn test_fields_for_scopes_ids_and_names() {
    let user = invalid_user();
    let address = address();
    let form = FormBuilder::for_object(&user, FormSettings::horizontal());
    let html = form.fields_for("address", Some(&address as &dyn FormObject), |nested| {
        nested.text_field("city", &FieldOptions::new())
    });

    assert!(html.contains(r#"id="user_address_city""#));
    assert!(html.contains(r#"name="user[address][city]""#));
    assert!(html.contains(r#"value="Brussels""#));
    assert!(html.contains("col-sm-2 required"));
    assert!(!html.contains("is-invalid"));
}

#[test]
fn test_form_tag_builder_uses_bare_names() {
    let form = FormBuilder::form_tag(FormSettings::new());
    let html = form.text_field("query", &FieldOptions::new());

    assert!(html.contains(r#"id="query""#));
    assert!(html.contains(r#"name="query""#));
    assert!(!html.contains("required"));
}

#[test]
fn test_form_tag_without_default_ids() {
    let form = FormBuilder::form_tag(FormSettings::new().skip_default_ids(true));
    let html = form.text_field("query", &FieldOptions::new());

    assert!(!html.contains("id="));
    assert!(!html.contains("for="));
}
