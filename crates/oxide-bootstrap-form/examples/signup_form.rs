//! Signup Form Example
//!
//! Renders a horizontal signup form for a user that failed validation and
//! prints the HTML.
//! Run with: cargo run --example signup_form

use oxide_bootstrap_form::validation::{EmailValidator, LengthValidator, PresenceValidator};
use oxide_bootstrap_form::{
    Accessor, AlertOptions, Catalog, Choices, Collection, FieldOptions, FormBuilder,
    FormSettings, HtmlAttributes, Record,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = Catalog::from_json(
        r#"{
            "activerecord": { "help": { "user": { "password": "At least 8 characters" } } },
            "placeholders": { "user": { "email": "you@example.com" } }
        }"#,
    )?;

    let mut user = Record::new("User")
        .with_value("email", "ada")
        .with_value("country", "be")
        .with_validator("email", PresenceValidator::new())
        .with_validator("email", EmailValidator::new())
        .with_validator("password", LengthValidator::minimum(8));
    let valid = user.validate();
    info!(valid, "validated signup");

    let form = FormBuilder::for_object(&user, FormSettings::horizontal()).with_translator(&catalog);
    let plans = [("Free", "free"), ("Pro", "pro")];

    let html = [
        form.alert_message("Please fix the errors below.", &AlertOptions::default()),
        form.email_field(
            "email",
            &FieldOptions::new().placeholder_scope("placeholders.user"),
        ),
        form.password_field("password", &FieldOptions::new()),
        form.select(
            "country",
            Choices::list([("Belgium", "be"), ("France", "fr")]),
            &FieldOptions::new().include_blank(""),
            &HtmlAttributes::new(),
        ),
        form.collection_radio_buttons(
            "plan",
            &Collection::new(&plans, Accessor::Member("last"), Accessor::Member("first")),
            &FieldOptions::new().inline(),
        ),
        form.check_box("terms", &FieldOptions::new().label("I accept the terms")),
        form.form_group(None, &Default::default(), || {
            form.primary(Some("Sign up"), &HtmlAttributes::new())
        }),
    ]
    .join("\n");

    println!("{html}");
    Ok(())
}
