#![allow(dead_code)]

use oxide_bootstrap_form::validation::{LengthValidator, PresenceValidator};
use oxide_bootstrap_form::{Catalog, Record};

/// A user whose email is missing and whose name is too short.
pub fn invalid_user() -> Record {
    let mut user = Record::new("User")
        .with_value("name", "A")
        .with_validator("email", PresenceValidator::new())
        .with_validator("name", LengthValidator::minimum(2));
    user.validate();
    user
}

/// A valid user with a few preferences set.
pub fn valid_user() -> Record {
    Record::new("User")
        .with_value("email", "ada@example.com")
        .with_value("name", "Ada")
        .with_value("plan", "pro")
        .with_values("skills", ["rust", "zig"])
        .with_validator("email", PresenceValidator::new())
}

pub fn address() -> Record {
    Record::new("Address")
        .with_value("city", "Brussels")
        .with_validator("city", PresenceValidator::new())
}

pub fn skills() -> Vec<(String, String)> {
    vec![
        ("Rust".to_string(), "rust".to_string()),
        ("Go".to_string(), "go".to_string()),
        ("Zig".to_string(), "zig".to_string()),
    ]
}

pub fn catalog() -> Catalog {
    Catalog::new()
        .with("activerecord.help.user.email", "We never share it")
        .with("placeholders.user.name", "Your name")
        .with("labels.plan.pro", "Professional")
}
