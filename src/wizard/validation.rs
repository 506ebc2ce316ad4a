use super::draft::FormDraft;
use super::steps::{FieldKind, FieldSpec, StepSpec};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

fn check_field(draft: &FormDraft, field: &FieldSpec, errors: &mut Vec<FieldError>) {
    let value = draft.value(field.key);
    let path = field.key.path();

    if !field.optional && value.is_empty() {
        errors.push(FieldError {
            field: path,
            message: format!("{} is required", field.label),
        });
    }

    let Some(text) = value.as_text().filter(|text| !text.is_empty()) else {
        return;
    };

    if field.kind == FieldKind::Email && !is_valid_email(text) {
        errors.push(FieldError {
            field: path,
            message: "Please enter a valid email address".to_string(),
        });
    }

    if field.key.is_iron_distance() && !digits_pattern().is_match(text) {
        errors.push(FieldError {
            field: path,
            message: "Please enter a valid distance in yards".to_string(),
        });
    }
}

/// Client-side checks for one wizard page. Errors are reported in field order.
pub fn validate_step(step: &StepSpec, draft: &FormDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in &step.fields {
        check_field(draft, field, &mut errors);
    }
    errors
}
