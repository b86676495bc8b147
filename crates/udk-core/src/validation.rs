//! Declarative form validation rules
//!
//! A single `RULES` table describes the required fields and per-field formats
//! of the user form. The same evaluator runs on per-field blur and on submit,
//! so the messages a user sees while typing match the ones that block the
//! submission. Validation never contacts the network.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

use crate::model::UserDraft;

/// Permissive phone pattern: digits, dashes, plus, whitespace, parentheses.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\-+\s()]*$").expect("phone pattern is valid"));

/// A form field the rules can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full display name
    Name,
    /// Contact email
    Email,
    /// Contact phone number
    Phone,
    /// Login-style handle; immutable once set for existing records
    Username,
    /// Address street line
    Street,
    /// Address city
    City,
    /// Optional company name
    Company,
    /// Optional website URL
    Website,
}

impl Field {
    /// Human-readable label, as used in validation messages and prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Username => "Username",
            Self::Street => "Street",
            Self::City => "City",
            Self::Company => "Company name",
            Self::Website => "Website",
        }
    }
}

/// Per-field format constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Email syntax
    Email,
    /// Permissive phone character set
    Phone,
    /// Well-formed URL
    Url,
}

impl Format {
    fn check(self, value: &str) -> Result<(), String> {
        match self {
            Self::Email if !value.validate_email() => Err("Invalid email format.".to_string()),
            Self::Phone if !PHONE_PATTERN.is_match(value) => {
                Err("Phone number is not valid.".to_string())
            }
            Self::Url if !is_web_url(value) => {
                Err("Website must be a valid URL.".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// The remote collection stores scheme-less hosts such as `hildegard.org`, so
/// a value that parses once a scheme is assumed also counts as a URL.
fn is_web_url(value: &str) -> bool {
    value.validate_url() || format!("https://{value}").validate_url()
}

/// One entry of the validation schema
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Field the rule applies to
    pub field: Field,
    /// Whether an empty value blocks submission
    pub required: bool,
    /// Minimum length in characters, checked only when a value is present
    pub min_len: Option<usize>,
    /// Format constraint, checked only when a value is present
    pub format: Option<Format>,
}

/// The validation schema for the user form.
pub const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        required: true,
        min_len: Some(3),
        format: None,
    },
    Rule {
        field: Field::Email,
        required: true,
        min_len: None,
        format: Some(Format::Email),
    },
    Rule {
        field: Field::Phone,
        required: true,
        min_len: None,
        format: Some(Format::Phone),
    },
    Rule {
        field: Field::Username,
        required: true,
        min_len: Some(3),
        format: None,
    },
    Rule {
        field: Field::Street,
        required: true,
        min_len: None,
        format: None,
    },
    Rule {
        field: Field::City,
        required: true,
        min_len: None,
        format: None,
    },
    Rule {
        field: Field::Company,
        required: false,
        min_len: Some(3),
        format: None,
    },
    Rule {
        field: Field::Website,
        required: false,
        min_len: None,
        format: Some(Format::Url),
    },
];

/// A field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field the message belongs to
    pub field: Field,
    /// User-facing message
    pub message: String,
}

/// All failures of a full-draft validation pass, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a specific field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over the failures in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn rule_for(field: Field) -> &'static Rule {
    RULES
        .iter()
        .find(|r| r.field == field)
        .expect("every field has a rule")
}

/// Value a field currently holds in the draft, with blank treated as absent.
fn value_of(draft: &UserDraft, field: Field) -> Option<&str> {
    let value = match field {
        Field::Name => Some(draft.name.as_str()),
        Field::Email => Some(draft.email.as_str()),
        Field::Phone => Some(draft.phone.as_str()),
        Field::Username => Some(draft.username.as_str()),
        Field::Street => Some(draft.address.street.as_str()),
        Field::City => Some(draft.address.city.as_str()),
        Field::Company => draft.company.as_ref().map(|c| c.name.as_str()),
        Field::Website => draft.website.as_deref(),
    };
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a single field of the draft, as on blur.
pub fn validate_field(draft: &UserDraft, field: Field) -> Result<(), FieldError> {
    let rule = rule_for(field);

    let Some(value) = value_of(draft, field) else {
        if rule.required {
            return Err(FieldError {
                field,
                message: format!("{} is required.", field.label()),
            });
        }
        // Optional and absent: nothing to check
        return Ok(());
    };

    if let Some(min) = rule.min_len {
        if value.chars().count() < min {
            return Err(FieldError {
                field,
                message: format!("{} must be at least {min} characters.", field.label()),
            });
        }
    }

    if let Some(format) = rule.format {
        if let Err(message) = format.check(value) {
            return Err(FieldError { field, message });
        }
    }

    Ok(())
}

/// Validate the whole draft, as on submit. Failures block submission.
pub fn validate_draft(draft: &UserDraft) -> Result<(), FieldErrors> {
    let errors: Vec<FieldError> = RULES
        .iter()
        .filter_map(|rule| validate_field(draft, rule.field).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}
