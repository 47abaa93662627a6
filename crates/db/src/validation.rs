//! Field validation shared by the create/update payloads.

use thiserror::Error;

/// Prices carry at most three integer digits and two decimals.
pub const PRICE_MAX: f64 = 999.99;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} {kind}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("is required")]
    Required,
    #[error("must not be blank")]
    Blank,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
    #[error("must not precede start")]
    EndBeforeStart,
}

impl ValidationError {
    fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Required text field: present, within `min..=max` characters and not
/// whitespace-only.
pub fn required_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, ValidationErrorKind::Required));
    }
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationErrorKind::Blank));
    }
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::TooShort { min },
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::TooLong { max },
        ));
    }
    Ok(())
}

/// Optional text field: only bounded in length when present.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::new(
            field,
            ValidationErrorKind::TooLong { max },
        )),
        _ => Ok(()),
    }
}

/// Price must fit the supported precision.
pub fn price_in_range(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=PRICE_MAX).contains(&value) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::OutOfRange {
                min: 0.0,
                max: PRICE_MAX,
            },
        ));
    }
    Ok(())
}
