//! Field validation for the edit screens.
//!
//! Every rejection is a [`ValidationError`] whose `Display` text is the warning
//! shown on the screen's status line.

use thiserror::Error;

/// Free-text columns are `VARCHAR(45)` in the store.
pub const MAX_TEXT_LENGTH: usize = 45;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {field} field should not be empty!")]
    EmptyField { field: &'static str },

    #[error("The {field} cannot be longer than {max} characters!")]
    TooLong { field: &'static str, max: usize },

    #[error("The name field cannot be empty!")]
    EmptyName,

    #[error("The editable fields cannot be empty!")]
    EmptyEditableFields,

    #[error("Brewtime, Water Pressure and the ingredients have to be positive numbers!")]
    InvalidRecipeNumbers,

    #[error("A recipe with the name {0} already exists! Choose another name!")]
    RecipeNameTaken(String),

    #[error("A User with the username {0} already exists! Choose another username!")]
    UsernameTaken(String),
}

/// Rejects an empty input, naming the field in the warning.
pub fn require_filled(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Rejects inputs longer than [`MAX_TEXT_LENGTH`] characters.
pub fn require_max_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(())
}

/// Parses an integer input that must be strictly positive.
pub fn parse_positive(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

/// Parses an integer input that may be zero.
pub fn parse_non_negative(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|n| *n >= 0)
}
