//! Checks applied to caller-supplied arguments before they reach the
//! admin tool's command line.

use crate::error::CoreError;

/// Validate one caller-supplied argument.
///
/// Surrounding whitespace is ignored for the checks only; the value is
/// returned exactly as given.
///
/// # Errors
/// Returns [`CoreError::EmptyArgument`] if `value` is blank and
/// [`CoreError::OptionLikeArgument`] if it starts with `-`.
pub fn validate_argument<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyArgument { field: field.to_owned() });
    }
    if trimmed.starts_with('-') {
        return Err(CoreError::OptionLikeArgument {
            field: field.to_owned(),
            value: value.to_owned(),
        });
    }
    Ok(value)
}
