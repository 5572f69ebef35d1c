//! Input validation helpers shared by the request DTOs.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] runs the derived
//! rules and folds any failures into a single [`CoreError::Validation`].

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Minimum accepted password length for admin accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject empty or whitespace-only strings.
///
/// For use with `#[validate(custom(function = "..."))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Reject negative monetary or distance amounts.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten validation errors into `"field: message; field: message"`,
/// sorted by field name so the output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' check", e.code));
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank"))]
        name: String,
        #[validate(email(message = "must be a valid email address"))]
        email: String,
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("  \t").is_err());
        assert!(not_blank("Sedan").is_ok());
    }

    #[test]
    fn non_negative_allows_zero() {
        assert!(non_negative(&Decimal::ZERO).is_ok());
        assert!(non_negative(&Decimal::new(1999, 2)).is_ok());
        assert!(non_negative(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            name: "Acme".into(),
            email: "sales@acme.test".into(),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn failures_are_reported_per_field_in_order() {
        let input = Sample {
            name: " ".into(),
            email: "not-an-email".into(),
        };
        assert_matches!(
            validate_input(&input),
            Err(CoreError::Validation(msg))
                if msg == "email: must be a valid email address; name: must not be blank"
        );
    }
}
