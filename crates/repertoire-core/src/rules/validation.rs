use crate::domain::ContactField;
use crate::error::CoreError;

/// Trims `value` and rejects it when nothing is left.
pub fn require_text(field: ContactField, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional value, keeping `None` as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}

pub fn ensure_non_negative(field: ContactField, value: i64) -> Result<i64, CoreError> {
    if value < 0 {
        return Err(CoreError::NegativeValue { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{ensure_non_negative, optional_text, require_text};
    use crate::domain::ContactField;
    use crate::error::CoreError;

    #[test]
    fn require_text_trims() {
        let value = require_text(ContactField::Nom, "  Kalala ").expect("valid");
        assert_eq!(value, "Kalala");
    }

    #[test]
    fn require_text_names_the_field() {
        let err = require_text(ContactField::Postnom, " \t ").unwrap_err();
        assert_eq!(err, CoreError::MissingField(ContactField::Postnom));
        assert_eq!(err.to_string(), "postnom is required");
    }

    #[test]
    fn optional_text_keeps_absent() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some(" Kinshasa ")).as_deref(), Some("Kinshasa"));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(ContactField::Id, 0), Ok(0));
        assert!(ensure_non_negative(ContactField::CompteId, -1).is_err());
    }
}
