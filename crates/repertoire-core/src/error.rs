use crate::domain::ContactField;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("{field} cannot be negative: {value}")]
    NegativeValue { field: ContactField, value: i64 },
    #[error("invalid role: {0}")]
    InvalidRole(String),
}
