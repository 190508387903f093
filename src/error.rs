//! Error types for the Employee Database GUI

use thiserror::Error;

use crate::models::FormField;

/// Why a form commit was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form is incomplete, missing: {}", join_fields(.missing))]
    Incomplete { missing: Vec<FormField> },
    #[error("form is not open")]
    NotOpen,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}
