//! Catalog errors

use super::DevsetupError;

/// Creates a catalog not found error
pub fn not_found(category: impl Into<String>) -> DevsetupError {
    DevsetupError::CatalogNotFound {
        category: category.into(),
    }
}

/// Creates a catalog parse failed error
pub fn parse_failed(category: impl Into<String>, reason: impl Into<String>) -> DevsetupError {
    DevsetupError::CatalogParseFailed {
        category: category.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid catalog error
pub fn invalid(category: impl Into<String>, message: impl Into<String>) -> DevsetupError {
    DevsetupError::CatalogInvalid {
        category: category.into(),
        message: message.into(),
    }
}

/// Creates an unknown category error
pub fn unknown_category(id: impl Into<String>) -> DevsetupError {
    DevsetupError::UnknownCategory { id: id.into() }
}
