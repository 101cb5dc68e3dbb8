// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use powerdesk_domain::DomainError;
use powerdesk_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Storage refused an identifier that is already in use.
    IdentifierConflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::IdentifierConflict { message } => {
                write!(f, "Identifier conflict: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::InvalidFiscalYear(_) => invalid_input("fy", &err),
        DomainError::InvalidLinkedPid(_) => invalid_input("linked_pid", &err),
        DomainError::InvalidField { field, .. } => invalid_input(field, &err),
        DomainError::InvalidTimezone(_) => invalid_input("timezone", &err),
        DomainError::UnknownFamily(_) => invalid_input("family", &err),
        DomainError::UnknownCollection(_) => invalid_input("collection", &err),
        DomainError::DateParseError { .. } => invalid_input("date", &err),
        DomainError::InvalidTimestamp(_) | DomainError::SequenceOverflow { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Domain(domain_err) => translate_domain_error(domain_err),
        PersistenceError::RecordNotFound { .. } | PersistenceError::NotFound(_) => {
            ApiError::ResourceNotFound {
                resource_type: String::from("Record"),
                message: err.to_string(),
            }
        }
        PersistenceError::IdentifierConflict(_) => ApiError::IdentifierConflict {
            message: err.to_string(),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
