// SPDX-License-Identifier: MIT

//! Errors raised while building parameter sources from external data.
//!
//! Evaluating an expression never fails; only loading a [`Map`](crate::Map)
//! from files, JSON or YAML can.

use thiserror::Error;

/// Error produced when loading parameters
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The document root was not an object / mapping
    #[error("Parameter document must be an object at the top level")]
    NotAnObject,

    /// A value that cannot be represented as a single string
    #[error("Unsupported value for parameter '{key}': arrays cannot be used as parameters")]
    UnsupportedValue { key: String },

    /// Two entries flattened to the same dotted key
    #[error("Parameter '{key}' is defined more than once")]
    DuplicateKey { key: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ParamsError {
    /// Create an unsupported value error
    pub fn unsupported(key: impl Into<String>) -> Self {
        Self::UnsupportedValue { key: key.into() }
    }

    /// Create a duplicate key error
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParamsError::NotAnObject.to_string(),
            "Parameter document must be an object at the top level"
        );
        assert_eq!(
            ParamsError::unsupported("tags").to_string(),
            "Unsupported value for parameter 'tags': arrays cannot be used as parameters"
        );
        assert_eq!(
            ParamsError::duplicate("user.role").to_string(),
            "Parameter 'user.role' is defined more than once"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: ParamsError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ParamsError::Json(_)));
    }
}
