//! Construction and coercion errors for xAPI value types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// Construction input named an attribute the target type does not declare.
    #[error("'{type_name}' object has no attribute '{attribute}'")]
    UnknownAttribute {
        type_name: &'static str,
        attribute: String,
    },

    #[error("invalid timestamp '{raw}': {source}")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid value for '{type_name}.{attribute}': {reason}")]
    InvalidValue {
        type_name: &'static str,
        attribute: String,
        reason: String,
    },

    #[error("'{type_name}' can only be built from a key/value mapping")]
    NotAMapping { type_name: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DocumentError {
    pub fn unknown_attribute(type_name: &'static str, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            type_name,
            attribute: attribute.into(),
        }
    }

    pub fn invalid_value(
        type_name: &'static str,
        attribute: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            type_name,
            attribute: attribute.into(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Self::UnknownAttribute { .. })
    }

    #[must_use]
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, Self::InvalidTimestamp { .. })
    }
}
