//! Resolved configuration types shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `tincan-config`. The config loader resolves them into these types at the
//! parse boundary.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefaultsError {
    #[error("default content type must not be empty")]
    EmptyContentType,
}

/// Values applied to documents that leave the corresponding attribute unset.
///
/// Invariant: `content_type` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefaults {
    content_type: String,
}

impl DocumentDefaults {
    pub fn new(content_type: impl Into<String>) -> Result<Self, DefaultsError> {
        let content_type = content_type.into();
        if content_type.trim().is_empty() {
            return Err(DefaultsError::EmptyContentType);
        }
        Ok(Self { content_type })
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
