//! Attributes shared by every xAPI document resource.

use std::str::from_utf8;

use chrono::{DateTime, FixedOffset};

use crate::attrs::{self, Fields};
use crate::{DocumentDefaults, DocumentError, TimestampInput};

/// The common base of state, activity profile and agent profile documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    id: Option<String>,
    content_type: Option<String>,
    content: Option<Vec<u8>>,
    etag: Option<String>,
    timestamp: Option<DateTime<FixedOffset>>,
}

impl Document {
    pub const FIELDS: &'static [&'static str] =
        &["id", "content_type", "content", "etag", "timestamp"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already separated attribute values, resolving the timestamp.
    pub(crate) fn from_parts(
        id: Option<String>,
        content_type: Option<String>,
        content: Option<Vec<u8>>,
        etag: Option<String>,
        timestamp: Option<TimestampInput>,
    ) -> Result<Self, DocumentError> {
        Ok(Self {
            id,
            content_type,
            content,
            etag,
            timestamp: timestamp.map(TimestampInput::resolve).transpose()?,
        })
    }

    /// Remove and decode the base attributes from `fields`.
    ///
    /// Callers must have rejected undeclared keys already.
    pub(crate) fn take_from(
        type_name: &'static str,
        fields: &mut Fields,
    ) -> Result<Self, DocumentError> {
        let timestamp: Option<String> = attrs::take(type_name, fields, &["timestamp"])?;
        Self::from_parts(
            attrs::take(type_name, fields, &["id"])?,
            attrs::take(type_name, fields, &["content_type"])?,
            attrs::take(type_name, fields, &["content"])?,
            attrs::take(type_name, fields, &["etag"])?,
            timestamp.map(TimestampInput::Iso8601),
        )
    }
}

/// Accessors for the base document attributes.
///
/// Implementors only expose their embedded [`Document`]; every accessor and
/// setter is provided.
pub trait DocumentResource {
    fn document(&self) -> &Document;

    fn document_mut(&mut self) -> &mut Document;

    fn id(&self) -> Option<&str> {
        self.document().id.as_deref()
    }

    fn content_type(&self) -> Option<&str> {
        self.document().content_type.as_deref()
    }

    fn content(&self) -> Option<&[u8]> {
        self.document().content.as_deref()
    }

    /// The content as text, when it is valid UTF-8.
    fn content_str(&self) -> Option<&str> {
        self.content().and_then(|content| from_utf8(content).ok())
    }

    fn etag(&self) -> Option<&str> {
        self.document().etag.as_deref()
    }

    fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.document().timestamp
    }

    fn set_id(&mut self, id: Option<String>) {
        self.document_mut().id = id;
    }

    fn set_content_type(&mut self, content_type: Option<String>) {
        self.document_mut().content_type = content_type;
    }

    fn set_content(&mut self, content: Option<Vec<u8>>) {
        self.document_mut().content = content;
    }

    fn set_etag(&mut self, etag: Option<String>) {
        self.document_mut().etag = etag;
    }

    /// Assign the timestamp, parsing string input.
    ///
    /// On a parse failure the stored timestamp is left untouched.
    fn set_timestamp(&mut self, timestamp: Option<TimestampInput>) -> Result<(), DocumentError> {
        let resolved = timestamp.map(TimestampInput::resolve).transpose()?;
        self.document_mut().timestamp = resolved;
        Ok(())
    }

    /// Fill unset attributes from `defaults`. Never overwrites.
    fn apply_defaults(&mut self, defaults: &DocumentDefaults) {
        let document = self.document_mut();
        if document.content_type.is_none() {
            document.content_type = Some(defaults.content_type().to_owned());
        }
    }
}

impl DocumentResource for Document {
    fn document(&self) -> &Document {
        self
    }

    fn document_mut(&mut self) -> &mut Document {
        self
    }
}
