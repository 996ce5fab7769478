//! Profile documents: arbitrary data stored against a single activity or a
//! single agent.

use serde::Serialize;
use serde_json::Value;

use crate::attrs::{self, Fields};
use crate::{
    Activity, ActivityInput, Agent, AgentInput, Document, DocumentError, DocumentResource,
    TimestampInput,
};

#[derive(Debug, Clone, Default)]
pub struct ActivityProfileDocumentInit {
    pub id: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<Vec<u8>>,
    pub etag: Option<String>,
    pub timestamp: Option<TimestampInput>,
    pub activity: Option<ActivityInput>,
}

/// A document in an activity's profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityProfileDocument {
    document: Document,
    activity: Option<Activity>,
}

impl ActivityProfileDocument {
    const TYPE_NAME: &'static str = "ActivityProfileDocument";
    pub const FIELDS: &'static [&'static str] =
        &["id", "content_type", "content", "etag", "timestamp", "activity"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_init(init: ActivityProfileDocumentInit) -> Result<Self, DocumentError> {
        let ActivityProfileDocumentInit {
            id,
            content_type,
            content,
            etag,
            timestamp,
            activity,
        } = init;

        Ok(Self {
            document: Document::from_parts(id, content_type, content, etag, timestamp)?,
            activity: activity.map(ActivityInput::resolve).transpose()?,
        })
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        Ok(Self {
            document: Document::take_from(Self::TYPE_NAME, &mut fields)?,
            activity: attrs::take_raw(Self::TYPE_NAME, &mut fields, &["activity"])?
                .map(Activity::from_value)
                .transpose()?,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Result<Self, DocumentError> {
        Self::from_map(attrs::object_fields(Self::TYPE_NAME, object)?)
    }

    #[must_use]
    pub fn activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    pub fn set_activity(&mut self, activity: Option<ActivityInput>) -> Result<(), DocumentError> {
        self.activity = activity.map(ActivityInput::resolve).transpose()?;
        Ok(())
    }
}

impl DocumentResource for ActivityProfileDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl TryFrom<Fields> for ActivityProfileDocument {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AgentProfileDocumentInit {
    pub id: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<Vec<u8>>,
    pub etag: Option<String>,
    pub timestamp: Option<TimestampInput>,
    pub agent: Option<AgentInput>,
}

/// A document in an agent's profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentProfileDocument {
    document: Document,
    agent: Option<Agent>,
}

impl AgentProfileDocument {
    const TYPE_NAME: &'static str = "AgentProfileDocument";
    pub const FIELDS: &'static [&'static str] =
        &["id", "content_type", "content", "etag", "timestamp", "agent"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_init(init: AgentProfileDocumentInit) -> Result<Self, DocumentError> {
        let AgentProfileDocumentInit {
            id,
            content_type,
            content,
            etag,
            timestamp,
            agent,
        } = init;

        Ok(Self {
            document: Document::from_parts(id, content_type, content, etag, timestamp)?,
            agent: agent.map(AgentInput::resolve).transpose()?,
        })
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        Ok(Self {
            document: Document::take_from(Self::TYPE_NAME, &mut fields)?,
            agent: attrs::take_raw(Self::TYPE_NAME, &mut fields, &["agent"])?
                .map(Agent::from_value)
                .transpose()?,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Result<Self, DocumentError> {
        Self::from_map(attrs::object_fields(Self::TYPE_NAME, object)?)
    }

    #[must_use]
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    pub fn set_agent(&mut self, agent: Option<AgentInput>) -> Result<(), DocumentError> {
        self.agent = agent.map(AgentInput::resolve).transpose()?;
        Ok(())
    }
}

impl DocumentResource for AgentProfileDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl TryFrom<Fields> for AgentProfileDocument {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}
