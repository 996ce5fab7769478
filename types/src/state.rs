//! State documents: arbitrary state stored against an
//! (activity, agent, registration) tuple.

use serde::Serialize;
use serde_json::Value;

use crate::attrs::{self, Fields};
use crate::{
    Activity, ActivityInput, Agent, AgentInput, Document, DocumentError, DocumentResource,
    TimestampInput,
};

/// Named construction arguments for [`StateDocument`].
///
/// Every field is optional; unset fields leave the attribute absent.
#[derive(Debug, Clone, Default)]
pub struct StateDocumentInit {
    pub id: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<Vec<u8>>,
    pub etag: Option<String>,
    pub timestamp: Option<TimestampInput>,
    pub agent: Option<AgentInput>,
    pub activity: Option<ActivityInput>,
    pub registration: Option<String>,
}

/// One xAPI state document.
///
/// Equality compares normalized values: a document built from a timestamp
/// string or an agent mapping equals one built from the typed equivalents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDocument {
    document: Document,
    agent: Option<Agent>,
    activity: Option<Activity>,
    registration: Option<String>,
}

impl StateDocument {
    const TYPE_NAME: &'static str = "StateDocument";
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "content_type",
        "content",
        "etag",
        "timestamp",
        "agent",
        "activity",
        "registration",
    ];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_init(init: StateDocumentInit) -> Result<Self, DocumentError> {
        let StateDocumentInit {
            id,
            content_type,
            content,
            etag,
            timestamp,
            agent,
            activity,
            registration,
        } = init;

        Ok(Self {
            document: Document::from_parts(id, content_type, content, etag, timestamp)?,
            agent: agent.map(AgentInput::resolve).transpose()?,
            activity: activity.map(ActivityInput::resolve).transpose()?,
            registration,
        })
    }

    /// Build from a key/value mapping keyed by attribute name.
    ///
    /// Fails with [`DocumentError::UnknownAttribute`] if any key is not a
    /// declared attribute, even when the remaining keys are valid.
    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;

        let document = Document::take_from(Self::TYPE_NAME, &mut fields)?;
        let agent = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["agent"])?
            .map(Agent::from_value)
            .transpose()?;
        let activity = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["activity"])?
            .map(Activity::from_value)
            .transpose()?;

        Ok(Self {
            document,
            agent,
            activity,
            registration: attrs::take(Self::TYPE_NAME, &mut fields, &["registration"])?,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    /// Build from any object whose serialized attribute names match.
    pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Result<Self, DocumentError> {
        Self::from_map(attrs::object_fields(Self::TYPE_NAME, object)?)
    }

    #[must_use]
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    #[must_use]
    pub fn activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    #[must_use]
    pub fn registration(&self) -> Option<&str> {
        self.registration.as_deref()
    }

    pub fn set_agent(&mut self, agent: Option<AgentInput>) -> Result<(), DocumentError> {
        self.agent = agent.map(AgentInput::resolve).transpose()?;
        Ok(())
    }

    pub fn set_activity(&mut self, activity: Option<ActivityInput>) -> Result<(), DocumentError> {
        self.activity = activity.map(ActivityInput::resolve).transpose()?;
        Ok(())
    }

    pub fn set_registration(&mut self, registration: Option<String>) {
        self.registration = registration;
    }
}

impl DocumentResource for StateDocument {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl TryFrom<Fields> for StateDocument {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

impl TryFrom<Value> for StateDocument {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<StateDocumentInit> for StateDocument {
    type Error = DocumentError;

    fn try_from(init: StateDocumentInit) -> Result<Self, Self::Error> {
        Self::from_init(init)
    }
}
