//! xAPI activities and their definitions.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::attrs::{self, Fields};
use crate::{DocumentError, LanguageMap, LanguageMapInput};

/// Kind of interaction an activity definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionType {
    TrueFalse,
    Choice,
    FillIn,
    LongFillIn,
    Matching,
    Performance,
    Sequencing,
    Likert,
    Numeric,
    Other,
}

/// Descriptive metadata for an [`Activity`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<LanguageMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<LanguageMap>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    more_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interaction_type: Option<InteractionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correct_responses_pattern: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Fields>,
}

impl ActivityDefinition {
    const TYPE_NAME: &'static str = "ActivityDefinition";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "type",
        "moreInfo",
        "more_info",
        "interactionType",
        "interaction_type",
        "correctResponsesPattern",
        "correct_responses_pattern",
        "extensions",
    ];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        let name = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["name"])?
            .map(LanguageMap::from_value)
            .transpose()?;
        let description = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["description"])?
            .map(LanguageMap::from_value)
            .transpose()?;
        Ok(Self {
            name,
            description,
            activity_type: attrs::take(Self::TYPE_NAME, &mut fields, &["type"])?,
            more_info: attrs::take(Self::TYPE_NAME, &mut fields, &["moreInfo", "more_info"])?,
            interaction_type: attrs::take(
                Self::TYPE_NAME,
                &mut fields,
                &["interactionType", "interaction_type"],
            )?,
            correct_responses_pattern: attrs::take(
                Self::TYPE_NAME,
                &mut fields,
                &["correctResponsesPattern", "correct_responses_pattern"],
            )?,
            extensions: attrs::take(Self::TYPE_NAME, &mut fields, &["extensions"])?,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    #[must_use]
    pub fn with_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = Some(activity_type.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: LanguageMap) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: LanguageMap) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&LanguageMap> {
        self.name.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn activity_type(&self) -> Option<&str> {
        self.activity_type.as_deref()
    }

    #[must_use]
    pub fn more_info(&self) -> Option<&str> {
        self.more_info.as_deref()
    }

    #[must_use]
    pub fn interaction_type(&self) -> Option<InteractionType> {
        self.interaction_type
    }

    #[must_use]
    pub fn correct_responses_pattern(&self) -> Option<&[String]> {
        self.correct_responses_pattern.as_deref()
    }

    #[must_use]
    pub fn extensions(&self) -> Option<&Fields> {
        self.extensions.as_ref()
    }

    pub fn set_name(&mut self, name: Option<LanguageMapInput>) -> Result<(), DocumentError> {
        self.name = name.map(LanguageMapInput::resolve).transpose()?;
        Ok(())
    }

    pub fn set_description(
        &mut self,
        description: Option<LanguageMapInput>,
    ) -> Result<(), DocumentError> {
        self.description = description.map(LanguageMapInput::resolve).transpose()?;
        Ok(())
    }

    pub fn set_activity_type(&mut self, activity_type: Option<String>) {
        self.activity_type = activity_type;
    }

    pub fn set_more_info(&mut self, more_info: Option<String>) {
        self.more_info = more_info;
    }

    pub fn set_interaction_type(&mut self, interaction_type: Option<InteractionType>) {
        self.interaction_type = interaction_type;
    }

    pub fn set_correct_responses_pattern(&mut self, pattern: Option<Vec<String>>) {
        self.correct_responses_pattern = pattern;
    }

    pub fn set_extensions(&mut self, extensions: Option<Fields>) {
        self.extensions = extensions;
    }
}

impl TryFrom<Fields> for ActivityDefinition {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

impl<'de> Deserialize<'de> for ActivityDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_map(Fields::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// An activity definition as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityDefinitionInput {
    Definition(ActivityDefinition),
    Fields(Fields),
}

impl ActivityDefinitionInput {
    pub fn resolve(self) -> Result<ActivityDefinition, DocumentError> {
        match self {
            Self::Definition(definition) => Ok(definition),
            Self::Fields(fields) => ActivityDefinition::from_map(fields),
        }
    }
}

impl From<ActivityDefinition> for ActivityDefinitionInput {
    fn from(value: ActivityDefinition) -> Self {
        Self::Definition(value)
    }
}

impl From<Fields> for ActivityDefinitionInput {
    fn from(value: Fields) -> Self {
        Self::Fields(value)
    }
}

/// An xAPI activity: the object of an experience, identified by an IRI.
///
/// Invariant: a present `id` is never blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    id: Option<String>,
    definition: Option<ActivityDefinition>,
}

impl Activity {
    pub const OBJECT_TYPE: &'static str = "Activity";
    const TYPE_NAME: &'static str = "Activity";
    const FIELDS: &'static [&'static str] = &["id", "definition", "objectType", "object_type"];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Result<Self, DocumentError> {
        let mut activity = Self::new();
        activity.set_id(Some(id.into()))?;
        Ok(activity)
    }

    #[must_use]
    pub fn with_definition(mut self, definition: ActivityDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        attrs::check_object_type(Self::TYPE_NAME, &mut fields, Self::OBJECT_TYPE)?;

        let definition = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["definition"])?
            .map(ActivityDefinition::from_value)
            .transpose()?;

        let mut activity = Self {
            id: None,
            definition,
        };
        activity.set_id(attrs::take(Self::TYPE_NAME, &mut fields, &["id"])?)?;
        Ok(activity)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn definition(&self) -> Option<&ActivityDefinition> {
        self.definition.as_ref()
    }

    pub fn definition_mut(&mut self) -> Option<&mut ActivityDefinition> {
        self.definition.as_mut()
    }

    pub fn set_id(&mut self, id: Option<String>) -> Result<(), DocumentError> {
        if id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(DocumentError::invalid_value(
                Self::TYPE_NAME,
                "id",
                "must not be empty",
            ));
        }
        self.id = id;
        Ok(())
    }

    pub fn set_definition(
        &mut self,
        definition: Option<ActivityDefinitionInput>,
    ) -> Result<(), DocumentError> {
        self.definition = definition
            .map(ActivityDefinitionInput::resolve)
            .transpose()?;
        Ok(())
    }
}

impl TryFrom<Fields> for Activity {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("objectType", Self::OBJECT_TYPE)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(definition) = &self.definition {
            map.serialize_entry("definition", definition)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_map(Fields::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// An activity as supplied by a caller: typed, or a raw key/value mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityInput {
    Activity(Activity),
    Fields(Fields),
}

impl ActivityInput {
    pub fn resolve(self) -> Result<Activity, DocumentError> {
        match self {
            Self::Activity(activity) => Ok(activity),
            Self::Fields(fields) => Activity::from_map(fields),
        }
    }
}

impl From<Activity> for ActivityInput {
    fn from(value: Activity) -> Self {
        Self::Activity(value)
    }
}

impl From<Fields> for ActivityInput {
    fn from(value: Fields) -> Self {
        Self::Fields(value)
    }
}
