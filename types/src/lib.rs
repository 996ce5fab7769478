//! xAPI document resources and the value types they reference.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Network transport to a learning record store lives
//! elsewhere; everything here is plain data with validated construction.
//!
//! Every type that accepts loosely shaped input (a key/value mapping, an
//! ISO-8601 string) coerces it exactly once, at the constructor or setter,
//! through an explicit `*Input` enum.

mod activity;
mod agent;
mod attrs;
mod document;
mod error;
mod language_map;
mod profile;
mod settings;
mod state;
mod timestamp;

pub use activity::{
    Activity, ActivityDefinition, ActivityDefinitionInput, ActivityInput, InteractionType,
};
pub use agent::{Agent, AgentAccount, AgentInput};
pub use attrs::Fields;
pub use document::{Document, DocumentResource};
pub use error::DocumentError;
pub use language_map::{LanguageMap, LanguageMapInput};
pub use profile::{
    ActivityProfileDocument, ActivityProfileDocumentInit, AgentProfileDocument,
    AgentProfileDocumentInit,
};
pub use settings::{DefaultsError, DocumentDefaults};
pub use state::{StateDocument, StateDocumentInit};
pub use timestamp::{TimestampInput, parse_timestamp};
