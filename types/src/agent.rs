//! xAPI actors.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::DocumentError;
use crate::attrs::{self, Fields};

const MAILTO: &str = "mailto:";

/// An account on an external system, identifying an [`Agent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    home_page: Option<String>,
}

impl AgentAccount {
    const TYPE_NAME: &'static str = "AgentAccount";
    const FIELDS: &'static [&'static str] = &["name", "homePage", "home_page"];

    #[must_use]
    pub fn new(name: impl Into<String>, home_page: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            home_page: Some(home_page.into()),
        }
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        Ok(Self {
            name: attrs::take(Self::TYPE_NAME, &mut fields, &["name"])?,
            home_page: attrs::take(Self::TYPE_NAME, &mut fields, &["homePage", "home_page"])?,
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn home_page(&self) -> Option<&str> {
        self.home_page.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_home_page(&mut self, home_page: Option<String>) {
        self.home_page = home_page;
    }
}

impl<'de> Deserialize<'de> for AgentAccount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_map(Fields::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// An xAPI actor, identified by one of its inverse functional identifiers
/// (`mbox`, `mbox_sha1sum`, `openid`, `account`).
///
/// Invariant: a stored `mbox` always carries the `mailto:` scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Agent {
    name: Option<String>,
    mbox: Option<String>,
    mbox_sha1sum: Option<String>,
    openid: Option<String>,
    account: Option<AgentAccount>,
}

impl Agent {
    pub const OBJECT_TYPE: &'static str = "Agent";
    const TYPE_NAME: &'static str = "Agent";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "mbox",
        "mbox_sha1sum",
        "openid",
        "account",
        "objectType",
        "object_type",
    ];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mbox(mbox: impl Into<String>) -> Self {
        let mut agent = Self::new();
        agent.set_mbox(Some(mbox.into()));
        agent
    }

    #[must_use]
    pub fn with_account(account: AgentAccount) -> Self {
        Self {
            account: Some(account),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_map(mut fields: Fields) -> Result<Self, DocumentError> {
        attrs::reject_unknown(Self::TYPE_NAME, &fields, Self::FIELDS)?;
        attrs::check_object_type(Self::TYPE_NAME, &mut fields, Self::OBJECT_TYPE)?;

        let account = attrs::take_raw(Self::TYPE_NAME, &mut fields, &["account"])?
            .map(AgentAccount::from_value)
            .transpose()?;

        let mut agent = Self {
            name: attrs::take(Self::TYPE_NAME, &mut fields, &["name"])?,
            mbox: None,
            mbox_sha1sum: attrs::take(Self::TYPE_NAME, &mut fields, &["mbox_sha1sum"])?,
            openid: attrs::take(Self::TYPE_NAME, &mut fields, &["openid"])?,
            account,
        };
        agent.set_mbox(attrs::take(Self::TYPE_NAME, &mut fields, &["mbox"])?);
        Ok(agent)
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
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn mbox(&self) -> Option<&str> {
        self.mbox.as_deref()
    }

    #[must_use]
    pub fn mbox_sha1sum(&self) -> Option<&str> {
        self.mbox_sha1sum.as_deref()
    }

    #[must_use]
    pub fn openid(&self) -> Option<&str> {
        self.openid.as_deref()
    }

    #[must_use]
    pub fn account(&self) -> Option<&AgentAccount> {
        self.account.as_ref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Set the mailbox, adding the `mailto:` scheme when it is missing.
    pub fn set_mbox(&mut self, mbox: Option<String>) {
        self.mbox = mbox.map(|mbox| {
            if mbox.starts_with(MAILTO) {
                mbox
            } else {
                tracing::debug!(mbox = %mbox, "adding mailto scheme to agent mbox");
                format!("{MAILTO}{mbox}")
            }
        });
    }

    pub fn set_mbox_sha1sum(&mut self, mbox_sha1sum: Option<String>) {
        self.mbox_sha1sum = mbox_sha1sum;
    }

    pub fn set_openid(&mut self, openid: Option<String>) {
        self.openid = openid;
    }

    pub fn set_account(&mut self, account: Option<AgentAccount>) {
        self.account = account;
    }
}

impl TryFrom<Fields> for Agent {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

impl Serialize for Agent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("objectType", Self::OBJECT_TYPE)?;
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(mbox) = &self.mbox {
            map.serialize_entry("mbox", mbox)?;
        }
        if let Some(mbox_sha1sum) = &self.mbox_sha1sum {
            map.serialize_entry("mbox_sha1sum", mbox_sha1sum)?;
        }
        if let Some(openid) = &self.openid {
            map.serialize_entry("openid", openid)?;
        }
        if let Some(account) = &self.account {
            map.serialize_entry("account", account)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Agent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_map(Fields::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// An agent as supplied by a caller: typed, or a raw key/value mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentInput {
    Agent(Agent),
    Fields(Fields),
}

impl AgentInput {
    pub fn resolve(self) -> Result<Agent, DocumentError> {
        match self {
            Self::Agent(agent) => Ok(agent),
            Self::Fields(fields) => Agent::from_map(fields),
        }
    }
}

impl From<Agent> for AgentInput {
    fn from(value: Agent) -> Self {
        Self::Agent(value)
    }
}

impl From<Fields> for AgentInput {
    fn from(value: Fields) -> Self {
        Self::Fields(value)
    }
}
