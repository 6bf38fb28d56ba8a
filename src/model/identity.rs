use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// An opaque caller identity, supplied by the presentation layer with every
/// call. The core never authenticates identities; it only compares them
/// against the stored authority and the voter registry.
///
/// The empty string is the null identity and can never be registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// Whether this is the null identity.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

impl From<String> for Identity {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}

impl Display for Identity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
