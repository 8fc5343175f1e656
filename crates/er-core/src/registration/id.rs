//! Registration identifier.

use serde::{Deserialize, Serialize};

/// Identifier issued for a submitted registration: `<prefix><unix-millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(String);

impl RegistrationId {
    pub fn from_parts(prefix: &str, issued_at_ms: i64) -> Self {
        Self(format!("{prefix}{issued_at_ms}"))
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn inner(&self) -> &String {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RegistrationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RegistrationId> for String {
    fn from(id: RegistrationId) -> Self {
        id.0
    }
}
