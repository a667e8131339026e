use serde::{Deserialize, Serialize};

/// Success value returned by a delivery channel.
///
/// The relay never interprets it; it is handed back to the host unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchResult(String);

impl DispatchResult {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decode the result as JSON, for channels that answer with a JSON document.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}

impl From<String> for DispatchResult {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DispatchResult {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Body returned to a caller when a request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub state: &'static str,
    pub message: String,
}
