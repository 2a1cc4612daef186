// pingback.Verifier
// Expects at least one request to a matching URL; unset parts match anything

use serde::Serialize;

use crate::scope::Scope;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PingbackVerifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl PingbackVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
