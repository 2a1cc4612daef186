// status.Modifier and status.Verifier

use serde::Serialize;

use crate::scope::Scope;

/// Overrides the response status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusModifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub status_code: Option<u16>,
}

impl StatusModifier {
    pub fn new(status_code: u16) -> Self {
        Self {
            scope: Scope::Default,
            status_code: Some(status_code),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusVerifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub status_code: Option<u16>,
}

impl StatusVerifier {
    pub fn new(status_code: u16) -> Self {
        Self {
            scope: Scope::Default,
            status_code: Some(status_code),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
