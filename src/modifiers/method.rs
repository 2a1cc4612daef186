// method.Verifier
// Fails verification when the request method differs from the expected one

use serde::Serialize;

use crate::scope::Scope;

/// Only meaningful on requests, so the default scope is `Scope::Request`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodVerifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub method: Option<String>,
}

impl Default for MethodVerifier {
    fn default() -> Self {
        Self {
            scope: Scope::Request,
            method: None,
        }
    }
}

impl MethodVerifier {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
