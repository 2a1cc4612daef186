// body.Modifier
// Replaces the request or response body and its content type

use serde::Serialize;

use crate::scope::Scope;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyModifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    /// Replacement body, base64 encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl BodyModifier {
    pub fn new(body: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            scope: Scope::Default,
            body: Some(body.into()),
            content_type: Some(content_type.into()),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
