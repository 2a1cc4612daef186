// URL nodes: url.Modifier, url.Verifier, url.Filter
// All three share the same optional scheme/host/path/query block

use serde::Serialize;

use super::Modifier;
use crate::scope::Scope;

/// Rewrites the parts of the request URL that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlModifier {
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

impl UrlModifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Records a failure when the request URL differs in any part that is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlVerifier {
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

impl UrlVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Runs `modifier` only for requests whose URL matches every part that is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlFilter {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Box<Modifier>>,
}

impl UrlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifier(&mut self, modifier: impl Into<Modifier>) {
        self.modifier = Some(Box::new(modifier.into()));
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.set_modifier(modifier);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
