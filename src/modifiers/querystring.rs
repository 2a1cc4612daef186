// Query string nodes: querystring.Modifier, querystring.Verifier, querystring.Filter

use serde::Serialize;

use super::Modifier;
use crate::scope::Scope;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryStringModifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl QueryStringModifier {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scope: Scope::Default,
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// A verifier without `value` only checks that the parameter is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryStringVerifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl QueryStringVerifier {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scope: Scope::Default,
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryStringFilter {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Box<Modifier>>,
}

impl QueryStringFilter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
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
