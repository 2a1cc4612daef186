// Header nodes: header.Modifier, header.Verifier, header.Blacklist, header.Filter

use serde::Serialize;

use super::Modifier;
use crate::scope::Scope;

/// Sets header `name` to `value`. Both fields are required by the proxy and
/// are written as `null` when left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderModifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub name: Option<String>,
    pub value: Option<String>,
}

impl HeaderModifier {
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

/// Records a verification failure unless header `name` carries `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderVerifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub name: Option<String>,
    pub value: Option<String>,
}

impl HeaderVerifier {
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

/// Strips every listed header. Names go out in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderBlacklist {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    pub names: Vec<String>,
}

impl HeaderBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Runs `modifier` only when the live message has a header matching `name`
/// (and `value`, if set).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderFilter {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Box<Modifier>>,
}

impl HeaderFilter {
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
