// fifo.Group
// Runs its children strictly in the order they were added

use serde::Serialize;

use super::Modifier;
use crate::scope::Scope;

/// Ordered group of modifiers.
///
/// The `modifiers` array is written in insertion order, which is also the
/// execution order at the proxy. Children cannot be removed or reordered
/// once added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FifoGroup {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    modifiers: Vec<Modifier>,
}

impl FifoGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier to run after everything added so far.
    pub fn add_modifier(&mut self, modifier: impl Into<Modifier>) {
        self.modifiers.push(modifier.into());
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.add_modifier(modifier);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
