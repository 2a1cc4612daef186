// skip.RoundTrip
// Tells the proxy not to forward the request upstream

use serde::Serialize;

use crate::scope::Scope;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkipRoundTrip {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
}

impl Default for SkipRoundTrip {
    fn default() -> Self {
        Self {
            scope: Scope::Request,
        }
    }
}

impl SkipRoundTrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
