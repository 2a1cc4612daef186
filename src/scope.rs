// Modifier scope for Martian configuration messages
// Decides whether a node runs on requests, responses, or both

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Where a modifier or verifier applies.
///
/// `Default` leaves the choice to the proxy and is never written to the wire.
/// The other values serialize as a `"scope"` array, request always first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Default,
    Request,
    Response,
    RequestAndResponse,
}

impl Scope {
    /// Entries of the `"scope"` array for this value.
    pub fn wire_values(&self) -> &'static [&'static str] {
        match self {
            Scope::Default => &[],
            Scope::Request => &["request"],
            Scope::Response => &["response"],
            Scope::RequestAndResponse => &["request", "response"],
        }
    }

    /// Used by `skip_serializing_if` so the field disappears for `Scope::Default`.
    pub fn is_default(&self) -> bool {
        matches!(self, Scope::Default)
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values = self.wire_values();
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Default => write!(f, "default"),
            Scope::Request => write!(f, "request"),
            Scope::Response => write!(f, "response"),
            Scope::RequestAndResponse => write!(f, "request_and_response"),
        }
    }
}
