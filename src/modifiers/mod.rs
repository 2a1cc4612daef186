// Modifier and verifier nodes for Martian configuration
//
// Each file holds one node family. Every node serializes as a single-key
// object: `{"<wire name>": { scope?, fields... }}`. Field order inside the
// object follows struct declaration order, so the structs below are laid out
// in the exact order the proxy fixtures expect.
//
//   leaf nodes: body, cookie, header, method, pingback, skip, url, status, querystring
//   composite:  header::HeaderFilter, url::UrlFilter, querystring::QueryStringFilter, fifo::FifoGroup

pub mod body;
pub mod cookie;
pub mod fifo;
pub mod header;
pub mod method;
pub mod pingback;
pub mod querystring;
pub mod skip;
pub mod status;
pub mod url;

pub use body::BodyModifier;
pub use cookie::CookieModifier;
pub use fifo::FifoGroup;
pub use header::{HeaderBlacklist, HeaderFilter, HeaderModifier, HeaderVerifier};
pub use method::MethodVerifier;
pub use pingback::PingbackVerifier;
pub use querystring::{QueryStringFilter, QueryStringModifier, QueryStringVerifier};
pub use skip::SkipRoundTrip;
pub use status::{StatusModifier, StatusVerifier};
pub use url::{UrlFilter, UrlModifier, UrlVerifier};

use serde::Serialize;
use serde_json::Value;

/// Any node that can be sent to the proxy's configure endpoint.
///
/// Composite variants own their children, so a tree of `Modifier`s is always
/// acyclic and each node has exactly one parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Modifier {
    #[serde(rename = "body.Modifier")]
    Body(BodyModifier),
    #[serde(rename = "cookie.Modifier")]
    Cookie(CookieModifier),
    #[serde(rename = "fifo.Group")]
    FifoGroup(FifoGroup),
    #[serde(rename = "header.Blacklist")]
    HeaderBlacklist(HeaderBlacklist),
    #[serde(rename = "header.Filter")]
    HeaderFilter(HeaderFilter),
    #[serde(rename = "header.Modifier")]
    HeaderModifier(HeaderModifier),
    #[serde(rename = "header.Verifier")]
    HeaderVerifier(HeaderVerifier),
    #[serde(rename = "method.Verifier")]
    MethodVerifier(MethodVerifier),
    #[serde(rename = "pingback.Verifier")]
    PingbackVerifier(PingbackVerifier),
    #[serde(rename = "skip.RoundTrip")]
    SkipRoundTrip(SkipRoundTrip),
    #[serde(rename = "url.Filter")]
    UrlFilter(UrlFilter),
    #[serde(rename = "url.Modifier")]
    UrlModifier(UrlModifier),
    #[serde(rename = "url.Verifier")]
    UrlVerifier(UrlVerifier),
    #[serde(rename = "status.Modifier")]
    StatusModifier(StatusModifier),
    #[serde(rename = "status.Verifier")]
    StatusVerifier(StatusVerifier),
    #[serde(rename = "querystring.Modifier")]
    QueryStringModifier(QueryStringModifier),
    #[serde(rename = "querystring.Filter")]
    QueryStringFilter(QueryStringFilter),
    #[serde(rename = "querystring.Verifier")]
    QueryStringVerifier(QueryStringVerifier),
}

impl Modifier {
    /// The fixed, case-sensitive name this node is registered under in the proxy.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Modifier::Body(_) => "body.Modifier",
            Modifier::Cookie(_) => "cookie.Modifier",
            Modifier::FifoGroup(_) => "fifo.Group",
            Modifier::HeaderBlacklist(_) => "header.Blacklist",
            Modifier::HeaderFilter(_) => "header.Filter",
            Modifier::HeaderModifier(_) => "header.Modifier",
            Modifier::HeaderVerifier(_) => "header.Verifier",
            Modifier::MethodVerifier(_) => "method.Verifier",
            Modifier::PingbackVerifier(_) => "pingback.Verifier",
            Modifier::SkipRoundTrip(_) => "skip.RoundTrip",
            Modifier::UrlFilter(_) => "url.Filter",
            Modifier::UrlModifier(_) => "url.Modifier",
            Modifier::UrlVerifier(_) => "url.Verifier",
            Modifier::StatusModifier(_) => "status.Modifier",
            Modifier::StatusVerifier(_) => "status.Verifier",
            Modifier::QueryStringModifier(_) => "querystring.Modifier",
            Modifier::QueryStringFilter(_) => "querystring.Filter",
            Modifier::QueryStringVerifier(_) => "querystring.Verifier",
        }
    }

    /// Compact wire JSON for this node and all of its children.
    ///
    /// No validation happens here: required fields left unset go out as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

macro_rules! impl_into_modifier {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Modifier {
                fn from(node: $node) -> Self {
                    Modifier::$variant(node)
                }
            }
        )*
    };
}

impl_into_modifier! {
    BodyModifier => Body,
    CookieModifier => Cookie,
    FifoGroup => FifoGroup,
    HeaderBlacklist => HeaderBlacklist,
    HeaderFilter => HeaderFilter,
    HeaderModifier => HeaderModifier,
    HeaderVerifier => HeaderVerifier,
    MethodVerifier => MethodVerifier,
    PingbackVerifier => PingbackVerifier,
    SkipRoundTrip => SkipRoundTrip,
    UrlFilter => UrlFilter,
    UrlModifier => UrlModifier,
    UrlVerifier => UrlVerifier,
    StatusModifier => StatusModifier,
    StatusVerifier => StatusVerifier,
    QueryStringModifier => QueryStringModifier,
    QueryStringFilter => QueryStringFilter,
    QueryStringVerifier => QueryStringVerifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_matches_serialized_key() {
        let nodes: Vec<Modifier> = vec![
            BodyModifier::default().into(),
            CookieModifier::default().into(),
            FifoGroup::default().into(),
            HeaderBlacklist::default().into(),
            HeaderFilter::default().into(),
            HeaderModifier::default().into(),
            HeaderVerifier::default().into(),
            MethodVerifier::default().into(),
            PingbackVerifier::default().into(),
            SkipRoundTrip::default().into(),
            UrlFilter::default().into(),
            UrlModifier::default().into(),
            UrlVerifier::default().into(),
            StatusModifier::default().into(),
            StatusVerifier::default().into(),
            QueryStringModifier::default().into(),
            QueryStringFilter::default().into(),
            QueryStringVerifier::default().into(),
        ];

        for node in nodes {
            let value = node.to_value().unwrap();
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 1);
            assert!(object.contains_key(node.wire_name()), "{}", node.wire_name());
        }
    }
}
