// cookie.Modifier
// Sets a cookie on requests or a Set-Cookie on responses; unset parts keep their values

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::scope::Scope;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieModifier {
    #[serde(skip_serializing_if = "Scope::is_default")]
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_expires"
    )]
    pub expires: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
}

impl CookieModifier {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, e.g. `2015-06-01T12:00:00.000Z`.
pub fn format_expires(expires: &DateTime<Utc>) -> String {
    expires.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_expires<S: Serializer>(
    expires: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match expires {
        Some(ts) => serializer.serialize_str(&format_expires(ts)),
        None => serializer.serialize_none(),
    }
}
