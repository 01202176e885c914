//! Outbound request descriptor types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error_handling::ConfigurationError;

/// A single query parameter value (string or number on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Number(i64),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s),
            QueryValue::Number(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            QueryValue::Number(n) => Some(*n),
            QueryValue::Text(_) => None,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Number(value)
    }
}

/// Bid request the transport layer sends to the partner endpoint.
///
/// `url` never carries a query string; parameters travel in `data`.
/// Serializes as `{ "url", "data", "callbackId" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    pub url: String,
    pub data: BTreeMap<String, QueryValue>,
    pub callback_id: String,
}

impl RequestDescriptor {
    /// Looks up a query parameter.
    pub fn param(&self, key: &str) -> Option<&QueryValue> {
        self.data.get(key)
    }

    /// Renders the endpoint with all parameters appended as a query string.
    ///
    /// Values are percent-encoded, so the `|` and `,` separators inside `aus`
    /// come out as `%7C` and `%2C`.
    pub fn to_url(&self) -> Result<Url, ConfigurationError> {
        let mut url = Url::parse(&self.url).map_err(|e| ConfigurationError::InvalidEndpoint {
            endpoint: self.url.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.data {
                pairs.append_pair(key, &value.to_string());
            }
        }
        Ok(url)
    }
}
