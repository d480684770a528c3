//! HTTP server objects: routing rules for inbound traffic.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::{Object, take_field};

/// An object of kind `HTTPServer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpServer {
    /// Object name.
    pub name: String,
    /// Kind discriminator, always `"HTTPServer"` on the wire.
    #[serde(default)]
    pub kind: String,
    /// Listen port.
    #[serde(default)]
    pub port: u16,
    /// Routing rules, evaluated in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Object> for HttpServer {
    fn from(mut object: Object) -> Self {
        let port = take_field(&mut object.extra, "port");
        let rules = take_field(&mut object.extra, "rules");
        Self {
            name: object.name,
            kind: object.kind,
            port,
            rules,
            extra: object.extra,
        }
    }
}

/// A routing rule: host matching plus an ordered path list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Exact host to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Host regexp to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_regexp: Option<String>,
    /// Multiple host matchers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<Host>>,
    /// Path matchers, evaluated in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Path>>,
    /// Rule-level IP allow/block filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_filter: Option<IpFilter>,
}

/// One host matcher inside a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    /// Whether `value` is a regexp rather than an exact host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_regexp: Option<bool>,
    /// Host value.
    pub value: String,
}

/// A path matcher and its backend binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Path-level IP allow/block filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_filter: Option<IpFilter>,
    /// Exact path to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Path prefix to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    /// Path regexp to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_regexp: Option<String>,
    /// Rewrite target applied before forwarding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_target: Option<String>,
    /// HTTP methods to match; absent means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Backend pipeline handling matched requests.
    #[serde(default)]
    pub backend: String,
    /// Request body size limit in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_max_body_size: Option<i64>,
    /// Header matchers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Header>>,
    /// Query parameter matchers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<Query>>,
    /// Require all header matchers to match, not just one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_all_header: Option<bool>,
    /// Require all query matchers to match, not just one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_all_query: Option<bool>,
}

/// An IP allow/block filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFilter {
    /// Block requests that match neither list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_by_default: Option<bool>,
    /// IPs or CIDRs to allow.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "allowIPs")]
    pub allow_ips: Option<Vec<String>>,
    /// IPs or CIDRs to block.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "blockIPs")]
    pub block_ips: Option<Vec<String>>,
}

/// A header matcher: key plus an explicit value list or a regexp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Header key.
    pub key: String,
    /// Values that match exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Regexp that matches the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexp: Option<String>,
}

/// A query parameter matcher. Same shape as [`Header`].
pub type Query = Header;

/// Whether an IP filter has no effect: absent, or both lists absent/empty.
#[must_use]
pub fn is_ip_filter_empty(ip_filter: Option<&IpFilter>) -> bool {
    let Some(ip_filter) = ip_filter else {
        return true;
    };
    let populated = |list: Option<&Vec<String>>| list.is_some_and(|ips| !ips.is_empty());
    !populated(ip_filter.allow_ips.as_ref()) && !populated(ip_filter.block_ips.as_ref())
}

/// Whether a header (or query) matcher list is absent or zero-length.
#[must_use]
pub fn is_headers_empty(headers: Option<&[Header]>) -> bool {
    headers.is_none_or(<[Header]>::is_empty)
}
