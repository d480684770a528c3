//! Generic managed objects and kind classification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, map::Entry};

use crate::httpserver::HttpServer;
use crate::pipeline::Pipeline;

/// Wire value of `kind` for pipeline objects.
pub const KIND_PIPELINE: &str = "Pipeline";

/// Wire value of `kind` for HTTP server objects.
pub const KIND_HTTP_SERVER: &str = "HTTPServer";

/// A managed configuration object as returned by the gateway API.
///
/// Only `name` and `kind` are modeled; every other field the server sends is
/// kept verbatim in `extra` so the object round-trips without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Object name, unique within a kind.
    pub name: String,
    /// Kind discriminator, e.g. `"Pipeline"` or `"HTTPServer"`.
    #[serde(default)]
    pub kind: String,
    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Object {
    /// Create an object with no extra fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            extra: Map::new(),
        }
    }

    /// The bucket this object's `kind` maps to.
    #[must_use]
    pub fn object_kind(&self) -> ObjectKind {
        ObjectKind::from_kind(&self.kind)
    }
}

/// Enumerated object kind.
///
/// Every `kind` string maps to exactly one variant; unrecognized kinds
/// (generic controllers) fall through to [`ObjectKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A filter pipeline.
    Pipeline,
    /// An inbound HTTP traffic server.
    HttpServer,
    /// Any other managed object.
    Other,
}

impl ObjectKind {
    /// Map a wire `kind` string to its bucket.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            KIND_PIPELINE => Self::Pipeline,
            KIND_HTTP_SERVER => Self::HttpServer,
            _ => Self::Other,
        }
    }
}

/// A fetched object collection, partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Objects {
    /// Objects of kind `Pipeline`.
    pub pipelines: Vec<Pipeline>,
    /// Objects of kind `HTTPServer`.
    #[serde(rename = "httpServers")]
    pub http_servers: Vec<HttpServer>,
    /// Everything else, in wire form.
    pub others: Vec<Object>,
}

impl Objects {
    /// Partition a flat object list into kind buckets.
    ///
    /// Single pass; insertion order is preserved within each bucket and every
    /// input object lands in exactly one bucket. Specialized fields are not
    /// validated here — see [`crate::pipeline::Pipeline::from`].
    pub fn classify(objects: impl IntoIterator<Item = Object>) -> Self {
        let mut result = Self::default();
        for object in objects {
            match object.object_kind() {
                ObjectKind::Pipeline => result.pipelines.push(Pipeline::from(object)),
                ObjectKind::HttpServer => result.http_servers.push(HttpServer::from(object)),
                ObjectKind::Other => result.others.push(object),
            }
        }
        result
    }

    /// Total object count across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pipelines.len() + self.http_servers.len() + self.others.len()
    }

    /// Whether no objects were fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the kind of a named object, across all buckets.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<&str> {
        self.pipelines
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.kind.as_str())
            .or_else(|| {
                self.http_servers
                    .iter()
                    .find(|s| s.name == name)
                    .map(|s| s.kind.as_str())
            })
            .or_else(|| {
                self.others
                    .iter()
                    .find(|o| o.name == name)
                    .map(|o| o.kind.as_str())
            })
    }
}

/// Pull a typed field out of an object's residual map.
///
/// A value that does not match the typed shape stays in `extra` untouched and
/// the field takes its default, so conversion never fails and never drops
/// data.
pub(crate) fn take_field<T>(extra: &mut Map<String, Value>, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match extra.entry(key) {
        Entry::Occupied(entry) => match serde_json::from_value(entry.get().clone()) {
            Ok(parsed) => {
                entry.remove();
                parsed
            }
            Err(_) => T::default(),
        },
        Entry::Vacant(_) => T::default(),
    }
}
