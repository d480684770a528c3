//! Per-node status reshaping.
//!
//! The status route returns one entry per (object, node) pair, keyed by a
//! composite `/`-separated string, each carrying the spec the node is running
//! and its live status. Consumers want a plain node → status mapping for a
//! single object; [`node_statuses`] produces it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node's report for one object: the spec it runs and its live status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Spec the node is currently running.
    #[serde(default)]
    pub spec: Value,
    /// Opaque status payload.
    #[serde(default)]
    pub status: Value,
}

/// The wire shape of a status response, keyed by composite key.
pub type RawStatus = BTreeMap<String, StatusEntry>;

/// Node name → status payload for a single object.
pub type Status = BTreeMap<String, Value>;

/// Reshape a raw status response into a node → status mapping for one object.
///
/// Composite keys look like `<prefix>/<objectName>/<nodePath...>`. The leading
/// segment is discarded unconditionally; the next segment must equal
/// `object_name` exactly or the entry is dropped (a response may carry other
/// objects' entries). The node name is the remaining segments rejoined with
/// `/`; when that is empty, the original full key stands in so the result
/// never carries an empty key.
#[must_use]
pub fn node_statuses(raw: RawStatus, object_name: &str) -> Status {
    let mut result = Status::new();
    for (key, entry) in raw {
        let mut segments = key.split('/');
        segments.next();
        if segments.next() != Some(object_name) {
            continue;
        }
        let node = segments.collect::<Vec<_>>().join("/");
        let node = if node.is_empty() { key } else { node };
        result.insert(node, entry.status);
    }
    result
}
