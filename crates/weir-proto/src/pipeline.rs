//! Pipeline objects: ordered filter chains with conditional flow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::{Object, take_field};

/// A filter reference, configured inline in the pipeline spec.
///
/// Filter configs are open-ended per filter kind, so beyond `name`/`kind`
/// everything stays in the residual map.
pub type Filter = Object;

/// A resilience policy attached to the pipeline. Same open shape as filters.
pub type Resilience = Object;

/// An object of kind `Pipeline`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    /// Object name.
    pub name: String,
    /// Kind discriminator, always `"Pipeline"` on the wire.
    #[serde(default)]
    pub kind: String,
    /// Execution order of filters, with conditional jumps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flow: Vec<FlowNode>,
    /// Filter configurations referenced from `flow`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Resilience policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resilience: Vec<Resilience>,
    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One step in a pipeline's flow graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    /// Name of the filter to run.
    #[serde(default)]
    pub filter: String,
    /// Optional alias for jump targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Namespace the filter result is published under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Conditional jump targets, keyed by filter result.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub jump_if: BTreeMap<String, String>,
}

impl From<Object> for Pipeline {
    fn from(mut object: Object) -> Self {
        let flow = take_field(&mut object.extra, "flow");
        let filters = take_field(&mut object.extra, "filters");
        let resilience = take_field(&mut object.extra, "resilience");
        Self {
            name: object.name,
            kind: object.kind,
            flow,
            filters,
            resilience,
            extra: object.extra,
        }
    }
}
