//! Cluster definitions and the console configuration file.
//!
//! A [`Cluster`] resolves a logical cluster name to the concrete base URL of
//! its management API plus the credentials each request carries. Clusters are
//! usually declared in a YAML [`ClusterConfig`] file:
//!
//! ```yaml
//! currentCluster: prod
//! clusters:
//!   - name: prod
//!     server: https://gateway.internal:2381
//!     token: s3cret
//!   - name: dev
//!     server: http://127.0.0.1:2381
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// A single gateway cluster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Logical cluster name.
    pub name: String,
    /// Base URL of the management API, e.g. `https://gateway.internal:2381`.
    pub server: String,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Basic-auth user name. Ignored when `token` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Basic-auth password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Cluster {
    /// Create a cluster with no credentials.
    #[must_use]
    pub fn new(name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            token: None,
            username: None,
            password: None,
        }
    }

    /// Check that the server URL is usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless the URL starts with `http://` or
    /// `https://`.
    pub fn validate(&self) -> ClientResult<()> {
        if !self.server.starts_with("http://") && !self.server.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "invalid server URL for cluster {}: {}, must start with http:// or https://",
                self.name, self.server
            )));
        }
        Ok(())
    }

    /// Join the base URL with a route template.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server.trim_end_matches('/'))
    }
}

/// The console configuration file: known clusters plus a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Name of the cluster used when none is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_cluster: Option<String>,
    /// Known clusters.
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

impl ClusterConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text)?;
        debug!(path = %path.display(), clusters = config.clusters.len(), "loaded cluster config");
        Ok(config)
    }

    /// Parse configuration text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid YAML.
    pub fn parse(text: &str) -> ClientResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Resolve a cluster by name, or the configured/implied default.
    ///
    /// With no name given, the `currentCluster` entry wins; a config with a
    /// single cluster needs neither.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the requested cluster does not exist
    /// or no default can be determined.
    pub fn cluster(&self, name: Option<&str>) -> ClientResult<&Cluster> {
        let wanted = match name.or(self.current_cluster.as_deref()) {
            Some(wanted) => wanted,
            None if self.clusters.len() == 1 => return Ok(&self.clusters[0]),
            None => {
                return Err(ClientError::Config(
                    "no cluster selected and no currentCluster configured".into(),
                ));
            }
        };
        self.clusters
            .iter()
            .find(|c| c.name == wanted)
            .ok_or_else(|| ClientError::Config(format!("cluster {wanted} not found")))
    }
}
