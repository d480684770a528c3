//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use weir_client::{Cluster, ClusterConfig};

use crate::error::CliError;

/// weirctl - console for Weir gateway clusters.
#[derive(Parser, Debug, Clone)]
#[command(name = "weirctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Management API URL, bypassing any configuration file.
    #[arg(short, long, env = "WEIRCTL_SERVER")]
    pub server: Option<String>,

    /// Path to the cluster configuration file.
    #[arg(long, env = "WEIRCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cluster to select from the configuration file.
    #[arg(long, env = "WEIRCTL_CLUSTER")]
    pub cluster: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the target cluster from `--server` or the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source is given, the file cannot be
    /// loaded, or the requested cluster is unknown.
    pub fn resolve_cluster(&self) -> Result<Cluster, CliError> {
        if let Some(server) = &self.server {
            return Ok(Cluster::new("default", server.clone()));
        }
        let Some(path) = &self.config else {
            return Err(CliError::Config(
                "no cluster given: pass --server or --config".into(),
            ));
        };
        let config = ClusterConfig::load(path)?;
        let cluster = config.cluster(self.cluster.as_deref())?.clone();
        debug!(cluster = %cluster.name, server = %cluster.server, "resolved cluster");
        Ok(cluster)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable tables.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
    /// YAML output, the domain's native display format.
    Yaml,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all managed objects, grouped by kind.
    List,

    /// Create an object from a YAML spec file.
    Create {
        /// Path to the YAML spec.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace an existing object with a YAML spec file.
    ///
    /// The spec must keep the object's current name and kind; renames and
    /// kind changes are rejected before anything is sent.
    Update {
        /// Path to the YAML spec.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete an object by name.
    Delete {
        /// Object name.
        name: String,
    },

    /// Show the per-node status of an object.
    Status {
        /// Object name.
        name: String,
    },
}
