//! # weir-cli
//!
//! Terminal console for Weir gateway clusters.
//!
//! Provides commands for:
//! - Listing managed objects by kind
//! - Creating, updating, and deleting objects from YAML specs
//! - Inspecting per-node object status
//!
//! # Architecture
//!
//! The console is presentation glue only: [`weir_client::Client`] performs
//! the REST calls and owns all data-shape logic; the command handlers here
//! read files, run the edit-time name/kind guard, and format output.
//!
//! ```text
//! ┌─────────┐    management REST API    ┌──────────────────┐
//! │ weirctl │◄─────────────────────────►│  gateway cluster │
//! └─────────┘         (JSON)            └──────────────────┘
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format};
pub use error::CliError;
pub use output::OutputFormat;
