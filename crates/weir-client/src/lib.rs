//! # weir-client
//!
//! Async REST client for the Weir gateway management API.
//!
//! The management API speaks JSON; the user-facing edit surface is YAML,
//! converted at this boundary only. A [`cluster::Cluster`] resolves a logical
//! cluster to a base URL and per-request auth, and [`client::Client`] exposes
//! the five object operations: list, create, update, delete, status.
//!
//! ```text
//! ┌─────────┐      REST (JSON)       ┌──────────────────┐
//! │ weirctl │◄──────────────────────►│  gateway cluster │
//! └─────────┘                        └──────────────────┘
//! ```
//!
//! No retries, no caching: every call reflects remote state at the moment it
//! returns, and every failure propagates to the caller.

#![forbid(unsafe_code)]

pub mod client;
pub mod cluster;
pub mod error;
pub mod urls;
pub mod yaml;

pub use client::Client;
pub use cluster::{Cluster, ClusterConfig};
pub use error::{ClientError, ClientResult};
