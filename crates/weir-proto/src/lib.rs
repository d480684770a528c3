//! # weir-proto
//!
//! Typed view of the objects managed by a Weir gateway cluster.
//!
//! The management API exposes a flat collection of configuration objects,
//! each identified by `name` and discriminated by `kind`. Two kinds carry a
//! specialized shape — [`pipeline::Pipeline`] and [`httpserver::HttpServer`] —
//! and everything else (generic controllers) stays a plain [`Object`].
//!
//! This crate is pure data: taxonomy, kind classification, per-node status
//! reshaping, and a couple of emptiness predicates the presentation layer
//! uses. All I/O lives in `weir-client`.

#![forbid(unsafe_code)]

pub mod httpserver;
pub mod object;
pub mod pipeline;
pub mod status;

pub use object::{KIND_HTTP_SERVER, KIND_PIPELINE, Object, ObjectKind, Objects};
pub use status::{RawStatus, Status, StatusEntry, node_statuses};
