//! pqjoin-core: fragment joiner core library.
//!
//! Merges named expression fragments (files) and inline expressions into a
//! single compound expression, wrapped either as a binding block
//! (`let ... in <result>`) or as a record (`[...]`).
//!
//! # Public API
//!
//! - [`join()`] -- validate, resolve, assemble and write in one call
//! - [`render()`] -- the same pipeline without the write
//! - [`resolve()`], [`assemble()`], [`write_artifact()`] -- individual stages
//! - [`JoinRequest`], [`Fragment`], [`WriteOutcome`], [`JoinError`]
//! - [`SourceProvider`] -- file I/O seam, with filesystem and in-memory impls

/// Destination used when none is given, relative to the working directory.
pub const DEFAULT_DESTINATION: &str = "joined.pq";

pub mod assemble;
pub mod error;
pub mod fragment;
pub mod join;
pub mod manifest;
pub mod request;
pub mod resolve;
pub mod source;
pub mod validate;
pub mod write;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::JoinError;
pub use fragment::{Fragment, Provenance};
pub use join::JoinOutcome;
pub use manifest::JoinManifest;
pub use request::{ClobberPolicy, JoinRequest};
pub use source::{FileSystemProvider, InMemoryProvider, SourceProvider};
pub use write::WriteOutcome;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use assemble::assemble;
pub use join::{join, render};
pub use manifest::load_manifest;
pub use resolve::resolve;
pub use write::write_artifact;
