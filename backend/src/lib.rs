//! Upload URL issuer backend
//!
//! Hands out short-lived presigned PUT URLs for an R2 bucket together with the
//! public URL the uploaded object will be served from.

#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs, dead_code)]

/// Presigned upload URL generation against R2
pub mod media_storage;

/// Request guards
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Application state
pub mod state;

/// Configuration, errors and extractors
pub mod types;
