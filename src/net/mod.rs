//! Networking modules for the HTTP API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request wrapper and typed endpoint calls; `types` defines
//! the wire schema both sides of the boundary agree on.

pub mod api;
pub mod types;
