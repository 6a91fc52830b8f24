//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only global state; pages keep everything else in
//! route-local signals.

pub mod auth;
