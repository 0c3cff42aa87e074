//! Networking modules for the directory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the page-level GET requests and `types` defines the wire
//! schema they decode into.

pub mod api;
pub mod types;
