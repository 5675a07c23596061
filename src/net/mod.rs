//! Networking modules for the widgets' REST traffic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema. There is
//! no push channel; everything real-time is approximated by polling.

pub mod api;
pub mod types;
