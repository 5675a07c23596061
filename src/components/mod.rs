//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are the reconciliation layer: they read state signals and
//! describe the view; network calls and foreign-DOM writes stay at the
//! edges, behind the `csr` feature.

pub mod appreciation;
pub mod chat_window;
pub mod launcher;
pub mod notification_bell;
