//! Forum API - Discussion forum backend
//!
//! Users start threads, comment on them and reply to comments. Comments and
//! replies are soft-deleted by their owners and shown redacted in the
//! thread detail view.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
