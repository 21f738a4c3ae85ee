//! In-memory hierarchical namespace with path-addressed create, delete,
//! lookup, display and undo of deletions.

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
pub mod ext;
pub mod namespace;
pub mod session;
