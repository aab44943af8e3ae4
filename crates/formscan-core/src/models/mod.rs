//! Data models: configuration, type catalog and document records.

pub mod config;
pub mod document;
pub mod types;
