//! Persistence models shared across the lead repositories.

pub mod config;
pub mod lead;
pub mod local;
