//! Domain aggregates exposed by the lead capture service layer.

pub mod lead;
pub mod types;
