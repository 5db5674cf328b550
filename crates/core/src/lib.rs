//! Domain types, validation rules and pure aggregation logic shared by the
//! `classbook-db` and `classbook-api` crates.

pub mod error;
pub mod month;
pub mod roster;
pub mod types;
pub mod validation;
