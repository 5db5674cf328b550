//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - `Deserialize` create DTOs consumed by the repositories

pub mod attendance;
pub mod group;
pub mod lesson;
pub mod month_view;
pub mod score;
pub mod student;
