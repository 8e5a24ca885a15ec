//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs where an endpoint accepts a JSON body
//!
//! Request DTO fields are `Option` so missing JSON keys reach the handler
//! (which rejects them as invalid input) instead of failing deserialization.

pub mod presentation;
pub mod vote;
pub mod week;
