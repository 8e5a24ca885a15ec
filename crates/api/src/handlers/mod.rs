//! HTTP handlers, grouped by entity.

pub mod presentations;
pub mod votes;
pub mod weeks;
