//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&PgPool` as the first argument. Every mutation that touches more
//! than one row runs in a single transaction, so the denormalized vote
//! counter and the vote rows can never drift apart.

pub mod presentation_repo;
pub mod vote_repo;
pub mod week_repo;

pub use presentation_repo::PresentationRepo;
pub use vote_repo::VoteRepo;
pub use week_repo::WeekRepo;
