//! Query planning.
//!
//! The API paginates and has no "N random results" call, so each configured
//! query is turned into a series of randomly sampled page fetches.

pub mod planner;
pub mod source;

pub use planner::{batch_count, QueryPlanner};
pub use source::PageSource;
