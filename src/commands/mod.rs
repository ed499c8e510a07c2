//! Command implementations

pub mod play;
pub mod query;

pub use play::{PlayInput, run_play};
pub use query::{Query, QueryResult, run_query};
