//! Reducers
//!
//! `app_reducer` is the entry point; it routes each namespace to its own
//! sub-reducer.

pub mod annotation_reducer;
pub mod app_reducer;
pub mod frame_issues;
pub mod review_reducer;

pub use app_reducer::{reduce, reduce_with};
pub use frame_issues::compute_frame_issues;
