//! State module

pub mod review;

pub use review::ReviewState;
