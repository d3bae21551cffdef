//! Domain models shared by actions and state

pub mod issue;
pub mod region_of_interest;
pub mod review;

pub use issue::{Frame, Issue};
pub use region_of_interest::RegionOfInterest;
pub use review::{ActiveReview, Review};
