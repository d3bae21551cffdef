//! Review state for the annotation job view
//!
//! Keeps the reviews and issues of the open job, the review being written and
//! the issue being positioned, and derives the issues shown on the current
//! frame. State changes only through [`reduce`] (or a [`Store`] hosting it):
//!
//! ```rust
//! use review_state::{reduce, Action, AnnotationAction, Issue, ReviewState};
//!
//! let state = reduce(
//!     ReviewState::default(),
//!     &Action::Annotation(AnnotationAction::JobLoaded {
//!         reviews: vec![],
//!         issues: vec![Issue::new(1), Issue::new(2)],
//!         frame: 1,
//!     }),
//! );
//! assert_eq!(*state.frame_issues, vec![Issue::new(1)]);
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::{Action, ActionKind, AnnotationAction, RawAction, ReviewAction};
pub use dispatcher::Dispatcher;
pub use domain_models::{ActiveReview, Frame, Issue, RegionOfInterest, Review};
pub use error::ActionDecodeError;
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducers::{compute_frame_issues, reduce, reduce_with};
pub use review_state_config::{FrameChangePolicy, ReviewConfig};
pub use state::ReviewState;
pub use store::Store;
