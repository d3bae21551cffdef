//! Annotation Actions
//!
//! Job and frame lifecycle events observed by the review state.

use crate::domain_models::{Frame, Issue, Review};

use super::ActionKind;

/// Actions for the job/frame lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationAction {
    /// A job finished loading together with its reviews and issues
    JobLoaded {
        reviews: Vec<Review>,
        issues: Vec<Issue>,
        frame: Frame,
    },
    /// The displayed frame changed
    FrameChanged { frame: Frame },
}

impl AnnotationAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            AnnotationAction::JobLoaded { .. } => ActionKind::JobLoaded,
            AnnotationAction::FrameChanged { .. } => ActionKind::FrameChanged,
        }
    }
}
