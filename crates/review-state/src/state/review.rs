//! Review State

use std::sync::Arc;

use crate::domain_models::{ActiveReview, Issue, RegionOfInterest, Review};

/// Review state of the currently open job
///
/// `issues` and `frame_issues` live in shared containers. Transitions that
/// touch them install new containers, so a view holding the previous `Arc`
/// can detect the change with `Arc::ptr_eq`. `issues_revision` is bumped on
/// every such replacement for consumers that prefer a counter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewState {
    /// Reviews saved on the server
    pub reviews: Vec<Review>,
    /// Issues saved on the server
    pub issues: Arc<Vec<Issue>>,
    /// Issues on the current frame, persisted ones first, then the draft's
    pub frame_issues: Arc<Vec<Issue>>,
    /// Review being written (not saved on the server)
    pub active_review: Option<ActiveReview>,
    /// Position of the issue being drafted
    pub new_issue_roi: Option<RegionOfInterest>,
    /// Number of times `issues`/`frame_issues` were replaced
    pub issues_revision: u64,
}

impl ReviewState {
    /// Check whether an issue is currently being positioned
    pub fn is_drafting_issue(&self) -> bool {
        self.new_issue_roi.is_some()
    }

    /// Check whether a review is being written
    pub fn has_active_review(&self) -> bool {
        self.active_review.is_some()
    }

    /// Install new issue containers and bump the revision
    pub(crate) fn replace_issues(&mut self, issues: Arc<Vec<Issue>>, frame_issues: Vec<Issue>) {
        self.issues = issues;
        self.frame_issues = Arc::new(frame_issues);
        self.issues_revision += 1;
    }

    /// Install a new `frame_issues` container and bump the revision
    pub(crate) fn replace_frame_issues(&mut self, frame_issues: Vec<Issue>) {
        self.frame_issues = Arc::new(frame_issues);
        self.issues_revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ReviewState::default();
        assert!(state.reviews.is_empty());
        assert!(state.issues.is_empty());
        assert!(state.frame_issues.is_empty());
        assert!(!state.has_active_review());
        assert!(!state.is_drafting_issue());
        assert_eq!(state.issues_revision, 0);
    }

    #[test]
    fn test_replace_issues_bumps_revision() {
        let mut state = ReviewState::default();
        let previous = Arc::clone(&state.frame_issues);

        state.replace_issues(Arc::new(vec![Issue::new(1)]), vec![Issue::new(1)]);

        assert_eq!(state.issues_revision, 1);
        assert_eq!(state.issues.len(), 1);
        assert!(!Arc::ptr_eq(&previous, &state.frame_issues));
    }
}
