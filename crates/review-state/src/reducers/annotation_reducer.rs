//! Annotation Reducer
//!
//! Handles job/frame lifecycle events for the review state.

use std::sync::Arc;

use review_state_config::FrameChangePolicy;

use crate::actions::AnnotationAction;
use crate::reducers::compute_frame_issues;
use crate::state::ReviewState;

/// Reduce review state based on job/frame lifecycle actions
pub fn reduce_annotation(
    mut state: ReviewState,
    action: &AnnotationAction,
    policy: FrameChangePolicy,
) -> ReviewState {
    match action {
        AnnotationAction::JobLoaded {
            reviews,
            issues,
            frame,
        } => {
            let frame_issues = compute_frame_issues(issues, state.active_review.as_ref(), *frame);
            state.reviews = reviews.clone();
            state.replace_issues(Arc::new(issues.clone()), frame_issues);
            log::debug!(
                "Job loaded with {} reviews and {} issues, {} on frame {}",
                state.reviews.len(),
                state.issues.len(),
                state.frame_issues.len(),
                frame
            );
        }

        AnnotationAction::FrameChanged { frame } => {
            // The draft's issues are left out unless the policy asks for them
            let active_review = match policy {
                FrameChangePolicy::PersistedOnly => None,
                FrameChangePolicy::IncludeDraft => state.active_review.as_ref(),
            };
            let frame_issues = compute_frame_issues(&state.issues, active_review, *frame);
            state.replace_frame_issues(frame_issues);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Issue, Review};
    use pretty_assertions::assert_eq;

    fn job_loaded(issues: Vec<Issue>, frame: u64) -> AnnotationAction {
        AnnotationAction::JobLoaded {
            reviews: vec![Review::default().with_attribute("id", 1)],
            issues,
            frame,
        }
    }

    #[test]
    fn test_job_loaded_filters_current_frame() {
        let state = reduce_annotation(
            ReviewState::default(),
            &job_loaded(vec![Issue::new(1), Issue::new(2)], 1),
            FrameChangePolicy::PersistedOnly,
        );

        assert_eq!(*state.frame_issues, vec![Issue::new(1)]);
        assert_eq!(*state.issues, vec![Issue::new(1), Issue::new(2)]);
        assert_eq!(state.reviews.len(), 1);
        assert_eq!(state.issues_revision, 1);
    }

    #[test]
    fn test_job_loaded_includes_existing_draft() {
        let state = ReviewState {
            active_review: Some(Review::new(vec![Issue::new(1).with_attribute("id", 9)])),
            ..ReviewState::default()
        };

        let state = reduce_annotation(
            state,
            &job_loaded(vec![Issue::new(1)], 1),
            FrameChangePolicy::PersistedOnly,
        );

        assert_eq!(
            *state.frame_issues,
            vec![Issue::new(1), Issue::new(1).with_attribute("id", 9)]
        );
        // The draft itself is untouched
        assert!(state.active_review.is_some());
    }

    #[test]
    fn test_frame_changed_ignores_draft_by_default() {
        let state = ReviewState {
            active_review: Some(Review::new(vec![Issue::new(5)])),
            ..ReviewState::default()
        };
        let state = reduce_annotation(
            state,
            &job_loaded(vec![Issue::new(5), Issue::new(6)], 6),
            FrameChangePolicy::PersistedOnly,
        );
        let issues = Arc::clone(&state.issues);

        let state = reduce_annotation(
            state,
            &AnnotationAction::FrameChanged { frame: 5 },
            FrameChangePolicy::PersistedOnly,
        );

        assert_eq!(*state.frame_issues, vec![Issue::new(5)]);
        assert!(Arc::ptr_eq(&state.issues, &issues));
        assert_eq!(state.issues_revision, 2);
    }

    #[test]
    fn test_frame_changed_with_draft_policy() {
        let state = ReviewState {
            active_review: Some(Review::new(vec![Issue::new(5)])),
            ..ReviewState::default()
        };

        let state = reduce_annotation(
            state,
            &AnnotationAction::FrameChanged { frame: 5 },
            FrameChangePolicy::IncludeDraft,
        );

        assert_eq!(*state.frame_issues, vec![Issue::new(5)]);
    }

    #[test]
    fn test_frame_changed_keeps_other_fields() {
        let state = ReviewState {
            new_issue_roi: Some(vec![1.0, 2.0].into()),
            reviews: vec![Review::default()],
            ..ReviewState::default()
        };

        let state = reduce_annotation(
            state,
            &AnnotationAction::FrameChanged { frame: 0 },
            FrameChangePolicy::PersistedOnly,
        );

        assert!(state.is_drafting_issue());
        assert_eq!(state.reviews.len(), 1);
        assert!(state.frame_issues.is_empty());
    }
}
