//! Review Reducer
//!
//! Handles review/issue lifecycle actions: draft reviews, issue drafting and
//! server-side issue updates.

use std::sync::Arc;

use crate::actions::ReviewAction;
use crate::reducers::compute_frame_issues;
use crate::state::ReviewState;

/// Reduce review state based on review/issue lifecycle actions
pub fn reduce_review(mut state: ReviewState, action: &ReviewAction) -> ReviewState {
    match action {
        ReviewAction::ReviewSubmitted {
            active_review,
            reviews,
            issues,
            frame,
        } => {
            let frame_issues = compute_frame_issues(issues, active_review.as_ref(), *frame);
            state.active_review = active_review.clone();
            state.reviews = reviews.clone();
            state.replace_issues(Arc::new(issues.clone()), frame_issues);
            log::info!(
                "Review submitted, job now has {} reviews and {} issues",
                state.reviews.len(),
                state.issues.len()
            );
        }

        ReviewAction::ReviewInitialized { review, frame } => {
            let frame_issues = compute_frame_issues(&state.issues, Some(review), *frame);
            state.active_review = Some(review.clone());
            state.replace_frame_issues(frame_issues);
            log::debug!("Review initialized with {} issues", review.issues.len());
        }

        ReviewAction::IssueDraftStarted { roi } => {
            state.new_issue_roi = Some(roi.clone());
        }

        ReviewAction::IssueDraftFinished { frame } => {
            let frame_issues =
                compute_frame_issues(&state.issues, state.active_review.as_ref(), *frame);
            state.replace_frame_issues(frame_issues);
            state.new_issue_roi = None;
        }

        ReviewAction::IssueDraftCancelled => {
            state.new_issue_roi = None;
        }

        ReviewAction::IssueResolved | ReviewAction::IssueReopened | ReviewAction::IssueCommented => {
            // Same issues, new containers: views compare by pointer
            let issues = Arc::new(state.issues.as_ref().clone());
            let frame_issues = state.frame_issues.as_ref().clone();
            state.replace_issues(issues, frame_issues);
        }
    }

    state
}
