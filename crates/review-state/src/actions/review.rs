//! Review Actions
//!
//! Review and issue lifecycle events.

use crate::domain_models::{ActiveReview, Frame, Issue, RegionOfInterest, Review};

use super::ActionKind;

/// Actions for the review/issue lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    /// The active review was submitted; the server returned the new lists
    ReviewSubmitted {
        /// Replacement draft (usually `None` once submitted)
        active_review: Option<ActiveReview>,
        reviews: Vec<Review>,
        issues: Vec<Issue>,
        frame: Frame,
    },
    /// A new draft review was started
    ReviewInitialized { review: ActiveReview, frame: Frame },
    /// The user started positioning a new issue
    IssueDraftStarted { roi: RegionOfInterest },
    /// The drafted issue was added to the active review
    IssueDraftFinished { frame: Frame },
    /// The drafted issue was discarded
    IssueDraftCancelled,
    /// An issue was resolved on the server
    IssueResolved,
    /// An issue was reopened on the server
    IssueReopened,
    /// A comment was added to an issue on the server
    IssueCommented,
}

impl ReviewAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ReviewAction::ReviewSubmitted { .. } => ActionKind::ReviewSubmitted,
            ReviewAction::ReviewInitialized { .. } => ActionKind::ReviewInitialized,
            ReviewAction::IssueDraftStarted { .. } => ActionKind::IssueDraftStarted,
            ReviewAction::IssueDraftFinished { .. } => ActionKind::IssueDraftFinished,
            ReviewAction::IssueDraftCancelled => ActionKind::IssueDraftCancelled,
            ReviewAction::IssueResolved => ActionKind::IssueResolved,
            ReviewAction::IssueReopened => ActionKind::IssueReopened,
            ReviewAction::IssueCommented => ActionKind::IssueCommented,
        }
    }

    /// Check if this action only signals that issue contents changed in place
    pub fn is_issue_update(&self) -> bool {
        matches!(
            self,
            ReviewAction::IssueResolved | ReviewAction::IssueReopened | ReviewAction::IssueCommented
        )
    }
}
