//! Action envelopes
//!
//! The front-end dispatches actions as `{ "type": "...", "payload": { ... } }`.
//! This module turns such envelopes into tagged [`Action`]s.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain_models::{ActiveReview, Frame, Issue, RegionOfInterest, Review};
use crate::error::ActionDecodeError;

use super::{Action, ActionKind, AnnotationAction, ReviewAction};

/// An undecoded action as the front-end dispatches it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobLoadedPayload {
    reviews: Vec<Review>,
    issues: Vec<Issue>,
    frame_data: FrameData,
}

#[derive(Deserialize)]
struct FrameData {
    number: Frame,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewSubmittedPayload {
    active_review: Option<ActiveReview>,
    reviews: Vec<Review>,
    issues: Vec<Issue>,
    frame: Frame,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewInitializedPayload {
    review_instance: ActiveReview,
    frame: Frame,
}

#[derive(Deserialize)]
struct IssueDraftStartedPayload {
    #[serde(rename = "ROI")]
    roi: RegionOfInterest,
}

#[derive(Deserialize)]
struct FramePayload {
    frame: Frame,
}

fn decode_payload<T: DeserializeOwned>(
    kind: ActionKind,
    payload: Value,
) -> Result<T, ActionDecodeError> {
    serde_json::from_value(payload).map_err(|source| ActionDecodeError::Payload { kind, source })
}

impl Action {
    /// Decode an action envelope from JSON text
    pub fn from_json(json: &str) -> Result<Action, ActionDecodeError> {
        let raw: RawAction = serde_json::from_str(json).map_err(ActionDecodeError::Envelope)?;
        Action::from_raw(raw)
    }

    /// Decode an action envelope from a JSON value
    pub fn from_value(value: Value) -> Result<Action, ActionDecodeError> {
        let raw: RawAction = serde_json::from_value(value).map_err(ActionDecodeError::Envelope)?;
        Action::from_raw(raw)
    }

    /// Decode an envelope. Unknown types become [`Action::Unrecognized`].
    pub fn from_raw(raw: RawAction) -> Result<Action, ActionDecodeError> {
        let Ok(kind) = raw.kind.parse::<ActionKind>() else {
            return Ok(Action::Unrecognized { kind: raw.kind });
        };

        let action = match kind {
            ActionKind::JobLoaded => {
                let payload: JobLoadedPayload = decode_payload(kind, raw.payload)?;
                Action::Annotation(AnnotationAction::JobLoaded {
                    reviews: payload.reviews,
                    issues: payload.issues,
                    frame: payload.frame_data.number,
                })
            }
            ActionKind::FrameChanged => {
                let payload: FrameData = decode_payload(kind, raw.payload)?;
                Action::Annotation(AnnotationAction::FrameChanged {
                    frame: payload.number,
                })
            }
            ActionKind::ReviewSubmitted => {
                let payload: ReviewSubmittedPayload = decode_payload(kind, raw.payload)?;
                Action::Review(ReviewAction::ReviewSubmitted {
                    active_review: payload.active_review,
                    reviews: payload.reviews,
                    issues: payload.issues,
                    frame: payload.frame,
                })
            }
            ActionKind::ReviewInitialized => {
                let payload: ReviewInitializedPayload = decode_payload(kind, raw.payload)?;
                Action::Review(ReviewAction::ReviewInitialized {
                    review: payload.review_instance,
                    frame: payload.frame,
                })
            }
            ActionKind::IssueDraftStarted => {
                let payload: IssueDraftStartedPayload = decode_payload(kind, raw.payload)?;
                Action::Review(ReviewAction::IssueDraftStarted { roi: payload.roi })
            }
            ActionKind::IssueDraftFinished => {
                let payload: FramePayload = decode_payload(kind, raw.payload)?;
                Action::Review(ReviewAction::IssueDraftFinished {
                    frame: payload.frame,
                })
            }
            // Payloads of these kinds carry nothing this slice reads
            ActionKind::IssueDraftCancelled => Action::Review(ReviewAction::IssueDraftCancelled),
            ActionKind::IssueResolved => Action::Review(ReviewAction::IssueResolved),
            ActionKind::IssueReopened => Action::Review(ReviewAction::IssueReopened),
            ActionKind::IssueCommented => Action::Review(ReviewAction::IssueCommented),
        };

        Ok(action)
    }
}
