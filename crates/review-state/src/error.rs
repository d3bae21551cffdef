//! Errors raised while decoding front-end action envelopes

use thiserror::Error;

use crate::actions::ActionKind;

#[derive(Debug, Error)]
pub enum ActionDecodeError {
    /// The value is not a `{ "type": ..., "payload": ... }` object
    #[error("Malformed action envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The payload of a recognized action is missing fields or has the wrong shape
    #[error("Malformed {kind} payload: {source}")]
    Payload {
        kind: ActionKind,
        #[source]
        source: serde_json::Error,
    },
}
