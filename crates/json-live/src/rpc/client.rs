//! Client-side interception: reconstruct full snapshots from envelopes.

use futures::StreamExt;

use crate::diff_stream::PatchConsumer;

use super::response::{BoxError, ClientResponse, Response};

/// Wraps an incoming message stream with patch reconstruction.
///
/// Applied unconditionally to every streamed response: messages that are not
/// envelopes pass through [`PatchConsumer`] unchanged, so wrapping a stream
/// the server never diffed is harmless. This is the last hop before the
/// application: its output is the reconstructed snapshot sequence, not
/// another wire representation.
#[derive(Debug, Default)]
pub struct JsonDiffClientPlugin;

impl JsonDiffClientPlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn intercept(&self, response: Response) -> ClientResponse {
        match response {
            Response::Single(value) => ClientResponse::Single(value),
            Response::Stream(messages) => {
                let snapshots = PatchConsumer::new(messages)
                    .map(|result| result.map_err(|e| Box::new(e) as BoxError));
                ClientResponse::Stream(Box::pin(snapshots))
            }
        }
    }
}
