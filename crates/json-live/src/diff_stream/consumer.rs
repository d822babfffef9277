//! Consumer-side stream adapter: envelopes in, reconstructed snapshots out.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use serde_json::Value;

use crate::json_patch::apply_patch;

use super::envelope::Frame;
use super::types::SyncError;

/// Wraps a stream of raw channel messages and emits the fully reconstructed
/// state once per message, in order.
///
/// The reconstructed state is one exclusively-held buffer, seeded from the
/// initial envelope and mutated in place by each subsequent patch. Emitted
/// items are `Arc` clones of that buffer: a read-only view that stays valid
/// (and cheap) between updates. A caller that retains an older snapshot
/// forces a single copy-on-write on the next patch; a caller that does not
/// pays no per-update allocation.
///
/// Messages that are not recognizable as envelopes pass through unchanged
/// and leave the state untouched. Engine failures, patches arriving before
/// any initial snapshot, and channel errors are fatal: the adapter emits one
/// terminal [`SyncError`], drops its state, and ends.
#[derive(Debug)]
pub struct PatchConsumer<S> {
    stream: S,
    state: Option<Arc<Value>>,
    done: bool,
}

impl<S> PatchConsumer<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, state: None, done: false }
    }

    fn fail<E>(&mut self, err: SyncError<E>) -> Poll<Option<Result<Arc<Value>, SyncError<E>>>> {
        self.done = true;
        self.state = None;
        Poll::Ready(Some(Err(err)))
    }
}

impl<S, E> Stream for PatchConsumer<S>
where
    S: Stream<Item = Result<Value, E>> + Unpin,
{
    type Item = Result<Arc<Value>, SyncError<E>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }
        let raw = match Pin::new(&mut this.stream).poll_next(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(None) => {
                this.done = true;
                this.state = None;
                return Poll::Ready(None);
            }
            Poll::Ready(Some(Err(e))) => return this.fail(SyncError::Channel(e)),
            Poll::Ready(Some(Ok(raw))) => raw,
        };
        let frame = match Frame::decode(raw) {
            Ok(frame) => frame,
            Err(e) => return this.fail(SyncError::Patch(e)),
        };
        match frame {
            Frame::Unrecognized(raw) => {
                tracing::warn!("received message without a recognizable patch array, passing through");
                Poll::Ready(Some(Ok(Arc::new(raw))))
            }
            Frame::Initial { data } => {
                // Replace, not merge: a fresh snapshot discards prior state.
                let state = Arc::new(data);
                this.state = Some(Arc::clone(&state));
                Poll::Ready(Some(Ok(state)))
            }
            Frame::Delta { patch } => {
                let state = match this.state.as_mut() {
                    None => return this.fail(SyncError::PatchWithoutSnapshot),
                    Some(state) => state,
                };
                match apply_patch(Arc::make_mut(state), &patch) {
                    Ok(()) => Poll::Ready(Some(Ok(Arc::clone(state)))),
                    Err(e) => this.fail(SyncError::Patch(e)),
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
