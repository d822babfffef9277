//! Producer-side stream adapter: full snapshots in, envelopes out.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use serde_json::Value;

use crate::json_patch_diff::diff;

use super::envelope::Envelope;

/// Wraps a stream of full state snapshots and emits one [`Envelope`] per
/// input value, preserving order and cardinality: the first snapshot travels
/// verbatim, every later one as a patch against its predecessor.
///
/// Errors from the inner stream propagate verbatim and terminate the
/// adapter; no envelope is emitted for a failed item. An empty input stream
/// produces an empty output stream.
#[derive(Debug)]
pub struct DiffProducer<S> {
    stream: S,
    previous: Option<Value>,
    done: bool,
}

impl<S> DiffProducer<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, previous: None, done: false }
    }
}

impl<S, E> Stream for DiffProducer<S>
where
    S: Stream<Item = Result<Value, E>> + Unpin,
{
    type Item = Result<Envelope, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }
        match Pin::new(&mut this.stream).poll_next(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(None) => {
                this.done = true;
                this.previous = None;
                Poll::Ready(None)
            }
            Poll::Ready(Some(Err(e))) => {
                this.done = true;
                this.previous = None;
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(Some(Ok(next))) => {
                let envelope = match &this.previous {
                    None => Envelope::initial(next.clone()),
                    Some(previous) => Envelope::delta(diff(previous, &next)),
                };
                this.previous = Some(next);
                Poll::Ready(Some(Ok(envelope)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.stream.size_hint()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::{stream, StreamExt};
    use serde_json::json;

    fn produce(values: Vec<Value>) -> Vec<Envelope> {
        let input = stream::iter(values.into_iter().map(Ok::<_, ()>));
        block_on(DiffProducer::new(input).collect::<Vec<_>>())
            .into_iter()
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(produce(vec![]).is_empty());
    }

    #[test]
    fn first_value_travels_verbatim() {
        let envs = produce(vec![json!({"count": 0})]);
        assert_eq!(envs, vec![Envelope::initial(json!({"count": 0}))]);
    }

    #[test]
    fn single_initial_rest_deltas() {
        let envs = produce(vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 3})]);
        assert_eq!(envs.len(), 3);
        assert!(envs[0].is_initial());
        assert!(envs[1..].iter().all(|e| !e.is_initial()));
    }

    #[test]
    fn equal_neighbors_yield_empty_patch() {
        let envs = produce(vec![json!({"a": 1}), json!({"a": 1})]);
        assert_eq!(envs[1], Envelope::delta(vec![]));
    }

    #[test]
    fn upstream_error_propagates_and_terminates() {
        let input = stream::iter(vec![
            Ok(json!(1)),
            Err("boom"),
            Ok(json!(2)),
        ]);
        let out = block_on(DiffProducer::new(input).collect::<Vec<_>>());
        assert_eq!(out.len(), 2);
        assert!(out[0].is_ok());
        assert_eq!(out[1], Err("boom"));
    }
}
