//! The snapshot-diff-patch-reconstruct protocol over async streams.
//!
//! The producer side turns a sequence of full JSON snapshots into one
//! initial [`Envelope`] carrying the first snapshot verbatim, followed by
//! patch-only envelopes diffed against the immediately preceding snapshot.
//! The consumer side reverses the transformation: it seeds a reconstructed
//! state from the initial envelope and mutates it in place with every
//! subsequent patch, emitting the full state once per received message.
//!
//! Both adapters are plain [`futures::Stream`] combinators: runtime-agnostic,
//! one input item per poll, no internal buffering. Closing or erroring the
//! inner stream closes or errors the adapter; dropping the adapter drops the
//! inner stream.

pub mod types;
pub mod envelope;
pub mod producer;
pub mod consumer;

pub use types::SyncError;
pub use envelope::{Envelope, Frame};
pub use producer::DiffProducer;
pub use consumer::PatchConsumer;
