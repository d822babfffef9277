//! json-live — incremental synchronization of JSON state over async streams.
//!
//! A producer repeatedly computes full snapshots of some logical state; this
//! crate turns that sequence into one initial snapshot followed by JSON Patch
//! deltas, and reconstructs the full snapshots on the consumer side by
//! stateful patch application.
//!
//! Layers, bottom up:
//! - [`json_patch`] — RFC 6902 operations and in-place application.
//! - [`json_patch_diff`] — structural diff of two JSON values.
//! - [`diff_stream`] — the wire envelope and the producer/consumer stream
//!   adapters (the synchronization protocol itself).
//! - [`rpc`] — thin plugins for wiring the protocol into a host RPC
//!   framework's interceptor chain.

pub mod json_patch;
pub mod json_patch_diff;
pub mod diff_stream;
pub mod rpc;
