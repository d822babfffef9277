//! Wiring the diff protocol into a host RPC framework.
//!
//! A host framework is expected to expose an interceptor seam: a function
//! registered to wrap a procedure's execution, able to inspect the
//! procedure's metadata and replace its outgoing result. This module
//! provides the two ends of that seam:
//!
//! - [`JsonDiffServerPlugin`] replaces a procedure's streamed response with
//!   the envelope stream produced by [`crate::diff_stream::DiffProducer`].
//! - [`JsonDiffClientPlugin`] replaces an incoming message stream with the
//!   reconstructed snapshots produced by
//!   [`crate::diff_stream::PatchConsumer`].
//!
//! Single (non-streaming) responses are never touched by either side.
//! Whether diffing applies to a given procedure is decided exactly once,
//! before its stream begins, from the procedure metadata and the configured
//! [`IncludePolicy`]; it is never re-evaluated mid-stream.

pub mod options;
pub mod response;
pub mod server;
pub mod client;

pub use options::{IncludePolicy, JsonDiffOptions, ProcedureMeta};
pub use response::{BoxError, ClientResponse, Response, SharedValueStream, ValueStream};
pub use server::{InterceptorChain, JsonDiffServerPlugin, ServerInterceptor};
pub use client::JsonDiffClientPlugin;
