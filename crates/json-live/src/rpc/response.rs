//! Response payloads passed through the interceptor seam.

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;
use serde_json::Value;

/// Type-erased error carried by response streams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A boxed stream of owned JSON values: a procedure's streamed output on the
/// server, or the decoded channel messages on the client.
pub type ValueStream = Pin<Box<dyn Stream<Item = Result<Value, BoxError>> + Send + 'static>>;

/// A boxed stream of shared snapshots, as delivered to the application after
/// client-side reconstruction.
pub type SharedValueStream =
    Pin<Box<dyn Stream<Item = Result<Arc<Value>, BoxError>> + Send + 'static>>;

/// The outcome of executing a procedure: a single value or an open-ended
/// sequence of values. The diff protocol only ever engages on streams;
/// single responses travel through the interceptor seam unmodified.
pub enum Response {
    Single(Value),
    Stream(ValueStream),
}

impl Response {
    /// Box a concrete stream into a streamed response.
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Value, BoxError>> + Send + 'static,
    {
        Response::Stream(Box::pin(stream))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Response::Stream(_))
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Single(v) => f.debug_tuple("Single").field(v).finish(),
            Response::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// What the client hands to the application: single responses unchanged,
/// streamed responses as reconstructed shared snapshots.
pub enum ClientResponse {
    Single(Value),
    Stream(SharedValueStream),
}

impl fmt::Debug for ClientResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientResponse::Single(v) => f.debug_tuple("Single").field(v).finish(),
            ClientResponse::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
