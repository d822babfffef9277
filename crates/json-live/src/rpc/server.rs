//! Server-side interception: diff a procedure's streamed response.

use std::sync::Arc;

use futures::StreamExt;

use crate::diff_stream::DiffProducer;

use super::options::{JsonDiffOptions, ProcedureMeta};
use super::response::Response;

/// A server-side interceptor: wraps a procedure's outgoing result.
///
/// Interceptors compose; the host applies each registered interceptor to the
/// result of the previous one, in registration order.
pub trait ServerInterceptor: Send + Sync {
    fn intercept(&self, meta: &ProcedureMeta, response: Response) -> Response;
}

/// An ordered chain of server interceptors.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn ServerInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interceptor at the end of the chain.
    pub fn push(&mut self, interceptor: Arc<dyn ServerInterceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Run a response through every registered interceptor, in order.
    pub fn run(&self, meta: &ProcedureMeta, response: Response) -> Response {
        self.interceptors
            .iter()
            .fold(response, |response, interceptor| {
                interceptor.intercept(meta, response)
            })
    }
}

/// Replaces a streamed response with its envelope stream: first value
/// verbatim, every subsequent value as a patch against its predecessor.
///
/// Activation is decided here, once, from the procedure metadata and the
/// configured policy. Single responses and excluded procedures pass through
/// untouched.
pub struct JsonDiffServerPlugin {
    options: JsonDiffOptions,
}

impl JsonDiffServerPlugin {
    pub fn new(options: JsonDiffOptions) -> Self {
        Self { options }
    }
}

impl ServerInterceptor for JsonDiffServerPlugin {
    fn intercept(&self, meta: &ProcedureMeta, response: Response) -> Response {
        let stream = match response {
            Response::Stream(stream) if self.options.diff_enabled(meta) => stream,
            other => return other,
        };
        tracing::debug!(procedure = %meta.name, "diffing streamed response");
        let envelopes = DiffProducer::new(stream).map(|result| result.map(|env| env.encode()));
        Response::Stream(Box::pin(envelopes))
    }
}
