//! Procedure metadata and the activation policy.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Metadata attached to a logical procedure by the host framework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcedureMeta {
    /// Procedure name, used for diagnostics only.
    pub name: String,
    /// Per-procedure diffing override. When set, it takes priority over the
    /// plugin-level [`IncludePolicy`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_diff: Option<bool>,
}

impl ProcedureMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), json_diff: None }
    }

    /// Set the per-procedure diffing override.
    pub fn with_json_diff(mut self, enabled: bool) -> Self {
        self.json_diff = Some(enabled);
        self
    }
}

/// Plugin-level filter selecting which procedures get diffed responses.
///
/// Consulted only when a procedure's metadata carries no override.
#[derive(Clone, Default)]
pub enum IncludePolicy {
    /// No procedure is diffed unless its metadata opts in.
    #[default]
    Disabled,
    /// Every streamed response is diffed unless its metadata opts out.
    All,
    /// Per-procedure predicate over the metadata.
    Predicate(Arc<dyn Fn(&ProcedureMeta) -> bool + Send + Sync>),
}

impl IncludePolicy {
    /// Build a predicate policy from a closure.
    pub fn predicate(f: impl Fn(&ProcedureMeta) -> bool + Send + Sync + 'static) -> Self {
        IncludePolicy::Predicate(Arc::new(f))
    }

    fn includes(&self, meta: &ProcedureMeta) -> bool {
        match self {
            IncludePolicy::Disabled => false,
            IncludePolicy::All => true,
            IncludePolicy::Predicate(f) => f(meta),
        }
    }
}

impl fmt::Debug for IncludePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludePolicy::Disabled => f.write_str("Disabled"),
            IncludePolicy::All => f.write_str("All"),
            IncludePolicy::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Configuration for [`crate::rpc::JsonDiffServerPlugin`].
#[derive(Debug, Clone, Default)]
pub struct JsonDiffOptions {
    pub include: IncludePolicy,
}

impl JsonDiffOptions {
    /// The activation decision for one procedure, evaluated once before its
    /// stream begins. Metadata takes priority over the policy.
    pub fn diff_enabled(&self, meta: &ProcedureMeta) -> bool {
        meta.json_diff.unwrap_or_else(|| self.include.includes(meta))
    }
}
