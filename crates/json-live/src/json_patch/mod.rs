//! JSON Patch (RFC 6902) operations and in-place application.
//!
//! The operation vocabulary is fixed: `add`, `remove`, `replace`, `move`,
//! `copy`, `test`. Application mutates the target document in place, each
//! operation against the result of the previous one.

pub mod types;
pub mod apply;
pub mod codec;

pub use types::{Op, PatchError};
pub use apply::{apply_op, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
