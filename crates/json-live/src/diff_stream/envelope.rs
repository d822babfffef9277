//! The wire envelope and its decoded representation.
//!
//! One envelope is transmitted per state update. Wire shape, a public
//! contract: `{ "patch": Operation[], "data"?: <snapshot> }`. Presence of
//! the `data` KEY (even with a `null` value) marks the initial message of a
//! stream; absence of the key marks a patch-only message. Exactly one
//! initial envelope exists per stream, and it is always first.

use serde_json::{Map, Value};

use crate::json_patch::{from_json_patch, to_json_patch, Op, PatchError};

/// Wire field holding the operation list.
pub const PATCH_FIELD: &str = "patch";

/// Wire field holding the initial snapshot.
pub const DATA_FIELD: &str = "data";

// ── Envelope ──────────────────────────────────────────────────────────────

/// The unit emitted by the producer, one per state update.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Patch against the previous snapshot; empty on the initial envelope
    /// and whenever two consecutive snapshots are structurally equal.
    pub patch: Vec<Op>,
    /// Full snapshot, present on the initial envelope only.
    pub data: Option<Value>,
}

impl Envelope {
    /// The initial envelope: full snapshot, empty patch.
    pub fn initial(data: Value) -> Self {
        Self { patch: Vec::new(), data: Some(data) }
    }

    /// A subsequent patch-only envelope.
    pub fn delta(patch: Vec<Op>) -> Self {
        Self { patch, data: None }
    }

    /// True if this is the initial envelope of a stream.
    pub fn is_initial(&self) -> bool {
        self.data.is_some()
    }

    /// Encode to the wire representation.
    ///
    /// The `patch` key is always written; the `data` key only when the
    /// snapshot is present, so that key absence stays meaningful on the wire.
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert(PATCH_FIELD.to_string(), to_json_patch(&self.patch));
        if let Some(data) = &self.data {
            map.insert(DATA_FIELD.to_string(), data.clone());
        }
        Value::Object(map)
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────

/// A raw channel message, classified once at the decode boundary.
///
/// All consumer dispatch happens on this tag; the message shape is never
/// re-inspected afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Initial message: seeds the reconstructed state.
    Initial { data: Value },
    /// Patch-only message: mutates the reconstructed state.
    Delta { patch: Vec<Op> },
    /// Not an envelope. Passed through to the application unchanged.
    Unrecognized(Value),
}

impl Frame {
    /// Classify a raw channel message.
    ///
    /// A message is recognized as an envelope iff it is a JSON object whose
    /// `patch` key holds an array. Anything else (scalars, arrays, objects
    /// without a `patch` array) comes back as [`Frame::Unrecognized`],
    /// byte-for-byte the input.
    ///
    /// # Errors
    ///
    /// A recognized patch-only envelope whose operations fail to decode is a
    /// malformed patch, not an unrecognized message: the producer clearly
    /// spoke the protocol and got it wrong, which is fatal downstream. (On
    /// an initial envelope the operation list is unused and not decoded.)
    pub fn decode(raw: Value) -> Result<Frame, PatchError> {
        let mut map = match raw {
            Value::Object(map) => map,
            other => return Ok(Frame::Unrecognized(other)),
        };
        if !map.get(PATCH_FIELD).map(Value::is_array).unwrap_or(false) {
            return Ok(Frame::Unrecognized(Value::Object(map)));
        }
        // Key presence is the discriminant: `data: null` is an initial
        // envelope carrying JSON null, while an absent key is a delta.
        if let Some(data) = map.remove(DATA_FIELD) {
            return Ok(Frame::Initial { data });
        }
        let patch = from_json_patch(&map[PATCH_FIELD])?;
        Ok(Frame::Delta { patch })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
