//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 wire
//! format: `{"op": "...", "path": "/a/b", ...}`.

use serde_json::{json, Value};

use json_live_json_pointer::{
    format_json_pointer, parse_json_pointer, validate_json_pointer, validate_path,
};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(obj: &Value, field: &str) -> Result<Vec<String>, PatchError> {
    let s = obj
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp(format!("{field} must be a string")))?;
    validate_json_pointer(s).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
    let path = parse_json_pointer(s);
    validate_path(&path).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
    Ok(path)
}

fn decode_value(obj: &Value) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp("value is required".into()))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the RFC 6902 format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": encode_path(path)
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_path(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": encode_path(path),
            "value": value
        }),
    }
}

/// Serialize a full patch (operation sequence) to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single operation from its RFC 6902 JSON representation.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    if !v.is_object() {
        return Err(PatchError::InvalidOp("operation must be an object".into()));
    }
    let name = v
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("op must be a string".into()))?;
    let path = decode_path(v, "path")?;
    match name {
        "add" => Ok(Op::Add { path, value: decode_value(v)? }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace { path, value: decode_value(v)? }),
        "copy" => Ok(Op::Copy { path, from: decode_path(v, "from")? }),
        "move" => Ok(Op::Move { path, from: decode_path(v, "from")? }),
        "test" => Ok(Op::Test { path, value: decode_value(v)? }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Deserialize a full patch from a JSON array of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> Vec<String> {
        parse_json_pointer(s)
    }

    #[test]
    fn encode_add() {
        let op = Op::Add { path: path("/a/b"), value: json!(1) };
        assert_eq!(to_json(&op), json!({"op": "add", "path": "/a/b", "value": 1}));
    }

    #[test]
    fn encode_remove() {
        let op = Op::Remove { path: path("/a") };
        assert_eq!(to_json(&op), json!({"op": "remove", "path": "/a"}));
    }

    #[test]
    fn encode_move_with_from() {
        let op = Op::Move { path: path("/b"), from: path("/a") };
        assert_eq!(to_json(&op), json!({"op": "move", "path": "/b", "from": "/a"}));
    }

    #[test]
    fn encode_escaped_path() {
        let op = Op::Remove { path: vec!["a/b".to_string(), "c~d".to_string()] };
        assert_eq!(to_json(&op), json!({"op": "remove", "path": "/a~1b/c~0d"}));
    }

    #[test]
    fn decode_all_ops_roundtrip() {
        let ops = vec![
            Op::Add { path: path("/a"), value: json!({"x": 1}) },
            Op::Remove { path: path("/b/0") },
            Op::Replace { path: path(""), value: json!(null) },
            Op::Copy { path: path("/c"), from: path("/a") },
            Op::Move { path: path("/d"), from: path("/c") },
            Op::Test { path: path("/d"), value: json!([1, 2]) },
        ];
        let encoded = to_json_patch(&ops);
        assert_eq!(from_json_patch(&encoded).unwrap(), ops);
    }

    #[test]
    fn decode_null_value_is_present() {
        // "value": null is a real operand, not a missing field.
        let op = from_json(&json!({"op": "replace", "path": "/a", "value": null})).unwrap();
        assert_eq!(op, Op::Replace { path: path("/a"), value: json!(null) });
    }

    #[test]
    fn decode_missing_value_fails() {
        let r = from_json(&json!({"op": "add", "path": "/a"}));
        assert!(matches!(r, Err(PatchError::InvalidOp(_))));
    }

    #[test]
    fn decode_unknown_op_fails() {
        let r = from_json(&json!({"op": "str_ins", "path": "/a", "pos": 0, "str": "x"}));
        assert!(matches!(r, Err(PatchError::InvalidOp(_))));
    }

    #[test]
    fn decode_relative_path_fails() {
        let r = from_json(&json!({"op": "remove", "path": "a/b"}));
        assert!(matches!(r, Err(PatchError::InvalidOp(_))));
    }

    #[test]
    fn decode_non_array_patch_fails() {
        let r = from_json_patch(&json!({"op": "add"}));
        assert!(matches!(r, Err(PatchError::InvalidOp(_))));
    }
}
