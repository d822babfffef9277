//! JSON Patch apply logic: in-place mutation of a document.

use serde_json::Value;

use json_live_json_pointer::{get, get_mut, is_child_of};

use super::types::{Op, PatchError};

// ── Path navigation ───────────────────────────────────────────────────────

/// Mutable navigation to the value at `path` (must exist).
fn target_mut<'a>(doc: &'a mut Value, path: &[String]) -> Result<&'a mut Value, PatchError> {
    get_mut(doc, path).ok_or(PatchError::NotFound)
}

// ── Individual operation applicators ──────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = target_mut(doc, parent_path)?;
    match parent {
        Value::Object(map) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
                Ok(())
            } else {
                let idx: usize = key.parse().map_err(|_| PatchError::InvalidIndex)?;
                if idx > arr.len() {
                    return Err(PatchError::InvalidIndex);
                }
                arr.insert(idx, value);
                Ok(())
            }
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    if path.is_empty() {
        return Err(PatchError::InvalidTarget);
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = target_mut(doc, parent_path)?;
    match parent {
        Value::Object(map) => map.remove(key).ok_or(PatchError::NotFound),
        Value::Array(arr) => {
            let idx: usize = key.parse().map_err(|_| PatchError::InvalidIndex)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    let target = target_mut(doc, path)?;
    *target = value;
    Ok(())
}

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    let src = get(doc, from).ok_or(PatchError::NotFound)?.clone();
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    // RFC 6902: a location cannot be moved into one of its own children.
    if is_child_of(path, from) {
        return Err(PatchError::InvalidTarget);
    }
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &[String], value: &Value) -> Result<(), PatchError> {
    let actual = get(doc, path).ok_or(PatchError::NotFound)?;
    if actual == value {
        Ok(())
    } else {
        Err(PatchError::Test)
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document, mutating it in place.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(|_| ()),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => apply_test(doc, path, value),
    }
}

/// Apply a sequence of operations in order, mutating the document in place.
///
/// Stops at the first failing operation. The document may be left partially
/// patched in that case; callers treat any failure as fatal to the stream the
/// document belongs to, so a partial result is never observed downstream.
pub fn apply_patch(doc: &mut Value, ops: &[Op]) -> Result<(), PatchError> {
    for op in ops {
        apply_op(doc, op)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
