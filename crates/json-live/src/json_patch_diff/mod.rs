//! JSON Patch diff: generate a patch that transforms one document into another.
//!
//! The generated operations use only the fixed vocabulary understood by
//! [`crate::json_patch::apply_patch`]; in practice the differ emits `add`,
//! `remove` and `replace`. Equal inputs produce an empty patch.

use serde_json::{Map, Value};

use crate::json_patch::types::Op;

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a JSON Patch (list of operations) that transforms `src` into `dst`.
///
/// Pure and deterministic: identical inputs always yield the same patch, and
/// structurally equal `src`/`dst` yield an empty one.
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &[], src, dst);
    ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_at_path(ops: &mut Vec<Op>, path: &[String], src: &Value, dst: &Value) {
    if src == dst {
        return;
    }
    match (src, dst) {
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d),
        (Value::Array(s), Value::Array(d)) => diff_arr(ops, path, s, d),
        _ => diff_val(ops, path, dst),
    }
}

fn diff_val(ops: &mut Vec<Op>, path: &[String], dst: &Value) {
    ops.push(Op::Replace {
        path: path.to_vec(),
        value: dst.clone(),
    });
}

fn diff_obj(ops: &mut Vec<Op>, path: &[String], src: &Map<String, Value>, dst: &Map<String, Value>) {
    // Remove keys in src that are not in dst
    for key in src.keys() {
        if !dst.contains_key(key) {
            let mut p = path.to_vec();
            p.push(key.clone());
            ops.push(Op::Remove { path: p });
        }
    }
    // Add new keys, recurse into common ones
    for (key, dst_val) in dst {
        let mut p = path.to_vec();
        p.push(key.clone());
        match src.get(key) {
            None => ops.push(Op::Add { path: p, value: dst_val.clone() }),
            Some(src_val) => diff_at_path(ops, &p, src_val, dst_val),
        }
    }
}

fn diff_arr(ops: &mut Vec<Op>, path: &[String], src: &[Value], dst: &[Value]) {
    let common = src.len().min(dst.len());

    // Recurse into index-aligned elements
    for i in 0..common {
        let mut p = path.to_vec();
        p.push(i.to_string());
        diff_at_path(ops, &p, &src[i], &dst[i]);
    }

    // Remove trailing src elements, highest index first so that earlier
    // removals never shift the indices of later ones.
    for i in (dst.len()..src.len()).rev() {
        let mut p = path.to_vec();
        p.push(i.to_string());
        ops.push(Op::Remove { path: p });
    }

    // Append trailing dst elements in order; each add lands at the current
    // end of the array.
    for (i, v) in dst.iter().enumerate().skip(src.len()) {
        let mut p = path.to_vec();
        p.push(i.to_string());
        ops.push(Op::Add { path: p, value: v.clone() });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_patch::apply_patch;
    use proptest::prelude::*;
    use serde_json::json;

    fn roundtrip(mut src: Value, dst: &Value) -> Value {
        let ops = diff(&src, dst);
        apply_patch(&mut src, &ops).expect("generated patch must apply");
        src
    }

    #[test]
    fn diff_equal_docs() {
        assert!(diff(&json!({"a": 1}), &json!({"a": 1})).is_empty());
        assert!(diff(&json!(null), &json!(null)).is_empty());
    }

    #[test]
    fn diff_replace_scalar() {
        let ops = diff(&json!(1), &json!(2));
        assert_eq!(ops, vec![Op::Replace { path: vec![], value: json!(2) }]);
    }

    #[test]
    fn diff_type_change_is_replace() {
        let ops = diff(&json!({"a": [1]}), &json!({"a": {"b": 1}}));
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op_name(), "replace");
    }

    #[test]
    fn diff_string_change_is_replace() {
        let ops = diff(&json!({"s": "hello world"}), &json!({"s": "hello rust"}));
        assert_eq!(
            ops,
            vec![Op::Replace { path: vec!["s".to_string()], value: json!("hello rust") }]
        );
    }

    #[test]
    fn diff_add_key() {
        let ops = diff(&json!({"a": 1}), &json!({"a": 1, "b": 2}));
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op_name(), "add");
    }

    #[test]
    fn diff_remove_key() {
        let ops = diff(&json!({"a": 1, "b": 2}), &json!({"a": 1}));
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op_name(), "remove");
    }

    #[test]
    fn diff_object_roundtrip() {
        let src = json!({"name": "Alice", "age": 30});
        let dst = json!({"name": "Bob", "age": 30, "city": "NYC"});
        assert_eq!(roundtrip(src, &dst), dst);
    }

    #[test]
    fn diff_nested_path() {
        let ops = diff(
            &json!({"user": {"name": "Alice", "age": 30}}),
            &json!({"user": {"name": "Alice", "age": 31}}),
        );
        assert_eq!(
            ops,
            vec![Op::Replace {
                path: vec!["user".to_string(), "age".to_string()],
                value: json!(31)
            }]
        );
    }

    #[test]
    fn diff_array_grow() {
        let src = json!([1, 2]);
        let dst = json!([1, 2, 3, 4]);
        assert_eq!(roundtrip(src, &dst), dst);
    }

    #[test]
    fn diff_array_shrink() {
        let src = json!([1, 2, 3, 4]);
        let dst = json!([1]);
        assert_eq!(roundtrip(src, &dst), dst);
    }

    #[test]
    fn diff_array_element_change() {
        let src = json!([{"id": 1, "v": "a"}, {"id": 2, "v": "b"}]);
        let dst = json!([{"id": 1, "v": "a"}, {"id": 2, "v": "c"}]);
        let ops = diff(&src, &dst);
        assert_eq!(ops.len(), 1);
        assert_eq!(roundtrip(src, &dst), dst);
    }

    #[test]
    fn diff_empty_arrays() {
        assert!(diff(&json!([]), &json!([])).is_empty());
        let ops = diff(&json!([]), &json!([1, 2]));
        assert_eq!(ops.len(), 2);
    }

    // ── Property: apply(diff(a, b)) == b ──────────────────────────────────

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1000i64..1000).prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                proptest::collection::btree_map("[a-d]{1,2}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn diff_apply_roundtrip(src in arb_json(), dst in arb_json()) {
            let mut doc = src.clone();
            let ops = diff(&src, &dst);
            apply_patch(&mut doc, &ops).unwrap();
            prop_assert_eq!(doc, dst);
        }

        #[test]
        fn diff_of_equal_is_empty(v in arb_json()) {
            prop_assert!(diff(&v, &v).is_empty());
        }
    }
}
