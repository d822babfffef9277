//! Path lookup in a JSON document.

use serde_json::Value;

/// Get a value from a JSON document by path.
///
/// Returns `None` when the path does not resolve: a missing object key, an
/// out-of-bounds or non-numeric array index, the `-` end-of-array marker, or
/// a step into a scalar.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Array(arr) => {
                if step == "-" {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Resolution rules match [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Array(arr) => {
                if step == "-" {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                current = map.get_mut(step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> Vec<String> {
        crate::parse_json_pointer(s)
    }

    #[test]
    fn get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &path("")), Some(&doc));
    }

    #[test]
    fn get_nested() {
        let doc = json!({"a": {"b": [10, 20]}});
        assert_eq!(get(&doc, &path("/a/b/1")), Some(&json!(20)));
    }

    #[test]
    fn get_missing_key() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &path("/b")), None);
    }

    #[test]
    fn get_bad_index() {
        let doc = json!([1, 2]);
        assert_eq!(get(&doc, &path("/5")), None);
        assert_eq!(get(&doc, &path("/x")), None);
        assert_eq!(get(&doc, &path("/-")), None);
    }

    #[test]
    fn get_through_scalar() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &path("/a/b")), None);
    }

    #[test]
    fn get_mut_allows_write() {
        let mut doc = json!({"a": {"b": 1}});
        *get_mut(&mut doc, &path("/a/b")).unwrap() = json!(2);
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }
}
