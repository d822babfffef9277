//! JSON Pointer (RFC 6901) utilities.
//!
//! Implements the pointer handling used by the `json-live` patch codec and
//! apply logic: escaping, parsing, formatting, lookup and validation.
//!
//! # Example
//!
//! ```
//! use json_live_json_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

pub mod get;
pub use get::{get, get_mut};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path, ValidationError};

/// A step in a JSON Pointer path: an object key or a decimal array index.
pub type PathStep = String;

/// A JSON Pointer path. The empty path addresses the document root.
pub type Path = Vec<PathStep>;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_live_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("plain"), "plain");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_live_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("plain"), "plain");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// - The empty string is the root path (empty vec).
/// - The leading `/` is stripped; each component is unescaped.
/// - `"/"` is a single empty component (the `""` object key).
///
/// # Example
///
/// ```
/// use json_live_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use json_live_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a proper ancestor of `child`.
///
/// The root is an ancestor of every non-root path.
///
/// # Example
///
/// ```
/// use json_live_json_pointer::{is_child_of, parse_json_pointer};
///
/// let parent = parse_json_pointer("/a");
/// let child = parse_json_pointer("/a/b");
/// assert!(is_child_of(&child, &parent));
/// assert!(!is_child_of(&parent, &child));
/// assert!(!is_child_of(&parent, &parent));
/// ```
pub fn is_child_of(child: &[String], parent: &[String]) -> bool {
    child.len() > parent.len() && child[..parent.len()] == parent[..]
}
