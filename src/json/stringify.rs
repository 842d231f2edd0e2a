//! Replacer-driven stringify.
//!
//! The driver walks a value graph the way `JSON.stringify` does when given
//! a replacer function: the root is visited first under the empty key, then
//! every member of an object (in serialization key order) and every element
//! of an array (keyed by its decimal index), depth first. Each node is handed
//! to the replacer together with its parent container before its children
//! are visited, and the replacer decides what is written in its place.
//!
//! A container returned as a replacement is walked in turn, so its members
//! reach the replacer with the replacement as their parent.
//!
//! # Example
//!
//! ```
//! use json_path_replacer::json::{parse, stringify, Parent, Replacement};
//! use json_path_replacer::json::JsonValue;
//! use json_path_replacer::ReplacerResult;
//!
//! let value = parse(br#"{"keep":1,"drop":2}"#).unwrap();
//! let mut replacer = |key: &str, _value: &JsonValue, _parent: Parent<'_>| -> ReplacerResult<Replacement> {
//!     Ok(if key == "drop" { Replacement::Omit } else { Replacement::Keep })
//! };
//! let out = stringify(&value, &mut replacer).unwrap();
//! assert_eq!(out.as_deref(), Some(r#"{"keep":1}"#));
//! ```

use std::collections::BTreeMap;

use super::types::JsonValue;
use super::write::{canonicalize, ordered_keys, write_pretty};
use crate::error::ReplacerResult;

/// The container a visited node belongs to.
///
/// This is the explicit form of the `this` binding a JavaScript replacer
/// receives. Each `Container` links to the parent of that container, so the
/// chain from any node back to the root lives on the walk's call stack.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    /// The synthetic `{"": root}` wrapper handed to the root event; holds
    /// the root value itself.
    Root(&'a JsonValue),
    /// An object or array being walked, with the parent it was found in.
    Container {
        /// The container itself.
        value: &'a JsonValue,
        /// Where the container was found.
        outer: &'a Parent<'a>,
    },
}

impl<'a> Parent<'a> {
    /// Returns true for the synthetic root wrapper.
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root(_))
    }

    /// The real container, or None for the synthetic root wrapper.
    pub fn container(&self) -> Option<&'a JsonValue> {
        match *self {
            Parent::Root(_) => None,
            Parent::Container { value, .. } => Some(value),
        }
    }

    /// Look up `key` in the parent, treating the root wrapper as `{"": root}`.
    pub fn get(&self, key: &str) -> Option<&'a JsonValue> {
        match *self {
            Parent::Root(root) if key.is_empty() => Some(root),
            Parent::Root(_) => None,
            Parent::Container { value, .. } => match value {
                JsonValue::Array(arr) => key.parse::<usize>().ok().and_then(|i| arr.get(i)),
                JsonValue::Object(map) => map.get(key),
                _ => None,
            },
        }
    }

    /// Materialize the parent as a value; the root wrapper becomes `{"": root}`.
    pub fn to_value(&self) -> JsonValue {
        match *self {
            Parent::Root(root) => {
                let mut map = BTreeMap::new();
                map.insert(String::new(), root.clone());
                JsonValue::Object(map)
            }
            Parent::Container { value, .. } => value.clone(),
        }
    }

    /// The parent for members of `container`, which was found in `self`.
    pub fn nest<'s>(&'s self, container: &'s JsonValue) -> Parent<'s> {
        Parent::Container {
            value: container,
            outer: self,
        }
    }

    /// Every container from the root down to and including this one.
    ///
    /// Empty for the root wrapper; `[root]` for the root's direct members.
    pub fn ancestors(&self) -> Vec<&'a JsonValue> {
        let mut chain = Vec::new();
        let mut cursor = *self;
        while let Parent::Container { value, outer } = cursor {
            chain.push(value);
            cursor = *outer;
        }
        chain.reverse();
        chain
    }
}

/// What a replacer wants written in place of the visited node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Replacement {
    /// Write the node unchanged (descending into it if it is a container).
    #[default]
    Keep,
    /// Leave the node out: dropped from objects, `null` inside arrays, and
    /// no output at all for the root.
    Omit,
    /// Write this value instead. Containers are walked before writing, so
    /// the replacer sees each of their members.
    Value(JsonValue),
}

impl From<JsonValue> for Replacement {
    fn from(value: JsonValue) -> Self {
        Replacement::Value(value)
    }
}

impl From<Option<JsonValue>> for Replacement {
    fn from(value: Option<JsonValue>) -> Self {
        value.map_or(Replacement::Omit, Replacement::Value)
    }
}

/// Callback invoked once per visited node.
pub trait Replacer {
    /// Decide the replacement for `value`, found under `key` in `parent`.
    ///
    /// Errors abort the whole walk and are returned to the caller unchanged.
    fn replace(
        &mut self,
        key: &str,
        value: &JsonValue,
        parent: Parent<'_>,
    ) -> ReplacerResult<Replacement>;
}

impl<F> Replacer for F
where
    F: FnMut(&str, &JsonValue, Parent<'_>) -> ReplacerResult<Replacement>,
{
    fn replace(
        &mut self,
        key: &str,
        value: &JsonValue,
        parent: Parent<'_>,
    ) -> ReplacerResult<Replacement> {
        self(key, value, parent)
    }
}

/// Walk `value` with `replacer` and return the resulting value.
///
/// Returns `Ok(None)` when the replacer omits the root. A replacer that keeps
/// wrapping each node in a fresh container never terminates, exactly as with
/// `JSON.stringify`.
pub fn apply<R>(value: &JsonValue, replacer: &mut R) -> ReplacerResult<Option<JsonValue>>
where
    R: Replacer + ?Sized,
{
    visit("", value, Parent::Root(value), replacer)
}

/// Walk `value` with `replacer` and serialize the result compactly.
///
/// Returns `Ok(None)` when the replacer omits the root.
pub fn stringify<R>(value: &JsonValue, replacer: &mut R) -> ReplacerResult<Option<String>>
where
    R: Replacer + ?Sized,
{
    stringify_pretty(value, replacer, 0)
}

/// Walk `value` with `replacer` and serialize the result with `indent`
/// spaces per level (zero gives the compact form).
pub fn stringify_pretty<R>(
    value: &JsonValue,
    replacer: &mut R,
    indent: usize,
) -> ReplacerResult<Option<String>>
where
    R: Replacer + ?Sized,
{
    Ok(apply(value, replacer)?.map(|replaced| match indent {
        0 => canonicalize(&replaced),
        n => write_pretty(&replaced, n),
    }))
}

/// Visit one node, then the children of whatever is written in its place.
fn visit<R>(
    key: &str,
    value: &JsonValue,
    parent: Parent<'_>,
    replacer: &mut R,
) -> ReplacerResult<Option<JsonValue>>
where
    R: Replacer + ?Sized,
{
    match replacer.replace(key, value, parent)? {
        Replacement::Omit => Ok(None),
        Replacement::Keep => walk_children(value, &parent, replacer).map(Some),
        Replacement::Value(replaced) if replaced.is_container() => {
            walk_children(&replaced, &parent, replacer).map(Some)
        }
        Replacement::Value(scalar) => Ok(Some(scalar)),
    }
}

/// Rebuild `value` from the replacer's verdict on each of its members.
fn walk_children<R>(
    value: &JsonValue,
    parent: &Parent<'_>,
    replacer: &mut R,
) -> ReplacerResult<JsonValue>
where
    R: Replacer + ?Sized,
{
    let here = parent.nest(value);
    match value {
        JsonValue::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for (i, element) in arr.iter().enumerate() {
                let child = visit(&i.to_string(), element, here, replacer)?;
                out.push(child.unwrap_or(JsonValue::Null));
            }
            Ok(JsonValue::Array(out))
        }
        JsonValue::Object(map) => {
            let mut out = BTreeMap::new();
            for k in ordered_keys(map) {
                if let Some(member) = map.get(k) {
                    if let Some(child) = visit(k, member, here, replacer)? {
                        out.insert(k.clone(), child);
                    }
                }
            }
            Ok(JsonValue::Object(out))
        }
        scalar => Ok(scalar.clone()),
    }
}
