//! Path-aware replacer.
//!
//! The stringify driver only tells a replacer `(key, value, parent)`. It never
//! signals "leaving a container", so the nesting level of a node has to be
//! recovered from the parent alone: if the parent is already on the ancestor
//! stack the walk has come back up (or moved to a sibling) and both stacks
//! are cut back to it; otherwise the walk went one level deeper and the
//! parent is pushed.
//!
//! Paths join segments with `.` and do not escape anything, so a key that
//! contains a dot is indistinguishable from two nested keys in the joined
//! string. Use [`PathEvent::path_segments`] when that matters.
//!
//! # Example
//!
//! ```
//! use json_path_replacer::json::{parse, stringify, Replacement};
//! use json_path_replacer::replacer::PathAwareReplacer;
//!
//! let value = parse(br#"{"a":{"b":[1,2]}}"#).unwrap();
//! let mut paths = Vec::new();
//! let mut replacer = PathAwareReplacer::new(|event| {
//!     paths.push(event.path.to_string());
//!     Ok(Replacement::Keep)
//! });
//! stringify(&value, &mut replacer).unwrap();
//! drop(replacer);
//! assert_eq!(paths, ["", "a", "a.b", "a.b.0", "a.b.1"]);
//! ```

use tracing::trace;

use crate::error::ReplacerResult;
use crate::json::{JsonValue, Parent, Replacement, Replacer};

/// Separator placed between path segments.
pub const PATH_SEPARATOR: &str = ".";

/// Which of the optional lists are handed to the callback.
///
/// Disabled lists are passed as empty slices; the path string is always
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathAwareOptions {
    /// Populate [`PathEvent::path_segments`] (default true)
    pub path_array: bool,
    /// Populate [`PathEvent::ancestors`] (default true)
    pub ancestors: bool,
}

impl PathAwareOptions {
    /// Only the path string; both lists empty.
    pub const fn path_only() -> Self {
        Self {
            path_array: false,
            ancestors: false,
        }
    }
}

impl Default for PathAwareOptions {
    fn default() -> Self {
        Self {
            path_array: true,
            ancestors: true,
        }
    }
}

/// Everything a path-aware callback learns about one visited node.
#[derive(Debug, Clone, Copy)]
pub struct PathEvent<'e> {
    /// Member name or decimal array index; empty for the root.
    pub key: &'e str,
    /// The visited value.
    pub value: &'e JsonValue,
    /// Segments joined with `.`; empty for the root.
    pub path: &'e str,
    /// The container holding `value`.
    pub parent: Parent<'e>,
    /// Path segments from the root down to `key`.
    pub path_segments: &'e [String],
    /// Containers from the root down to the direct parent, by reference.
    pub ancestors: &'e [&'e JsonValue],
}

/// The stack bookkeeping shared by every path-aware replacer.
///
/// Containers are identified by address. Entries left behind by a finished
/// replacement container are cut off before the next lookup, since every
/// lookup first meets a live ancestor.
///
/// Both stacks live as long as the tracker and are reset whenever the root
/// event arrives, so one tracker serves any number of sequential walks.
#[derive(Debug, Default)]
pub struct PathTracker {
    segments: Vec<String>,
    ancestors: Vec<usize>,
}

impl PathTracker {
    /// Create a tracker with empty stacks.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// Record one visit.
    pub fn enter(&mut self, key: &str, parent: Parent<'_>) {
        let container = match parent.container() {
            Some(container) => container as *const JsonValue as usize,
            None => {
                self.segments.clear();
                self.ancestors.clear();
                return;
            }
        };

        match self.ancestors.iter().rposition(|&ancestor| ancestor == container) {
            Some(i) => {
                self.ancestors.truncate(i + 1);
                self.segments.truncate(i);
            }
            None => self.ancestors.push(container),
        }
        self.segments.push(key.to_string());
    }

    /// The current path string.
    pub fn path(&self) -> String {
        self.segments.join(PATH_SEPARATOR)
    }

    /// Path segments from the root to the current node.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of containers between the root and the current node.
    pub fn ancestor_count(&self) -> usize {
        self.ancestors.len()
    }

    /// Current nesting depth; zero at the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

/// Adapts a [`PathEvent`] callback into a [`Replacer`].
///
/// One instance must not drive two walks at the same time; give each
/// concurrent serialization its own replacer.
pub struct PathAwareReplacer<F> {
    callback: F,
    options: PathAwareOptions,
    tracker: PathTracker,
}

impl<F> PathAwareReplacer<F>
where
    F: FnMut(&PathEvent<'_>) -> ReplacerResult<Replacement>,
{
    /// Wrap `callback` with both lists enabled.
    pub fn new(callback: F) -> Self {
        Self::with_options(callback, PathAwareOptions::default())
    }

    /// Wrap `callback` with explicit list toggles.
    pub fn with_options(callback: F, options: PathAwareOptions) -> Self {
        Self {
            callback,
            options,
            tracker: PathTracker::new(),
        }
    }

    /// The toggles this replacer was built with.
    pub fn options(&self) -> PathAwareOptions {
        self.options
    }

    /// Give the callback back.
    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<F> Replacer for PathAwareReplacer<F>
where
    F: FnMut(&PathEvent<'_>) -> ReplacerResult<Replacement>,
{
    fn replace(
        &mut self,
        key: &str,
        value: &JsonValue,
        parent: Parent<'_>,
    ) -> ReplacerResult<Replacement> {
        self.tracker.enter(key, parent);
        let path = self.tracker.path();
        trace!(target: "json_path_replacer", %path, depth = self.tracker.depth(), "visit");

        let ancestors = if self.options.ancestors {
            let chain = parent.ancestors();
            debug_assert_eq!(chain.len(), self.tracker.ancestor_count());
            chain
        } else {
            Vec::new()
        };

        let event = PathEvent {
            key,
            value,
            path: &path,
            parent,
            path_segments: if self.options.path_array {
                self.tracker.segments()
            } else {
                &[]
            },
            ancestors: &ancestors,
        };
        (self.callback)(&event)
    }
}
