//! JSON Path Replacer - path-aware replacers for JSON stringification.
//!
//! A replacer is consulted once per node while a document is serialized and
//! decides whether the node is kept, dropped or swapped for another value.
//! This crate adds the context a plain `(key, value)` callback lacks: the
//! dotted path of the node, its path segments and the chain of containers
//! above it.
//!
//! # Architecture
//!
//! - [`json`] - JSON value model, parsing, writer and the stringify walk
//! - [`replacer`] - path-aware and rule-based replacers
//! - [`config`] - TOML rule files
//! - [`text`] - word-level string helpers
//! - [`error`] - Error codes
//!
//! # Example
//!
//! ```
//! use json_path_replacer::json::{parse, stringify, Replacement};
//! use json_path_replacer::PathAwareReplacer;
//!
//! let value = parse(br#"{"a":{"b":{"c":1}}}"#).unwrap();
//! let mut seen = Vec::new();
//! let mut replacer = PathAwareReplacer::new(|event| {
//!     seen.push(event.path.to_string());
//!     Ok(Replacement::Keep)
//! });
//! stringify(&value, &mut replacer).unwrap();
//! drop(replacer);
//! assert_eq!(seen, vec!["", "a", "a.b", "a.b.c"]);
//! ```

// Library code propagates errors instead of panicking.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod json;
pub mod replacer;
pub mod text;

// Re-export commonly used types
pub use config::RedactConfig;
pub use error::{ErrorCode, ReplacerResult};
pub use json::{JsonValue, Parent, Replacement, Replacer};
pub use replacer::{PathAwareOptions, PathAwareReplacer, PathEvent, Rule, RuleReplacer};
