//! JSON parsing, output and the replacer-driven stringify walk.
//!
//! # Architecture
//!
//! - [`types`] - Core JSON value types
//! - [`convert`] - Parsing through `serde_json` and interop with `serde_json::Value`
//! - [`write`] - Compact and indented output
//! - [`stringify`] - Depth-first walk that consults a [`Replacer`] per node
//!
//! # Example
//!
//! ```
//! use json_path_replacer::json::{parse, canonicalize, JsonValue};
//!
//! let value = parse(b"{\"b\":2,\"a\":1}").unwrap();
//! assert_eq!(canonicalize(&value), "{\"a\":1,\"b\":2}");
//! ```

pub mod convert;
pub mod stringify;
pub mod types;
pub mod write;

pub use convert::{parse, parse_str};
pub use stringify::{apply, stringify, stringify_pretty, Parent, Replacement, Replacer};
pub use types::JsonValue;
pub use write::{canonicalize, write_pretty};
