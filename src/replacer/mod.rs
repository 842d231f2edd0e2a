//! Replacers built on top of the stringify driver.
//!
//! - [`path_aware`] - enriches each visit with the dotted path, the path
//!   segments and the ancestor containers
//! - [`rules`] - applies the first `(pattern, transform)` rule matching the path
//!
//! Both keep per-walk state inside the replacer and reset it when the root
//! is visited, so an instance may be reused for any number of sequential
//! walks but never for two at once.

pub mod path_aware;
pub mod rules;

pub use path_aware::{PathAwareOptions, PathAwareReplacer, PathEvent, PathTracker, PATH_SEPARATOR};
pub use rules::{keep, omit, replace_with, Rule, RuleReplacer, Transform};
