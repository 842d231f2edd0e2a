//! Rule-based replacer.
//!
//! A [`RuleReplacer`] matches the dotted path of each visited node against
//! an ordered list of [`Rule`]s. The first rule whose pattern matches decides
//! the replacement; nodes that match nothing pass through unchanged.
//!
//! # Example
//!
//! ```
//! use json_path_replacer::json::{parse, stringify};
//! use json_path_replacer::replacer::{omit, replace_with, Rule, RuleReplacer};
//!
//! let value = parse(br#"{"customer":{"cc":"4111","ssn":"123-45-6789"}}"#).unwrap();
//! let mut replacer = RuleReplacer::new(vec![
//!     Rule::new(r".*\.cc$", omit()).unwrap(),
//!     Rule::new(r".*\.ssn$", replace_with("***-**-****")).unwrap(),
//! ]);
//! let out = stringify(&value, &mut replacer).unwrap();
//! assert_eq!(out.as_deref(), Some(r#"{"customer":{"ssn":"***-**-****"}}"#));
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use super::path_aware::{PathAwareOptions, PathAwareReplacer, PathEvent};
use crate::error::{ErrorCode, ReplacerResult};
use crate::json::{JsonValue, Parent, Replacement, Replacer};

/// Value transform applied by a matching rule.
pub type Transform = Arc<dyn Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync>;

/// A `(pattern, transform)` pair.
#[derive(Clone)]
pub struct Rule {
    pattern: Regex,
    transform: Transform,
}

impl Rule {
    /// Compile `pattern` and pair it with `transform`.
    pub fn new<T>(pattern: &str, transform: T) -> ReplacerResult<Self>
    where
        T: Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync + 'static,
    {
        let pattern =
            Regex::new(pattern).map_err(|e| ErrorCode::E200_InvalidPattern(e.to_string()))?;
        Ok(Self::from_regex(pattern, transform))
    }

    /// Pair an already compiled pattern with `transform`.
    pub fn from_regex<T>(pattern: Regex, transform: T) -> Self
    where
        T: Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync + 'static,
    {
        Self {
            pattern,
            transform: Arc::new(transform),
        }
    }

    /// The path pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// True if this rule applies to `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Run the transform on `value`.
    pub fn apply(&self, value: &JsonValue) -> ReplacerResult<Replacement> {
        (self.transform)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Transform that drops the node.
pub fn omit() -> impl Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync + Clone {
    |_| Ok(Replacement::Omit)
}

/// Transform that leaves the node as it is.
pub fn keep() -> impl Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync + Clone {
    |_| Ok(Replacement::Keep)
}

/// Transform that writes `value` in place of the node.
pub fn replace_with(
    value: impl Into<JsonValue>,
) -> impl Fn(&JsonValue) -> ReplacerResult<Replacement> + Send + Sync + Clone {
    let value = value.into();
    move |_| Ok(Replacement::Value(value.clone()))
}

/// Path-aware callback that runs the first matching rule.
type RuleCallback = Box<dyn FnMut(&PathEvent<'_>) -> ReplacerResult<Replacement> + Send>;

/// Replacer that applies the first rule matching each node's path.
///
/// Runs on a [`PathAwareReplacer`] with both lists disabled, since only the
/// path string is matched. A rule that writes a container has that
/// container's members matched against the rules in turn.
pub struct RuleReplacer {
    rules: Arc<[Rule]>,
    inner: PathAwareReplacer<RuleCallback>,
}

impl RuleReplacer {
    /// Build a replacer from rules in priority order.
    pub fn new(rules: Vec<Rule>) -> Self {
        let rules: Arc<[Rule]> = rules.into();
        let matcher = Arc::clone(&rules);
        let callback: RuleCallback = Box::new(move |event: &PathEvent<'_>| {
            match first_match(&matcher, event.path) {
                Some(rule) => {
                    trace!(
                        target: "json_path_replacer",
                        path = event.path,
                        pattern = rule.pattern().as_str(),
                        "rule matched"
                    );
                    rule.apply(event.value)
                }
                None => Ok(Replacement::Keep),
            }
        });
        Self {
            rules,
            inner: PathAwareReplacer::with_options(callback, PathAwareOptions::path_only()),
        }
    }

    /// The rules this replacer was built from, in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule matching `path`, if any.
    pub fn find(&self, path: &str) -> Option<&Rule> {
        first_match(&self.rules, path)
    }
}

fn first_match<'r>(rules: &'r [Rule], path: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matches(path))
}

impl fmt::Debug for RuleReplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleReplacer")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Replacer for RuleReplacer {
    fn replace(
        &mut self,
        key: &str,
        value: &JsonValue,
        parent: Parent<'_>,
    ) -> ReplacerResult<Replacement> {
        self.inner.replace(key, value, parent)
    }
}
