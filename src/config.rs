//! Loading redaction rules from TOML.
//!
//! ```toml
//! indent = 2
//!
//! [[rules]]
//! pattern = '.*\.cc$'
//! action = "omit"
//!
//! [[rules]]
//! pattern = '.*\.ssn$'
//! action = "replace"
//! value = "***-**-****"
//! ```
//!
//! Rules keep file order, which is also their priority order.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{ErrorCode, ReplacerResult};
use crate::replacer::{keep, omit, replace_with, Rule, RuleReplacer};

/// What a matching rule does to the node.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Drop the node.
    Omit,
    /// Write the node unchanged, shadowing later rules.
    Keep,
    /// Write the rule's `value` instead.
    Replace,
}

/// One `[[rules]]` entry.
#[derive(Clone, Debug, Deserialize)]
pub struct RuleConfig {
    /// Regular expression tested against the dotted path.
    pub pattern: String,
    /// What to do on a match.
    pub action: RuleAction,
    /// Replacement string for `action = "replace"`.
    #[serde(default)]
    pub value: Option<String>,
}

impl RuleConfig {
    /// Compile this entry into a [`Rule`].
    pub fn to_rule(&self) -> ReplacerResult<Rule> {
        match (self.action, &self.value) {
            (RuleAction::Omit, _) => Rule::new(&self.pattern, omit()),
            (RuleAction::Keep, _) => Rule::new(&self.pattern, keep()),
            (RuleAction::Replace, Some(value)) => {
                Rule::new(&self.pattern, replace_with(value.clone()))
            }
            (RuleAction::Replace, None) => Err(ErrorCode::E201_InvalidRuleAction(format!(
                "rule '{}' uses action \"replace\" without a value",
                self.pattern
            ))),
        }
    }
}

/// A rule file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RedactConfig {
    /// Spaces per nesting level in the output; 0 means compact.
    #[serde(default)]
    pub indent: usize,
    /// Rules in priority order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl RedactConfig {
    /// Parse a rule file from TOML text.
    pub fn from_toml_str(s: &str) -> ReplacerResult<Self> {
        toml::from_str::<RedactConfig>(s).map_err(|e| ErrorCode::E401_ConfigInvalid(e.to_string()))
    }

    /// Read and parse a rule file.
    pub fn load(path: impl AsRef<Path>) -> ReplacerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            error!(target: "json_path_replacer", path = %path.display(), error = %e, "Failed to read rule file");
            ErrorCode::E400_ConfigUnreadable(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| {
            error!(target: "json_path_replacer", path = %path.display(), error = %e, "Failed to parse rule file");
            e
        })?;
        debug!(
            target: "json_path_replacer",
            path = %path.display(),
            rules = config.rules.len(),
            "Loaded rule file"
        );
        Ok(config)
    }

    /// Compile every rule, keeping file order.
    pub fn compile_rules(&self) -> ReplacerResult<Vec<Rule>> {
        self.rules.iter().map(RuleConfig::to_rule).collect()
    }

    /// Build a [`RuleReplacer`] from the compiled rules.
    pub fn into_replacer(self) -> ReplacerResult<RuleReplacer> {
        Ok(RuleReplacer::new(self.compile_rules()?))
    }
}
