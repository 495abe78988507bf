//! Fallback policy for external search.
//!
//! When no external item matches a query, the comparison engine walks these
//! rules in order and returns the items tagged with the first rule whose
//! keywords appear in the query. If no rule fires it returns the first
//! `prefix_len` catalog items so the comparison panel is never empty.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    /// Category tag on external items, e.g. `"electronics"`.
    pub category: String,
    /// Lowercase substrings that signal this category in a query.
    pub keywords: Vec<String>,
}

impl FallbackRule {
    /// Returns `true` if any keyword occurs in the already case-folded query.
    #[must_use]
    pub fn matches(&self, folded_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && folded_query.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    pub prefix_len: usize,
    pub rules: Vec<FallbackRule>,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        let rule = |category: &str, keywords: &[&str]| FallbackRule {
            category: category.to_owned(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        };
        Self {
            prefix_len: 3,
            rules: vec![
                rule(
                    "electronics",
                    &[
                        "phone", "laptop", "computer", "tech", "electronic", "headphone",
                        "earbud", "audio", "camera", "tablet", "charger", "keyboard", "gadget",
                    ],
                ),
                rule(
                    "furniture",
                    &[
                        "chair", "desk", "table", "furniture", "office", "sofa", "shelf", "bed",
                        "cabinet",
                    ],
                ),
            ],
        }
    }
}

impl FallbackPolicy {
    /// First rule whose keywords occur in `folded_query`.
    #[must_use]
    pub fn rule_for(&self, folded_query: &str) -> Option<&FallbackRule> {
        self.rules.iter().find(|r| r.matches(folded_query))
    }
}

/// Load and validate a fallback policy from a YAML file.
///
/// Keywords are lowercased on load so matching only folds the query.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_fallback_policy(path: &Path) -> Result<FallbackPolicy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PolicyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_fallback_policy(&content)
}

/// Parse and validate a fallback policy from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_fallback_policy(content: &str) -> Result<FallbackPolicy, ConfigError> {
    let mut policy: FallbackPolicy = serde_yaml::from_str(content)?;
    for rule in &mut policy.rules {
        rule.category = rule.category.trim().to_owned();
        for keyword in &mut rule.keywords {
            *keyword = keyword.trim().to_lowercase();
        }
    }
    validate_policy(&policy)?;
    Ok(policy)
}

fn validate_policy(policy: &FallbackPolicy) -> Result<(), ConfigError> {
    if policy.prefix_len == 0 {
        return Err(ConfigError::Validation(
            "prefix_len must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for rule in &policy.rules {
        if rule.category.is_empty() {
            return Err(ConfigError::Validation(
                "rule category must be non-empty".to_string(),
            ));
        }
        if !rule.keywords.iter().any(|k| !k.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "rule '{}' has no keywords",
                rule.category
            )));
        }
        if !seen.insert(rule.category.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate rule category: '{}'",
                rule.category
            )));
        }
    }

    Ok(())
}
