/*!
 * The text-cleaning seam of the pipeline.
 *
 * The full Cantonese substitution table is linguistic data maintained
 * outside this crate; the engine only requires a pure `clean` function.
 * This module provides the trait plus an ordered find/replace engine with
 * a small structural baseline and optional user-supplied rule files.
 */

use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::{Result, Context};
use regex::Regex;
use serde::Deserialize;

/// Common trait for subtitle text cleaners.
///
/// Implementations must be referentially transparent: no side effects and no
/// state shared across calls, so cues can be cleaned in any order.
pub trait SubtitleCleaner: Debug {
    /// Rewrite one cue's text; invoked once per cue before boundary repair
    fn clean(&self, text: &str) -> String;
}

/// One find/replace rule as it appears in a JSON rules file
#[derive(Debug, Deserialize)]
pub struct RuleSpec {
    /// Regex pattern to search for
    pub find: String,
    /// Replacement text; may use capture groups
    pub replace: String,
}

// @struct: Compiled substitution rule
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: String,
}

/// Ordered find/replace engine.
///
/// Rules are applied strictly in sequence; order is semantically significant
/// because later rules see the output of earlier ones.
#[derive(Debug)]
pub struct RuleCleaner {
    rules: Vec<Rule>,
}

impl RuleCleaner {
    /// Structural baseline: fullwidth delimiting punctuation, ASCII ellipsis
    /// folding, and leading/trailing filler trimming.
    pub fn baseline() -> Self {
        // Infallible: every pattern here is a checked literal
        let rules = [
            (r"\.\.\.", "…"),
            (r"\?", "？"),
            ("!", "！"),
            (",", "，"),
            (":", "："),
            (";", "；"),
            (r"([，？！…])[，？！…]+", "$1"),
            (r"^\s+", ""),
            (r"\s+$", ""),
            (r"^，", ""),
            (r"，$", ""),
        ];

        RuleCleaner {
            rules: rules
                .into_iter()
                .map(|(find, replace)| Rule {
                    pattern: Regex::new(find).unwrap(),
                    replacement: replace.to_string(),
                })
                .collect(),
        }
    }

    /// Baseline rules followed by a user-supplied ordered rule list, loaded
    /// from a JSON array of `{"find": ..., "replace": ...}` objects.
    pub fn with_rules_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open rules file: {}", path.display()))?;
        let specs: Vec<RuleSpec> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;

        let mut cleaner = Self::baseline();
        for spec in specs {
            let pattern = Regex::new(&spec.find)
                .with_context(|| format!("Invalid rule pattern: {}", spec.find))?;
            cleaner.rules.push(Rule {
                pattern,
                replacement: spec.replace,
            });
        }
        Ok(cleaner)
    }

    /// Number of rules in the pipeline
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl SubtitleCleaner for RuleCleaner {
    fn clean(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = rule
                .pattern
                .replace_all(&out, rule.replacement.as_str())
                .into_owned();
        }
        out
    }
}

/// Pass-through cleaner for tests and timing-only runs
#[derive(Debug, Default)]
pub struct NoopCleaner;

impl SubtitleCleaner for NoopCleaner {
    fn clean(&self, text: &str) -> String {
        text.to_string()
    }
}
