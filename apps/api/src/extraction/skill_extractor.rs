//! Skill Extractor — pluggable, trait-based extraction of skill names from resume text.
//!
//! Default: `KeywordSkillExtractor` (dictionary lookup, deterministic).
//! `AppState` holds an `Arc<dyn SkillExtractor>`.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::extraction::dictionary::{all_skills, SECTION_DELIMITERS, SECTION_HEADERS};
use crate::matching::normalizer::SkillToken;

/// Implement this to swap extraction backends without touching handlers.
pub trait SkillExtractor: Send + Sync {
    /// Sorted, de-duplicated raw skill names found in `text`.
    fn extract(&self, text: &str) -> Vec<String>;

    fn backend(&self) -> &'static str;
}

/// Dictionary-driven extractor.
///
/// 1. Every dictionary skill is searched case-insensitively, bounded by
///    non-alphanumeric characters (`java` does not fire inside `javascript`).
/// 2. An explicit skills section, when present, is split on list separators
///    and each part is mapped back to a dictionary skill.
pub struct KeywordSkillExtractor {
    patterns: Vec<(&'static str, Regex)>,
}

impl KeywordSkillExtractor {
    pub fn new() -> Result<Self> {
        let patterns = all_skills()
            .map(|skill| {
                let pattern = format!(r"(?i)(?:^|[^a-z0-9]){}(?:[^a-z0-9]|$)", regex::escape(skill));
                Regex::new(&pattern)
                    .with_context(|| format!("invalid pattern for skill '{skill}'"))
                    .map(|re| (skill, re))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Maps one section fragment to a dictionary skill: exact match first, then
    /// the longest skill mentioned in the fragment, then the shortest skill the
    /// fragment abbreviates (`postgres` → `postgresql`).
    fn resolve_fragment(&self, fragment: &str) -> Option<&'static str> {
        let token = SkillToken::parse(fragment)?;
        let part = token.as_str();

        if let Some((skill, _)) = self.patterns.iter().find(|(skill, _)| *skill == part) {
            return Some(*skill);
        }
        if part.len() <= 2 {
            return None;
        }

        let mentioned = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(part))
            .map(|(skill, _)| *skill)
            .max_by_key(|skill| skill.len());
        if mentioned.is_some() {
            return mentioned;
        }

        self.patterns
            .iter()
            .map(|(skill, _)| *skill)
            .filter(|skill| skill.contains(part))
            .min_by_key(|skill| skill.len())
    }
}

impl SkillExtractor for KeywordSkillExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut found: BTreeSet<&'static str> = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| *skill)
            .collect();

        for line in find_skills_section(text) {
            for fragment in line.split(SECTION_DELIMITERS) {
                if let Some(skill) = self.resolve_fragment(fragment) {
                    found.insert(skill);
                }
            }
        }

        found.into_iter().map(str::to_string).collect()
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Lines of the first skills section: everything after a header line up to the
/// first blank line or line starting with a digit.
fn find_skills_section(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let lower = line.to_lowercase();
        if SECTION_HEADERS.iter().any(|h| lower.contains(h)) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }
        lines.push(trimmed);
    }

    lines
}
