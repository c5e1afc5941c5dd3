//! Skill Normalizer — turns raw skill strings into canonical, comparable tokens.
//!
//! Canonical form: surrounding whitespace and list separators removed, internal
//! whitespace collapsed to single spaces, lower-cased. Internal punctuation is
//! kept (`c++`, `node.js`, `ci/cd` stay distinct skills).

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Separators left over from bullet lists and comma-joined skill strings.
const EDGE_SEPARATORS: &[char] = &[',', ';', ':', '|', '•', '·', '*', '-'];

/// A single normalized skill. Only constructible through [`SkillToken::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    /// Canonicalizes `raw`. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let trimmed =
            collapsed.trim_matches(|c: char| c.is_whitespace() || EDGE_SEPARATORS.contains(&c));

        if trimmed.is_empty() {
            None
        } else {
            Some(SkillToken(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate's skills for one analysis request. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(HashSet<SkillToken>);

impl SkillSet {
    pub fn contains(&self, token: &SkillToken) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens in alphabetical order, for stable output.
    pub fn sorted(&self) -> Vec<SkillToken> {
        let mut tokens: Vec<SkillToken> = self.0.iter().cloned().collect();
        tokens.sort();
        tokens
    }
}

impl FromIterator<SkillToken> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillToken>>(iter: I) -> Self {
        SkillSet(iter.into_iter().collect())
    }
}

/// Builds a [`SkillSet`] from raw strings. Empty entries are dropped and
/// duplicates collapse; input order is not retained.
pub fn normalize<I, S>(raw_skills: I) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_skills
        .into_iter()
        .filter_map(|s| SkillToken::parse(s.as_ref()))
        .collect()
}
