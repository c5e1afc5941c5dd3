// Skill extraction from plain resume text.
// Token matching against a fixed dictionary; PDF decoding happens upstream.

pub mod dictionary;
pub mod skill_extractor;

pub use skill_extractor::{KeywordSkillExtractor, SkillExtractor};
