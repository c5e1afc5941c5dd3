use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

fn unknown_company() -> String {
    UNKNOWN_COMPANY.to_string()
}

/// One job posting as supplied by the catalog. Metadata passes through to the
/// match report untouched; only the two skill lists are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: u64,
    #[serde(default)]
    pub company_id: Option<u64>,
    #[serde(default = "unknown_company")]
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default, deserialize_with = "deserialize_skill_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_skill_list")]
    pub preferred_skills: Vec<String>,
}

/// Deserializes a list of raw skills with a fixed coercion policy:
///
/// - missing or `null` list → empty
/// - string elements kept; numbers and booleans → their textual form
/// - `null` elements dropped
/// - nested arrays/objects, or a non-list value → error
///
/// Blank strings are kept here and dropped later by the normalizer.
pub fn deserialize_skill_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => {
            let mut skills = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                if let Some(skill) = coerce_skill(index, item).map_err(de::Error::custom)? {
                    skills.push(skill);
                }
            }
            Ok(skills)
        }
        Some(other) => Err(de::Error::custom(format!(
            "expected a list of skills, found {}",
            json_kind(&other)
        ))),
    }
}

fn coerce_skill(index: usize, value: Value) -> Result<Option<String>, String> {
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Null => Ok(None),
        other => Err(format!(
            "skill at index {index} must be a string, found {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
