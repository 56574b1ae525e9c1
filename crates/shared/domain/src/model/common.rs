use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authorship metadata, exposed on models as `edited_by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorInfo {
    pub author: Option<String>,
    pub contributors: Vec<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Synonym {
    pub value: String,
    pub lang: Option<String>,
}

/// Free-form metadata record ("passport") attached to a document.
///
/// The backend does not fix its shape, so it is kept as raw JSON and queried by dotted path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passport(Value);

impl Passport {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Collects every string found under `path` (e.g. `"bibliography.bibliographical_text_field"`).
    ///
    /// Arrays met along the way are searched element by element, in order.
    #[must_use]
    pub fn leaves(&self, path: &str) -> Vec<&str> {
        let mut current: Vec<&Value> = vec![&self.0];
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = current.into_iter().flat_map(flatten_arrays).filter_map(|v| v.get(segment)).collect();
        }

        let mut leaves = Vec::new();
        for value in current {
            collect_strings(value, &mut leaves);
        }
        leaves
    }
}

fn flatten_arrays(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten_arrays).collect(),
        other => vec![other],
    }
}

fn collect_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        _ => {},
    }
}
