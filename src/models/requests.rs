//! Request DTOs for the student directory API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DirectoryError, Result};
use crate::models::StudentProfile;

/// Request body for create (POST /students) and update (PUT /students/:id)
///
/// Every field is optional: missing or `null` strings become empty. Field
/// names match without regard to case. An `id` must still be an integer if
/// present, but its value is discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRequest {
    /// Accepted for shape compatibility, never used
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl StudentRequest {
    /// Parses a raw request body.
    ///
    /// Content-Type is not inspected; anything that is not a JSON object of
    /// the right shape is a `MalformedBody`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DirectoryError::MalformedBody(e.to_string()))?;

        // Derived struct impls would also accept a JSON array
        let Value::Object(object) = value else {
            return Err(DirectoryError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        };

        serde_json::from_value(Value::Object(fold_keys(object)))
            .map_err(|e| DirectoryError::MalformedBody(e.to_string()))
    }

    /// Drops the id and fills missing fields with empty strings.
    pub fn into_profile(self) -> StudentProfile {
        StudentProfile {
            name: self.name.unwrap_or_default(),
            faculty: self.faculty.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
        }
    }
}

/// Lowercases object keys so `"Name"` fills `name`.
///
/// When two keys fold to the same name, the one already lowercase wins.
fn fold_keys(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    for (key, value) in object {
        let lower = key.to_lowercase();
        if key == lower || !folded.contains_key(&lower) {
            folded.insert(lower, value);
        }
    }
    folded
}
