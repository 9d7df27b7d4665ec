use crate::{MutationDescriptor, ValidationError};
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The variable carrying the client-generated dedup token.
pub const DEDUP_TOKEN: &str = "randomId";

const DEDUP_TOKEN_LEN: usize = 16;

/// The variables for a single mutation call, keyed by variable name.
///
/// A bag is built once per logical call and is sent unchanged on every attempt of that call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariablesBag(BTreeMap<String, Value>);

impl VariablesBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any struct that serializes to a JSON object, such as a generated `Variables` struct.
    pub fn from_serializable<T: Serialize>(variables: &T) -> Result<Self, ValidationError> {
        match serde_json::to_value(variables) {
            Ok(Value::Object(map)) => Ok(VariablesBag(map.into_iter().collect())),
            Ok(other) => Err(ValidationError::NotAnObject(json_kind(&other))),
            Err(e) => Err(ValidationError::Serialize(e.to_string()))
        }
    }

    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Generate a random `randomId` unless one is already set.
    ///
    /// Call this once when building the bag for a logical write, never per attempt.
    pub fn with_dedup_token(mut self) -> Self {
        if !self.0.contains_key(DEDUP_TOKEN) {
            self.insert(DEDUP_TOKEN, new_dedup_token());
        }
        self
    }

    pub fn dedup_token(&self) -> Option<&str> {
        self.get(DEDUP_TOKEN).and_then(Value::as_str)
    }

    /// Check that the bag holds exactly the variables the descriptor declares.
    pub fn validate(&self, descriptor: &MutationDescriptor) -> Result<(), ValidationError> {
        let missing: Vec<String> = descriptor
            .variable_names
            .iter()
            .filter(|name| !self.0.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingVariables {
                operation: descriptor.name,
                names: missing
            });
        }

        let unexpected: Vec<String> = self
            .keys()
            .filter(|key| !descriptor.declares_variable(key))
            .map(str::to_string)
            .collect();
        if !unexpected.is_empty() {
            return Err(ValidationError::UnexpectedVariables {
                operation: descriptor.name,
                names: unexpected
            });
        }

        Ok(())
    }
}

/// A fresh random dedup token. Generate one per logical write, never per attempt.
pub fn new_dedup_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DEDUP_TOKEN_LEN)
        .map(char::from)
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}
