use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The validated result of a mutation, holding exactly the fields its descriptor selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationPayload(Map<String, Value>);

impl MutationPayload {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        MutationPayload(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Deserialize the payload into a typed struct, e.g. a generated `Todo`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0))
    }
}

impl From<MutationPayload> for Value {
    fn from(payload: MutationPayload) -> Self {
        Value::Object(payload.0)
    }
}
