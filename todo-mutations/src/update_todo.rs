#[allow(clippy::all)]
pub struct UpdateTodo;
#[allow(clippy::all)]
pub mod update_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "UpdateTodo";
    pub const ROOT_FIELD: &str = "updateTodo";
    pub const QUERY: &str = "mutation UpdateTodo($id: ID!, $completed: Boolean!, $randomId: String!) {\n  updateTodo(id: $id, completed: $completed, randomId: $randomId) {\n    id\n    title\n    completed\n    randomId\n    createdDate\n    __typename\n  }\n}";
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code)]
    type ID = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub id: ID,
        pub completed: Boolean,
        pub random_id: String
    }
    impl Variables {
        #[doc = "Build the variables with a fresh dedup token. Call once per logical write."]
        pub fn new(id: ID, completed: Boolean) -> Self {
            Variables {
                id,
                completed,
                random_id: ::mutation_client::new_dedup_token()
            }
        }
    }
    impl From<Variables> for ::mutation_client::VariablesBag {
        fn from(variables: Variables) -> Self {
            ::mutation_client::VariablesBag::new()
                .with("id", variables.id)
                .with("completed", variables.completed)
                .with("randomId", variables.random_id)
        }
    }
    #[doc = "Mark a todo as completed or not completed."]
    pub static DESCRIPTOR: ::mutation_client::MutationDescriptor =
        ::mutation_client::MutationDescriptor {
            name: OPERATION_NAME,
            document: QUERY,
            root_field: ROOT_FIELD,
            variable_names: &["id", "completed", "randomId"],
            selected_fields: &crate::TODO_FIELDS
        };
}
#[allow(clippy::all)]
impl UpdateTodo {
    pub fn descriptor() -> &'static ::mutation_client::MutationDescriptor {
        &update_todo::DESCRIPTOR
    }
}
