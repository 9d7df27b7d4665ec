#[allow(clippy::all)]
pub struct DeleteTodo;
#[allow(clippy::all)]
pub mod delete_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "DeleteTodo";
    pub const ROOT_FIELD: &str = "deleteTodo";
    pub const QUERY: &str = "mutation DeleteTodo($id: ID!, $randomId: String!) {\n  deleteTodo(id: $id, randomId: $randomId) {\n    id\n    title\n    completed\n    randomId\n    createdDate\n    __typename\n  }\n}";
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code)]
    type ID = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub id: ID,
        pub random_id: String
    }
    impl Variables {
        #[doc = "Build the variables with a fresh dedup token. Call once per logical write."]
        pub fn new(id: ID) -> Self {
            Variables {
                id,
                random_id: ::mutation_client::new_dedup_token()
            }
        }
    }
    impl From<Variables> for ::mutation_client::VariablesBag {
        fn from(variables: Variables) -> Self {
            ::mutation_client::VariablesBag::new()
                .with("id", variables.id)
                .with("randomId", variables.random_id)
        }
    }
    #[doc = "Delete a todo, returning its last state."]
    pub static DESCRIPTOR: ::mutation_client::MutationDescriptor =
        ::mutation_client::MutationDescriptor {
            name: OPERATION_NAME,
            document: QUERY,
            root_field: ROOT_FIELD,
            variable_names: &["id", "randomId"],
            selected_fields: &crate::TODO_FIELDS
        };
}
#[allow(clippy::all)]
impl DeleteTodo {
    pub fn descriptor() -> &'static ::mutation_client::MutationDescriptor {
        &delete_todo::DESCRIPTOR
    }
}
