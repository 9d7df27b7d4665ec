#[allow(clippy::all)]
pub struct AddTodo;
#[allow(clippy::all)]
pub mod add_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "AddTodo";
    pub const ROOT_FIELD: &str = "addTodo";
    pub const QUERY: &str = "mutation AddTodo($title: String!, $randomId: String!) {\n  addTodo(title: $title, randomId: $randomId) {\n    id\n    title\n    completed\n    randomId\n    createdDate\n    __typename\n  }\n}";
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code)]
    type ID = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub title: String,
        pub random_id: String
    }
    impl Variables {
        #[doc = "Build the variables with a fresh dedup token. Call once per logical write."]
        pub fn new(title: String) -> Self {
            Variables {
                title,
                random_id: ::mutation_client::new_dedup_token()
            }
        }
    }
    impl From<Variables> for ::mutation_client::VariablesBag {
        fn from(variables: Variables) -> Self {
            ::mutation_client::VariablesBag::new()
                .with("title", variables.title)
                .with("randomId", variables.random_id)
        }
    }
    #[doc = "Add a new todo. Every call creates a new record unless the server recognizes its `randomId`."]
    pub static DESCRIPTOR: ::mutation_client::MutationDescriptor =
        ::mutation_client::MutationDescriptor {
            name: OPERATION_NAME,
            document: QUERY,
            root_field: ROOT_FIELD,
            variable_names: &["title", "randomId"],
            selected_fields: &crate::TODO_FIELDS
        };
}
#[allow(clippy::all)]
impl AddTodo {
    pub fn descriptor() -> &'static ::mutation_client::MutationDescriptor {
        &add_todo::DESCRIPTOR
    }
}
