//! The Todo mutations, generated from `graphql/mutations.graphql`.
//!
//! Each operation gets a zero-size marker type (e.g. `AddTodo`) and a module holding its
//! document, its `Variables` and the static descriptor the client executes.

pub mod add_todo;
pub mod delete_todo;
pub mod update_todo;

pub use add_todo::AddTodo;
pub use delete_todo::DeleteTodo;
pub use update_todo::UpdateTodo;

use lazy_static::lazy_static;
use mutation_client::{DescriptorRegistry, MutationDescriptor};
use serde::{Deserialize, Serialize};

/// The fields every Todo mutation selects.
pub const TODO_FIELDS: [&str; 5] = ["id", "title", "completed", "randomId", "createdDate"];

pub static ADD_TODO: &MutationDescriptor = &add_todo::add_todo::DESCRIPTOR;
pub static UPDATE_TODO: &MutationDescriptor = &update_todo::update_todo::DESCRIPTOR;
pub static DELETE_TODO: &MutationDescriptor = &delete_todo::delete_todo::DESCRIPTOR;

lazy_static! {
    static ref REGISTRY: DescriptorRegistry = DescriptorRegistry::new()
        .with(ADD_TODO)
        .with(UPDATE_TODO)
        .with(DELETE_TODO);
}

/// All Todo mutations, keyed by operation name.
pub fn registry() -> &'static DescriptorRegistry {
    &REGISTRY
}

/// The payload every Todo mutation returns.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub random_id: String,
    pub created_date: String
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        add_todo::add_todo, delete_todo::delete_todo, update_todo::update_todo
    };
    use mutation_client::VariablesBag;

    #[test]
    fn registry_holds_every_mutation() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("AddTodo"), Some(ADD_TODO));
        assert_eq!(registry.get("UpdateTodo"), Some(UPDATE_TODO));
        assert_eq!(registry.get("DeleteTodo"), Some(DELETE_TODO));
        assert_eq!(AddTodo::descriptor(), ADD_TODO);
    }

    #[test]
    fn documents_declare_their_variables() {
        for descriptor in &[ADD_TODO, UPDATE_TODO, DELETE_TODO] {
            assert!(descriptor.document.starts_with(&format!("mutation {}(", descriptor.name)));
            for name in descriptor.variable_names {
                assert!(
                    descriptor.document.contains(&format!("${}:", name)),
                    "{} doesn't declare ${}",
                    descriptor.name,
                    name
                );
            }
            for field in descriptor.selected_fields {
                assert!(descriptor.document.contains(field));
            }
        }
    }

    #[test]
    fn documents_match_the_schema_file() {
        let source = include_str!("../graphql/mutations.graphql");
        for query in &[add_todo::QUERY, update_todo::QUERY, delete_todo::QUERY] {
            assert!(source.contains(query), "out of date:\n{}", query);
        }
    }

    #[test]
    fn generated_variables_match_descriptors() {
        let add: VariablesBag = add_todo::Variables::new("Buy milk".to_string()).into();
        assert!(add.validate(ADD_TODO).is_ok());
        assert!(add.dedup_token().is_some());

        let update: VariablesBag = update_todo::Variables::new("1".to_string(), true).into();
        assert!(update.validate(UPDATE_TODO).is_ok());

        let delete: VariablesBag = delete_todo::Variables::new("1".to_string()).into();
        assert!(delete.validate(DELETE_TODO).is_ok());
    }

    #[test]
    fn variables_serialize_like_the_bag() {
        let variables = update_todo::Variables {
            id: "1".to_string(),
            completed: false,
            random_id: "abc123".to_string()
        };
        let from_serde = VariablesBag::from_serializable(&variables).unwrap();
        let converted: VariablesBag = variables.into();
        assert_eq!(from_serde, converted);
    }

    #[test]
    fn every_call_gets_its_own_token() {
        let first = add_todo::Variables::new("a".to_string());
        let second = add_todo::Variables::new("a".to_string());
        assert_ne!(first.random_id, second.random_id);
    }
}
