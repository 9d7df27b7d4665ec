//! A resilient GraphQL mutation client.
//!
//! Mutation documents are described ahead of time by a [MutationDescriptor](./struct.MutationDescriptor.html),
//! usually generated alongside the `.graphql` files they come from. The client takes such a
//! descriptor together with a [VariablesBag](./struct.VariablesBag.html), sends it through an
//! injected [Transport](./transport/trait.Transport.html), validates the response against the
//! fields the descriptor selects and retries transient failures with exponential backoff.
//!
//! # Getting Started
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use mutation_client::{
//!     transport::HttpTransport, CancellationToken, MutationClient, MutationDescriptor, VariablesBag
//! };
//!
//! static ADD_TODO: MutationDescriptor = MutationDescriptor {
//!     name: "AddTodo",
//!     document: "mutation AddTodo($title: String!, $randomId: String!) { addTodo(title: $title, randomId: $randomId) { id title } }",
//!     root_field: "addTodo",
//!     variable_names: &["title", "randomId"],
//!     selected_fields: &["id", "title"]
//! };
//!
//! let client = MutationClient::builder(HttpTransport::new("http://localhost:8080/graphql").unwrap())
//!     .build();
//!
//! let variables = VariablesBag::new()
//!     .with("title", "Buy milk")
//!     .with_dedup_token();
//!
//! let payload = client
//!     .execute_with(&ADD_TODO, variables, &CancellationToken::new())
//!     .await
//!     .unwrap();
//! assert_eq!(payload.get("title").unwrap(), "Buy milk");
//! # });
//! ```
//!
//! # Retries
//!
//! Network errors, attempt timeouts and `5xx` responses are transient and retried up to
//! `max_attempts` times. Every retry waits `base_delay * 2^n`, capped at `max_delay`.
//! Everything else (bad variables, `4xx`, a GraphQL `errors` array, a response that doesn't
//! match the declared selection) is returned right away.
//!
//! Mutations aren't idempotent, so the variables of one call (including its `randomId`
//! dedup token) are built once and sent unchanged on every attempt. The server uses the token
//! to recognize repeated delivery of the same write.
//!
//! # Features
//!
//! * `http-transport` **(default)** - Include the `reqwest` based [HttpTransport](./transport/struct.HttpTransport.html)

#[macro_use]
extern crate serde;
#[macro_use]
extern crate async_trait;

use std::{collections::HashMap, fmt, fmt::Display};

pub mod client;
pub mod clock;
mod config;
mod descriptor;
mod error;
mod payload;
pub mod transport;
mod variables;

pub use client::{ClientBuilder, MutationClient};
pub use config::ExecutionConfig;
pub use descriptor::{DescriptorRegistry, MutationDescriptor};
pub use error::{ApplicationError, MutationError, TransportError, ValidationError};
pub use payload::MutationPayload;
pub use tokio_util::sync::CancellationToken;
pub use variables::{new_dedup_token, VariablesBag, DEDUP_TOKEN};

/// The outcome of a single `execute` call: the validated payload or the classified failure.
pub type MutationResult = Result<MutationPayload, MutationError>;

/// The form in which mutations are sent over HTTP in most implementations.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MutationBody<'a> {
    /// The GraphQL document, as a string.
    pub query: &'a str,
    /// The GraphQL operation name, as a string.
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    /// The values for the variables. They always match the ones declared by the descriptor.
    pub variables: &'a VariablesBag
}

/// The generic shape taken by the responses of GraphQL APIs.
///
/// `data` is kept as raw JSON; the client narrows it down to the declared selection.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Response {
    /// The absent, partial or complete response data.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// The top-level errors returned by the server.
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>
}

/// An element in the top-level `errors` array of a response body.
///
/// ```
/// # use serde_json::json;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use mutation_client::*;
///
/// let body: Response = serde_json::from_value(json!({
///     "data": null,
///     "errors": [
///         {
///             "message": "Todo not found",
///             "locations": [{ "line": 2, "column": 5 }],
///             "path": ["deleteTodo"]
///         }
///     ]
/// }))?;
///
/// let errors = body.errors.unwrap();
/// assert_eq!(errors[0].to_string(), "deleteTodo:2:5: Todo not found");
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQLError {
    /// The human-readable error message. This is the only required field.
    pub message: String,
    /// Which locations in the document the error applies to.
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    /// Which path in the response the error applies to, e.g. `["updateTodo", "title"]`.
    #[serde(default)]
    pub path: Option<Vec<PathFragment>>,
    /// Additional error details. Their exact format is defined by the server.
    #[serde(default)]
    pub extensions: Option<HashMap<String, serde_json::Value>>
}

impl Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .as_ref()
            .map(|fragments| {
                fragments
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_else(|| "<mutation>".to_string());

        let loc = self
            .locations
            .as_ref()
            .and_then(|locations| locations.first())
            .copied()
            .unwrap_or_default();

        write!(f, "{}:{}:{}: {}", path, loc.line, loc.column, self.message)
    }
}

/// Part of a path in a response. It can be an object key or an array index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PathFragment {
    /// A key inside an object
    Key(String),
    /// An index inside an array
    Index(i32)
}

impl Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathFragment::Key(ref key) => write!(f, "{}", key),
            PathFragment::Index(ref idx) => write!(f, "{}", idx)
        }
    }
}

/// A location inside a mutation document, starting from 1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub line: i32,
    pub column: i32
}
