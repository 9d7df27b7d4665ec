use crate::GraphQLError;
use std::time::Duration;
use thiserror::Error;

/// A problem with the call itself, caught before anything is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("the document for {0} is empty")]
    EmptyDocument(&'static str),
    #[error("missing variables for {operation}: {}", .names.join(", "))]
    MissingVariables {
        operation: &'static str,
        names: Vec<String>
    },
    #[error("unexpected variables for {operation}: {}", .names.join(", "))]
    UnexpectedVariables {
        operation: &'static str,
        names: Vec<String>
    },
    #[error("no mutation named {0} is registered")]
    UnknownOperation(String),
    #[error("variables must serialize to an object, got {0}")]
    NotAnObject(&'static str),
    #[error("failed to serialize variables: {0}")]
    Serialize(String)
}

/// A failure to get any response out of the server. These are always transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),
    #[error("server returned status {0}")]
    Status(u16)
}

/// The server understood the request and refused it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    #[error("server returned errors: {}", display_errors(.0))]
    GraphQL(Vec<GraphQLError>),
    #[error("server rejected the request with status {status}")]
    Status { status: u16, body: String }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Application(#[from] ApplicationError),
    #[error("response to {operation} doesn't match its selection: {reason}")]
    SchemaMismatch {
        operation: &'static str,
        reason: String
    },
    #[error("the mutation was cancelled")]
    Cancelled,
    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<MutationError>
    }
}

impl MutationError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, MutationError::Transport(_))
    }

    pub(crate) fn schema_mismatch<R: Into<String>>(operation: &'static str, reason: R) -> Self {
        MutationError::SchemaMismatch {
            operation,
            reason: reason.into()
        }
    }
}

fn display_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
