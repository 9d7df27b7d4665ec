use std::sync::Arc;

mod builder;
mod r#impl;
mod response;
mod retry;

use crate::{
    clock::{Clock, TokioClock},
    transport::Transport,
    CancellationToken, DescriptorRegistry, ExecutionConfig, MutationDescriptor, MutationError,
    MutationResult, VariablesBag
};
pub use builder::ClientBuilder;
pub use r#impl::ClientImpl;
use serde::de::DeserializeOwned;

/// The mutation client. Cheap to clone; clones share the transport, clock and registry.
#[repr(transparent)]
pub struct MutationClient<T: Transport, C: Clock = TokioClock>(pub Arc<ClientImpl<T, C>>);

impl<T: Transport, C: Clock> Clone for MutationClient<T, C> {
    fn clone(&self) -> Self {
        MutationClient(self.0.clone())
    }
}

impl<T: Transport> MutationClient<T> {
    pub fn builder(transport: T) -> ClientBuilder<T> {
        ClientBuilder::new(transport)
    }
}

impl<T: Transport, C: Clock> MutationClient<T, C> {
    /// Send a mutation, validating the variables first and retrying transient failures.
    ///
    /// Nothing is sent if the variables don't match the descriptor. The same variables,
    /// including the `randomId` dedup token, are sent on every attempt.
    /// Cancelling `cancel` abandons the in-flight attempt or backoff and returns
    /// [MutationError::Cancelled](../enum.MutationError.html#variant.Cancelled).
    pub async fn execute(
        &self,
        descriptor: &MutationDescriptor,
        variables: VariablesBag,
        config: &ExecutionConfig,
        cancel: &CancellationToken
    ) -> MutationResult {
        self.0.execute(descriptor, variables, config, cancel).await
    }

    /// Like `execute`, using the config the client was built with.
    pub async fn execute_with(
        &self,
        descriptor: &MutationDescriptor,
        variables: VariablesBag,
        cancel: &CancellationToken
    ) -> MutationResult {
        self.0
            .execute(descriptor, variables, &self.0.config, cancel)
            .await
    }

    /// Look the descriptor up in the client's registry by operation name and execute it.
    pub async fn execute_named(
        &self,
        name: &str,
        variables: VariablesBag,
        cancel: &CancellationToken
    ) -> MutationResult {
        self.0
            .execute_named(name, variables, &self.0.config, cancel)
            .await
    }

    /// Execute and deserialize the payload into `R`.
    ///
    /// A payload that doesn't fit `R` is reported as a schema mismatch.
    pub async fn execute_typed<R: DeserializeOwned>(
        &self,
        descriptor: &MutationDescriptor,
        variables: VariablesBag,
        cancel: &CancellationToken
    ) -> Result<R, MutationError> {
        let payload = self.execute_with(descriptor, variables, cancel).await?;
        payload
            .deserialize()
            .map_err(|e| MutationError::schema_mismatch(descriptor.name, e.to_string()))
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.0.config
    }

    pub fn registry(&self) -> &DescriptorRegistry {
        &self.0.registry
    }
}
