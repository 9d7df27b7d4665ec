use super::{
    response::into_payload,
    retry::{Next, RetryState}
};
use crate::{
    clock::Clock, transport::Transport, CancellationToken, DescriptorRegistry, ExecutionConfig,
    MutationBody, MutationDescriptor, MutationError, MutationResult, TransportError,
    ValidationError, VariablesBag
};
use std::time::Duration;
use tracing::{debug, warn, Instrument};

pub struct ClientImpl<T: Transport, C: Clock> {
    pub(crate) transport: T,
    pub(crate) clock: C,
    pub(crate) config: ExecutionConfig,
    pub(crate) registry: DescriptorRegistry
}

impl<T: Transport, C: Clock> ClientImpl<T, C> {
    pub async fn execute(
        &self,
        descriptor: &MutationDescriptor,
        variables: VariablesBag,
        config: &ExecutionConfig,
        cancel: &CancellationToken
    ) -> MutationResult {
        let span = tracing::debug_span!("mutation", operation = descriptor.name);
        self.execute_inner(descriptor, variables, config, cancel)
            .instrument(span)
            .await
    }

    pub async fn execute_named(
        &self,
        name: &str,
        variables: VariablesBag,
        config: &ExecutionConfig,
        cancel: &CancellationToken
    ) -> MutationResult {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| ValidationError::UnknownOperation(name.to_string()))?;
        self.execute(descriptor, variables, config, cancel).await
    }

    async fn execute_inner(
        &self,
        descriptor: &MutationDescriptor,
        variables: VariablesBag,
        config: &ExecutionConfig,
        cancel: &CancellationToken
    ) -> MutationResult {
        if descriptor.document.trim().is_empty() {
            return Err(ValidationError::EmptyDocument(descriptor.name).into());
        }
        if let Err(e) = variables.validate(descriptor) {
            debug!(error = %e, "rejected variables");
            return Err(e.into());
        }

        // Built once; every attempt sends the same variables and dedup token.
        let body = MutationBody {
            query: descriptor.document,
            operation_name: descriptor.name,
            variables: &variables
        };
        let mut retry = RetryState::new(config);

        loop {
            if cancel.is_cancelled() {
                retry.cancel();
                return Err(MutationError::Cancelled);
            }

            let attempt = retry.begin_attempt();
            debug!(attempt, dedup_token = ?variables.dedup_token(), "sending mutation");

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(attempt, "cancelled while in flight");
                    retry.cancel();
                    return Err(MutationError::Cancelled);
                }
                outcome = self.attempt(descriptor, &body, config.attempt_timeout) => outcome
            };

            let error = match outcome {
                Ok(payload) => {
                    retry.succeed();
                    debug!(attempt, "mutation succeeded");
                    return Ok(payload);
                }
                Err(error) => error
            };

            match retry.on_failure(error) {
                Next::Retry(delay) => {
                    if let Some(error) = retry.last_error() {
                        warn!(attempt, ?delay, %error, "transient failure, retrying");
                    }
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            debug!(attempt, "cancelled during backoff");
                            retry.cancel();
                            return Err(MutationError::Cancelled);
                        }
                        _ = self.clock.sleep(delay) => {}
                    }
                }
                Next::Fail(error) => {
                    debug!(attempts = retry.attempt(), %error, "mutation failed");
                    return Err(error);
                }
            }
        }
    }

    async fn attempt(
        &self,
        descriptor: &MutationDescriptor,
        body: &MutationBody<'_>,
        timeout: Option<Duration>
    ) -> MutationResult {
        let response = match timeout {
            Some(timeout) => tokio::select! {
                biased;
                response = self.transport.send(body) => response,
                _ = self.clock.sleep(timeout) => Err(TransportError::Timeout(timeout))
            },
            None => self.transport.send(body).await
        }?;

        into_payload(descriptor, response)
    }
}
