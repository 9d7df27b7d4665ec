use crate::{
    client::{ClientImpl, MutationClient},
    clock::{Clock, TokioClock},
    transport::Transport,
    DescriptorRegistry, ExecutionConfig
};
use std::sync::Arc;

pub struct ClientBuilder<T: Transport, C: Clock = TokioClock> {
    transport: T,
    clock: C,
    config: ExecutionConfig,
    registry: DescriptorRegistry
}

impl<T: Transport> ClientBuilder<T> {
    pub fn new(transport: T) -> Self {
        ClientBuilder {
            transport,
            clock: TokioClock,
            config: ExecutionConfig::default(),
            registry: DescriptorRegistry::new()
        }
    }
}

impl<T: Transport, C: Clock> ClientBuilder<T, C> {
    /// Replace the clock used for backoff and attempt deadlines.
    pub fn with_clock<TClock: Clock>(self, clock: TClock) -> ClientBuilder<T, TClock> {
        ClientBuilder {
            transport: self.transport,
            clock,
            config: self.config,
            registry: self.registry
        }
    }

    /// The config used by every method that doesn't take one explicitly.
    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    /// The descriptors `execute_named` can look up.
    pub fn with_registry(mut self, registry: DescriptorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> MutationClient<T, C> {
        let client = ClientImpl {
            transport: self.transport,
            clock: self.clock,
            config: self.config,
            registry: self.registry
        };

        MutationClient(Arc::new(client))
    }
}
