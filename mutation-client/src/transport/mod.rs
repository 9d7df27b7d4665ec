//! The seam between the client and the network.
//!
//! The client never owns connections or TLS settings. It hands a serialized
//! [MutationBody](../struct.MutationBody.html) to a [Transport](./trait.Transport.html) and gets
//! back a status and a raw body, which it then classifies itself.

#[cfg(feature = "http-transport")]
mod http;

use crate::{MutationBody, TransportError};
#[cfg(feature = "http-transport")]
pub use http::{HeaderPair, HttpTransport};
use std::sync::Arc;

/// The raw outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP (or HTTP-equivalent) status code.
    pub status: u16,
    pub body: Vec<u8>
}

impl TransportResponse {
    pub fn new<B: Into<Vec<u8>>>(status: u16, body: B) -> Self {
        TransportResponse {
            status,
            body: body.into()
        }
    }

    /// A response with the given status and a JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Sends one mutation request and returns whatever came back.
///
/// Implementations should return `Err` only when no response could be obtained at all;
/// non-success statuses are returned as a normal `TransportResponse`.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, body: &MutationBody<'_>) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport> Transport for Arc<T> {
    async fn send(&self, body: &MutationBody<'_>) -> Result<TransportResponse, TransportError> {
        (**self).send(body).await
    }
}
