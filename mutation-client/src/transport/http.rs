use crate::{
    transport::{Transport, TransportResponse},
    MutationBody, TransportError
};
use std::{fmt, sync::Arc, time::Duration};
use url::Url;

/// An extra header sent with every request, as `(name, value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPair(pub String, pub String);

type HeaderFn = Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>;

/// The default transport.
///
/// Posts the mutation as JSON to a single endpoint using `reqwest`.
/// The extra headers function is called once per attempt, so it may hand out fresh tokens.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    extra_headers: Option<HeaderFn>,
    timeout: Option<Duration>
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url.as_str())
            .field("extra_headers", &self.extra_headers.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new<U: AsRef<str>>(url: U) -> Result<Self, url::ParseError> {
        Ok(HttpTransport {
            client: reqwest::Client::new(),
            url: url.as_ref().parse()?,
            extra_headers: None,
            timeout: None
        })
    }

    /// Use a preconfigured `reqwest` client, e.g. one with a proxy or custom TLS roots.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_extra_headers<F: Fn() -> Vec<HeaderPair> + Send + Sync + 'static>(
        mut self,
        header_fn: F
    ) -> Self {
        self.extra_headers = Some(Arc::new(header_fn));
        self
    }

    /// Let `reqwest` abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn map_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            // Zero when the timeout came from a client passed to `with_client`.
            TransportError::Timeout(self.timeout.unwrap_or_default())
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: &MutationBody<'_>) -> Result<TransportResponse, TransportError> {
        let mut request = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        if let Some(ref extra_headers) = self.extra_headers {
            for HeaderPair(key, value) in extra_headers() {
                request = request.header(key.as_str(), value.as_str());
            }
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::VariablesBag;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method},
        Mock, MockServer, ResponseTemplate
    };

    fn body(variables: &VariablesBag) -> MutationBody<'_> {
        MutationBody {
            query: "mutation DeleteTodo($id: ID!) { deleteTodo(id: $id) { id } }",
            operation_name: "DeleteTodo",
            variables
        }
    }

    #[tokio::test]
    async fn posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Bearer token"))
            .and(body_json(json!({
                "query": "mutation DeleteTodo($id: ID!) { deleteTodo(id: $id) { id } }",
                "operationName": "DeleteTodo",
                "variables": { "id": "4" }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "deleteTodo": { "id": "4" } } }))
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(server.uri()).unwrap().with_extra_headers(|| {
            vec![HeaderPair(
                "Authorization".to_string(),
                "Bearer token".to_string()
            )]
        });
        let variables = VariablesBag::new().with("id", "4");
        let response = transport.send(&body(&variables)).await.unwrap();

        assert_eq!(response.status, 200);
        let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(parsed["data"]["deleteTodo"]["id"], "4");
    }

    #[tokio::test]
    async fn passes_error_statuses_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(server.uri()).unwrap();
        let variables = VariablesBag::new();
        let response = transport.send(&body(&variables)).await.unwrap();

        assert_eq!(response.status, 503);
        assert!(response.is_server_error());
        assert_eq!(response.body, b"busy".to_vec());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let transport = HttpTransport::new("http://127.0.0.1:1/graphql").unwrap();
        let variables = VariablesBag::new();
        let result = transport.send(&body(&variables)).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[tokio::test]
    async fn slow_server_is_a_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(server.uri())
            .unwrap()
            .with_timeout(Duration::from_millis(50));
        let variables = VariablesBag::new();
        let result = transport.send(&body(&variables)).await;

        assert_eq!(result, Err(TransportError::Timeout(Duration::from_millis(50))));
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(HttpTransport::new("not a url").is_err());
    }
}
