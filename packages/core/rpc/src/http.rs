use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::{EndpointRequester, RpcError, RpcIdGenerate, RpcRequest, RpcResponse};

#[derive(Debug, Clone)]
pub struct HttpRequesterConfig {
    /// Base address of the node, like `http://127.0.0.1:9650`
    pub uri: String,
    /// Path of the service on the node, like `/ext/admin`
    pub endpoint: String,
    /// Prefix added to every method name, `admin` turns `stacktrace` into `admin.stacktrace`
    pub namespace: String,
    pub timeout_ms: Option<u64>,
}

impl Default for HttpRequesterConfig {
    fn default() -> Self {
        Self {
            uri: "http://127.0.0.1:9650".to_string(),
            endpoint: String::new(),
            namespace: String::new(),
            timeout_ms: Some(10000),
        }
    }
}

/// JSON-RPC 2.0 over HTTP POST. One request per call, no retry.
pub struct HttpEndpointRequester {
    client: reqwest::Client,
    url: String,
    namespace: String,
    id_gen: RpcIdGenerate,
}

impl HttpEndpointRequester {
    pub fn new(cfg: HttpRequesterConfig) -> Result<Self, RpcError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            client: builder.build()?,
            url: join_url(&cfg.uri, &cfg.endpoint),
            namespace: cfg.namespace,
            id_gen: RpcIdGenerate::default(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn method_name(&self, method: &str) -> String {
        if self.namespace.is_empty() {
            method.to_string()
        } else {
            format!("{}.{}", self.namespace, method)
        }
    }
}

fn join_url(uri: &str, endpoint: &str) -> String {
    let uri = uri.trim_end_matches('/');
    if endpoint.is_empty() {
        uri.to_string()
    } else if endpoint.starts_with('/') {
        format!("{uri}{endpoint}")
    } else {
        format!("{uri}/{endpoint}")
    }
}

#[async_trait::async_trait]
impl EndpointRequester for HttpEndpointRequester {
    async fn send_request<P, R>(&self, method: &str, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let method = self.method_name(method);
        let id = self.id_gen.generate();
        log::debug!("HttpEndpointRequester send {method} with id {id} to {}", self.url);

        let req = RpcRequest::create(&method, params, id);
        let res = self.client.post(&self.url).json(&req).send().await?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("HttpEndpointRequester {method} to {} got http status {status}", self.url);
            return Err(RpcError::HttpStatus(status.as_u16()));
        }

        let body = res.bytes().await?;
        let res: RpcResponse<R> = serde_json::from_slice(&body)?;
        res.into_result().map_err(|err| {
            if let RpcError::Remote { code, message } = &err {
                log::warn!("HttpEndpointRequester {method} rejected by remote: {code} {message}");
            }
            err
        })
    }
}
