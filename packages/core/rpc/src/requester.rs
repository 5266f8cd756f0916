use serde::{de::DeserializeOwned, Serialize};

use crate::RpcError;

/// Sends one named call to a remote endpoint and decodes the reply.
///
/// The caller picks the reply type `R` for the method it invokes. On `Err` no reply exists; the
/// error is whatever the underlying transport reported.
#[async_trait::async_trait]
pub trait EndpointRequester: Send + Sync {
    async fn send_request<P, R>(&self, method: &str, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + Send + Sync,
        R: DeserializeOwned + Send;
}
