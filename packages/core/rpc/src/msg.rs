use serde::{Deserialize, Serialize};

use crate::RpcError;

pub const JSON_RPC_VERSION: &str = "2.0";

/// Params for calls which don't take any, serialized as `{}`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyArgs {}

/// Reply of every call that only reports whether the operation went through
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: &'a P,
    pub id: u64,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn create(method: &str, params: &'a P, id: u64) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            method: method.to_string(),
            params,
            id,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<R> {
    #[serde(default)]
    pub jsonrpc: String,
    pub result: Option<R>,
    pub error: Option<RpcErrorObject>,
    pub id: Option<u64>,
}

impl<R> RpcResponse<R> {
    /// An error object wins over a result; a response carrying neither cannot be decoded.
    pub fn into_result(self) -> Result<R, RpcError> {
        if let Some(err) = self.error {
            return Err(RpcError::Remote { code: err.code, message: err.message });
        }
        self.result.ok_or_else(|| RpcError::Decode("response has neither result nor error".to_string()))
    }
}
