mod error;
mod http;
mod id_gen;
pub mod mock;
mod msg;
mod requester;

pub use error::RpcError;
pub use http::{HttpEndpointRequester, HttpRequesterConfig};
pub(crate) use id_gen::RpcIdGenerate;
pub use msg::{EmptyArgs, RpcErrorObject, RpcRequest, RpcResponse, SuccessResponse, JSON_RPC_VERSION};
pub use requester::EndpointRequester;
