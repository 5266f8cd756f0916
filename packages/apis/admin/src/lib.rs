pub static ADMIN_ENDPOINT: &str = "/ext/admin";
pub static ADMIN_NAMESPACE: &str = "admin";

mod client;
mod msg;

pub use client::AdminClient;
pub use msg::{AliasArgs, AliasChainArgs, GetAliasesOfChainReply, GetChainAliasesArgs};
pub use nodeadmin_rpc::{RpcError, SuccessResponse};
