use nodeadmin_rpc::{EmptyArgs, EndpointRequester, HttpEndpointRequester, HttpRequesterConfig, RpcError, SuccessResponse};

use crate::{
    msg::{AliasArgs, AliasChainArgs, GetAliasesOfChainReply, GetChainAliasesArgs},
    ADMIN_ENDPOINT, ADMIN_NAMESPACE,
};

/// Typed access to the admin API of a node.
///
/// Every method is a single call through the requester. Requester errors are returned as they
/// are; the `bool` results are the node's own success flag.
pub struct AdminClient<R> {
    requester: R,
}

impl AdminClient<HttpEndpointRequester> {
    /// Client for the admin API of the node at `uri`, like `http://127.0.0.1:9650`
    pub fn new(uri: &str) -> Result<Self, RpcError> {
        Self::with_config(HttpRequesterConfig {
            uri: uri.to_string(),
            ..Default::default()
        })
    }

    /// Endpoint and namespace of `cfg` are always replaced with the admin ones.
    pub fn with_config(cfg: HttpRequesterConfig) -> Result<Self, RpcError> {
        let requester = HttpEndpointRequester::new(HttpRequesterConfig {
            endpoint: ADMIN_ENDPOINT.to_string(),
            namespace: ADMIN_NAMESPACE.to_string(),
            ..cfg
        })?;
        log::info!("AdminClient connect to {}", requester.url());
        Ok(Self::with_requester(requester))
    }
}

impl<R: EndpointRequester> AdminClient<R> {
    pub fn with_requester(requester: R) -> Self {
        Self { requester }
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    async fn call_success<P: serde::Serialize + Send + Sync>(&self, method: &str, params: &P) -> Result<bool, RpcError> {
        let res: SuccessResponse = self.requester.send_request(method, params).await?;
        Ok(res.success)
    }

    pub async fn start_cpu_profiler(&self) -> Result<bool, RpcError> {
        self.call_success("startCPUProfiler", &EmptyArgs {}).await
    }

    pub async fn stop_cpu_profiler(&self) -> Result<bool, RpcError> {
        self.call_success("stopCPUProfiler", &EmptyArgs {}).await
    }

    pub async fn memory_profile(&self) -> Result<bool, RpcError> {
        self.call_success("memoryProfile", &EmptyArgs {}).await
    }

    pub async fn lock_profile(&self) -> Result<bool, RpcError> {
        self.call_success("lockProfile", &EmptyArgs {}).await
    }

    /// Gives the API `endpoint` the extra name `alias`
    pub async fn alias(&self, endpoint: &str, alias: &str) -> Result<bool, RpcError> {
        let params = AliasArgs {
            endpoint: endpoint.to_string(),
            alias: alias.to_string(),
        };
        self.call_success("alias", &params).await
    }

    pub async fn alias_chain(&self, chain: &str, alias: &str) -> Result<bool, RpcError> {
        let params = AliasChainArgs {
            chain: chain.to_string(),
            alias: alias.to_string(),
        };
        self.call_success("aliasChain", &params).await
    }

    pub async fn get_aliases_of_chain(&self, chain: &str) -> Result<GetAliasesOfChainReply, RpcError> {
        let params = GetChainAliasesArgs { chain: chain.to_string() };
        self.requester.send_request("getChainAliases", &params).await
    }

    /// Asks the node to write the stack traces of all its threads to its log directory
    pub async fn stacktrace(&self) -> Result<bool, RpcError> {
        self.call_success("stacktrace", &EmptyArgs {}).await
    }
}
