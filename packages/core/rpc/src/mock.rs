//! In-memory requester for exercising API clients without a node.

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{EndpointRequester, RpcError, SuccessResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub method: String,
    pub params: Value,
}

/// Answers every call with the response (or error) it was built with.
///
/// A configured error is returned for any method. Without one, the configured response is handed
/// out as whatever reply type the caller asks for; asking for a reply of another shape panics,
/// since it means the fixture does not match the call under test.
pub struct MockRequester {
    response: Value,
    err: Option<RpcError>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockRequester {
    pub fn new<T: Serialize>(response: T, err: Option<RpcError>) -> Self {
        Self {
            response: serde_json::to_value(response).expect("Mock response should serialize"),
            err,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn success(success: bool) -> Self {
        Self::new(SuccessResponse { success }, None)
    }

    pub fn failing(err: RpcError) -> Self {
        Self::new(Value::Null, Some(err))
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<MockCall> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait::async_trait]
impl EndpointRequester for MockRequester {
    async fn send_request<P, R>(&self, method: &str, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let params = serde_json::to_value(params).expect("Mock params should serialize");
        self.calls.lock().push(MockCall { method: method.to_string(), params });

        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        match serde_json::from_value::<R>(self.response.clone()) {
            Ok(reply) => Ok(reply),
            Err(e) => panic!("illegal reply type {} for method {}: {}", std::any::type_name::<R>(), method, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::EmptyArgs;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct ListReply {
        items: Vec<String>,
    }

    #[async_std::test]
    async fn should_return_configured_response() {
        let mock = MockRequester::success(true);
        let reply: SuccessResponse = mock.send_request("ping", &EmptyArgs {}).await.unwrap();
        assert_eq!(reply, SuccessResponse { success: true });
    }

    #[async_std::test]
    async fn should_return_configured_error_for_any_method() {
        let err = RpcError::Transport("connection refused".to_string());
        let mock = MockRequester::new(SuccessResponse { success: true }, Some(err.clone()));
        assert_eq!(mock.send_request::<_, SuccessResponse>("ping", &EmptyArgs {}).await, Err(err.clone()));
        assert_eq!(mock.send_request::<_, ListReply>("list", &EmptyArgs {}).await, Err(err));
    }

    #[async_std::test]
    async fn should_record_calls() {
        let mock = MockRequester::new(ListReply { items: vec!["a".to_string()] }, None);
        let _: ListReply = mock.send_request("list", &json!({"from": 1})).await.unwrap();
        let _: ListReply = mock.send_request("list", &EmptyArgs {}).await.unwrap();
        assert_eq!(
            mock.calls(),
            vec![
                MockCall {
                    method: "list".to_string(),
                    params: json!({"from": 1}),
                },
                MockCall {
                    method: "list".to_string(),
                    params: json!({}),
                },
            ]
        );
    }

    #[async_std::test]
    async fn should_record_concurrent_calls() {
        let mock = Arc::new(MockRequester::success(true));
        let mut tasks = vec![];
        for i in 0..16 {
            let mock = mock.clone();
            tasks.push(async_std::task::spawn(async move { mock.send_request::<_, SuccessResponse>("ping", &json!({"seq": i})).await.unwrap() }));
        }
        for task in tasks {
            assert_eq!(task.await, SuccessResponse { success: true });
        }

        let mut seqs: Vec<u64> = mock.calls().into_iter().map(|c| c.params["seq"].as_u64().unwrap()).collect();
        seqs.sort();
        assert_eq!(seqs, (0..16).collect::<Vec<u64>>());
    }

    #[test]
    #[should_panic(expected = "illegal reply type")]
    fn should_panic_on_wrong_reply_shape() {
        let mock = MockRequester::success(true);
        let _ = async_std::task::block_on(mock.send_request::<_, ListReply>("list", &EmptyArgs {}));
    }
}
