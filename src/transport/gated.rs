//! Test transport whose replies are released by the test, in any order.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::dto::reply::ApiReply;
use crate::dto::request::CustomerRequest;
use crate::transport::{ApiError, ApiResult, CustomerTransport};

type Gate = oneshot::Receiver<ApiResult<ApiReply>>;

#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<VecDeque<Gate>>,
    sent: Mutex<Vec<String>>,
}

impl GatedTransport {
    /// Queues the gate for the next request; the sender releases its reply.
    /// Dropping the sender fails the request as a transport error.
    pub fn gate(&self) -> oneshot::Sender<ApiResult<ApiReply>> {
        let (sender, receiver) = oneshot::channel();
        self.gates.lock().unwrap().push_back(receiver);
        sender
    }

    /// Paths of the requests sent so far.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomerTransport for GatedTransport {
    async fn send(&self, request: &CustomerRequest) -> ApiResult<ApiReply> {
        self.sent.lock().unwrap().push(request.path());
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("connection reset".to_string()))),
            None => Err(ApiError::Transport("no gate queued".to_string())),
        }
    }
}
