//! Shared test helpers: a scripted transport and assertion macros.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use njalla_client::{NjallaClient, NjallaError, Result, Transport};
use serde_json::Value;

pub const TOKEN: &str = "test-token";

/// Assert that an `Option` is `Some` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// One request as seen by the transport.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub token: String,
    pub method: String,
    /// The request body, parsed back into JSON.
    pub body: Value,
}

impl SentRequest {
    pub fn params(&self) -> &Value {
        &self.body["params"]
    }
}

/// Transport that replays canned responses in order and records every request.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>>>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw response body.
    pub fn respond(&self, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: NjallaError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> SentRequest {
        self.sent().pop().expect("no request was sent")
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, token: &str, method: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let body: Value = serde_json::from_slice(&body).expect("request body is not JSON");
        self.sent.lock().unwrap().push(SentRequest {
            token: token.to_string(),
            method: method.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for '{method}'"))
    }
}

/// A client wired to a fresh fake transport.
pub fn client() -> (NjallaClient, Arc<FakeTransport>) {
    let transport = FakeTransport::new();
    let client = NjallaClient::with_transport(transport.clone());
    (client, transport)
}

/// Body of a successful response wrapping `result`.
pub fn ok_body(result: &Value) -> String {
    serde_json::json!({"jsonrpc": "2.0", "result": result}).to_string()
}

pub const ERROR_BODY: &str = r#"{
    "jsonrpc": "2.0",
    "error": {
        "code": 0,
        "message": "Testing error"
    }
}"#;

pub fn assert_testing_error(err: &NjallaError) {
    assert_eq!(
        err,
        &NjallaError::Rpc {
            code: 0,
            message: "Testing error".to_string()
        }
    );
}
