use connect_rpc_service::{EndpointMethod, decode_json, encode_json};
use connect_rpc_service_caller::{ConnectClientInterface, EndpointCall, error::RpcCallerError};
use serde::{Deserialize, Serialize};
use std::{
    io,
    sync::{Arc, Mutex},
};

// --- Test Setup: Mock Implementations ---

/// A method binding defined locally so these tests do not depend on any
/// generated bindings crate.
struct Ping;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct PingParams {
    label: Option<String>,
}

impl EndpointMethod for Ping {
    const SERVICE_NAME: &'static str = "StatusService";
    const METHOD_NAME: &'static str = "ping";

    type Params = Option<String>;
    type Response = Option<String>;

    fn encode_params(label: Option<String>) -> Result<Vec<u8>, io::Error> {
        encode_json(&PingParams { label })
    }

    fn decode_params(bytes: &[u8]) -> Result<Option<String>, io::Error> {
        let raw = decode_json::<PingParams>(bytes)?;
        Ok(raw.label)
    }

    fn encode_response(response: Option<String>) -> Result<Vec<u8>, io::Error> {
        encode_json(&response)
    }

    fn decode_response(bytes: &[u8]) -> Result<Option<String>, io::Error> {
        decode_json(bytes)
    }
}

/// A recorded `(service, method, params)` triple from one dispatched call.
type RecordedCall = (String, String, Vec<u8>);

/// A mock client that records every raw dispatch and replays a canned
/// response injected by the test harness.
#[derive(Clone)]
struct MockConnectClient {
    recorded_calls: Arc<Mutex<Vec<RecordedCall>>>,
    canned_response: Arc<Mutex<Option<Result<Vec<u8>, RpcCallerError>>>>,
}

impl MockConnectClient {
    fn with_response(response: Result<Vec<u8>, RpcCallerError>) -> Self {
        MockConnectClient {
            recorded_calls: Arc::new(Mutex::new(Vec::new())),
            canned_response: Arc::new(Mutex::new(Some(response))),
        }
    }
}

#[async_trait::async_trait]
impl ConnectClientInterface for MockConnectClient {
    async fn call_raw(
        &self,
        service_name: &str,
        method_name: &str,
        param_bytes: Vec<u8>,
    ) -> Result<Vec<u8>, RpcCallerError> {
        self.recorded_calls.lock().unwrap().push((
            service_name.to_string(),
            method_name.to_string(),
            param_bytes,
        ));

        self.canned_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(RpcCallerError::Aborted))
    }
}

// --- Unit Tests ---

#[tokio::test]
async fn buffered_call_forwards_names_and_params_unchanged() {
    let client = MockConnectClient::with_response(Ok(br#""pong""#.to_vec()));

    let result = client
        .call_buffered::<Ping>(Some("health".to_string()))
        .await
        .unwrap();

    assert_eq!(result, Some("pong".to_string()));

    let calls = client.recorded_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);

    let (service, method, params) = &calls[0];
    assert_eq!(service, "StatusService");
    assert_eq!(method, "ping");
    assert_eq!(params, &br#"{"label":"health"}"#.to_vec());
}

#[tokio::test]
async fn blanket_call_trait_delegates_to_caller_interface() {
    let client = MockConnectClient::with_response(Ok(b"null".to_vec()));

    // `M::call(&client, params)` is the surface generated stubs use.
    let result = Ping::call(&client, None).await.unwrap();

    assert_eq!(result, None);

    let calls = client.recorded_calls.lock().unwrap();
    let (_, _, params) = &calls[0];
    assert_eq!(params, &br#"{"label":null}"#.to_vec());
}

#[tokio::test]
async fn remote_error_payload_is_propagated_unchanged() {
    let error_body = br#"{"message":"no such account"}"#.to_vec();
    let client = MockConnectClient::with_response(Err(RpcCallerError::RemoteError {
        payload: error_body.clone(),
    }));

    let err = Ping::call(&client, Some("health".to_string()))
        .await
        .unwrap_err();

    match err {
        RpcCallerError::RemoteError { payload } => assert_eq!(payload, error_body),
        other => panic!("expected RemoteError, got: {other:?}"),
    }
}

#[tokio::test]
async fn remote_error_message_is_extracted_from_json_body() {
    let err = RpcCallerError::RemoteError {
        payload: br#"{"message":"no such account"}"#.to_vec(),
    };

    assert_eq!(err.remote_message().as_deref(), Some("no such account"));
}

#[tokio::test]
async fn non_json_remote_error_payload_has_no_message() {
    let err = RpcCallerError::RemoteError {
        payload: b"<html>502</html>".to_vec(),
    };

    assert_eq!(err.remote_message(), None);
}

#[tokio::test]
async fn undecodable_response_surfaces_as_io_error() {
    let client = MockConnectClient::with_response(Ok(b"not json".to_vec()));

    let err = Ping::call(&client, None).await.unwrap_err();

    match err {
        RpcCallerError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("expected Io, got: {other:?}"),
    }
}

#[tokio::test]
async fn system_error_is_propagated_unchanged() {
    let client = MockConnectClient::with_response(Err(RpcCallerError::RemoteSystemError(
        "method not found".to_string(),
    )));

    let err = Ping::call(&client, None).await.unwrap_err();

    match err {
        RpcCallerError::RemoteSystemError(msg) => assert_eq!(msg, "method not found"),
        other => panic!("expected RemoteSystemError, got: {other:?}"),
    }
}
