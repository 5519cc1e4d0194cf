//! Verify URL resolution, request bytes and response parsing against the
//! JSON test vectors stored in `test-vectors/`.
//!
//! Requests are captured through a recording `Transport`, so the bytes
//! compared are exactly the bytes that would be written to the socket.

use std::cell::RefCell;

use httpclient_core::parse::{parse_body, parse_headers, parse_status_code};
use httpclient_core::{
    ArgEncoding, ClientConfig, ClientError, HttpClient, ParsedUrl, RequestArgs, Transport,
};

const OK_RESPONSE: &str = "HTTP/1.1 200 OK\r\n\r\nok";

#[derive(Default)]
struct RecordingTransport {
    requests: RefCell<Vec<Vec<u8>>>,
}

impl Transport for RecordingTransport {
    fn round_trip(&self, _host: &str, _port: u16, request: &[u8]) -> Result<String, ClientError> {
        self.requests.borrow_mut().push(request.to_vec());
        Ok(OK_RESPONSE.to_string())
    }
}

/// Map the error names used in vector files to `ClientError` variants.
fn error_matches(name: &str, err: &ClientError) -> bool {
    match name {
        "MissingHost" => matches!(err, ClientError::MissingHost),
        "InvalidPort" => matches!(err, ClientError::InvalidPort(_)),
        "Parse" => matches!(err, ClientError::Parse(_)),
        other => panic!("unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/urls.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let url = case["url"].as_str().unwrap();
        let result = ParsedUrl::parse(url);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert!(
                error_matches(expected_error.as_str().unwrap(), &err),
                "{name}: got {err:?}"
            );
        } else {
            let expected: ParsedUrl = serde_json::from_value(case["expected"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}");
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method = case["method"].as_str().unwrap();
        let url = case["url"].as_str().unwrap();
        let args: Option<RequestArgs> = serde_json::from_value(case["args"].clone()).unwrap();
        let encoding: ArgEncoding = serde_json::from_value(case["encoding"].clone()).unwrap();

        let config = ClientConfig {
            arg_encoding: encoding,
            ..ClientConfig::default()
        };
        let client = HttpClient::with_transport(config, RecordingTransport::default());
        let response = client.command(url, method, args.as_ref()).unwrap();
        assert_eq!(response.body(), "ok", "{name}: response");

        let requests = client_requests(&client);
        assert_eq!(requests.len(), 1, "{name}: one exchange per call");
        assert_eq!(
            requests[0],
            case["expected_request"].as_str().unwrap(),
            "{name}: request bytes"
        );
    }
}

fn client_requests(client: &HttpClient<RecordingTransport>) -> Vec<String> {
    client
        .transport()
        .requests
        .borrow()
        .iter()
        .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = case["raw"].as_str().unwrap();

        if let Some(expected_error) = case.get("expected_error") {
            let err = parse_status_code(response).unwrap_err();
            assert!(
                error_matches(expected_error.as_str().unwrap(), &err),
                "{name}: got {err:?}"
            );
            continue;
        }

        let status = parse_status_code(response).unwrap();
        assert_eq!(
            u64::from(status),
            case["expected_status"].as_u64().unwrap(),
            "{name}: status"
        );
        assert_eq!(
            parse_headers(response),
            case["expected_headers"].as_str().unwrap(),
            "{name}: headers"
        );
        assert_eq!(
            parse_body(response),
            case["expected_body"].as_str().unwrap(),
            "{name}: body"
        );

        // Same input, same answer.
        assert_eq!(parse_status_code(response).unwrap(), status, "{name}: repeat status");
        assert_eq!(
            parse_body(response),
            case["expected_body"].as_str().unwrap(),
            "{name}: repeat body"
        );
    }
}
