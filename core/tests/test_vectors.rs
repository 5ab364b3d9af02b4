//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Request vectors pin the exact wire text; response vectors pin the parsed
//! result or the error kind.

use rawhttp_core::{ClientError, HttpClient, HttpMethod, HttpResponse, Target};

fn parse_args(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = HttpClient::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let command = case["command"].as_str().unwrap();
        let args = parse_args(&case["args"]);
        let expected = &case["expected_request"];

        let target = Target::parse(case["url"].as_str().unwrap()).unwrap();
        assert_eq!(target.host, expected["host"].as_str().unwrap(), "{name}: host");
        assert_eq!(u64::from(target.port), expected["port"].as_u64().unwrap(), "{name}: port");

        let req = match HttpMethod::from_command(command) {
            HttpMethod::Post => c.build_post(&target, &args),
            HttpMethod::Get => c.build_get(&target),
        };
        let method: HttpMethod = serde_json::from_value(expected["method"].clone()).unwrap();
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(req.to_string(), expected["wire"].as_str().unwrap(), "{name}: wire");

        if let Some(body) = &req.body {
            assert_eq!(
                req.header("Content-Length"),
                Some(body.len().to_string().as_str()),
                "{name}: content length"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = HttpClient::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.parse_response(case["raw"].as_str().unwrap());

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MalformedStatusLine" => assert!(
                    matches!(err, ClientError::MalformedStatusLine(_)),
                    "{name}: expected MalformedStatusLine"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let response = result.unwrap();
            let expected: HttpResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(response, expected, "{name}: parsed result");
        }
    }
}
