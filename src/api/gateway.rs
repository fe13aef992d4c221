use super::error::ApiError;
use super::http::{ApiRequest, RawResponse, Transport};
use log::{debug, warn};
use serde_json::Value;

/// Perform one API call and normalize the outcome
///
/// Returns `Ok(None)` for an empty success body, `Ok(Some(json))` otherwise.
/// Transport failures, non-2xx statuses and unparseable success bodies all
/// come back as an `ApiError` whose message is ready to show the user.
pub async fn api_call<T: Transport>(
    transport: &T,
    request: ApiRequest,
) -> Result<Option<Value>, ApiError> {
    debug!("{} {}", request.method, request.url);

    let response = transport.send(request).await.map_err(|e| {
        warn!("Request failed: {e:#}");
        ApiError::Network(format!("{e:#}"))
    })?;

    debug!("Response status {}", response.status);
    interpret_response(response)
}

/// Classify a raw response as success or HTTP error
pub fn interpret_response(response: RawResponse) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&response.status) {
        let message =
            extract_error_message(response.status, &response.status_text, &response.body);
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Best-effort human-readable message for an error response
///
/// Priority: a `detail` field of a JSON body, then the whole JSON body
/// pretty-printed, then the raw text, then a generic status line.
pub fn extract_error_message(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(detail) if is_truthy(detail) => pretty(detail),
            _ => pretty(&json),
        },
        Err(_) if body.trim().is_empty() => generic_status_message(status, status_text),
        Err(_) => body.to_string(),
    }
}

fn generic_status_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {status_text}")
    }
}

/// `null`, `false`, `0` and `""` do not count as a usable detail
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn response(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        async fn send(&self, _request: ApiRequest) -> anyhow::Result<RawResponse> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    struct CannedTransport {
        response: RawResponse,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl Transport for CannedTransport {
        async fn send(&self, request: ApiRequest) -> anyhow::Result<RawResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_detail_field_wins() {
        let message = extract_error_message(404, "Not Found", r#"{"detail":"X"}"#);
        assert_eq!(message, "X");
    }

    #[test]
    fn test_json_without_detail_is_pretty_printed() {
        let message = extract_error_message(400, "Bad Request", r#"{"title":"Bad","errors":[1]}"#);
        assert_eq!(
            message,
            serde_json::to_string_pretty(&json!({ "title": "Bad", "errors": [1] })).unwrap()
        );
    }

    #[test]
    fn test_empty_detail_falls_back_to_whole_body() {
        let message = extract_error_message(400, "Bad Request", r#"{"detail":""}"#);
        assert_eq!(message, "{\n  \"detail\": \"\"\n}");
    }

    #[test]
    fn test_structured_detail_is_pretty_printed() {
        let body = r#"{"detail":[{"loc":"price"}]}"#;
        let message = extract_error_message(422, "Unprocessable Entity", body);
        assert_eq!(message, "[\n  {\n    \"loc\": \"price\"\n  }\n]");
    }

    #[test]
    fn test_plain_text_body_used_verbatim() {
        let message = extract_error_message(500, "Internal Server Error", "database is down");
        assert_eq!(message, "database is down");
    }

    #[test]
    fn test_empty_body_gives_status_line() {
        assert_eq!(
            extract_error_message(404, "Not Found", ""),
            "HTTP 404: Not Found"
        );
        assert_eq!(
            extract_error_message(503, "Service Unavailable", "  \n"),
            "HTTP 503: Service Unavailable"
        );
        assert_eq!(extract_error_message(599, "", ""), "HTTP 599");
    }

    #[test]
    fn test_success_with_json_body() {
        let body = r#"[{"id":1,"name":"Margherita","price":6.5}]"#;
        let result = interpret_response(response(200, "OK", body));
        assert_eq!(
            result.unwrap(),
            Some(json!([{ "id": 1, "name": "Margherita", "price": 6.5 }]))
        );
    }

    #[test]
    fn test_success_with_empty_body() {
        assert_eq!(interpret_response(response(204, "No Content", "")).unwrap(), None);
    }

    #[test]
    fn test_success_with_non_json_body() {
        let err = interpret_response(response(200, "OK", "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert!(err.to_string().starts_with("Invalid JSON response: "));
    }

    #[test]
    fn test_non_success_status_is_http_error() {
        let err = interpret_response(response(409, "Conflict", r#"{"detail":"Already exists"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: "Already exists".to_string()
            }
        );
        assert_eq!(err.to_string(), "Already exists");
    }

    #[test]
    fn test_redirect_status_is_not_success() {
        assert!(interpret_response(response(302, "Found", "")).is_err());
    }

    #[tokio::test]
    async fn test_api_call_wraps_transport_failure() {
        let request = ApiRequest::new(reqwest::Method::GET, "http://localhost/api/pizze");
        let err = api_call(&FailingTransport, request).await.unwrap_err();

        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[tokio::test]
    async fn test_api_call_forwards_request_and_parses_body() {
        let transport = CannedTransport {
            response: response(201, "Created", r#"{"id":7,"name":"Capricciosa","price":9}"#),
            seen: Mutex::new(Vec::new()),
        };
        let request = ApiRequest::new(reqwest::Method::POST, "http://localhost/api/pizze");

        let payload = api_call(&transport, request.clone()).await.unwrap();

        assert_eq!(payload, Some(json!({ "id": 7, "name": "Capricciosa", "price": 9 })));
        assert_eq!(transport.seen.lock().unwrap().as_slice(), &[request]);
    }
}
