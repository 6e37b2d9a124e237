use frame_summary_core::contract::{INTERNAL_ERROR_STATUS_CODE, SUCCESS_STATUS_CODE};
use frame_summary_core::frame::summarize_sample;
use lambda_runtime::Context;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::InvocationMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Handles one invocation. Neither the event nor the context feed into the
/// computation; the context only contributes its request id to log lines.
pub fn handle_summary_event(_event: Value, context: Option<&Context>) -> ApiGatewayResponse {
    let request_id = context.map(|ctx| ctx.request_id.clone());

    let rendered = summarize_sample()
        .and_then(|summary| summary.to_json().map(|body| (summary, body)));

    match rendered {
        Ok((summary, body)) => {
            log_summary_info(
                "summary_computed",
                json!({
                    "request_id": request_id,
                    "sum": summary.sum,
                    "rows": summary.row_count(),
                    "columns": summary.column_count(),
                }),
            );
            success_response(body)
        }
        Err(error) => {
            log_summary_error(
                "summary_failed",
                json!({
                    "request_id": request_id,
                    "error": error.message(),
                }),
            );
            error_response(
                INTERNAL_ERROR_STATUS_CODE,
                json!({
                    "error": "aggregation_failed",
                    "message": error.message(),
                }),
            )
        }
    }
}

/// Direct invocation outside the Lambda platform: null event, no context.
pub fn invoke_locally() -> ApiGatewayResponse {
    let response = handle_summary_event(Value::Null, None);
    log_summary_info(
        "local_invocation_completed",
        json!({
            "mode": InvocationMode::Local.as_str(),
            "status_code": response.status_code,
        }),
    );
    response
}

fn success_response(body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: SUCCESS_STATUS_CODE,
        body,
    }
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        body: payload.to_string(),
    }
}

fn log_summary_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "summary_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_summary_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "summary_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_body(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("body should be JSON")
    }

    #[test]
    fn returns_sum_and_shape_for_null_event() {
        let response = handle_summary_event(Value::Null, None);

        assert_eq!(response.status_code, 200);
        assert_eq!(parsed_body(&response), json!({"sum": 15, "shape": [5, 1]}));
    }

    #[test]
    fn ignores_event_contents() {
        let events = [
            json!({}),
            json!("payload"),
            json!([1, 2, 3]),
            json!({"body": "{\"sum\": 99}", "httpMethod": "POST"}),
        ];

        let baseline = handle_summary_event(Value::Null, None);
        for event in events {
            assert_eq!(handle_summary_event(event, None), baseline);
        }
    }

    #[test]
    fn ignores_invocation_context() {
        let mut context = Context::default();
        context.request_id = "req-123".to_string();

        assert_eq!(
            handle_summary_event(json!({"any": "thing"}), Some(&context)),
            handle_summary_event(Value::Null, None)
        );
    }

    #[test]
    fn repeated_invocations_are_identical() {
        let first = handle_summary_event(Value::Null, None);
        let second = handle_summary_event(Value::Null, None);
        assert_eq!(first, second);
    }

    #[test]
    fn envelope_has_exactly_status_code_and_body() {
        let value = serde_json::to_value(invoke_locally()).expect("response should serialize");
        let object = value.as_object().expect("response should be an object");

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["body", "statusCode"]);
        assert_eq!(value["statusCode"], 200);
        assert!(value["body"].is_string());
    }

    #[test]
    fn local_invocation_matches_handler_output() {
        assert_eq!(invoke_locally(), handle_summary_event(Value::Null, None));
    }

    #[test]
    fn error_envelope_carries_payload_as_body_text() {
        let response = error_response(500, json!({"error": "aggregation_failed"}));

        assert_eq!(response.status_code, 500);
        assert_eq!(parsed_body(&response)["error"], "aggregation_failed");
    }
}
