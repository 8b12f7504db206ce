//! Every line the listener writes must satisfy the frozen response schema.

use async_trait::async_trait;

use mcp_stdio_server::protocol::{
    JsonRpcError, JsonRpcResponse, ListToolsRequest, ListToolsResponse, Request, Response, RpcId,
    Tool,
};
use mcp_stdio_server::schema::{
    validate_json, validate_response_line, SchemaValidationError, SchemaValidator,
};
use mcp_stdio_server::{Context, Listener, Server, ServerError};

struct OneTool;

#[async_trait]
impl Server for OneTool {
    async fn list_tools(
        &self,
        _ctx: &Context,
        _req: Request<ListToolsRequest>,
    ) -> Result<Response<ListToolsResponse>, ServerError> {
        Ok(Response::new(ListToolsResponse {
            tools: vec![Tool {
                name: "echo".into(),
                description: Some("Echo the input".into()),
                input_schema: serde_json::json!({
                    "type": "object",
                    "required": ["text"],
                    "properties": { "text": { "type": "string" } }
                }),
            }],
            next_cursor: Some("page-2".into()),
        }))
    }
}

#[tokio::test]
async fn emitted_lines_match_response_schema() {
    let listener = Listener::new(OneTool);
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"id\":\"1\",\"method\":\"tools/list\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{}}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":\"3\",\"method\":\"prompts/list\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":\"4\",\"method\":\"no/such/method\"}\n",
    );
    let mut out = Vec::new();

    listener
        .listen(&Context::new(), input.as_bytes(), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    let validator = SchemaValidator::response().unwrap();
    for line in lines {
        validator
            .validate_line(line)
            .unwrap_or_else(|e| panic!("{line}: {e}"));
    }
}

#[test]
fn envelope_with_both_result_and_error_is_rejected() {
    let mut resp = JsonRpcResponse::success("2.0", Some(RpcId::from("1")), serde_json::json!({}));
    resp.error = Some(JsonRpcError::new("boom"));
    let line = serde_json::to_string(&resp).unwrap();

    let err = validate_response_line(&line).unwrap_err();

    assert!(matches!(err, SchemaValidationError::Mismatch(ref msg) if !msg.is_empty()));
}

#[test]
fn golden_error_envelope() {
    let resp = JsonRpcResponse::error(
        "2.0",
        Some(RpcId::from("x")),
        JsonRpcError::new("unsupported method: tools/frobnicate"),
    );

    let line = serde_json::to_string(&resp).unwrap();

    validate_response_line(&line).expect("error envelope must satisfy schema");
    assert_eq!(
        line,
        r#"{"jsonrpc":"2.0","id":"x","error":{"code":1,"message":"unsupported method: tools/frobnicate"}}"#
    );
}

#[test]
fn malformed_schema_is_reported() {
    let err = validate_json("{not a schema", "{}").unwrap_err();

    assert!(matches!(err, SchemaValidationError::Json(_)));
}

#[test]
fn non_json_line_is_reported() {
    let err = validate_response_line("{\"jsonrpc\":").unwrap_err();

    assert!(matches!(err, SchemaValidationError::Json(_)));
}
