//! Wire shapes of the envelope and MCP payload types.

use serde_json::json;

use mcp_stdio_server::protocol::{
    CallToolResponse, Content, InitializeRequest, JsonRpcRequest, ListResourceTemplatesResponse,
    Reference, Request, ResourceContents, ResourceTemplate, RpcId,
};

fn request(line: &str) -> JsonRpcRequest {
    serde_json::from_str(line).unwrap()
}

#[test]
fn notification_detection() {
    assert!(request(r#"{"jsonrpc":"2.0","method":"m"}"#).is_notification());
    assert!(request(r#"{"jsonrpc":"2.0","id":null,"method":"m"}"#).is_notification());
    assert!(request(r#"{"jsonrpc":"2.0","id":"","method":"m"}"#).is_notification());
    assert!(!request(r#"{"jsonrpc":"2.0","id":"a","method":"m"}"#).is_notification());
    assert!(!request(r#"{"jsonrpc":"2.0","id":0,"method":"m"}"#).is_notification());
}

#[test]
fn request_without_method_is_rejected() {
    assert!(serde_json::from_str::<JsonRpcRequest>(r#"{"jsonrpc":"2.0","id":"1"}"#).is_err());
    assert!(serde_json::from_str::<JsonRpcRequest>(r#"["batch"]"#).is_err());
}

#[test]
fn missing_version_decodes_as_empty() {
    let req = request(r#"{"id":"1","method":"tools/list"}"#);

    assert_eq!(req.jsonrpc, "");
    assert!(!req.is_notification());
}

#[test]
fn rpc_id_keeps_its_json_type() {
    let n: RpcId = serde_json::from_value(json!(7)).unwrap();
    let s: RpcId = serde_json::from_value(json!("7")).unwrap();

    assert_eq!(n, RpcId::Number(7));
    assert_eq!(s, RpcId::Str("7".into()));
    assert_eq!(serde_json::to_value(&n).unwrap(), json!(7));
    assert_eq!(n.to_string(), s.to_string());
}

#[test]
fn typed_request_has_no_id_until_dispatched() {
    let req = Request::new("params");

    assert_eq!(req.id(), None);
    assert_eq!(req.into_params(), "params");
}

#[test]
fn initialize_requires_client_info() {
    let missing: Result<InitializeRequest, _> =
        serde_json::from_value(json!({ "protocolVersion": "2024-11-05" }));
    assert!(missing.is_err());

    let ok: InitializeRequest = serde_json::from_value(json!({
        "protocolVersion": "2024-11-05",
        "clientInfo": { "name": "c", "version": "1" }
    }))
    .unwrap();
    assert_eq!(ok.client_info.name, "c");
    assert_eq!(ok.capabilities.roots, None);
}

#[test]
fn content_blocks_are_tagged_by_type() {
    let blocks = vec![
        Content::text("hi"),
        Content::Image {
            data: "aGk=".into(),
            mime_type: "image/png".into(),
        },
        Content::Resource {
            resource: ResourceContents::Blob {
                uri: "file:///a.bin".into(),
                mime_type: None,
                blob: "AA==".into(),
            },
        },
    ];

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([
            { "type": "text", "text": "hi" },
            { "type": "image", "data": "aGk=", "mimeType": "image/png" },
            { "type": "resource", "resource": { "uri": "file:///a.bin", "blob": "AA==" } }
        ])
    );
}

#[test]
fn resource_contents_decode_by_shape() {
    let text: ResourceContents =
        serde_json::from_value(json!({ "uri": "u", "mimeType": "text/plain", "text": "t" }))
            .unwrap();

    assert_eq!(
        text,
        ResourceContents::Text {
            uri: "u".into(),
            mime_type: Some("text/plain".into()),
            text: "t".into(),
        }
    );
}

#[test]
fn tool_error_flag_is_only_written_when_set() {
    assert_eq!(
        serde_json::to_value(CallToolResponse::error("bad input")).unwrap(),
        json!({ "content": [{ "type": "text", "text": "bad input" }], "isError": true })
    );
    assert!(serde_json::to_value(CallToolResponse::text("ok"))
        .unwrap()
        .get("isError")
        .is_none());
}

#[test]
fn unknown_reference_type_is_rejected() {
    let bad: Result<Reference, _> =
        serde_json::from_value(json!({ "type": "ref/tool", "name": "x" }));

    assert!(bad.is_err());
}

#[test]
fn template_list_uses_camel_case() {
    let resp = ListResourceTemplatesResponse {
        resource_templates: vec![ResourceTemplate {
            uri_template: "file:///{path}".into(),
            name: "files".into(),
            description: None,
            mime_type: None,
        }],
        next_cursor: None,
    };

    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({ "resourceTemplates": [{ "uriTemplate": "file:///{path}", "name": "files" }] })
    );
}
