//! Method-name binding and the generic decode → invoke → encode step.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::Context;
use crate::error::{DispatchError, ServerError};
use crate::protocol::{Request, Response, RpcId};
use crate::server::Server;

/// The wire methods this server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Initialize,
    Complete,
    ListTools,
    CallTool,
    ListPrompts,
    GetPrompt,
    ListResources,
    ReadResource,
    ListResourceTemplates,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Initialize,
        Method::Complete,
        Method::ListTools,
        Method::CallTool,
        Method::ListPrompts,
        Method::GetPrompt,
        Method::ListResources,
        Method::ReadResource,
        Method::ListResourceTemplates,
    ];

    /// Exact, case-sensitive lookup of a wire method name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Self::Initialize),
            "completion/complete" => Some(Self::Complete),
            "tools/list" => Some(Self::ListTools),
            "tools/call" => Some(Self::CallTool),
            "prompts/list" => Some(Self::ListPrompts),
            "prompts/get" => Some(Self::GetPrompt),
            "resources/list" => Some(Self::ListResources),
            "resources/read" => Some(Self::ReadResource),
            "resources/templates/list" => Some(Self::ListResourceTemplates),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Complete => "completion/complete",
            Self::ListTools => "tools/list",
            Self::CallTool => "tools/call",
            Self::ListPrompts => "prompts/list",
            Self::GetPrompt => "prompts/get",
            Self::ListResources => "resources/list",
            Self::ReadResource => "resources/read",
            Self::ListResourceTemplates => "resources/templates/list",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode `params` for `method`, invoke the bound operation on `server`, and
/// return its result as JSON.
///
/// Absent params decode as `{}`. When decoding fails the operation is not
/// called.
pub async fn dispatch<S>(
    server: &S,
    ctx: &Context,
    method: Method,
    id: Option<RpcId>,
    params: Option<&serde_json::Value>,
) -> Result<serde_json::Value, DispatchError>
where
    S: Server + ?Sized,
{
    match method {
        Method::Initialize => {
            process(method, id, params, |req| server.initialize(ctx, req)).await
        }
        Method::Complete => process(method, id, params, |req| server.completion(ctx, req)).await,
        Method::ListTools => process(method, id, params, |req| server.list_tools(ctx, req)).await,
        Method::CallTool => process(method, id, params, |req| server.call_tool(ctx, req)).await,
        Method::ListPrompts => {
            process(method, id, params, |req| server.list_prompts(ctx, req)).await
        }
        Method::GetPrompt => process(method, id, params, |req| server.get_prompt(ctx, req)).await,
        Method::ListResources => {
            process(method, id, params, |req| server.list_resources(ctx, req)).await
        }
        Method::ReadResource => {
            process(method, id, params, |req| server.read_resource(ctx, req)).await
        }
        Method::ListResourceTemplates => {
            process(method, id, params, |req| {
                server.list_resource_templates(ctx, req)
            })
            .await
        }
    }
}

async fn process<T, V, F, Fut>(
    method: Method,
    id: Option<RpcId>,
    params: Option<&serde_json::Value>,
    handler: F,
) -> Result<serde_json::Value, DispatchError>
where
    T: DeserializeOwned,
    V: Serialize,
    F: FnOnce(Request<T>) -> Fut,
    Fut: Future<Output = Result<Response<V>, ServerError>>,
{
    let raw = match params {
        Some(value) if !value.is_null() => value.clone(),
        _ => serde_json::Value::Object(serde_json::Map::new()),
    };
    let params: T = serde_json::from_value(raw)
        .map_err(|source| DispatchError::InvalidParams { method, source })?;

    let req = Request::new(params).with_id(id);
    let resp = handler(req).await?;

    serde_json::to_value(&resp.result)
        .map_err(|source| DispatchError::EncodeResult { method, source })
}
