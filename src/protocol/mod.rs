pub mod request;
pub mod response;
pub mod typed;
pub mod types;

pub use request::{
    CallToolRequest, CompletionArgument, CompletionRequest, GetPromptRequest, InitializeRequest,
    JsonRpcRequest, ListPromptsRequest, ListResourceTemplatesRequest, ListResourcesRequest,
    ListToolsRequest, ReadResourceRequest, Reference, RpcId,
};
pub use response::{
    CallToolResponse, Completion, CompletionResponse, GetPromptResponse, InitializeResponse,
    JsonRpcError, JsonRpcResponse, ListPromptsResponse, ListResourceTemplatesResponse,
    ListResourcesResponse, ListToolsResponse, ReadResourceResponse, ERROR_CODE,
};
pub use typed::{Request, Response};
pub use types::{
    ClientCapabilities, Content, Implementation, ListChangedCapability, Prompt, PromptArgument,
    PromptMessage, Resource, ResourceContents, ResourceTemplate, ResourcesCapability, Role,
    ServerCapabilities, Tool,
};
