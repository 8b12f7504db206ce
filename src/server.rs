//! The capability interface a concrete MCP server implements.

use async_trait::async_trait;

use crate::context::Context;
use crate::error::ServerError;
use crate::protocol::{
    CallToolRequest, CallToolResponse, CompletionRequest, CompletionResponse, GetPromptRequest,
    GetPromptResponse, InitializeRequest, InitializeResponse, ListPromptsRequest,
    ListPromptsResponse, ListResourceTemplatesRequest, ListResourceTemplatesResponse,
    ListResourcesRequest, ListResourcesResponse, ListToolsRequest, ListToolsResponse,
    ReadResourceRequest, ReadResourceResponse, Request, Response,
};

/// The nine operations reachable over the wire.
///
/// Every operation has a provided body that fails with
/// [`ServerError::Unimplemented`], so an implementation only overrides the
/// operations it supports.
#[async_trait]
pub trait Server: Send + Sync {
    /// `initialize`
    async fn initialize(
        &self,
        ctx: &Context,
        req: Request<InitializeRequest>,
    ) -> Result<Response<InitializeResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `tools/list`
    async fn list_tools(
        &self,
        ctx: &Context,
        req: Request<ListToolsRequest>,
    ) -> Result<Response<ListToolsResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `tools/call`
    async fn call_tool(
        &self,
        ctx: &Context,
        req: Request<CallToolRequest>,
    ) -> Result<Response<CallToolResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `prompts/list`
    async fn list_prompts(
        &self,
        ctx: &Context,
        req: Request<ListPromptsRequest>,
    ) -> Result<Response<ListPromptsResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `prompts/get`
    async fn get_prompt(
        &self,
        ctx: &Context,
        req: Request<GetPromptRequest>,
    ) -> Result<Response<GetPromptResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `resources/list`
    async fn list_resources(
        &self,
        ctx: &Context,
        req: Request<ListResourcesRequest>,
    ) -> Result<Response<ListResourcesResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `resources/read`
    async fn read_resource(
        &self,
        ctx: &Context,
        req: Request<ReadResourceRequest>,
    ) -> Result<Response<ReadResourceResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `resources/templates/list`
    async fn list_resource_templates(
        &self,
        ctx: &Context,
        req: Request<ListResourceTemplatesRequest>,
    ) -> Result<Response<ListResourceTemplatesResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }

    /// `completion/complete`
    async fn completion(
        &self,
        ctx: &Context,
        req: Request<CompletionRequest>,
    ) -> Result<Response<CompletionResponse>, ServerError> {
        let _ = (ctx, req);
        Err(ServerError::Unimplemented)
    }
}

/// A server that supports nothing; every call fails with "unimplemented".
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedServer;

impl Server for UnimplementedServer {}

#[async_trait]
impl<S: Server + ?Sized> Server for std::sync::Arc<S> {
    async fn initialize(
        &self,
        ctx: &Context,
        req: Request<InitializeRequest>,
    ) -> Result<Response<InitializeResponse>, ServerError> {
        (**self).initialize(ctx, req).await
    }

    async fn list_tools(
        &self,
        ctx: &Context,
        req: Request<ListToolsRequest>,
    ) -> Result<Response<ListToolsResponse>, ServerError> {
        (**self).list_tools(ctx, req).await
    }

    async fn call_tool(
        &self,
        ctx: &Context,
        req: Request<CallToolRequest>,
    ) -> Result<Response<CallToolResponse>, ServerError> {
        (**self).call_tool(ctx, req).await
    }

    async fn list_prompts(
        &self,
        ctx: &Context,
        req: Request<ListPromptsRequest>,
    ) -> Result<Response<ListPromptsResponse>, ServerError> {
        (**self).list_prompts(ctx, req).await
    }

    async fn get_prompt(
        &self,
        ctx: &Context,
        req: Request<GetPromptRequest>,
    ) -> Result<Response<GetPromptResponse>, ServerError> {
        (**self).get_prompt(ctx, req).await
    }

    async fn list_resources(
        &self,
        ctx: &Context,
        req: Request<ListResourcesRequest>,
    ) -> Result<Response<ListResourcesResponse>, ServerError> {
        (**self).list_resources(ctx, req).await
    }

    async fn read_resource(
        &self,
        ctx: &Context,
        req: Request<ReadResourceRequest>,
    ) -> Result<Response<ReadResourceResponse>, ServerError> {
        (**self).read_resource(ctx, req).await
    }

    async fn list_resource_templates(
        &self,
        ctx: &Context,
        req: Request<ListResourceTemplatesRequest>,
    ) -> Result<Response<ListResourceTemplatesResponse>, ServerError> {
        (**self).list_resource_templates(ctx, req).await
    }

    async fn completion(
        &self,
        ctx: &Context,
        req: Request<CompletionRequest>,
    ) -> Result<Response<CompletionResponse>, ServerError> {
        (**self).completion(ctx, req).await
    }
}
