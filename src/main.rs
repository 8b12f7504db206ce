use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use mcp_stdio_server::config::ServerConfig;
use mcp_stdio_server::protocol::{
    Implementation, InitializeRequest, InitializeResponse, ListChangedCapability,
    ListPromptsRequest, ListPromptsResponse, ListResourceTemplatesRequest,
    ListResourceTemplatesResponse, ListResourcesRequest, ListResourcesResponse, ListToolsRequest,
    ListToolsResponse, Request, ResourcesCapability, Response, ServerCapabilities,
};
use mcp_stdio_server::{Context, Listener, Server, ServerError};

const PROTOCOL_VERSION: &str = "2024-11-05";

/// Answers the handshake and advertises empty catalogs.
struct SkeletonServer;

#[async_trait]
impl Server for SkeletonServer {
    async fn initialize(
        &self,
        _ctx: &Context,
        req: Request<InitializeRequest>,
    ) -> Result<Response<InitializeResponse>, ServerError> {
        tracing::info!(
            client = %req.params.client_info.name,
            client_version = %req.params.client_info.version,
            protocol_version = %req.params.protocol_version,
            "initialize"
        );
        Ok(Response::new(InitializeResponse {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                prompts: Some(ListChangedCapability::default()),
                resources: Some(ResourcesCapability::default()),
                tools: Some(ListChangedCapability::default()),
                ..ServerCapabilities::default()
            },
            server_info: Implementation::new("mcp-stdio-server", env!("CARGO_PKG_VERSION")),
            instructions: None,
        }))
    }

    async fn list_tools(
        &self,
        _ctx: &Context,
        _req: Request<ListToolsRequest>,
    ) -> Result<Response<ListToolsResponse>, ServerError> {
        Ok(Response::new(ListToolsResponse::default()))
    }

    async fn list_prompts(
        &self,
        _ctx: &Context,
        _req: Request<ListPromptsRequest>,
    ) -> Result<Response<ListPromptsResponse>, ServerError> {
        Ok(Response::new(ListPromptsResponse::default()))
    }

    async fn list_resources(
        &self,
        _ctx: &Context,
        _req: Request<ListResourcesRequest>,
    ) -> Result<Response<ListResourcesResponse>, ServerError> {
        Ok(Response::new(ListResourcesResponse::default()))
    }

    async fn list_resource_templates(
        &self,
        _ctx: &Context,
        _req: Request<ListResourceTemplatesRequest>,
    ) -> Result<Response<ListResourceTemplatesResponse>, ServerError> {
        Ok(Response::new(ListResourceTemplatesResponse::default()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-stdio-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    // stdout carries the protocol, so logs go to stderr.
    let logger = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    let listener = Listener::new(SkeletonServer)
        .with_config(config)
        .with_logger(logger);
    let ctx = Context::new();

    let on_signal = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let outcome = listener.serve_stdio(&ctx).await;

    if let Err(e) = outcome {
        eprintln!("mcp-stdio-server: fatal error: {e}");
        std::process::exit(1);
    }
}
