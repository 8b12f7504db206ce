//! Typed JSON-RPC 2.0 dispatcher for MCP servers.
//!
//! Implement [`Server`] for the operations you support, wrap it in a
//! [`Listener`], and feed it a newline-delimited byte stream such as stdio.
//! Each line is decoded, routed to the matching operation with typed
//! parameters, and answered with exactly one response line.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod listener;
pub mod protocol;
pub mod server;

pub mod schema;

pub use context::Context;
pub use dispatch::Method;
pub use error::{ConfigError, DispatchError, ListenError, ServerError};
pub use listener::Listener;
pub use server::{Server, UnimplementedServer};
