use std::io;

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

use crate::config::ServerConfig;
use crate::context::Context;
use crate::dispatch::{dispatch, Method};
use crate::error::{DispatchError, ListenError};
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::server::Server;

/// Serves a [`Server`] over newline-delimited JSON-RPC 2.0.
///
/// One line is one message. Lines are handled strictly in order and each is
/// answered (or dropped) before the next is read.
pub struct Listener<S> {
    server: S,
    config: ServerConfig,
    logger: Option<Dispatch>,
}

impl<S: Server> Listener<S> {
    pub fn new(server: S) -> Self {
        Self {
            server,
            config: ServerConfig::default(),
            logger: None,
        }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Route this listener's log events to `logger` instead of the ambient subscriber.
    pub fn with_logger(mut self, logger: impl Into<Dispatch>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    /// Serve stdin/stdout until EOF or until `ctx` is cancelled.
    pub async fn serve_stdio(&self, ctx: &Context) -> Result<(), ListenError> {
        self.listen_until_cancelled(ctx, tokio::io::stdin(), tokio::io::stdout())
            .await
    }

    /// Process `reader` line by line, writing responses to `writer`.
    ///
    /// Returns `Ok(())` at end of input. Malformed lines and failed calls are
    /// not fatal; only read, write, and encode failures end the loop early.
    pub async fn listen<R, W>(&self, ctx: &Context, reader: R, writer: W) -> Result<(), ListenError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let run = self.run(ctx, reader, writer);
        match &self.logger {
            Some(logger) => run.with_subscriber(logger.clone()).await,
            None => run.await,
        }
    }

    /// Like [`Listener::listen`], but also returns `Ok(())` once `ctx` is
    /// cancelled.
    ///
    /// The loop is polled before the cancellation check, so a call in flight
    /// observes the cancellation through its own context and is answered
    /// before the loop is dropped.
    pub async fn listen_until_cancelled<R, W>(
        &self,
        ctx: &Context,
        reader: R,
        writer: W,
    ) -> Result<(), ListenError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tokio::select! {
            biased;
            res = self.listen(ctx, reader, writer) => res,
            _ = ctx.cancelled() => Ok(()),
        }
    }

    async fn run<R, W>(&self, ctx: &Context, reader: R, mut writer: W) -> Result<(), ListenError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut raw = Vec::new();

        loop {
            let frame = match read_frame(&mut reader, &mut raw, self.config.max_line_bytes).await {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!(error = %e, "read");
                    return Err(ListenError::Read(e));
                }
            };

            match frame {
                Frame::Eof => break,
                Frame::Oversized(bytes) => {
                    tracing::error!(
                        error = "message too large",
                        bytes,
                        limit = self.config.max_line_bytes,
                        "decode"
                    );
                    continue;
                }
                Frame::Line => {}
            }

            let Some(req) = decode_line(&raw) else {
                continue;
            };

            if let Some(resp) = self.handle(ctx, req).await? {
                write_response(&mut writer, &resp).await?;
            }
        }

        Ok(())
    }

    /// Resolve and run one request. `None` means nothing is written back.
    async fn handle(
        &self,
        ctx: &Context,
        req: JsonRpcRequest,
    ) -> Result<Option<JsonRpcResponse>, ListenError> {
        if req.jsonrpc != "2.0" {
            tracing::warn!(
                jsonrpc = %req.jsonrpc,
                method = %req.method,
                "unexpected jsonrpc version"
            );
        }

        let outcome = match Method::from_name(&req.method) {
            Some(method) => {
                let call_ctx = self.call_context(ctx);
                dispatch(&self.server, &call_ctx, method, req.id.clone(), req.params.as_ref()).await
            }
            None if req.is_notification() => {
                tracing::debug!(method = %req.method, "ignoring notification");
                return Ok(None);
            }
            None => Err(DispatchError::UnsupportedMethod(req.method.clone())),
        };

        let params = req
            .params
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default();
        match &outcome {
            Ok(result) => {
                tracing::info!(method = %req.method, params = %params, result = %result, "rpc")
            }
            Err(err) => tracing::info!(method = %req.method, params = %params, error = %err, "rpc"),
        }

        let outcome = match outcome {
            Err(DispatchError::EncodeResult { source, .. }) => {
                return Err(ListenError::Encode(source));
            }
            other => other,
        };

        // The operation has run; a notification still gets no reply.
        if req.is_notification() {
            return Ok(None);
        }

        let resp = match outcome {
            Ok(result) => JsonRpcResponse::success(req.jsonrpc, req.id, result),
            Err(err) => JsonRpcResponse::error(req.jsonrpc, req.id, JsonRpcError::from(&err)),
        };
        Ok(Some(resp))
    }

    fn call_context(&self, ctx: &Context) -> Context {
        match self.config.request_timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx.child(),
        }
    }
}

/// Result of reading one newline-terminated frame.
enum Frame {
    /// `raw` holds one line of at most `limit` bytes (plus its `\n`).
    Line,
    /// The line exceeded the limit and was discarded up to its `\n`.
    Oversized(usize),
    Eof,
}

/// Read one line into `raw` without buffering more than `limit + 1` bytes.
async fn read_frame<R>(reader: &mut R, raw: &mut Vec<u8>, limit: usize) -> io::Result<Frame>
where
    R: AsyncBufRead + Unpin,
{
    raw.clear();
    let cap = (limit as u64).saturating_add(1);
    let n = (&mut *reader).take(cap).read_until(b'\n', raw).await?;
    if n == 0 {
        return Ok(Frame::Eof);
    }
    if raw.ends_with(b"\n") || n <= limit {
        return Ok(Frame::Line);
    }

    let mut skipped = n;
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            break;
        }
        match buf.iter().position(|b| *b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                skipped += i + 1;
                break;
            }
            None => {
                let len = buf.len();
                reader.consume(len);
                skipped += len;
            }
        }
    }
    raw.clear();
    Ok(Frame::Oversized(skipped))
}

/// Invalid UTF-8 is replaced with U+FFFD so a readable `id` still gets an answer.
fn decode_line(raw: &[u8]) -> Option<JsonRpcRequest> {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<JsonRpcRequest>(line) {
        Ok(req) => Some(req),
        Err(e) => {
            tracing::error!(error = %e, "decode");
            None
        }
    }
}

async fn write_response<W>(writer: &mut W, resp: &JsonRpcResponse) -> Result<(), ListenError>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp).map_err(ListenError::Encode)?;
    tracing::info!(response = %out, "rpc");
    writer
        .write_all(out.as_bytes())
        .await
        .map_err(ListenError::Write)?;
    writer.write_all(b"\n").await.map_err(ListenError::Write)?;
    writer.flush().await.map_err(ListenError::Write)?;
    Ok(())
}
