//! The server loop and method dispatch.
//!
//! One message is handled at a time: read a frame, decode it, dispatch on
//! the method name, write any response. A malformed frame or a failing
//! handler is logged and the loop moves on to the next message.

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::completion::keyword_completions;
use crate::diagnostics::publish_params;
use crate::error::{LspError, LspResult, RpcError};
use crate::protocol::{
    error_codes, ClientInfo, CompletionOptions, CompletionParams, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, InitializeParams, InitializeResult,
    Message, Notification, PublishDiagnosticsParams, RequestId, Response, ResponseError,
    ServerCapabilities, ServerInfo, TEXT_DOCUMENT_SYNC_FULL,
};
use crate::rpc;
use crate::state::{Document, ServerState};
use crate::uri::FileUri;

/// Method name of outgoing diagnostics.
pub const PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

/// Identity the server reports to clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Name sent in `serverInfo`
    pub name: String,
    /// Version sent in `serverInfo`
    pub version: String,
    /// `source` field of every diagnostic
    pub diagnostic_source: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "gdx".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            diagnostic_source: "gdx".to_string(),
        }
    }
}

/// What the loop does after a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Keep reading
    Continue,
    /// Stop with this process exit status
    Exit(i32),
}

/// A language server reading from `R` and writing to `W`.
pub struct Server<R, W> {
    reader: R,
    writer: W,
    state: ServerState,
    config: ServerConfig,
}

impl<R: BufRead, W: Write> Server<R, W> {
    /// Creates a server over the given streams.
    pub fn new(reader: R, writer: W, config: ServerConfig) -> Self {
        Self {
            reader,
            writer,
            state: ServerState::new(),
            config,
        }
    }

    /// Runs until `exit` or end of input and returns the exit status.
    ///
    /// The status is `0` only if `shutdown` was received first. Transport
    /// failures end the loop with an error.
    pub fn run(&mut self) -> LspResult<i32> {
        info!(name = %self.config.name, "server started");

        loop {
            let frame = match rpc::read_message(&mut self.reader) {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("input closed");
                    return Ok(self.exit_code());
                },
                Err(RpcError::Io(err)) => return Err(err.into()),
                Err(err) => {
                    warn!(error = %err, "dropping malformed frame");
                    continue;
                },
            };

            match self.handle_frame(&frame) {
                Ok(Control::Continue) => {},
                Ok(Control::Exit(code)) => {
                    info!(code, "exiting");
                    return Ok(code);
                },
                Err(err) => error!(error = %err, "error while handling message"),
            }
        }
    }

    /// Handles one complete frame, headers included.
    pub fn handle_frame(&mut self, frame: &[u8]) -> LspResult<Control> {
        let (method, body) = rpc::decode_message(frame)?;
        let message: Message = serde_json::from_slice(body).map_err(RpcError::from)?;
        debug!(%method, request = message.is_request(), "received message");
        self.dispatch(message)
    }

    /// Routes a decoded message to its handler.
    ///
    /// A request whose handler fails still gets an error response.
    pub fn dispatch(&mut self, message: Message) -> LspResult<Control> {
        let Message { id, method, params } = message;

        if self.state.is_shutdown() && id.is_some() && method != "exit" {
            self.respond_error(
                id,
                error_codes::INVALID_REQUEST,
                format!("server is shutting down, rejecting {}", method),
            )?;
            return Ok(Control::Continue);
        }

        let result = match method.as_str() {
            "initialize" => self.on_initialize(id.clone(), &method, params),
            "initialized" => {
                debug!("client initialized");
                Ok(())
            },
            "textDocument/didOpen" => self.on_did_open(&method, params),
            "textDocument/didChange" => self.on_did_change(&method, params),
            "textDocument/didClose" => self.on_did_close(&method, params),
            "textDocument/completion" => self.on_completion(id.clone(), &method, params),
            "shutdown" => self.on_shutdown(id.clone(), &method),
            "exit" => return Ok(Control::Exit(self.exit_code())),
            _ if id.is_some() => {
                warn!(%method, "unknown request");
                self.respond_error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("method not found: {}", method),
                )?;
                return Ok(Control::Continue);
            },
            _ => {
                debug!(%method, "ignoring notification");
                Ok(())
            },
        };

        match result {
            Err(err @ LspError::InvalidParams { .. }) if id.is_some() => {
                self.respond_error(id, error_codes::INVALID_PARAMS, err.to_string())?;
                Err(err)
            },
            other => other.map(|()| Control::Continue),
        }
    }

    fn on_initialize(
        &mut self,
        id: Option<RequestId>,
        method: &str,
        params: Option<Value>,
    ) -> LspResult<()> {
        let id = require_id(id, method)?;
        let params: InitializeParams = parse_params(method, params)?;

        match params.client_info {
            Some(ClientInfo { name, version }) => info!(
                client = %name,
                version = version.as_deref().unwrap_or("unknown"),
                "connected to client"
            ),
            None => info!("connected to anonymous client"),
        }

        let trigger_characters = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .map(String::from)
            .collect();

        let result = InitializeResult {
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
            capabilities: ServerCapabilities {
                text_document_sync: TEXT_DOCUMENT_SYNC_FULL,
                completion_provider: CompletionOptions {
                    resolve_provider: false,
                    trigger_characters,
                },
            },
        };

        self.respond(id, serde_json::to_value(result)?)
    }

    fn on_did_open(&mut self, method: &str, params: Option<Value>) -> LspResult<()> {
        let params: DidOpenTextDocumentParams = parse_params(method, params)?;
        let item = params.text_document;
        log_uri(&item.uri);

        self.state.open(
            item.uri.clone(),
            Document {
                language_id: item.language_id,
                version: item.version,
                text: item.text,
            },
        );
        self.publish_diagnostics(&item.uri)
    }

    fn on_did_change(&mut self, method: &str, params: Option<Value>) -> LspResult<()> {
        let params: DidChangeTextDocumentParams = parse_params(method, params)?;
        let uri = params.text_document.uri;

        let Some(change) = params.content_changes.into_iter().last() else {
            debug!(%uri, "change without content");
            return Ok(());
        };

        self.state
            .change(&uri, params.text_document.version, change.text);
        self.publish_diagnostics(&uri)
    }

    fn on_did_close(&mut self, method: &str, params: Option<Value>) -> LspResult<()> {
        let params: DidCloseTextDocumentParams = parse_params(method, params)?;
        let uri = params.text_document.uri;

        if self.state.close(&uri).is_none() {
            debug!(%uri, "closing a document that was not open");
        }

        self.notify(
            PUBLISH_DIAGNOSTICS,
            PublishDiagnosticsParams {
                uri,
                diagnostics: Vec::new(),
            },
        )
    }

    fn on_completion(
        &mut self,
        id: Option<RequestId>,
        method: &str,
        params: Option<Value>,
    ) -> LspResult<()> {
        let id = require_id(id, method)?;
        let params: CompletionParams = parse_params(method, params)?;

        if let Some(context) = &params.context {
            debug!(
                trigger_kind = context.trigger_kind,
                trigger = context.trigger_character.as_deref().unwrap_or(""),
                "completion requested"
            );
        }

        self.respond(id, serde_json::to_value(keyword_completions())?)
    }

    fn on_shutdown(&mut self, id: Option<RequestId>, method: &str) -> LspResult<()> {
        let id = require_id(id, method)?;
        info!("shutdown requested");
        self.state.request_shutdown();
        self.respond(id, Value::Null)
    }

    fn publish_diagnostics(&mut self, uri: &str) -> LspResult<()> {
        let Some(document) = self.state.document(uri) else {
            return Ok(());
        };

        debug!(%uri, bytes = document.text.len(), "running diagnostics");
        let params = publish_params(uri, &document.text, &self.config.diagnostic_source);
        self.notify(PUBLISH_DIAGNOSTICS, params)
    }

    fn respond(&mut self, id: RequestId, result: Value) -> LspResult<()> {
        self.send(&Response::ok(Some(id), result))
    }

    fn respond_error(
        &mut self,
        id: Option<RequestId>,
        code: i32,
        message: impl Into<String>,
    ) -> LspResult<()> {
        self.send(&Response::error(id, ResponseError::new(code, message)))
    }

    fn notify<P: Serialize>(&mut self, method: &'static str, params: P) -> LspResult<()> {
        self.send(&Notification::new(method, params))
    }

    fn send<T: Serialize>(&mut self, message: &T) -> LspResult<()> {
        rpc::write_message(&mut self.writer, message)?;
        Ok(())
    }

    fn exit_code(&self) -> i32 {
        if self.state.is_shutdown() {
            0
        } else {
            1
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Consumes the server, returning the output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Decodes `params`; a missing value decodes as an empty object.
fn parse_params<T: DeserializeOwned>(method: &str, params: Option<Value>) -> LspResult<T> {
    let value = match params {
        None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|source| LspError::InvalidParams {
        method: method.to_string(),
        source,
    })
}

fn require_id(id: Option<RequestId>, method: &str) -> LspResult<RequestId> {
    id.ok_or_else(|| LspError::MissingId(method.to_string()))
}

fn log_uri(uri: &str) {
    match FileUri::parse(uri) {
        Ok(parsed) => debug!(scheme = %parsed.scheme, path = %parsed.decoded_path(), "document opened"),
        Err(err) => warn!(error = %err, "document opened with an unexpected URI"),
    }
}
