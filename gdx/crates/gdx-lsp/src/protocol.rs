//! Protocol message types.
//!
//! Only the subset of the language server protocol the server speaks is
//! modelled here. Field names follow the protocol's camelCase spelling.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// JSON-RPC version tag carried by every outgoing message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Full-document text synchronization.
pub const TEXT_DOCUMENT_SYNC_FULL: u8 = 1;

/// JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist or is not available
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Request id, either numeric or textual.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric id
    Number(i64),
    /// String id
    String(String),
}

/// Any incoming message.
///
/// Requests carry an `id`; notifications do not.
#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    /// Request id
    #[serde(default)]
    pub id: Option<RequestId>,
    /// Method name
    #[serde(default)]
    pub method: String,
    /// Method parameters, decoded per method
    #[serde(default)]
    pub params: Option<Value>,
}

impl Message {
    /// Returns true if the sender expects a response.
    pub fn is_request(&self) -> bool {
        self.id.is_some()
    }
}

/// An outgoing response.
#[derive(Clone, Debug, Serialize)]
pub struct Response {
    /// Always `"2.0"`
    pub jsonrpc: &'static str,
    /// Id of the request being answered
    pub id: Option<RequestId>,
    /// Result on success; `Some(Value::Null)` is sent as `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl Response {
    /// A successful response.
    pub fn ok(id: Option<RequestId>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    /// A failed response.
    pub fn error(id: Option<RequestId>, error: ResponseError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Error payload of a failed response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    /// One of [`error_codes`]
    pub code: i32,
    /// Human-readable description
    pub message: String,
    /// Extra information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseError {
    /// Creates an error without data.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// An outgoing notification.
#[derive(Clone, Debug, Serialize)]
pub struct Notification<P> {
    /// Always `"2.0"`
    pub jsonrpc: &'static str,
    /// Method name
    pub method: &'static str,
    /// Parameters
    pub params: P,
}

impl<P: Serialize> Notification<P> {
    /// Creates a notification.
    pub fn new(method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
        }
    }
}

// ==================== LIFECYCLE ====================

/// `initialize` parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Client identification
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// Name and version of the connecting editor.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientInfo {
    /// Client name
    pub name: String,
    /// Client version
    #[serde(default)]
    pub version: Option<String>,
}

/// `initialize` result.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Server identification
    pub server_info: ServerInfo,
    /// What the server supports
    pub capabilities: ServerCapabilities,
}

/// Name and version of this server.
#[derive(Clone, Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Advertised server capabilities.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Document sync kind
    pub text_document_sync: u8,
    /// Completion support
    pub completion_provider: CompletionOptions,
}

/// Completion capability options.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    /// Whether `completionItem/resolve` is supported
    pub resolve_provider: bool,
    /// Characters that trigger completion
    pub trigger_characters: Vec<String>,
}

// ==================== DOCUMENTS ====================

/// A document as sent on open.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    /// Document URI
    pub uri: String,
    /// Language identifier
    #[serde(default)]
    pub language_id: String,
    /// Version number
    #[serde(default)]
    pub version: i32,
    /// Full text
    pub text: String,
}

/// A document reference.
#[derive(Clone, Debug, Deserialize)]
pub struct TextDocumentIdentifier {
    /// Document URI
    pub uri: String,
}

/// A document reference with version.
#[derive(Clone, Debug, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    /// Document URI
    pub uri: String,
    /// Version after the change
    #[serde(default)]
    pub version: i32,
}

/// One content change; with full sync this is the whole text.
#[derive(Clone, Debug, Deserialize)]
pub struct TextDocumentContentChangeEvent {
    /// New text
    pub text: String,
}

/// `textDocument/didOpen` parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenTextDocumentParams {
    /// The opened document
    pub text_document: TextDocumentItem,
}

/// `textDocument/didChange` parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeTextDocumentParams {
    /// The changed document
    pub text_document: VersionedTextDocumentIdentifier,
    /// The changes, last one wins
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

/// `textDocument/didClose` parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseTextDocumentParams {
    /// The closed document
    pub text_document: TextDocumentIdentifier,
}

// ==================== DIAGNOSTICS ====================

/// A zero-based position; `character` counts UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line (0-based)
    pub line: u32,
    /// Column (0-based)
    pub character: u32,
}

/// A half-open range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start
    pub start: Position,
    /// Exclusive end
    pub end: Position,
}

/// A diagnostic as published to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Affected range
    pub range: Range,
    /// 1 = error, 2 = warning, 3 = information, 4 = hint
    pub severity: u8,
    /// Diagnostic code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Producer name
    pub source: String,
    /// Message text
    pub message: String,
}

/// `textDocument/publishDiagnostics` parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublishDiagnosticsParams {
    /// Document URI
    pub uri: String,
    /// Every current diagnostic; empty clears the document
    pub diagnostics: Vec<Diagnostic>,
}

// ==================== COMPLETION ====================

/// `textDocument/completion` parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionParams {
    /// Document being edited
    #[serde(default)]
    pub text_document: Option<TextDocumentIdentifier>,
    /// Cursor position
    #[serde(default)]
    pub position: Option<Position>,
    /// How completion was triggered
    #[serde(default)]
    pub context: Option<CompletionContext>,
}

/// How completion was triggered.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    /// 1 = invoked, 2 = trigger character, 3 = incomplete re-trigger
    pub trigger_kind: i32,
    /// The character typed, for trigger kind 2
    #[serde(default)]
    pub trigger_character: Option<String>,
}

/// Kind of a completion item, sent as its protocol number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum CompletionItemKind {
    Text = 1,
    Method = 2,
    Function = 3,
    Constructor = 4,
    Field = 5,
    Variable = 6,
    Class = 7,
    Interface = 8,
    Module = 9,
    Property = 10,
    Unit = 11,
    Value = 12,
    Enum = 13,
    Keyword = 14,
    Snippet = 15,
    Color = 16,
    File = 17,
    Reference = 18,
    Folder = 19,
    EnumMember = 20,
    Constant = 21,
    Struct = 22,
    Event = 23,
    Operator = 24,
    TypeParameter = 25,
}

impl Serialize for CompletionItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// One completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Text shown in the list
    pub label: String,
    /// Icon category
    pub kind: CompletionItemKind,
    /// Secondary text
    pub detail: String,
    /// Text inserted on accept
    pub insert_text: String,
}
