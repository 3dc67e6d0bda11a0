//! Server state: lifecycle flag and open documents.

use rustc_hash::FxHashMap;

/// An open document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Language identifier from the client
    pub language_id: String,
    /// Last version seen
    pub version: i32,
    /// Full current text
    pub text: String,
}

/// Mutable state owned by one server loop.
#[derive(Debug, Default)]
pub struct ServerState {
    shutdown_requested: bool,
    documents: FxHashMap<String, Document>,
}

impl ServerState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `shutdown` was received.
    pub fn request_shutdown(&mut self) {
        self.shutdown_requested = true;
    }

    /// Returns true once `shutdown` was received.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown_requested
    }

    /// Stores a newly opened document, replacing any previous text.
    pub fn open(&mut self, uri: impl Into<String>, document: Document) {
        self.documents.insert(uri.into(), document);
    }

    /// Replaces the text of a document.
    ///
    /// A change for a document that was never opened opens it.
    pub fn change(&mut self, uri: &str, version: i32, text: String) {
        match self.documents.get_mut(uri) {
            Some(document) => {
                document.version = version;
                document.text = text;
            },
            None => {
                self.documents.insert(
                    uri.to_string(),
                    Document {
                        language_id: String::new(),
                        version,
                        text,
                    },
                );
            },
        }
    }

    /// Forgets a document.
    pub fn close(&mut self, uri: &str) -> Option<Document> {
        self.documents.remove(uri)
    }

    /// Looks up an open document.
    pub fn document(&self, uri: &str) -> Option<&Document> {
        self.documents.get(uri)
    }

    /// Number of open documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
