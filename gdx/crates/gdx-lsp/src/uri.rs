//! File URIs as sent by editors.

use std::fmt;

use crate::error::UriError;

/// A `scheme://` URI with an absolute path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUri {
    /// Scheme, e.g. `file`
    pub scheme: String,
    /// Absolute path, still percent-encoded
    pub path: String,
}

impl FileUri {
    /// Parses `uri`.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lsp::uri::FileUri;
    ///
    /// let uri = FileUri::parse("file:///home/me/player.gd").unwrap();
    /// assert_eq!(uri.scheme, "file");
    /// assert_eq!(uri.path, "/home/me/player.gd");
    ///
    /// assert!(FileUri::parse("player.gd").is_err());
    /// assert!(FileUri::parse("file://relative/path").is_err());
    /// ```
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let invalid = || UriError(uri.to_string());

        let (scheme, path) = uri.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || !path.starts_with('/') {
            return Err(invalid());
        }

        Ok(Self {
            scheme: scheme.to_string(),
            path: path.to_string(),
        })
    }

    /// Returns the path with `%XX` escapes decoded.
    ///
    /// Malformed escapes are kept as written.
    pub fn decoded_path(&self) -> String {
        let bytes = self.path.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                if let Some(byte) = hex {
                    out.push(byte);
                    i += 3;
                    continue;
                }
            }
            out.push(bytes[i]);
            i += 1;
        }

        String::from_utf8_lossy(&out).into_owned()
    }
}

impl fmt::Display for FileUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.path)
    }
}
