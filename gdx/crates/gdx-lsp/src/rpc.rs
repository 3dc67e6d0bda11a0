//! Message framing.
//!
//! Every message is a header block followed by a JSON body:
//!
//! ```text
//! Content-Length: 16\r\n
//! \r\n
//! {"method":"foo"}
//! ```
//!
//! Only `Content-Length` is interpreted; other headers are skipped.

use std::io::{BufRead, Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{RpcError, RpcResult};

const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";
const CONTENT_LENGTH: &str = "Content-Length";

/// Largest body `read_message` accepts.
pub const MAX_CONTENT_LENGTH: usize = 64 * 1024 * 1024;

#[derive(Deserialize)]
struct BaseMessage {
    #[serde(default)]
    method: String,
}

/// Encodes `value` as one framed message.
///
/// # Example
///
/// ```
/// use gdx_lsp::rpc::encode_message;
///
/// let framed = encode_message(&serde_json::json!({"Foo": "bar"})).unwrap();
/// assert_eq!(framed, "Content-Length: 13\r\n\r\n{\"Foo\":\"bar\"}");
/// ```
pub fn encode_message<T: Serialize + ?Sized>(value: &T) -> RpcResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(format!("{}: {}\r\n\r\n{}", CONTENT_LENGTH, json.len(), json))
}

/// Splits a framed message into its `method` and JSON body.
///
/// The body is exactly `Content-Length` bytes; anything after it is
/// ignored. A body without a `method` field (a response) yields an empty
/// method.
///
/// # Example
///
/// ```
/// use gdx_lsp::rpc::decode_message;
///
/// let (method, body) = decode_message(b"Content-Length: 16\r\n\r\n{\"method\":\"foo\"}").unwrap();
/// assert_eq!(method, "foo");
/// assert_eq!(body, b"{\"method\":\"foo\"}");
/// ```
pub fn decode_message(message: &[u8]) -> RpcResult<(String, &[u8])> {
    let split = message
        .windows(HEADER_SEPARATOR.len())
        .position(|window| window == HEADER_SEPARATOR)
        .ok_or(RpcError::MissingSeparator)?;

    let header = String::from_utf8_lossy(&message[..split]);
    let content = &message[split + HEADER_SEPARATOR.len()..];

    let length = header
        .split("\r\n")
        .find_map(content_length)
        .ok_or(RpcError::MissingContentLength)??;

    if content.len() < length {
        return Err(RpcError::Truncated {
            expected: length,
            actual: content.len(),
        });
    }

    let body = &content[..length];
    let base: BaseMessage = serde_json::from_slice(body)?;
    Ok((base.method, body))
}

/// Reads one complete frame, headers included.
///
/// Returns `Ok(None)` when the input ends cleanly between frames. Blank
/// lines before a header block are skipped. A `Content-Length` above
/// [`MAX_CONTENT_LENGTH`] is rejected before any of the body is read.
pub fn read_message<R: BufRead>(reader: &mut R) -> RpcResult<Option<Vec<u8>>> {
    let mut frame = Vec::new();
    let mut length = None;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            if frame.is_empty() {
                return Ok(None);
            }
            return Err(RpcError::MissingSeparator);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            if frame.is_empty() {
                continue;
            }
            frame.extend_from_slice(HEADER_SEPARATOR);
            break;
        }

        if !frame.is_empty() {
            frame.extend_from_slice(b"\r\n");
        }
        frame.extend_from_slice(trimmed.as_bytes());

        if let Some(parsed) = content_length(trimmed) {
            length = Some(parsed?);
        }
    }

    let length = length.ok_or(RpcError::MissingContentLength)?;
    if length > MAX_CONTENT_LENGTH {
        return Err(RpcError::InvalidContentLength(length.to_string()));
    }

    let actual = reader.by_ref().take(length as u64).read_to_end(&mut frame)?;
    if actual < length {
        return Err(RpcError::Truncated {
            expected: length,
            actual,
        });
    }

    Ok(Some(frame))
}

/// Encodes `value` and writes it as one frame, then flushes.
pub fn write_message<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> RpcResult<()> {
    let framed = encode_message(value)?;
    writer.write_all(framed.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parses a `Content-Length` header line; `None` for any other header.
fn content_length(line: &str) -> Option<RpcResult<usize>> {
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case(CONTENT_LENGTH) {
        return None;
    }
    let value = value.trim();
    Some(
        value
            .parse()
            .map_err(|_| RpcError::InvalidContentLength(value.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Serialize)]
    struct Foo {
        #[serde(rename = "Foo")]
        foo: &'static str,
    }

    #[test]
    fn test_encode_message() {
        let actual = encode_message(&Foo { foo: "bar" }).unwrap();
        assert_eq!(actual, "Content-Length: 13\r\n\r\n{\"Foo\":\"bar\"}");
    }

    #[test]
    fn test_encode_counts_bytes_not_chars() {
        let actual = encode_message("é").unwrap();
        assert!(actual.starts_with("Content-Length: 4\r\n"));
    }

    #[test]
    fn test_decode_message() {
        let (method, body) =
            decode_message(b"Content-Length: 16\r\n\r\n{\"method\":\"foo\"}").unwrap();
        assert_eq!(method, "foo");
        assert_eq!(body.len(), 16);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let (method, body) =
            decode_message(b"Content-Length: 16\r\n\r\n{\"method\":\"foo\"}Content-Length").unwrap();
        assert_eq!(method, "foo");
        assert_eq!(body, b"{\"method\":\"foo\"}");
    }

    #[test]
    fn test_decode_with_extra_headers() {
        let message = b"Content-Type: application/vscode-jsonrpc\r\nContent-Length: 16\r\n\r\n{\"method\":\"foo\"}";
        let (method, _) = decode_message(message).unwrap();
        assert_eq!(method, "foo");
    }

    #[test]
    fn test_decode_response_has_empty_method() {
        let (method, _) = decode_message(b"Content-Length: 8\r\n\r\n{\"id\":1}").unwrap();
        assert_eq!(method, "");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_message(b"Content-Length: 16"),
            Err(RpcError::MissingSeparator)
        ));
        assert!(matches!(
            decode_message(b"X-Other: 1\r\n\r\n{}"),
            Err(RpcError::MissingContentLength)
        ));
        assert!(matches!(
            decode_message(b"Content-Length: many\r\n\r\n{}"),
            Err(RpcError::InvalidContentLength(_))
        ));
        assert!(matches!(
            decode_message(b"Content-Length: 40\r\n\r\n{\"method\":\"foo\"}"),
            Err(RpcError::Truncated {
                expected: 40,
                actual: 16
            })
        ));
        assert!(matches!(
            decode_message(b"Content-Length: 3\r\n\r\nabc"),
            Err(RpcError::Json(_))
        ));
    }

    #[test]
    fn test_read_message_sequence() {
        let first = encode_message(&serde_json::json!({"method": "a"})).unwrap();
        let second = encode_message(&serde_json::json!({"method": "b"})).unwrap();
        let mut input = Cursor::new(format!("{}{}", first, second).into_bytes());

        let frame = read_message(&mut input).unwrap().unwrap();
        assert_eq!(frame, first.as_bytes());
        assert_eq!(decode_message(&frame).unwrap().0, "a");

        let frame = read_message(&mut input).unwrap().unwrap();
        assert_eq!(decode_message(&frame).unwrap().0, "b");

        assert!(read_message(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_read_message_skips_other_headers() {
        let raw = "Content-Type: utf-8\r\nContent-Length: 16\r\n\r\n{\"method\":\"foo\"}";
        let mut input = Cursor::new(raw.as_bytes().to_vec());
        let frame = read_message(&mut input).unwrap().unwrap();
        assert_eq!(decode_message(&frame).unwrap().0, "foo");
    }

    #[test]
    fn test_read_message_truncated_body() {
        let mut input = Cursor::new(b"Content-Length: 50\r\n\r\n{}".to_vec());
        assert!(matches!(
            read_message(&mut input),
            Err(RpcError::Truncated {
                expected: 50,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_read_message_rejects_huge_length() {
        let raw = format!("Content-Length: {}\r\n\r\n{{}}", usize::MAX);
        let mut input = Cursor::new(raw.into_bytes());
        assert!(matches!(
            read_message(&mut input),
            Err(RpcError::InvalidContentLength(_))
        ));

        let raw = format!("Content-Length: {}\r\n\r\n{{}}", MAX_CONTENT_LENGTH + 1);
        let mut input = Cursor::new(raw.into_bytes());
        assert!(matches!(
            read_message(&mut input),
            Err(RpcError::InvalidContentLength(_))
        ));
    }

    #[test]
    fn test_read_message_length_overflowing_parse() {
        let mut input = Cursor::new(b"Content-Length: 99999999999999999999999\r\n\r\n{}".to_vec());
        assert!(matches!(
            read_message(&mut input),
            Err(RpcError::InvalidContentLength(_))
        ));
    }

    #[test]
    fn test_read_message_empty_input() {
        let mut input = Cursor::new(Vec::new());
        assert!(read_message(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_write_message() {
        let mut out = Vec::new();
        write_message(&mut out, &Foo { foo: "bar" }).unwrap();
        assert_eq!(out, b"Content-Length: 13\r\n\r\n{\"Foo\":\"bar\"}");
    }
}
