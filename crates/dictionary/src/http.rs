//! HTTP dictionary client
//!
//! Queries a Datamuse-compatible endpoint:
//!
//! ```text
//! GET /words?sp=<word>&md=d&max=1 HTTP/1.1
//! ```
//!
//! The response body is a JSON array of `{"word": ..., "defs": [...]}`
//! objects; `defs` is absent for words the service has no definition for.
//!
//! Requests go over a plain tokio `TcpStream`, one connection per lookup,
//! with `Connection: close` so the body ends at EOF.

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::DictionaryError;
use crate::lookup::{DictionaryLookup, LookupMatch};

/// Default dictionary host
pub const DEFAULT_HOST: &str = "api.datamuse.com";

/// Default dictionary port
pub const DEFAULT_PORT: u16 = 80;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest response accepted, headers included
pub const MAX_RESPONSE_BYTES: u64 = 64 * 1024;

/// Dictionary client speaking HTTP/1.1
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    host: String,
    port: u16,
    path: String,
    timeout: Duration,
}

impl Default for HttpDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl HttpDictionary {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            path: "/words".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Request line target for `word`
    pub fn request_target(&self, word: &str) -> String {
        format!("{}?sp={}&md=d&max=1", self.path, percent_encode(word))
    }

    async fn fetch(&self, word: &str) -> Result<Vec<LookupMatch>, DictionaryError> {
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await?;

        let request = format!(
            "GET {} HTTP/1.1\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
            self.request_target(word),
            self.host
        );
        stream.write_all(request.as_bytes()).await?;
        stream.flush().await?;

        let mut raw = Vec::with_capacity(1024);
        (&mut stream)
            .take(MAX_RESPONSE_BYTES + 1)
            .read_to_end(&mut raw)
            .await?;
        if raw.len() as u64 > MAX_RESPONSE_BYTES {
            return Err(DictionaryError::MalformedResponse(format!(
                "response exceeds {} bytes",
                MAX_RESPONSE_BYTES
            )));
        }

        let (status, body) = parse_http_response(&raw)?;
        if !(200..300).contains(&status) {
            return Err(DictionaryError::Status(status));
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

impl DictionaryLookup for HttpDictionary {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        async move {
            match tokio::time::timeout(self.timeout, self.fetch(word)).await {
                Ok(result) => result,
                Err(_) => Err(DictionaryError::Timeout),
            }
        }
    }
}

/// Percent-encode everything outside the URL unreserved set
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Split a raw HTTP/1.1 response into status code and decoded body
pub fn parse_http_response(raw: &[u8]) -> Result<(u16, Vec<u8>), DictionaryError> {
    let header_end = find(raw, b"\r\n\r\n")
        .ok_or_else(|| DictionaryError::MalformedResponse("missing header terminator".into()))?;
    let head = String::from_utf8_lossy(&raw[..header_end]);
    let body = &raw[header_end + 4..];

    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap_or_default();
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| {
            DictionaryError::MalformedResponse(format!("bad status line: {:?}", status_line))
        })?;

    let mut chunked = false;
    let mut content_length: Option<usize> = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("transfer-encoding") {
            chunked = value.to_ascii_lowercase().contains("chunked");
        } else if name.eq_ignore_ascii_case("content-length") {
            content_length = value.parse().ok();
        }
    }

    let body = if chunked {
        decode_chunked(body)?
    } else {
        match content_length {
            Some(len) if len <= body.len() => body[..len].to_vec(),
            _ => body.to_vec(),
        }
    };
    Ok((status, body))
}

fn decode_chunked(mut body: &[u8]) -> Result<Vec<u8>, DictionaryError> {
    let mut out = Vec::with_capacity(body.len());
    loop {
        let line_end = find(body, b"\r\n")
            .ok_or_else(|| DictionaryError::MalformedResponse("truncated chunk size".into()))?;
        let size_text = String::from_utf8_lossy(&body[..line_end]);
        let size_text = size_text.split(';').next().unwrap_or_default().trim();
        let size = usize::from_str_radix(size_text, 16).map_err(|_| {
            DictionaryError::MalformedResponse(format!("bad chunk size: {:?}", size_text))
        })?;
        body = &body[line_end + 2..];
        if size == 0 {
            return Ok(out);
        }
        if body.len() < size {
            return Err(DictionaryError::MalformedResponse("truncated chunk".into()));
        }
        out.extend_from_slice(&body[..size]);
        body = &body[size..];
        if body.starts_with(b"\r\n") {
            body = &body[2..];
        }
    }
}
