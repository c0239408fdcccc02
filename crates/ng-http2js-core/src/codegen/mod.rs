pub mod escape;
pub mod template;
pub mod url;

pub use escape::escape_content;
pub use template::render_module;
pub use url::{derive_url, UrlOptions};

/// A cache entry queued for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Cache key, inserted into the output verbatim
    pub uri: String,
    /// Content already escaped for a single-quoted literal
    pub escaped_content: String,
}

impl Request {
    pub fn new(uri: impl Into<String>, escaped_content: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            escaped_content: escaped_content.into(),
        }
    }

    /// Build a request from raw file text, escaping it once
    pub fn from_raw(uri: impl Into<String>, raw_content: &str) -> Self {
        Self::new(uri, escape_content(raw_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_escapes_once() {
        let request = Request::from_raw("a.html", "it's\n");
        assert_eq!(request.uri, "a.html");
        assert_eq!(request.escaped_content, "it\\'s\\n");
    }
}
