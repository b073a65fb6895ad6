//! Request header collection for mapping HTTP requests to a header source.

use super::HeaderSource;

/// Headers copied out of a framework-specific HTTP request.
///
/// `RequestHeaders` is the framework-agnostic integration point for hosts
/// that do not want to implement [`HeaderSource`] themselves. Header names
/// are matched ASCII case-insensitively. When a name occurs more than once
/// the first value wins; values are never merged.
///
/// # Examples
///
/// ```
/// use header_email::web::{HeaderSource, RequestHeaders};
///
/// let mut headers = RequestHeaders::new().with_request_id("req-12345");
/// headers.add_header("X-Email", "jane@example.com");
/// headers.add_header("User-Agent", "browser");
///
/// assert_eq!(headers.header("x-email"), Some("jane@example.com"));
/// assert_eq!(headers.request_id(), Some("req-12345"));
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    /// Request identifier for log correlation (optional)
    request_id: Option<String>,
    /// Header name/value pairs in arrival order
    headers: Vec<(String, String)>,
}

impl RequestHeaders {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a request identifier used in log events.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Appends a header.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Number of headers, counting repeated names separately.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if no headers were added.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over headers in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl HeaderSource for RequestHeaders {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            request_id: None,
            headers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_headers_new_is_empty() {
        let headers = RequestHeaders::new();
        assert!(headers.is_empty());
        assert_eq!(headers.request_id(), None);
        assert_eq!(headers.header("X-Email"), None);
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        let headers: RequestHeaders = [("x-EMAIL", "a@b.com")].into_iter().collect();

        assert_eq!(headers.header("X-Email"), Some("a@b.com"));
        assert_eq!(headers.header("x-email"), Some("a@b.com"));
    }

    #[test]
    fn first_repeated_header_wins() {
        let mut headers = RequestHeaders::new();
        headers.add_header("X-Email", "first@example.com");
        headers.add_header("x-email", "second@example.com");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.header("X-Email"), Some("first@example.com"));
    }

    #[test]
    fn iter_preserves_arrival_order() {
        let mut headers = RequestHeaders::new();
        headers.add_header("A", "1");
        headers.add_header("B", "2");

        let names: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn request_id_is_carried() {
        let headers = RequestHeaders::new().with_request_id("req-7");
        assert_eq!(headers.request_id(), Some("req-7"));
    }
}
