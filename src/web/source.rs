//! Header lookup boundary trait.

use std::collections::{BTreeMap, HashMap};

/// Read-only access to the headers of the current request.
///
/// This trait defines the boundary between web framework types and the
/// extractor. The mapping is supplied by the host and scoped to one request;
/// the extractor never mutates it.
///
/// Plain `HashMap` and `BTreeMap` implementations look names up exactly as
/// given. Use [`RequestHeaders`](super::RequestHeaders) for case-insensitive
/// HTTP semantics.
///
/// # Examples
///
/// ```
/// use header_email::web::HeaderSource;
///
/// // Example framework-specific implementation
/// struct MyFrameworkRequest {
///     email_header: Option<String>,
/// }
///
/// impl HeaderSource for MyFrameworkRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         if name.eq_ignore_ascii_case("X-Email") {
///             self.email_header.as_deref()
///         } else {
///             None
///         }
///     }
/// }
///
/// let req = MyFrameworkRequest { email_header: Some("a@b.com".to_string()) };
/// assert_eq!(req.header("x-email"), Some("a@b.com"));
/// ```
pub trait HeaderSource {
    /// Returns the value of the header called `name`, if present.
    fn header(&self, name: &str) -> Option<&str>;

    /// Request identifier used to correlate log events, if known.
    fn request_id(&self) -> Option<&str> {
        None
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn request_id(&self) -> Option<&str> {
        (**self).request_id()
    }
}

impl<S: std::hash::BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
