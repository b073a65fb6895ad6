//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and the email
//! extraction logic. The extractor only ever performs one operation on a
//! request: reading a single header by name. That operation is the
//! [`HeaderSource`] trait.
//!
//! # Integration Model
//!
//! Framework-specific code should either:
//! 1. Implement [`HeaderSource`] directly on its request or header map type, or
//! 2. Copy the request headers into a [`RequestHeaders`] collection, which
//!    matches header names case-insensitively as HTTP requires.
//!
//! # Example Flow
//!
//! ```
//! use header_email::web::RequestHeaders;
//! use header_email::{extract_email, ExtractOptions, ExtractStatus, MemorySession};
//!
//! // In a framework-specific integration (e.g., axum, actix):
//! let mut headers = RequestHeaders::new().with_request_id("req-42");
//! headers.add_header("x-email", "jane@example.com");
//!
//! let mut session = MemorySession::new();
//! let extraction = extract_email(&headers, &mut session, &ExtractOptions::default());
//!
//! assert_eq!(extraction.status, ExtractStatus::Success);
//! assert_eq!(extraction.email, "jane@example.com");
//! ```

mod adapter;
mod source;

pub use adapter::RequestHeaders;
pub use source::HeaderSource;
