//! Log-safe formatting for email addresses.

use std::fmt;

/// Formats an email address for log output without exposing it.
///
/// Only the first character of the local part and the domain survive:
/// `jane.doe@example.com` is written as `j***@example.com`. Values without
/// an `@` are fully masked.
///
/// Every `tracing` event emitted by this crate goes through `MaskedEmail`
/// when it mentions an address, so turning on debug logging does not leak
/// user identities into log storage.
///
/// # Examples
///
/// ```
/// use header_email::MaskedEmail;
///
/// assert_eq!(MaskedEmail("jane.doe@example.com").to_string(), "j***@example.com");
/// assert_eq!(MaskedEmail("undefined").to_string(), "***");
/// ```
#[derive(Clone, Copy)]
pub struct MaskedEmail<'a>(pub &'a str);

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{}***@{}", first, domain),
                None => write!(f, "***@{}", domain),
            },
            None if self.0.is_empty() => f.write_str("<empty>"),
            None => f.write_str("***"),
        }
    }
}

impl fmt::Debug for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
