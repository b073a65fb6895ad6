//! Session store capability interface.
//!
//! The host environment owns the session and its lifecycle. This crate only
//! needs four operations on it, captured by [`SessionStore`], so the core can
//! be exercised against [`MemorySession`] without a real hosting environment.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::input::InputOutcome;

/// Key into a session store.
///
/// Hosts address session entries by name or by integer index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum SessionKey {
    /// A named entry
    Name(String),
    /// An indexed entry
    Index(i64),
}

impl SessionKey {
    /// Returns the key name if this is a named key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            SessionKey::Name(name) => Some(name),
            SessionKey::Index(_) => None,
        }
    }
}

impl From<&str> for SessionKey {
    fn from(name: &str) -> Self {
        SessionKey::Name(name.to_string())
    }
}

impl From<String> for SessionKey {
    fn from(name: String) -> Self {
        SessionKey::Name(name)
    }
}

impl From<i64> for SessionKey {
    fn from(index: i64) -> Self {
        SessionKey::Index(index)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKey::Name(name) => f.write_str(name),
            SessionKey::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Value held in a session entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionValue {
    /// A plain string, such as the email bound to an input widget
    Text(String),
    /// The recorded outcome of an email input invocation
    Outcome(InputOutcome),
}

impl SessionValue {
    /// Returns the string if this is a text entry.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SessionValue::Text(s) => Some(s),
            SessionValue::Outcome(_) => None,
        }
    }

    /// Returns the outcome if this entry holds one.
    pub fn as_outcome(&self) -> Option<&InputOutcome> {
        match self {
            SessionValue::Outcome(outcome) => Some(outcome),
            SessionValue::Text(_) => None,
        }
    }
}

impl From<&str> for SessionValue {
    fn from(value: &str) -> Self {
        SessionValue::Text(value.to_string())
    }
}

impl From<String> for SessionValue {
    fn from(value: String) -> Self {
        SessionValue::Text(value)
    }
}

impl From<InputOutcome> for SessionValue {
    fn from(outcome: InputOutcome) -> Self {
        SessionValue::Outcome(outcome)
    }
}

/// Minimal capability interface over a host-owned session.
///
/// Implementations are scoped to one user session. Callers hold `&mut` while
/// writing, so a session is never mutated from two places at once.
pub trait SessionStore {
    /// Returns the entry stored under `key`.
    fn get(&self, key: &SessionKey) -> Option<&SessionValue>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&mut self, key: SessionKey, value: SessionValue);

    /// Removes the entry under `key` if there is one.
    ///
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &SessionKey) -> Option<SessionValue>;

    /// Returns `true` if an entry exists under `key`.
    fn contains(&self, key: &SessionKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the entry under `key` if it is text.
    fn get_text(&self, key: &SessionKey) -> Option<&str> {
        self.get(key).and_then(SessionValue::as_text)
    }
}

impl SessionStore for HashMap<SessionKey, SessionValue> {
    fn get(&self, key: &SessionKey) -> Option<&SessionValue> {
        HashMap::get(self, key)
    }

    fn set(&mut self, key: SessionKey, value: SessionValue) {
        self.insert(key, value);
    }

    fn remove(&mut self, key: &SessionKey) -> Option<SessionValue> {
        HashMap::remove(self, key)
    }

    fn contains(&self, key: &SessionKey) -> bool {
        self.contains_key(key)
    }
}

/// In-memory session store.
///
/// Useful for tests and for hosts that keep session state in process.
///
/// # Examples
///
/// ```
/// use header_email::{MemorySession, SessionKey, SessionStore};
///
/// let mut session = MemorySession::new();
/// let key = SessionKey::from("user_email");
///
/// session.set(key.clone(), "a@b.com".into());
/// assert_eq!(session.get_text(&key), Some("a@b.com"));
///
/// session.remove(&key);
/// assert!(!session.contains(&key));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entries: HashMap<SessionKey, SessionValue>,
}

impl MemorySession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the session holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&SessionKey, &SessionValue)> {
        self.entries.iter()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &SessionKey) -> Option<&SessionValue> {
        self.entries.get(key)
    }

    fn set(&mut self, key: SessionKey, value: SessionValue) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: &SessionKey) -> Option<SessionValue> {
        self.entries.remove(key)
    }

    fn contains(&self, key: &SessionKey) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Into<SessionKey>, V: Into<SessionValue>> FromIterator<(K, V)> for MemorySession {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
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
    fn named_and_indexed_keys_are_distinct() {
        let mut session = MemorySession::new();
        session.set(SessionKey::from("1"), "named".into());
        session.set(SessionKey::from(1_i64), "indexed".into());

        assert_eq!(session.len(), 2);
        assert_eq!(session.get_text(&"1".into()), Some("named"));
        assert_eq!(session.get_text(&1_i64.into()), Some("indexed"));
    }

    #[test]
    fn only_named_keys_have_a_name() {
        assert_eq!(SessionKey::from("user_email").as_name(), Some("user_email"));
        assert_eq!(SessionKey::from(0_i64).as_name(), None);
    }

    #[test]
    fn iter_visits_every_entry() {
        let session: MemorySession = [("a", "x@y.com"), ("b", "z@y.com")].into_iter().collect();

        let mut names: Vec<_> = session
            .iter()
            .filter_map(|(key, value)| Some((key.as_name()?, value.as_text()?)))
            .collect();
        names.sort();

        assert_eq!(names, vec![("a", "x@y.com"), ("b", "z@y.com")]);
    }

    #[test]
    fn remove_missing_key_is_not_an_error() {
        let mut session = MemorySession::new();
        assert_eq!(session.remove(&"absent".into()), None);
        assert!(session.is_empty());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut session: MemorySession = [("k", "old")].into_iter().collect();
        session.set("k".into(), "new".into());
        assert_eq!(session.get_text(&"k".into()), Some("new"));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn get_text_ignores_outcome_entries() {
        let mut session = MemorySession::new();
        session.set("out".into(), InputOutcome::default().into());

        assert!(session.contains(&"out".into()));
        assert_eq!(session.get_text(&"out".into()), None);
    }

    #[test]
    fn hash_map_is_a_session_store() {
        let mut map: HashMap<SessionKey, SessionValue> = HashMap::new();
        SessionStore::set(&mut map, "k".into(), "v".into());
        assert!(SessionStore::contains(&map, &"k".into()));
        assert_eq!(SessionStore::remove(&mut map, &"k".into()), Some("v".into()));
    }

    #[test]
    fn session_key_deserializes_from_string_or_integer() {
        #[derive(Deserialize)]
        struct Doc {
            a: SessionKey,
            b: SessionKey,
        }

        let doc: Doc = toml::from_str("a = \"user_email\"\nb = 4\n").expect("valid toml");
        assert_eq!(doc.a, SessionKey::Name("user_email".to_string()));
        assert_eq!(doc.b, SessionKey::Index(4));
    }
}
