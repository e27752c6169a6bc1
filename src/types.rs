//! Core types for the record-type factory.

use std::fmt;

/// A field accessor key: either a positional index or a field name.
///
/// Every name-or-index operation on an instance resolves through a `Key`,
/// so the two access styles share one lookup path.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "Key({i})"),
            Key::Name(name) => write!(f, "Key({name:?})"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// Check that a field or type name is a plain identifier:
/// a letter or underscore followed by letters, digits, or underscores.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversions() {
        assert_eq!(Key::from(3), Key::Index(3));
        assert_eq!(Key::from("x"), Key::Name("x".to_string()));
        assert_eq!(Key::from("y".to_string()), Key::Name("y".to_string()));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Index(2).to_string(), "2");
        assert_eq!(Key::Name("name".into()).to_string(), "name");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("field_2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("dash-ed"));
    }
}
