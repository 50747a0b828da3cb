use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker a player leaves on the board, e.g. `"o"` or `"x"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_display_and_conversions() {
        let symbol = Symbol::from("o");
        assert_eq!(symbol.to_string(), "o");
        assert_eq!(symbol.as_str(), "o");
        assert_eq!(String::from(symbol.clone()), "o".to_string());
        assert_eq!(Symbol::new(String::from("o")), symbol);
    }

    #[test]
    fn test_symbol_serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::from("x")).unwrap();
        assert_eq!(json, "\"x\"");
    }
}
