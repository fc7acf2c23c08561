use std::fmt;

const WILDCARD: &str = "*";
const PREFIX_WILDCARD: &str = ":*";

/// A single namespace pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Pattern {
    /// `*`, matches every namespace
    Any,
    /// `name:*`, stored as `name:` so the separator has to be present
    Prefix(String),
    /// Matches one namespace verbatim
    Exact(String),
}

impl Pattern {
    /// Parse one entry of the pattern list. Never fails.
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            Pattern::Any
        } else if raw.ends_with(PREFIX_WILDCARD) {
            // keep the ':' so "foo:*" does not enable "foo" or "foobar"
            Pattern::Prefix(raw[..raw.len() - WILDCARD.len()].to_string())
        } else {
            Pattern::Exact(raw.to_string())
        }
    }

    pub fn matches(&self, namespace: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Prefix(prefix) => namespace.starts_with(prefix.as_str()),
            Pattern::Exact(exact) => namespace == exact,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => f.write_str(WILDCARD),
            Pattern::Prefix(prefix) => write!(f, "{prefix}{WILDCARD}"),
            Pattern::Exact(exact) => f.write_str(exact),
        }
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Pattern::parse(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Pattern::parse(&raw)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}
