use crate::Pattern;
use std::convert::Infallible;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the enabled namespace patterns
pub const DEBUG_ENV: &str = "DEBUG";

const SEPARATOR: char = ',';

/// Ordered, immutable list of enabled namespace patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    /// Parse a comma-separated pattern list.
    ///
    /// Empty entries are skipped, so an empty value enables nothing, not
    /// even the empty namespace. Entries are not trimmed.
    pub fn parse(config: &str) -> Self {
        config
            .split(SEPARATOR)
            .filter(|raw| !raw.is_empty())
            .map(Pattern::parse)
            .collect()
    }

    /// Read the patterns from `DEBUG`
    pub fn from_env() -> Self {
        Self::from_env_var(DEBUG_ENV)
    }

    /// Read the patterns from an arbitrary environment variable.
    ///
    /// An unset or non-unicode variable is treated as empty.
    pub fn from_env_var(name: &str) -> Self {
        let value = env::var(name).unwrap_or_default();
        let patterns = Self::parse(&value);

        tracing::debug!(
            env_var = %name,
            patterns = %patterns,
            count = patterns.len(),
            "loaded namespace patterns"
        );

        patterns
    }

    /// Whether any pattern enables `namespace`
    pub fn matches(&self, namespace: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(namespace))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}

impl FromStr for PatternList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for PatternList {
    fn from(config: String) -> Self {
        Self::parse(&config)
    }
}

impl From<PatternList> for String {
    fn from(patterns: PatternList) -> Self {
        patterns.to_string()
    }
}

impl FromIterator<Pattern> for PatternList {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PatternList {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
