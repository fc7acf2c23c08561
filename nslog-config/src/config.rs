use nslog_pattern::{PatternList, DEBUG_ENV};
use serde::{Deserialize, Serialize};

/// nslog startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NslogConfig {
    /// Environment variable to read patterns from
    #[serde(default = "default_env_var")]
    pub env_var: String,
    /// Explicit patterns, overriding the environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
}

fn default_env_var() -> String {
    DEBUG_ENV.to_string()
}

impl Default for NslogConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            patterns: None,
        }
    }
}

impl NslogConfig {
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            patterns: None,
        }
    }

    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            env_var: default_env_var(),
            patterns: Some(patterns.into_iter().map(Into::into).collect()),
        }
    }

    /// Produce the pattern list this configuration describes.
    ///
    /// Each explicit entry goes through the same parsing as the
    /// environment value, so an entry may itself hold several
    /// comma-separated patterns.
    pub fn resolve(&self) -> PatternList {
        match &self.patterns {
            Some(patterns) => {
                let list = PatternList::parse(&patterns.join(","));
                tracing::debug!(patterns = %list, "using configured namespace patterns");
                list
            }
            None => PatternList::from_env_var(&self.env_var),
        }
    }
}
