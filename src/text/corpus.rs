//! Corpus units accepted by the vectorization pipeline.

use serde::{Deserialize, Serialize};

/// A unit of corpus text.
///
/// Both forms are accepted interchangeably anywhere a text is expected:
/// a whitespace-joined string, or an ordered token list that has already
/// been split by the caller.
///
/// # Examples
///
/// ```
/// use vectorizar::text::Text;
///
/// let raw: Text = "中国 的 首都".into();
/// let tokens: Text = vec!["中国".to_string(), "的".to_string(), "首都".to_string()].into();
/// assert!(!raw.is_empty());
/// assert!(!tokens.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Text {
    /// Whitespace-joined raw text.
    Raw(String),
    /// Pre-tokenized, ordered tokens.
    Tokens(Vec<String>),
}

impl Text {
    /// Create a raw text unit.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Text::Raw(text.into())
    }

    /// Create a pre-tokenized text unit.
    #[must_use]
    pub fn tokens(tokens: Vec<String>) -> Self {
        Text::Tokens(tokens)
    }

    /// True if the unit holds no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Text::Raw(s) => s.is_empty(),
            Text::Tokens(t) => t.is_empty(),
        }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::Raw(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::Raw(text)
    }
}

impl From<Vec<String>> for Text {
    fn from(tokens: Vec<String>) -> Self {
        Text::Tokens(tokens)
    }
}

impl From<&[&str]> for Text {
    fn from(tokens: &[&str]) -> Self {
        Text::Tokens(tokens.iter().map(ToString::to_string).collect())
    }
}
