//! # Text Segmentation Configuration
use crate::types::CommonHashSet;

/// The default multi-character delimiters.
pub const DEFAULT_DELIMITERS: &[&str] = &["--"];

/// The default single-character punctuation delimiters.
pub const DEFAULT_PUNCTUATION: &[char] = &[',', '.', ':', ';', '?', '_', '!', '"', '\'', '(', ')'];

/// Delimiter set for the [`TextSegmentor`](super::TextSegmentor).
///
/// Every delimiter occurrence becomes a standalone token;
/// whitespace runs split text but never become tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationConfig {
    /// Multi-character delimiters; matched before single characters.
    pub delimiters: Vec<String>,

    /// Single-character punctuation delimiters.
    pub punctuation: CommonHashSet<char>,

    /// Should whitespace split the text?
    pub split_whitespace: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            punctuation: DEFAULT_PUNCTUATION.iter().copied().collect(),
            split_whitespace: true,
        }
    }
}

impl SegmentationConfig {
    /// Replace the multi-character delimiters.
    ///
    /// ## Arguments
    /// * `delimiters` - The new delimiter strings.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_delimiters<W, S>(
        self,
        delimiters: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            delimiters: delimiters
                .into_iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
            ..self
        }
    }

    /// Replace the single-character punctuation set.
    ///
    /// ## Arguments
    /// * `punctuation` - The new punctuation characters.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_punctuation<W>(
        self,
        punctuation: W,
    ) -> Self
    where
        W: IntoIterator<Item = char>,
    {
        Self {
            punctuation: punctuation.into_iter().collect(),
            ..self
        }
    }

    /// Enable or disable whitespace splitting.
    pub fn with_split_whitespace(
        self,
        split_whitespace: bool,
    ) -> Self {
        Self {
            split_whitespace,
            ..self
        }
    }
}
