//! # Reserved Marker Tokens

/// The conventional end-of-text marker.
pub const END_OF_TEXT_MARKER: &str = "<|endoftext|>";

/// The conventional unknown-token marker.
pub const UNKNOWN_MARKER: &str = "<|unk|>";

/// The reserved marker strings a [`Vocabulary`](super::Vocabulary) resolves.
///
/// Either marker may be disabled with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokens {
    /// The end-of-text marker.
    pub end_of_text: Option<String>,

    /// The unknown-token marker.
    pub unknown: Option<String>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            end_of_text: Some(END_OF_TEXT_MARKER.to_string()),
            unknown: Some(UNKNOWN_MARKER.to_string()),
        }
    }
}

impl SpecialTokens {
    /// No reserved markers.
    pub fn none() -> Self {
        Self {
            end_of_text: None,
            unknown: None,
        }
    }

    /// Replace the end-of-text marker.
    pub fn with_end_of_text<S: Into<String>>(
        self,
        marker: Option<S>,
    ) -> Self {
        Self {
            end_of_text: marker.map(Into::into),
            ..self
        }
    }

    /// Replace the unknown-token marker.
    pub fn with_unknown<S: Into<String>>(
        self,
        marker: Option<S>,
    ) -> Self {
        Self {
            unknown: marker.map(Into::into),
            ..self
        }
    }

    /// The enabled markers, end-of-text first.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.end_of_text
            .as_deref()
            .into_iter()
            .chain(self.unknown.as_deref())
    }
}
