//! # Decoded Token Spacing

use crate::types::CommonHashSet;

/// The default attach-tight character class.
///
/// Includes both the ASCII hyphen and the en-dash.
pub const DEFAULT_ATTACH_TIGHT: &[char] = &[
    ',', '.', ':', ';', '?', '_', '!', '"', '\'', '(', ')', '-', '\u{2013}',
];

/// Reassembly rules for decoded tokens.
///
/// A token made up entirely of attach-tight characters is appended with
/// no preceding space; any other token is preceded by one space, unless
/// nothing has been written yet.
///
/// This approximates natural spacing; it does not invert segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingRules {
    /// The attach-tight character class.
    pub attach_tight: CommonHashSet<char>,
}

impl Default for SpacingRules {
    fn default() -> Self {
        Self::from_chars(DEFAULT_ATTACH_TIGHT.iter().copied())
    }
}

impl SpacingRules {
    /// Build rules from an attach-tight character class.
    pub fn from_chars<W>(attach_tight: W) -> Self
    where
        W: IntoIterator<Item = char>,
    {
        Self {
            attach_tight: attach_tight.into_iter().collect(),
        }
    }

    /// Is `token` rendered without a preceding space?
    ///
    /// The empty token is word-like.
    pub fn is_attach_tight(
        &self,
        token: &str,
    ) -> bool {
        !token.is_empty() && token.chars().all(|c| self.attach_tight.contains(&c))
    }

    /// Append one token to `buf`.
    pub fn push_token(
        &self,
        buf: &mut String,
        token: &str,
    ) {
        if !self.is_attach_tight(token) && !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(token);
    }

    /// Join tokens into text.
    pub fn join<'a, I>(
        &self,
        tokens: I,
    ) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut buf = String::new();
        for token in tokens {
            self.push_token(&mut buf, token);
        }
        buf
    }
}
