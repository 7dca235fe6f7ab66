//! # Token Vocabulary

use crate::{
    errors::{BTResult, BasictokError},
    types::{CommonHashMap, TokenType},
    vocab::{IdTokenMap, SpecialTokens, TokenIdMap},
};

/// Bijective `{ String <-> T }` token vocabulary.
///
/// Both directions are built together at construction time,
/// and the vocabulary is immutable afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    /// ``{ String -> T }`` mapping.
    forward: TokenIdMap<T>,

    /// ``{ T -> String }`` mapping; the exact inverse of `forward`.
    inverse: IdTokenMap<T>,

    /// The unknown-token identifier, if reserved.
    unknown: Option<T>,

    /// The end-of-text identifier, if reserved.
    end_of_text: Option<T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary from a `{ token -> id }` map.
    ///
    /// The default [`SpecialTokens`] markers are resolved if present.
    ///
    /// ## Arguments
    /// * `forward` - The token to identifier map.
    ///
    /// ## Returns
    /// A `BTResult<Vocabulary>`, with errors when two tokens share an identifier.
    pub fn from_token_map(forward: TokenIdMap<T>) -> BTResult<Self> {
        Self::from_token_map_with_specials(forward, &SpecialTokens::default())
    }

    /// Build a vocabulary from a `{ token -> id }` map and explicit markers.
    ///
    /// Markers absent from `forward` leave the matching identifier unset.
    ///
    /// ## Arguments
    /// * `forward` - The token to identifier map.
    /// * `specials` - The reserved marker strings.
    ///
    /// ## Returns
    /// A `BTResult<Vocabulary>`, with errors when two tokens share an identifier.
    pub fn from_token_map_with_specials(
        forward: TokenIdMap<T>,
        specials: &SpecialTokens,
    ) -> BTResult<Self> {
        let mut inverse: IdTokenMap<T> = CommonHashMap::with_capacity(forward.len());
        for (token, &id) in forward.iter() {
            if let Some(prev) = inverse.insert(id, token.clone()) {
                return Err(BasictokError::DuplicateId {
                    id: id.to_string(),
                    first: prev,
                    second: token.clone(),
                });
            }
        }

        let resolve = |marker: &Option<String>| {
            marker
                .as_deref()
                .and_then(|marker| forward.get(marker).copied())
        };
        let unknown = resolve(&specials.unknown);
        let end_of_text = resolve(&specials.end_of_text);

        log::debug!(
            "vocabulary: {} tokens; unknown={:?}; end_of_text={:?}",
            forward.len(),
            unknown,
            end_of_text
        );

        Ok(Self {
            forward,
            inverse,
            unknown,
            end_of_text,
        })
    }

    /// Build a vocabulary where each token's identifier is its list position.
    ///
    /// ## Arguments
    /// * `tokens` - The ordered tokens.
    /// * `specials` - The reserved marker strings.
    ///
    /// ## Returns
    /// A `BTResult<Vocabulary>`, with errors on repeated tokens,
    /// or when the list does not fit in `T`.
    pub fn from_token_list<I, S>(
        tokens: I,
        specials: &SpecialTokens,
    ) -> BTResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut forward: TokenIdMap<T> = TokenIdMap::default();
        let mut positions: CommonHashMap<String, usize> = CommonHashMap::default();

        for (idx, token) in tokens.into_iter().enumerate() {
            let token = token.into();
            if let Some(&first) = positions.get(&token) {
                return Err(BasictokError::DuplicateToken {
                    token,
                    first,
                    second: idx,
                });
            }
            let id = T::from_usize(idx).ok_or(BasictokError::VocabSizeOverflow { size: idx + 1 })?;
            positions.insert(token.clone(), idx);
            forward.insert(token, id);
        }

        Self::from_token_map_with_specials(forward, specials)
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Get the ``{ String -> T }`` map.
    pub fn forward(&self) -> &TokenIdMap<T> {
        &self.forward
    }

    /// Get the ``{ T -> String }`` map.
    pub fn inverse(&self) -> &IdTokenMap<T> {
        &self.inverse
    }

    /// Look up the identifier for a token.
    pub fn token_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.forward.get(token).copied()
    }

    /// Look up the token for an identifier.
    pub fn token_str(
        &self,
        id: T,
    ) -> Option<&str> {
        self.inverse.get(&id).map(String::as_str)
    }

    /// Is `token` in the vocabulary?
    pub fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.forward.contains_key(token)
    }

    /// Is `id` in the vocabulary?
    pub fn contains_id(
        &self,
        id: T,
    ) -> bool {
        self.inverse.contains_key(&id)
    }

    /// The unknown-token identifier, if reserved.
    pub fn unknown_id(&self) -> Option<T> {
        self.unknown
    }

    /// The end-of-text identifier, if reserved.
    pub fn end_of_text_id(&self) -> Option<T> {
        self.end_of_text
    }

    /// The largest identifier, if any.
    pub fn max_id(&self) -> Option<T> {
        self.inverse.keys().max().copied()
    }

    /// All `(id, token)` entries, in identifier order.
    pub fn entries(&self) -> Vec<(T, &str)> {
        let mut entries: Vec<(T, &str)> = self
            .inverse
            .iter()
            .map(|(&id, token)| (id, token.as_str()))
            .collect();
        entries.sort_by_key(|&(id, _)| id);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{END_OF_TEXT_MARKER, UNKNOWN_MARKER};

    fn token_map(pairs: &[(&str, u32)]) -> TokenIdMap<u32> {
        pairs.iter().map(|&(t, id)| (t.to_string(), id)).collect()
    }

    #[test]
    fn test_from_token_map() {
        let vocab = Vocabulary::from_token_map(token_map(&[
            ("hello", 0),
            (",", 1),
            (END_OF_TEXT_MARKER, 2),
            (UNKNOWN_MARKER, 3),
        ]))
        .unwrap();

        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.unknown_id(), Some(3));
        assert_eq!(vocab.end_of_text_id(), Some(2));
        assert_eq!(vocab.max_id(), Some(3));

        assert_eq!(vocab.token_id("hello"), Some(0));
        assert_eq!(vocab.token_str(1), Some(","));
        assert!(vocab.contains_token(","));
        assert!(!vocab.contains_token("world"));
        assert!(vocab.contains_id(2));
        assert!(!vocab.contains_id(4));

        for (token, &id) in vocab.forward() {
            assert_eq!(vocab.inverse()[&id], *token);
        }
    }

    #[test]
    fn test_missing_specials() {
        let vocab = Vocabulary::from_token_map(token_map(&[("a", 0), ("b", 1)])).unwrap();
        assert_eq!(vocab.unknown_id(), None);
        assert_eq!(vocab.end_of_text_id(), None);
    }

    #[test]
    fn test_custom_specials() {
        let specials = SpecialTokens::none().with_unknown(Some("[UNK]"));
        let vocab = Vocabulary::from_token_map_with_specials(
            token_map(&[("a", 0), ("[UNK]", 7), (UNKNOWN_MARKER, 8)]),
            &specials,
        )
        .unwrap();
        assert_eq!(vocab.unknown_id(), Some(7));
        assert_eq!(vocab.end_of_text_id(), None);
    }

    #[test]
    fn test_duplicate_id() {
        let err = Vocabulary::from_token_map(token_map(&[("a", 0), ("b", 0)])).unwrap_err();
        assert!(matches!(err, BasictokError::DuplicateId { ref id, .. } if id == "0"));
    }

    #[test]
    fn test_from_token_list() {
        let vocab: Vocabulary<u16> =
            Vocabulary::from_token_list(["x", "y", UNKNOWN_MARKER], &SpecialTokens::default())
                .unwrap();
        assert_eq!(vocab.entries(), vec![(0, "x"), (1, "y"), (2, UNKNOWN_MARKER)]);
        assert_eq!(vocab.unknown_id(), Some(2));

        let err = Vocabulary::<u16>::from_token_list(["x", "y", "x"], &SpecialTokens::default())
            .unwrap_err();
        assert_eq!(
            err,
            BasictokError::DuplicateToken {
                token: "x".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_token_list_overflow() {
        let tokens = (0..300).map(|i| format!("t{i}"));
        let err = Vocabulary::<u8>::from_token_list(tokens, &SpecialTokens::default()).unwrap_err();
        assert_eq!(err, BasictokError::VocabSizeOverflow { size: 257 });
    }
}
