//! # Vocabulary Types

use crate::types::CommonHashMap;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `forward`, or `token_ids`.
pub type TokenIdMap<T> = CommonHashMap<String, T>;

/// `{ T -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `inverse`, or `id_tokens`.
pub type IdTokenMap<T> = CommonHashMap<T, String>;
