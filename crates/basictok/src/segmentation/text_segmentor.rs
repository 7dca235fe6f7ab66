//! # Text Segmentor

use crate::segmentation::segmentation_config::SegmentationConfig;
use crate::types::CommonHashSet;

/// Delimiter-driven text segmentor.
///
/// Walks the text once, left to right. At each position the longest matching
/// multi-character delimiter wins; then single-character punctuation; then a
/// whitespace run. The span preceding a delimiter and the delimiter itself are
/// emitted as separate tokens, after trimming; empty results are dropped.
#[derive(Debug, Clone)]
pub struct TextSegmentor {
    /// Multi-character delimiters, longest first.
    delimiters: Vec<String>,

    /// Single-character punctuation delimiters.
    punctuation: CommonHashSet<char>,

    /// Should whitespace split the text?
    split_whitespace: bool,
}

impl Default for TextSegmentor {
    fn default() -> Self {
        Self::from_config(SegmentationConfig::default())
    }
}

impl From<SegmentationConfig> for TextSegmentor {
    fn from(config: SegmentationConfig) -> Self {
        Self::from_config(config)
    }
}

impl TextSegmentor {
    /// Create a new text segmentor from the given configuration.
    ///
    /// Empty delimiters are ignored.
    ///
    /// ## Arguments
    /// * `config` - The segmentation configuration.
    ///
    /// ## Returns
    /// A new `TextSegmentor` instance.
    pub fn from_config(config: SegmentationConfig) -> Self {
        let mut delimiters: Vec<String> = config
            .delimiters
            .into_iter()
            .filter(|d| !d.is_empty())
            .collect();
        delimiters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        delimiters.dedup();

        Self {
            delimiters,
            punctuation: config.punctuation,
            split_whitespace: config.split_whitespace,
        }
    }

    /// The multi-character delimiters, longest first.
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Length in bytes of the delimiter at the head of `rest`, if any.
    fn match_delimiter(
        &self,
        rest: &str,
    ) -> Option<usize> {
        if let Some(d) = self.delimiters.iter().find(|d| rest.starts_with(d.as_str())) {
            return Some(d.len());
        }

        let c = rest.chars().next()?;
        if self.punctuation.contains(&c) {
            return Some(c.len_utf8());
        }

        if self.split_whitespace && is_split_whitespace(c) {
            let run = rest
                .char_indices()
                .find(|&(_, c)| !is_split_whitespace(c))
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            return Some(run);
        }

        None
    }

    /// Split text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The non-empty, trimmed tokens, in text order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn split_tokens<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut tokens = Vec::new();

        let mut start = 0;
        let mut pos = 0;
        while let Some(c) = text[pos..].chars().next() {
            match self.match_delimiter(&text[pos..]) {
                Some(len) => {
                    push_trimmed(&mut tokens, &text[start..pos]);
                    push_trimmed(&mut tokens, &text[pos..pos + len]);
                    pos += len;
                    start = pos;
                }
                None => pos += c.len_utf8(),
            }
        }
        push_trimmed(&mut tokens, &text[start..]);

        tokens
    }
}

/// Is `c` whitespace for segmentation purposes?
///
/// Unicode `White_Space`, plus the ASCII information separators
/// `U+001C..=U+001F`.
pub fn is_split_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn push_trimmed<'a>(
    tokens: &mut Vec<&'a str>,
    fragment: &'a str,
) {
    let fragment = fragment.trim_matches(is_split_whitespace);
    if !fragment.is_empty() {
        tokens.push(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        TextSegmentor::default().split_tokens(text)
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(split("").is_empty());
        assert!(split("   \t\n ").is_empty());
    }

    #[test]
    fn test_information_separators() {
        assert!(is_split_whitespace('\u{1f}'));
        assert!(!is_split_whitespace('\u{1b}'));

        assert_eq!(split("a\u{1f}b"), vec!["a", "b"]);
        assert_eq!(split("x\u{1c}\u{1d} y"), vec!["x", "y"]);
        assert!(split("\u{1c}").is_empty());
        assert!(split("\u{1e}\u{1f}").is_empty());

        let segmentor = TextSegmentor::from_config(
            SegmentationConfig::default().with_split_whitespace(false),
        );
        assert_eq!(
            segmentor.split_tokens("\u{1f}hi there\u{1c}, ok"),
            vec!["hi there", ",", "ok"]
        );
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            split("Hello, how are you?"),
            vec!["Hello", ",", "how", "are", "you", "?"]
        );
        assert_eq!(
            split("\"It's (mostly) fine\": ok; done_ish!"),
            vec![
                "\"", "It", "'", "s", "(", "mostly", ")", "fine", "\"", ":", "ok", ";", "done",
                "_", "ish", "!"
            ]
        );
    }

    #[test]
    fn test_double_hyphen() {
        assert_eq!(split("a--b"), vec!["a", "--", "b"]);
        assert_eq!(split("a---b"), vec!["a", "--", "-b"]);
        assert_eq!(split("a----b"), vec!["a", "--", "--", "b"]);
        assert_eq!(split("well-known"), vec!["well-known"]);
        assert_eq!(split("- x -"), vec!["-", "x", "-"]);
    }

    #[test]
    fn test_sentence_with_double_hyphen() {
        assert_eq!(
            split("IdeaWeaver-- a comprehensive CLI tool for AI model training and evaluation?"),
            vec![
                "IdeaWeaver",
                "--",
                "a",
                "comprehensive",
                "CLI",
                "tool",
                "for",
                "AI",
                "model",
                "training",
                "and",
                "evaluation",
                "?"
            ]
        );
    }

    #[test]
    fn test_repeated_punctuation() {
        assert_eq!(split("wait...!?"), vec!["wait", ".", ".", ".", "!", "?"]);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(
            split("caf\u{00e9}\u{00a0}na\u{00ef}ve, \u{4f60}\u{597d}"),
            vec!["caf\u{00e9}", "na\u{00ef}ve", ",", "\u{4f60}\u{597d}"]
        );
        // The en-dash is not a delimiter.
        assert_eq!(split("1\u{2013}2"), vec!["1\u{2013}2"]);
    }

    #[test]
    fn test_custom_config() {
        let segmentor = TextSegmentor::from_config(
            SegmentationConfig::default()
                .with_delimiters(["", "->", "-->"])
                .with_punctuation(['-']),
        );
        assert_eq!(segmentor.delimiters(), &["-->".to_string(), "->".to_string()]);
        assert_eq!(
            segmentor.split_tokens("a-->b->c-d"),
            vec!["a", "-->", "b", "->", "c", "-", "d"]
        );
    }

    #[test]
    fn test_no_whitespace_split() {
        let segmentor = TextSegmentor::from_config(
            SegmentationConfig::default().with_split_whitespace(false),
        );
        assert_eq!(
            segmentor.split_tokens("  hello there , friend "),
            vec!["hello there", ",", "friend"]
        );
    }
}
