//! # Text Segmentation
//!
//! This module exists to factor out text segmentation scanning.
//!
//! [`SegmentationConfig`] describes the declarative delimiter set:
//! * `delimiters` - multi-character delimiters, matched first.
//! * `punctuation` - single-character delimiters.
//! * `split_whitespace` - whether whitespace runs separate tokens.
//!
//! [`TextSegmentor`] implements the run-time scan.

pub mod segmentation_config;
pub mod text_segmentor;

#[doc(inline)]
pub use segmentation_config::SegmentationConfig;
#[doc(inline)]
pub use text_segmentor::{TextSegmentor, is_split_whitespace};
