//! # Concurrency Support
//!
//! Encoders and decoders are `Send + Sync` and share their
//! [`Vocabulary`](crate::vocab::Vocabulary) read-only; single calls need no locking.
//!
//! The ``rayon`` feature adds batch-parallel wrappers.

#[cfg(feature = "rayon")]
pub mod rayon;
