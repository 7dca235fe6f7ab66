//! # Parallel Encoder

use core::marker::PhantomData;

use crate::alloc::sync::Arc;
use crate::encoders::TokenEncoder;
use crate::segmentation::TextSegmentor;
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; single texts use the wrapped encoder.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Wrapped encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        self.inner.vocab()
    }

    fn segmentor(&self) -> &TextSegmentor {
        self.inner.segmentor()
    }

    fn encode_token_append(
        &self,
        token: &str,
        ids: &mut Vec<T>,
    ) {
        self.inner.encode_token_append(token, ids)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        use ::rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode(text))
            .collect()
    }
}
