//! # Parallel Decoder

use core::marker::PhantomData;

use crate::alloc::sync::Arc;
use crate::decoders::{SpacingRules, TokenDecoder};
use crate::types::TokenType;
use crate::vocab::Vocabulary;

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches; single sequences use the wrapped decoder.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        self.inner.vocab()
    }

    fn spacing(&self) -> &SpacingRules {
        self.inner.spacing()
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        use ::rayon::prelude::*;

        batch
            .par_iter()
            .map(|ids| self.inner.decode(ids))
            .collect()
    }
}
