#![allow(missing_docs)]

use std::sync::Arc;

use basictok::{Tokenizer, VocabBuilder, Vocabulary};
use divan::{Bencher, black_box};

const CORPUS: &str = "IdeaWeaver-- a comprehensive CLI tool for AI model training and evaluation? \
     It's a beautiful day, and I'll be taking my 3 dogs for a walk. \
     Don't forget: the temperature is 72 degrees!";

fn main() {
    divan::main();
}

fn build_tokenizer() -> Tokenizer<u32> {
    let vocab: Arc<Vocabulary<u32>> = VocabBuilder::new()
        .with_corpus(CORPUS)
        .build::<u32>()
        .unwrap()
        .into();
    Tokenizer::from_vocab(vocab)
}

#[divan::bench]
fn bench_encode(bencher: Bencher) {
    let tokenizer = build_tokenizer();
    let text = CORPUS.repeat(16);

    bencher.bench_local(|| tokenizer.encode(black_box(&text)));
}

#[divan::bench]
fn bench_decode(bencher: Bencher) {
    let tokenizer = build_tokenizer();
    let ids = tokenizer.encode(&CORPUS.repeat(16));

    bencher.bench_local(|| tokenizer.decode(black_box(&ids)));
}
