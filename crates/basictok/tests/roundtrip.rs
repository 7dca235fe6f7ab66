use std::sync::Arc;

use basictok::{
    SpecialTokens,
    Tokenizer,
    TokenizerOptions,
    VocabBuilder,
    Vocabulary,
    decode,
    encode,
    vocab::{TokenIdMap, UNKNOWN_MARKER},
};

const CORPUS: &str = "IdeaWeaver-- a comprehensive CLI tool for AI model training and evaluation?";

const SAMPLES: &[&str] = &[
    "Hello, how are you?",
    "It's a beautiful day; isn't it?",
    "\"Quoted\" (parenthetical) text: done!",
    "snake_case and dash--separated",
    "a lone - hyphen stays put",
];

fn build_vocab<T: basictok::TokenType>(corpora: &[&str]) -> Arc<Vocabulary<T>> {
    let mut builder = VocabBuilder::new();
    for corpus in corpora {
        builder.add_corpus(corpus);
    }
    Arc::new(builder.build().unwrap())
}

#[test]
fn hello_roundtrip_with_known_tokens() {
    let vocab: Arc<Vocabulary<u32>> = build_vocab(&["Hello, how are you?"]);

    let ids = encode("Hello, how are you?", &vocab);
    assert_eq!(ids.len(), 6);
    assert!(!ids.contains(&vocab.unknown_id().unwrap()));

    // Round trip holds here only because every token is in the vocabulary.
    assert_eq!(decode(&ids, &vocab), "Hello, how are you?");
}

#[test]
fn corpus_roundtrip() {
    let tokenizer = Tokenizer::from_vocab(build_vocab::<u16>(&[CORPUS]));
    let ids = tokenizer.encode(CORPUS);
    assert_eq!(tokenizer.decode(&ids), CORPUS);
}

#[test]
fn sample_roundtrips_when_vocabulary_covers_them() {
    let vocab = build_vocab::<u32>(SAMPLES);
    let tokenizer = TokenizerOptions::default().build(vocab);

    let expected = [
        "Hello, how are you?",
        // Spacing is a heuristic; contractions and openers do not survive.
        "It' s a beautiful day; isn' t it?",
        "\" Quoted\"( parenthetical) text: done!",
        "snake_ case and dash-- separated",
        "a lone- hyphen stays put",
    ];
    for (sample, expected) in SAMPLES.iter().zip(expected) {
        let ids = tokenizer.encode(sample);
        assert!(ids.iter().all(|&id| Some(id) != tokenizer.vocab().unknown_id()));
        assert_eq!(tokenizer.decode(&ids), expected, "{sample:?}");
    }
}

#[test]
fn unknown_tokens_break_roundtrip() {
    let vocab = build_vocab::<u32>(&[CORPUS]);
    let unknown = vocab.unknown_id().unwrap();

    let ids = encode("a brand new tool?", &vocab);
    assert_eq!(
        ids,
        vec![
            vocab.token_id("a").unwrap(),
            unknown,
            unknown,
            vocab.token_id("tool").unwrap(),
            vocab.token_id("?").unwrap(),
        ]
    );
    assert_eq!(decode(&ids, &vocab), "a <|unk|> <|unk|> tool?");
}

#[test]
fn missing_unknown_marker_drops_tokens() {
    let vocab: Arc<Vocabulary<u32>> = Arc::new(
        VocabBuilder::new()
            .with_specials(SpecialTokens::none())
            .with_corpus(CORPUS)
            .build()
            .unwrap(),
    );
    assert_eq!(vocab.unknown_id(), None);

    let tokenizer = Tokenizer::from_vocab(vocab);
    let tokens = tokenizer.segment("a brand new tool?");
    let ids = tokenizer.encode("a brand new tool?");
    assert_eq!(tokens.len(), 5);
    assert_eq!(ids.len(), 3);
    assert_eq!(tokenizer.decode(&ids), "a tool?");
}

#[test]
fn unmapped_identifiers_are_skipped() {
    let forward: TokenIdMap<u32> = [("zero", 0), ("one", 1), (UNKNOWN_MARKER, 2)]
        .into_iter()
        .map(|(t, id)| (t.to_string(), id))
        .collect();
    let vocab = Arc::new(Vocabulary::from_token_map(forward).unwrap());

    assert_eq!(decode(&[0, 9999], &vocab), "zero");
    assert_eq!(decode(&[9999], &vocab), "");
    assert_eq!(decode(&[1, 3, 0], &vocab), "one zero");
}

#[test]
fn shared_vocabulary_across_threads() {
    let vocab = build_vocab::<u32>(SAMPLES);
    let tokenizer = Arc::new(Tokenizer::from_vocab(vocab));

    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|&sample| {
            let tokenizer = tokenizer.clone();
            std::thread::spawn(move || tokenizer.decode(&tokenizer.encode(sample)))
        })
        .collect();

    let decoded: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(decoded, tokenizer.decode_batch(&tokenizer.encode_batch(SAMPLES)));
}
