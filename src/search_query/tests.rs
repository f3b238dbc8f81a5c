use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{normalize_query, QueryLanguageVersion, SearchTokenizer};

fn both_grammars() -> [SearchTokenizer; 2] {
    [
        SearchTokenizer::new(QueryLanguageVersion::Legacy),
        SearchTokenizer::new(QueryLanguageVersion::Modern),
    ]
}

// --- Tokenizer ---

#[test]
fn test_common_tokenizations() {
    for tokenizer in both_grammars() {
        assert_eq!(tokenizer.tokenize("hello world"), vec!["hello", "world"]);
        assert_eq!(tokenizer.tokenize("hello  world"), vec!["hello", "world"]);
        assert_eq!(tokenizer.tokenize("one -two"), vec!["one", "-", "two"]);
        assert_eq!(tokenizer.tokenize("one --two"), vec!["one", "-", "two"]);
        assert_eq!(tokenizer.tokenize("one - two"), vec!["one", "-", "two"]);
        assert_eq!(tokenizer.tokenize("one or -two"), vec!["one", "or", "-", "two"]);
        assert_eq!(tokenizer.tokenize("\"hello world\""), vec!["hello world"]);
        assert_eq!(
            tokenizer.tokenize("one (two or ( three or four))"),
            vec!["one", "(", "two", "or", "(", "three", "or", "four", ")", ")"]
        );
        assert_eq!(tokenizer.tokenize("embedded'string"), vec!["embedded'string"]);
    }
}

#[test]
fn test_legacy_single_quotes() {
    let tokenizer = SearchTokenizer::new(QueryLanguageVersion::Legacy);
    assert_eq!(tokenizer.tokenize("'hello \"world\"'"), vec!["hello \"world\""]);
    assert_eq!(tokenizer.tokenize("deck:'two words'"), vec!["deck:two words"]);
}

#[test]
fn test_modern_apostrophe_never_quotes() {
    let tokenizer = SearchTokenizer::new(QueryLanguageVersion::Modern);
    assert_eq!(tokenizer.tokenize("'one two'"), vec!["'one", "two'"]);
    assert_eq!(tokenizer.tokenize("front:'a b'"), vec!["front:'a", "b'"]);
}

// --- Filter ---

#[test]
fn test_filter_examples() {
    for tokenizer in both_grammars() {
        assert_eq!(tokenizer.searchable_tokens(&["deck:foo", "bar"]), vec!["bar"]);
        assert_eq!(tokenizer.searchable_tokens(&["tag:*", "baz"]), vec!["baz"]);
        assert_eq!(tokenizer.searchable_tokens(&["or", "x", "and", "y"]), vec!["x", "y"]);
        assert_eq!(tokenizer.searchable_tokens(&["-excluded", "kept"]), vec!["kept"]);
    }
}

#[test]
fn test_field_qualifiers_dropped() {
    let tokenizer = SearchTokenizer::default();
    let tokens = [
        "added:1", "deck:a", "note:b", "tag:c", "mid:1", "nid:2", "cid:3", "card:1", "is:due",
        "flag:1", "rated:1", "dupe:1", "prop:ivl>1", "seen:1", "rid:1", "word",
    ];
    assert_eq!(tokenizer.searchable_tokens(&tokens), vec!["word"]);
}

#[test]
fn test_legacy_drops_regex_and_nocase_fields() {
    let legacy = SearchTokenizer::new(QueryLanguageVersion::Legacy);
    let modern = SearchTokenizer::new(QueryLanguageVersion::Modern);
    let tokens = ["re:ab+c", "nc:uber", "word"];

    assert_eq!(legacy.searchable_tokens(&tokens), vec!["word"]);
    assert_eq!(modern.searchable_tokens(&tokens), vec!["ab+c", "uber", "word"]);
}

#[test]
fn test_plain_tokens_pass_through_stripped() {
    let tokenizer = SearchTokenizer::default();
    let tokens = tokenizer.tokenize("dog* ,cat; \"big mouse\"");
    assert_eq!(tokens, vec!["dog*", ",cat;", "big mouse"]);
    assert_eq!(tokenizer.searchable_tokens(&tokens), vec!["dog", "cat", "big mouse"]);
}

// --- End to end ---

#[test]
fn test_searchable_terms() {
    let tokenizer = SearchTokenizer::default();
    assert_eq!(
        tokenizer.searchable_terms("deck:Spanish perro -gato front:casa* or tag:*"),
        vec!["perro", "gato", "casa"]
    );
    assert_eq!(
        tokenizer.searchable_terms("\"front:dos palabras\" is:new"),
        vec!["dos palabras"]
    );
    assert!(tokenizer.searchable_terms("deck:* and is:due").is_empty());
}

#[test]
fn test_negated_term_survives_as_separate_token() {
    // the marker is dropped, the following term is not
    let tokenizer = SearchTokenizer::default();
    assert_eq!(tokenizer.searchable_terms("one -two"), vec!["one", "two"]);
}

#[test]
fn test_malformed_input_does_not_fail() {
    let tokenizer = SearchTokenizer::default();
    for query in ["\"", "((", "))", "-", "\"a", "deck:\"", ":", "a:\"b", "\u{3000}-\u{3000}"] {
        let tokens = tokenizer.tokenize(query);
        let _ = tokenizer.searchable_tokens(&tokens);
    }
    assert_eq!(tokenizer.searchable_terms(":"), Vec::<String>::new());
}

#[test]
fn test_normalize_query_composes() {
    let decomposed = "cafe\u{301}";
    assert_eq!(normalize_query(decomposed), "caf\u{e9}");
    assert_eq!(normalize_query("plain"), "plain");
}

proptest! {
    #[test]
    fn test_retokenizing_joined_tokens_is_stable(query in "[a-z]{1,6}( {1,3}-{0,2}[a-z]{1,6}){0,6}") {
        for tokenizer in both_grammars() {
            let tokens = tokenizer.tokenize(&query);
            let joined = tokens.join(" ");
            prop_assert_eq!(tokenizer.tokenize(&joined), tokens);
        }
    }

    #[test]
    fn test_plain_words_are_all_searchable(words in proptest::collection::vec("[a-z]{1,8}", 1..8)) {
        let tokenizer = SearchTokenizer::default();
        let words: Vec<String> = words
            .into_iter()
            .filter(|w| w != "or" && w != "and")
            .collect();
        let query = words.join(" ");
        prop_assert_eq!(tokenizer.searchable_terms(&query), words);
    }

    #[test]
    fn test_tokenizer_never_panics(query in "\\PC{0,40}") {
        for tokenizer in both_grammars() {
            let tokens = tokenizer.tokenize(&query);
            let _ = tokenizer.searchable_tokens(&tokens);
        }
    }
}
