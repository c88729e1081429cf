//! Vocabulary tests.
//!
//! Tests for verb canonicalization and word classes.

use gloam_parser::Vocabulary;

#[test]
fn standard_verbs_resolve_to_themselves() {
    let vocab = Vocabulary::standard();

    for verb in ["take", "drop", "open", "close", "look", "examine", "go"] {
        assert_eq!(vocab.lookup_verb(verb), Some(verb), "verb {verb:?}");
    }
}

#[test]
fn synonyms_resolve_to_the_canonical_verb() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.lookup_verb("get"), Some("take"));
    assert_eq!(vocab.lookup_verb("grab"), Some("take"));
    assert_eq!(vocab.lookup_verb("x"), Some("examine"));
    assert_eq!(vocab.lookup_verb("i"), Some("inventory"));
    assert_eq!(vocab.lookup_verb("walk"), Some("go"));
    assert_eq!(vocab.lookup_verb("shut"), Some("close"));
}

#[test]
fn unknown_words_do_not_resolve() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.lookup_verb("xyzzy"), None);
    assert_eq!(vocab.lookup_verb(""), None);
}

#[test]
fn word_classes_are_disjoint() {
    let vocab = Vocabulary::standard();

    assert!(vocab.is_preposition("in"));
    assert!(vocab.is_preposition("into"));
    assert!(!vocab.is_preposition("lamp"));

    assert!(vocab.is_stop_word("the"));
    assert!(vocab.is_stop_word("a"));
    assert!(!vocab.is_stop_word("lamp"));
}

#[test]
fn games_can_register_their_own_verbs() {
    let mut vocab = Vocabulary::standard();
    vocab.register_verb("cast", &["invoke"]);

    assert_eq!(vocab.lookup_verb("cast"), Some("cast"));
    assert_eq!(vocab.lookup_verb("invoke"), Some("cast"));
}
