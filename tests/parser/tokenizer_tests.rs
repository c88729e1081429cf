//! Tokenizer tests.
//!
//! Tests for converting raw input to lowercase word streams.

use gloam_parser::tokenizer::Tokenizer;

#[test]
fn tokenize_simple_command() {
    assert_eq!(Tokenizer::tokenize("take sword"), vec!["take", "sword"]);
}

#[test]
fn tokenize_lowers_case() {
    assert_eq!(Tokenizer::tokenize("TAKE Sword"), vec!["take", "sword"]);
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(
        Tokenizer::tokenize("take, the sword!"),
        vec!["take", "the", "sword"]
    );
    assert_eq!(Tokenizer::tokenize("look."), vec!["look"]);
}

#[test]
fn tokenize_collapses_whitespace() {
    assert_eq!(
        Tokenizer::tokenize("  take    sword \t"),
        vec!["take", "sword"]
    );
}

#[test]
fn tokenize_empty_input() {
    assert!(Tokenizer::tokenize("").is_empty());
    assert!(Tokenizer::tokenize("   ").is_empty());
    assert!(Tokenizer::tokenize("?!.").is_empty());
}
