//! Integration tests for the gloam_parser crate.
//!
//! Tests for the natural language pipeline:
//! - Tokenization
//! - Vocabulary lookup
//! - Full parse grammar

mod grammar;
mod tokenizer_tests;
mod vocabulary_tests;
