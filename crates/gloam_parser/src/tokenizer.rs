//! Input tokenization.
//!
//! Converts raw player input into lowercase word tokens.

/// Tokenizes player input.
pub struct Tokenizer;

impl Tokenizer {
    /// Splits a raw input line into lowercase words.
    ///
    /// - Splits on whitespace
    /// - Converts words to lowercase
    /// - Strips punctuation
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in input.chars() {
            match ch {
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' => {}
                c => current.extend(c.to_lowercase()),
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}
