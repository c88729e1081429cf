//! Vocabulary registry: verbs, prepositions, and stop words.
//!
//! The vocabulary is pure grammar data. Games extend it at runtime with
//! their own verbs; the standard set covers the common adventure grammar.

use std::collections::{HashMap, HashSet};

/// Runtime storage for the parser's grammar tables.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Canonical verb names.
    verbs: HashSet<String>,
    /// Synonym word -> canonical verb.
    verb_synonyms: HashMap<String, String>,
    /// Recognized prepositions.
    prepositions: HashSet<String>,
    /// Words dropped before grammar matching (articles).
    stop_words: HashSet<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard adventure-game vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();

        vocab.register_verb("go", &["walk", "move", "travel", "head", "run"]);
        vocab.register_verb("look", &["l", "gaze"]);
        vocab.register_verb("examine", &["x", "inspect", "describe", "read"]);
        vocab.register_verb("take", &["get", "grab", "acquire", "obtain", "pick"]);
        vocab.register_verb("drop", &["discard", "release"]);
        vocab.register_verb("put", &["place", "insert"]);
        vocab.register_verb("open", &[]);
        vocab.register_verb("close", &["shut"]);
        vocab.register_verb("inventory", &["i", "inv"]);
        vocab.register_verb("wait", &["z"]);
        vocab.register_verb("quit", &["q"]);

        for prep in [
            "with", "in", "on", "at", "to", "into", "inside", "onto", "under", "behind", "from",
        ] {
            vocab.register_preposition(prep);
        }

        for word in ["a", "an", "the"] {
            vocab.register_stop_word(word);
        }

        vocab
    }

    /// Registers a canonical verb and its synonyms.
    pub fn register_verb(&mut self, canonical: &str, synonyms: &[&str]) {
        let canonical = canonical.to_lowercase();
        for synonym in synonyms {
            self.verb_synonyms
                .insert(synonym.to_lowercase(), canonical.clone());
        }
        self.verbs.insert(canonical);
    }

    /// Resolves a word to its canonical verb, if it is one.
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<&str> {
        if let Some(canonical) = self.verbs.get(word) {
            return Some(canonical.as_str());
        }
        self.verb_synonyms.get(word).map(String::as_str)
    }

    /// Registers a preposition.
    pub fn register_preposition(&mut self, word: &str) {
        self.prepositions.insert(word.to_lowercase());
    }

    /// True if `word` is a recognized preposition.
    #[must_use]
    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    /// Registers a stop word.
    pub fn register_stop_word(&mut self, word: &str) {
        self.stop_words.insert(word.to_lowercase());
    }

    /// True if `word` is dropped before grammar matching.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
