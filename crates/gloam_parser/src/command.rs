//! The parser's output.

/// A structured command, produced fresh for each input line.
///
/// Object phrases are raw noun text ("brass lamp"), not resolved against any
/// world state; resolution happens in the dispatch layer. Empty phrases are
/// `None`, never empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Canonical verb after synonym resolution.
    pub verb: String,
    /// Raw direct-object phrase.
    pub direct_object: Option<String>,
    /// The preposition separating the object phrases, if one was found.
    pub preposition: Option<String>,
    /// Raw indirect-object phrase.
    pub indirect_object: Option<String>,
}

impl ParsedCommand {
    /// A command with just a verb.
    #[must_use]
    pub fn bare(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            direct_object: None,
            preposition: None,
            indirect_object: None,
        }
    }

    /// A command with a verb and a direct object.
    #[must_use]
    pub fn with_object(verb: impl Into<String>, direct_object: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            direct_object: Some(direct_object.into()),
            preposition: None,
            indirect_object: None,
        }
    }
}
