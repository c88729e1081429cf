//! The interactive game loop.

use std::io::{self, Write};

use gloam_model::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Meta-commands handled by the loop itself rather than the game.
/// "exit" is deliberately absent: it is a direction word.
const QUIT_WORDS: &[&str] = &["quit", "q"];

/// Reads player input, runs it through the session, and prints the result.
pub struct GameRepl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl GameRepl<RustylineEditor> {
    /// Creates a game loop with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> GameRepl<E> {
    /// Creates a game loop with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the loop until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        println!("{}\n", self.session.describe_here());

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        println!("Please type a command.\n");
                        continue;
                    }
                    self.editor.add_history(trimmed);

                    if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
                        break;
                    }

                    println!("{}\n", self.session.execute_line(trimmed));
                }
                ReadResult::Interrupted => {
                    println!("(Type \"quit\" to leave the game.)");
                }
                ReadResult::Eof => break,
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("gloam v{}", env!("CARGO_PKG_VERSION"));
        println!("Type commands like \"look\", \"take lamp\", or \"go north\".");
        println!("Use \"quit\" or Ctrl+D to leave.\n");

        let _ = io::stdout().flush();
    }
}
