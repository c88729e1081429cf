//! Full parse grammar tests.

use gloam_parser::{CommandParser, ParseError, ParsedCommand};

fn parse(input: &str) -> Result<ParsedCommand, ParseError> {
    CommandParser::default().parse(input)
}

#[test]
fn verb_object_with_noise() {
    let cmd = parse("Take the Brass Lantern!").unwrap();
    assert_eq!(cmd.verb, "take");
    assert_eq!(cmd.direct_object.as_deref(), Some("brass lantern"));
}

#[test]
fn two_object_commands_split_at_the_preposition() {
    let cmd = parse("put the leaflet into the mailbox").unwrap();

    assert_eq!(cmd.verb, "put");
    assert_eq!(cmd.direct_object.as_deref(), Some("leaflet"));
    assert_eq!(cmd.preposition.as_deref(), Some("into"));
    assert_eq!(cmd.indirect_object.as_deref(), Some("mailbox"));
}

#[test]
fn unknown_first_word_reports_the_word() {
    let err = parse("frobnicate lamp").unwrap_err();
    assert_eq!(
        err.to_string(),
        "I don't understand the word \"frobnicate\"."
    );
}

#[test]
fn blank_input_asks_for_a_command() {
    assert_eq!(parse("").unwrap_err().to_string(), "Please type a command.");
    assert_eq!(parse("the").unwrap_err(), ParseError::Empty);
}

#[test]
fn direction_shorthand() {
    assert_eq!(parse("ne").unwrap(), ParsedCommand::with_object("go", "northeast"));
    assert_eq!(parse("down").unwrap(), ParsedCommand::with_object("go", "down"));
    // With an explicit verb, the direction is an ordinary object phrase.
    assert_eq!(parse("run south").unwrap(), ParsedCommand::with_object("go", "south"));
}

#[test]
fn look_at_becomes_examine() {
    assert_eq!(
        parse("look at the mailbox").unwrap(),
        ParsedCommand::with_object("examine", "mailbox")
    );
    assert_eq!(parse("look").unwrap(), ParsedCommand::bare("look"));
}

#[test]
fn pick_up_is_take() {
    assert_eq!(
        parse("pick up the leaflet").unwrap(),
        ParsedCommand::with_object("take", "leaflet")
    );
}

#[test]
fn go_in_carries_the_direction_as_preposition() {
    let cmd = parse("go in").unwrap();
    assert_eq!(cmd.verb, "go");
    assert_eq!(cmd.direct_object, None);
    assert_eq!(cmd.preposition.as_deref(), Some("in"));
}

#[test]
fn parse_failures_carry_no_command() {
    // A grammar error on the first word wins over anything after it.
    let err = parse("zork take the lamp").unwrap_err();
    assert_eq!(err, ParseError::UnknownWord("zork".to_string()));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Articles never survive into object phrases.
        #[test]
        fn stop_words_are_always_dropped(noun in "[bcdfgjkmprstvw]{2,8}") {
            let cmd = parse(&format!("take the {noun}")).unwrap();
            prop_assert_eq!(cmd.direct_object.as_deref(), Some(noun.as_str()));
        }
    }
}
