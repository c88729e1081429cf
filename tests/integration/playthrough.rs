//! A complete playthrough of the demo game.

use gloam_model::Location;
use gloam_runtime::{Session, demo_world};

fn session() -> Session {
    let (world, state) = demo_world().expect("demo world builds");
    Session::new(world, state)
}

#[test]
fn the_golden_path() {
    let mut session = session();

    // Arrival in the field.
    let opening = session.describe_here();
    assert!(opening.contains("Open Field"));
    assert!(opening.contains("a mailbox"));

    // The mailbox puzzle.
    assert_eq!(
        session.execute_line("open mailbox"),
        "Opening the mailbox reveals a leaflet."
    );
    assert_eq!(session.execute_line("take the leaflet"), "Taken.");
    assert!(
        session.execute_line("read leaflet").contains("Go boldly"),
        "read resolves to examine and finds the carried leaflet"
    );

    // North into the house, grab the lantern.
    assert!(session.execute_line("go north").contains("living room"));
    assert_eq!(session.execute_line("take brass lantern"), "Taken.");

    // Down into the cellar, lit by the carried lantern.
    let cellar = session.execute_line("d");
    assert!(cellar.contains("Cellar"));
    assert!(cellar.contains("a coin"));
    assert_eq!(session.execute_line("take coin"), "Taken.");

    // Stow the treasure back in the mailbox.
    assert!(session.execute_line("up").contains("Inside the House"));
    assert!(session.execute_line("south").contains("Open Field"));
    assert_eq!(
        session.execute_line("put coin in mailbox"),
        "You put the coin in the mailbox."
    );

    assert_eq!(
        session.world().object(&"COIN".into()).unwrap().location,
        Location::Container("MAILBOX".into())
    );
    session.world().validate().expect("world still sound");
    assert_eq!(session.state().moves, 10);
}

#[test]
fn the_boarded_door_stays_shut() {
    let mut session = session();

    assert_eq!(
        session.execute_line("go east"),
        "The front door is boarded shut."
    );
    assert_eq!(session.state().current_room, "FIELD".into());
}

#[test]
fn the_dark_cellar_without_a_light() {
    let mut session = session();

    session.execute_line("north");
    let below = session.execute_line("down");

    assert!(below.contains("pitch black"));
    assert!(session.state().in_darkness);
    // Nothing is visible or takeable in the dark.
    assert_eq!(session.execute_line("look"), "It is pitch black.");
    assert_eq!(session.execute_line("take coin"), "You don't see that here.");

    // Climbing back out restores the light.
    assert!(session.execute_line("up").contains("house"));
    assert!(!session.state().in_darkness);
}

#[test]
fn the_leaflet_is_hidden_until_the_mailbox_opens() {
    let mut session = session();

    // In the mailbox, not the room: not visible yet.
    assert_eq!(
        session.execute_line("take leaflet"),
        "You don't see that here."
    );

    session.execute_line("open mailbox");
    assert_eq!(session.execute_line("take leaflet"), "Taken.");
}
