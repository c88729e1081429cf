//! Object naming and capacity tests.

use gloam_model::{GameObject, Location, ObjectFlag};

fn lantern() -> GameObject {
    GameObject::new("LAMP", "lantern", "A brass lantern.")
        .with_synonym("lamp")
        .with_adjective("brass")
        .with_flag(ObjectFlag::Takeable)
        .with_size(5)
}

#[test]
fn new_objects_start_visible_and_nowhere() {
    let object = GameObject::new("ROCK", "rock", "A rock.");

    assert!(object.has_flag(ObjectFlag::Visible));
    assert_eq!(object.location, Location::Nowhere);
    assert_eq!(object.size, 1);
}

#[test]
fn matches_name_accepts_synonyms_and_adjective_pairs() {
    let lantern = lantern();

    assert!(lantern.matches_name("lantern"));
    assert!(lantern.matches_name("lamp"));
    assert!(lantern.matches_name("brass lantern"));
    assert!(lantern.matches_name("brass lamp"));
    assert!(lantern.matches_name("  LAMP  "));

    assert!(!lantern.matches_name("sword"));
    assert!(!lantern.matches_name("brass"));
    assert!(!lantern.matches_name("rusty lantern"));
}

#[test]
fn capacity_gate_counts_current_load() {
    let chest = GameObject::new("CHEST", "chest", "A chest.")
        .with_flag(ObjectFlag::Container)
        .with_flag(ObjectFlag::Open)
        .with_capacity(10);

    assert!(chest.can_accept(10, 0)); // exactly full
    assert!(!chest.can_accept(11, 0));
    assert!(chest.can_accept(4, 6));
    assert!(!chest.can_accept(5, 6));
}

#[test]
fn closed_containers_accept_nothing() {
    let chest = GameObject::new("CHEST", "chest", "A chest.")
        .with_flag(ObjectFlag::Container)
        .with_capacity(10);

    assert!(!chest.can_accept(1, 0));
}

#[test]
fn non_containers_accept_nothing() {
    let rock = GameObject::new("ROCK", "rock", "A rock.").with_flag(ObjectFlag::Open);

    assert!(!rock.can_accept(1, 0));
}
