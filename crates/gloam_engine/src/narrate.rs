//! Room description composition.
//!
//! Shared by the look handler's redisplay signal and the session loop: any
//! time the caller is told to redisplay the room, this is what it prints.

use gloam_model::{GameState, ObjectFlag};
use gloam_world::{Lighting, World};

/// Message shown instead of a room description when the room is dark.
pub const DARKNESS: &str = "It is pitch black.";

/// Composes the description of the player's current room.
///
/// Dark rooms get only the darkness message. Lit rooms get the room name,
/// the long description on a first visit (the short one afterwards), and a
/// listing of visible non-scenery objects.
#[must_use]
pub fn room_description(world: &World, state: &GameState, lighting: &dyn Lighting) -> String {
    let room_id = &state.current_room;
    if !lighting.is_room_lit(world, room_id) {
        return DARKNESS.to_string();
    }
    let Some(room) = world.room(room_id) else {
        // Current room missing from the registry is a world-build bug.
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&room.name);
    out.push('\n');
    if state.has_visited(room_id) {
        out.push_str(&room.description);
    } else {
        out.push_str(&room.long_description);
    }

    let names: Vec<String> = world
        .visible_in_room(room_id, lighting)
        .into_iter()
        .filter(|o| !o.has_flag(ObjectFlag::Scenery))
        .map(|o| o.name.clone())
        .collect();
    if !names.is_empty() {
        out.push('\n');
        out.push_str(&format!("You can see {} here.", item_list(&names)));
    }

    out
}

/// Joins object names into prose with indefinite articles:
/// "a lamp", "a lamp and a leaflet", "a lamp, a leaflet, and a key".
#[must_use]
pub fn item_list(names: &[String]) -> String {
    let with_article = |name: &String| format!("{} {name}", article_for(name));
    match names {
        [] => String::new(),
        [only] => with_article(only),
        [first, second] => format!("{} and {}", with_article(first), with_article(second)),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(with_article).collect();
            format!("{}, and {}", head.join(", "), with_article(last))
        }
    }
}

pub(crate) fn article_for(name: &str) -> &'static str {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
