//! Builtin hero roster and roster loading.

use hero_types::{Hero, HeroError, Result, normalize_name};
use std::collections::HashSet;

/// The heroes the mock backend starts with.
pub fn mock_heroes() -> Vec<Hero> {
    [
        (11, "Mr. Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero::new(id, name))
    .collect()
}

/// Load a roster from a JSON array of `{"id", "name"}` objects.
pub fn load_heroes_from_json(json: &str) -> Result<Vec<Hero>> {
    let heroes: Vec<Hero> = serde_json::from_str(json)?;
    check_roster(heroes)
}

/// Trim every name and reject blank names or duplicate ids, so the
/// collection invariants hold from the start.
pub fn check_roster(heroes: Vec<Hero>) -> Result<Vec<Hero>> {
    let mut seen = HashSet::new();
    heroes
        .into_iter()
        .map(|hero| {
            if !seen.insert(hero.id) {
                return Err(HeroError::DuplicateId(hero.id));
            }
            let name = normalize_name(&hero.name)?;
            Ok(Hero { id: hero.id, name })
        })
        .collect()
}
