//! Character data loading from RON files.
//!
//! A character is plain data plus an ability variant, not a subclass:
//! the definition picks the `Ability` injected into the `Actor`.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::actor::Ability;
use crate::world::DataLoadError;

/// Ability selection in a character file.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum AbilityDef {
    None,
    Dash {
        multiplier: f32,
        cooldown: f32,
        duration: f32,
    },
}

impl AbilityDef {
    /// The behavior variant plus (cooldown, duration) for the cycle.
    pub fn to_ability(self) -> (Ability, f32, f32) {
        match self {
            AbilityDef::None => (Ability::None, 0.0, 0.0),
            AbilityDef::Dash {
                multiplier,
                cooldown,
                duration,
            } => (Ability::Dash { multiplier }, cooldown, duration),
        }
    }
}

/// Character definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct CharacterDefinition {
    pub name: String,
    pub max_health: u32,
    /// Damage dealt to enemies touched while attacking.
    pub damage: u32,
    pub move_speed: f32,
    pub ability: AbilityDef,
}

impl Default for CharacterDefinition {
    fn default() -> Self {
        Self {
            name: "Hurtadilla".to_string(),
            max_health: 3,
            damage: 1,
            move_speed: 5.0,
            ability: AbilityDef::Dash {
                multiplier: 4.0,
                cooldown: 1.0,
                duration: 0.1,
            },
        }
    }
}

/// Resource holding the selected character's definition.
#[derive(Resource, Default, Clone, Debug)]
pub struct CharacterSheet(pub CharacterDefinition);

/// Parse a character definition from RON text.
pub fn parse_character(path: &str, contents: &str) -> Result<CharacterDefinition, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::parse(path, e))
}

/// Load the character file at startup; defaults stand in if missing.
pub fn load_character_definition(mut sheet: ResMut<CharacterSheet>) {
    let path = "assets/data/characters/hurtadilla.ron";

    if !Path::new(path).exists() {
        warn!("Character file not found, using built-in defaults: {}", path);
        return;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(
                "{}",
                DataLoadError::ReadError {
                    path: path.to_string(),
                    details: err.to_string(),
                }
            );
            return;
        }
    };

    match parse_character(path, &contents) {
        Ok(definition) => {
            info!("Loaded character: {}", definition.name);
            sheet.0 = definition;
        }
        Err(err) => error!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_character_with_a_dash() {
        let def = parse_character(
            "hurtadilla.ron",
            r#"(
                name: "Hurtadilla",
                max_health: 3,
                damage: 1,
                move_speed: 5.0,
                ability: Dash(multiplier: 4.0, cooldown: 1.0, duration: 0.1),
            )"#,
        )
        .unwrap();

        assert_eq!(def.max_health, 3);
        let (ability, cooldown, duration) = def.ability.to_ability();
        assert_eq!(ability, Ability::Dash { multiplier: 4.0 });
        assert_eq!(cooldown, 1.0);
        assert_eq!(duration, 0.1);
    }

    #[test]
    fn ability_none_maps_to_an_idle_cycle() {
        let (ability, cooldown, duration) = AbilityDef::None.to_ability();
        assert_eq!(ability, Ability::None);
        assert_eq!((cooldown, duration), (0.0, 0.0));
    }
}
