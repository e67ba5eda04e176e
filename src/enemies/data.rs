//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::EnemyStats;
use crate::world::DataLoadError;

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: u32,
    pub damage: u32,
    pub move_speed: f32,
    pub patrol_range: f32,
    pub detection_range: f32,
    /// Sprite tint.
    pub color: (f32, f32, f32),
    /// Sprite and collider footprint in world units.
    pub size: f32,
}

impl EnemyDefinition {
    /// Convert to the EnemyStats component. Max health is consumed
    /// separately, by the `Actor` built at spawn.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            damage: self.damage,
            move_speed: self.move_speed,
            patrol_range: self.patrol_range,
            detection_range: self.detection_range,
        }
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }
}

/// Parse one enemy definition from RON text.
pub fn parse_enemy(path: &str, contents: &str) -> Result<EnemyDefinition, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::parse(path, e))
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new("assets/data/enemies");

    if !enemies_dir.exists() {
        warn!("Enemy definitions directory not found: {:?}", enemies_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Failed to read enemy definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match fs::read_to_string(&path) {
                Ok(contents) => match parse_enemy(&path.to_string_lossy(), &contents) {
                    Ok(definition) => {
                        info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                        registry.definitions.insert(enemy_type, definition);
                    }
                    Err(err) => error!("{}", err),
                },
                Err(err) => error!(
                    "{}",
                    DataLoadError::ReadError {
                        path: path.to_string_lossy().to_string(),
                        details: err.to_string(),
                    }
                ),
            }
        }
    }
}
