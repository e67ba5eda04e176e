//! Item-related components.

use bevy::prelude::*;
use serde::Deserialize;

/// What picking an item up does. Also the shape used in level files.
#[derive(Deserialize, Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores health to the player.
    Heart { heal: u32 },
    /// Awards points.
    Coin { value: u32 },
}

/// A collectible placed in the world.
///
/// Collection latches: the first touch claims the effect, and later
/// overlap events for the same entity get nothing, so an item can
/// never apply twice even if it survives a frame past pickup.
#[derive(Component)]
pub struct Item {
    kind: ItemKind,
    collected: bool,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            collected: false,
        }
    }

    /// Claim the item. Returns its effect the first time, `None` after.
    pub fn collect(&mut self) -> Option<ItemKind> {
        if self.collected {
            return None;
        }
        self.collected = true;
        Some(self.kind)
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_latches_after_first_claim() {
        let mut item = Item::new(ItemKind::Coin { value: 10 });
        assert!(!item.is_collected());

        assert_eq!(item.collect(), Some(ItemKind::Coin { value: 10 }));
        assert!(item.is_collected());
        assert_eq!(item.collect(), None);
    }
}
