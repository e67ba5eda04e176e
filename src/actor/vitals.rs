//! Health and death bookkeeping for any actor.

/// Health value with clamping and a terminal death transition.
///
/// Health always stays in `[0, max_health]`. Reaching 0 sets `dead`,
/// and nothing in this type resets it; a respawn is a fresh `Vitals`.
#[derive(Debug, Clone)]
pub struct Vitals {
    health: u32,
    max_health: u32,
    dead: bool,
}

impl Vitals {
    /// Create a living actor at full health. `max_health` must be > 0.
    pub fn new(max_health: u32) -> Self {
        debug_assert!(max_health > 0);
        Self {
            health: max_health,
            max_health,
            dead: false,
        }
    }

    /// Reduce health, floored at 0. Crossing 0 marks the actor dead.
    ///
    /// Invincibility and already-dead gating happen in the owning
    /// [`Actor`](super::Actor); by the time this runs the hit counts.
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.dead = true;
        }
    }

    /// Restore health, capped at `max_health`.
    ///
    /// Not gated on `dead`: healing a dead actor refills the number
    /// but `dead` stays set. Only a fresh `Vitals` brings an actor
    /// back.
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero_and_kills() {
        let mut vitals = Vitals::new(3);
        vitals.damage(2);
        assert_eq!(vitals.health(), 1);
        assert!(!vitals.is_dead());

        vitals.damage(5);
        assert_eq!(vitals.health(), 0);
        assert!(vitals.is_dead());
    }

    #[test]
    fn death_is_terminal() {
        let mut vitals = Vitals::new(1);
        vitals.damage(1);
        assert!(vitals.is_dead());

        // Healing refills the value but never resurrects.
        vitals.heal(1);
        assert_eq!(vitals.health(), 1);
        assert!(vitals.is_dead());
    }

    #[test]
    fn heal_clamps_at_max() {
        let mut vitals = Vitals::new(3);
        vitals.damage(2);
        vitals.heal(1000);
        assert_eq!(vitals.health(), 3);
    }

    #[test]
    fn exact_kill_sets_dead() {
        let mut vitals = Vitals::new(2);
        vitals.damage(2);
        assert_eq!(vitals.health(), 0);
        assert!(vitals.is_dead());
    }
}
