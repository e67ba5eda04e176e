//! The `Actor` component: the shared timer/flag state every entity
//! (player and enemies) carries, advanced once per simulation tick by
//! the combat systems.

use bevy::prelude::*;

use super::ability::{Ability, AbilityCycle};
use super::timed_flag::TimedFlag;
use super::vitals::Vitals;

/// Seconds of invincibility granted by taking a hit.
pub const HIT_INVINCIBILITY: f32 = 1.0;
/// Length of the attack-active window, and of the i-frames an attack
/// grants.
pub const ATTACK_WINDOW: f32 = 0.5;
/// Length of the hit-flash feedback window.
pub const HIT_FLASH: f32 = 0.5;

/// Windows that expired during an [`Actor::advance`] call. Feedback
/// and animation systems react to these edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvanceEdges {
    pub invincibility_ended: bool,
    pub attack_ended: bool,
    pub hit_flash_ended: bool,
    pub ability_ended: bool,
}

/// Health, timed windows, and the ability cycle for one entity.
///
/// Each entity owns its `Actor` exclusively; the only cross-entity
/// call is [`Actor::apply_damage`], which is synchronous and checks
/// invincibility/death before mutating.
#[derive(Component)]
pub struct Actor {
    vitals: Vitals,
    invincibility: TimedFlag,
    attack: TimedFlag,
    hit_flash: TimedFlag,
    ability: Ability,
    cycle: AbilityCycle,
    motion_override: Option<Vec2>,
}

impl Actor {
    /// An actor with no special move.
    pub fn new(max_health: u32) -> Self {
        Self::with_ability(max_health, Ability::None, 0.0, 0.0)
    }

    /// An actor with an ability cycle (cooldown/duration in seconds).
    pub fn with_ability(max_health: u32, ability: Ability, cooldown: f32, duration: f32) -> Self {
        Self {
            vitals: Vitals::new(max_health),
            invincibility: TimedFlag::new(HIT_INVINCIBILITY),
            attack: TimedFlag::new(ATTACK_WINDOW),
            hit_flash: TimedFlag::new(HIT_FLASH),
            ability,
            cycle: AbilityCycle::new(cooldown, duration),
            motion_override: None,
        }
    }

    /// Advance all timers by one simulation step.
    ///
    /// Order is fixed: invincibility, attack window, hit flash, then
    /// the ability cooldown/duration pair. The flags tick even after
    /// death (hit flash and i-frames play out on a corpse); the
    /// ability cycle freezes once dead.
    pub fn advance(&mut self, dt: f32) -> AdvanceEdges {
        let mut edges = AdvanceEdges {
            invincibility_ended: self.invincibility.tick(dt),
            attack_ended: self.attack.tick(dt),
            hit_flash_ended: self.hit_flash.tick(dt),
            ..default()
        };

        if !self.vitals.is_dead() && self.cycle.tick(dt) {
            // Ability end hook: drop the movement override.
            self.motion_override = None;
            edges.ability_ended = true;
        }

        edges
    }

    /// Take a hit. No-op while invincible or dead; otherwise damages
    /// vitals and opens the invincibility and hit-flash windows.
    /// Returns whether the hit landed.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if self.invincibility.is_active() || self.vitals.is_dead() {
            return false;
        }

        self.vitals.damage(amount);
        self.invincibility.trigger();
        self.hit_flash.trigger();
        true
    }

    /// See [`Vitals::heal`]; post-death healing refills the number
    /// but never clears `dead`.
    pub fn heal(&mut self, amount: u32) {
        self.vitals.heal(amount);
    }

    /// Open the attack window, with matching i-frames. No-op while an
    /// attack is already in flight or after death.
    pub fn attack(&mut self) -> bool {
        if self.attack.is_active() || self.vitals.is_dead() {
            return false;
        }

        self.attack.trigger();
        self.invincibility.trigger_for(ATTACK_WINDOW);
        true
    }

    /// Try to start the special move. On success the ability's
    /// activation hook runs and may install a movement override for
    /// the active window.
    pub fn activate_ability(&mut self, facing: Vec2, base_speed: f32) -> bool {
        if self.vitals.is_dead() || !self.cycle.try_activate() {
            return false;
        }

        self.motion_override = self.ability.on_activate(facing, base_speed);
        true
    }

    // Read accessors consumed by HUD, feedback, and collision systems.

    pub fn health(&self) -> u32 {
        self.vitals.health()
    }

    pub fn max_health(&self) -> u32 {
        self.vitals.max_health()
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_active()
    }

    pub fn is_hit_flashing(&self) -> bool {
        self.hit_flash.is_active()
    }

    pub fn ability_active(&self) -> bool {
        self.cycle.is_active()
    }

    pub fn can_activate(&self) -> bool {
        self.cycle.can_activate()
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cycle.cooldown_remaining()
    }

    pub fn cooldown(&self) -> f32 {
        self.cycle.cooldown()
    }

    /// Velocity to use instead of input while the ability is active.
    pub fn motion_override(&self) -> Option<Vec2> {
        self.motion_override
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_while_invincible_is_ignored() {
        let mut actor = Actor::new(3);
        assert!(actor.apply_damage(1));
        assert_eq!(actor.health(), 2);

        // Second hit inside the window leaves health unchanged.
        assert!(!actor.apply_damage(1));
        assert_eq!(actor.health(), 2);
    }

    #[test]
    fn hit_then_die_end_to_end() {
        let mut actor = Actor::new(3);

        actor.apply_damage(1);
        assert_eq!(actor.health(), 2);
        assert!(actor.is_invincible());

        // Invincibility window is HIT_INVINCIBILITY = 1.0s.
        actor.advance(0.8);
        assert!(actor.is_invincible());
        let edges = actor.advance(0.3);
        assert!(edges.invincibility_ended);
        assert!(!actor.is_invincible());

        actor.apply_damage(2);
        assert_eq!(actor.health(), 0);
        assert!(actor.is_dead());

        // Death is terminal: hits stop landing, and healing refills
        // the number without resurrecting.
        actor.advance(2.0);
        assert!(!actor.apply_damage(1));
        actor.heal(5);
        assert_eq!(actor.health(), 3);
        assert!(actor.is_dead());
    }

    #[test]
    fn ability_end_to_end() {
        let mut actor = Actor::with_ability(3, Ability::Dash { multiplier: 4.0 }, 1.0, 0.1);

        assert!(actor.activate_ability(Vec2::X, 5.0));
        assert!(actor.ability_active());
        assert!(!actor.can_activate());
        assert_eq!(actor.motion_override(), Some(Vec2::new(20.0, 0.0)));

        let edges = actor.advance(0.1);
        assert!(edges.ability_ended);
        assert!(!actor.ability_active());
        assert_eq!(actor.motion_override(), None);

        // The end edge fires only once; cooldown finishes 0.9s later.
        let edges = actor.advance(0.5);
        assert!(!edges.ability_ended);
        assert!(!actor.can_activate());
        actor.advance(0.4);
        assert!(actor.can_activate());
    }

    #[test]
    fn attack_opens_window_and_iframes() {
        let mut actor = Actor::new(3);
        assert!(actor.attack());
        assert!(actor.is_attacking());
        assert!(actor.is_invincible());

        // Re-attacking mid-window is a no-op.
        assert!(!actor.attack());

        let edges = actor.advance(0.5);
        assert!(edges.attack_ended);
        assert!(edges.invincibility_ended);
        assert!(!actor.is_attacking());
    }

    #[test]
    fn dead_actor_ignores_ability_input() {
        let mut actor = Actor::with_ability(1, Ability::Dash { multiplier: 4.0 }, 1.0, 0.1);
        actor.apply_damage(1);
        assert!(actor.is_dead());
        assert!(!actor.activate_ability(Vec2::X, 5.0));
    }

    #[test]
    fn hit_flash_tracks_its_own_window() {
        let mut actor = Actor::new(3);
        actor.apply_damage(1);
        assert!(actor.is_hit_flashing());

        // Flash (0.5s) ends while invincibility (1.0s) is still up.
        let edges = actor.advance(0.6);
        assert!(edges.hit_flash_ended);
        assert!(!actor.is_hit_flashing());
        assert!(actor.is_invincible());
    }
}
