//! The ready/active/cooling cycle behind a character's special move.

use bevy::prelude::*;

/// Character-specific ability behavior, injected at construction.
///
/// Variants replace the subclass-per-character design: a character is
/// an [`Actor`](super::Actor) plus one of these, not a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ability {
    /// No special move (enemies, plain characters).
    None,
    /// Instantaneous directional dash held for the active window.
    Dash { multiplier: f32 },
}

impl Ability {
    /// Activation hook: compute the movement override for the active
    /// window, if this ability has one.
    ///
    /// `facing` is the last nonzero movement input; `base_speed` the
    /// character's normal speed in units per second.
    pub fn on_activate(&self, facing: Vec2, base_speed: f32) -> Option<Vec2> {
        match *self {
            Ability::None => None,
            Ability::Dash { multiplier } => Some(facing * multiplier * base_speed),
        }
    }
}

/// Two concurrent timers and a three-state lifecycle:
/// Ready -> Active -> Cooling -> Ready.
///
/// Both timers start at activation. The cooldown runs independently of
/// the active window, so with `duration > cooldown` the cycle can
/// report `can_activate` while still active; re-activation is still
/// blocked by `active`, so this is an allowed parameterization rather
/// than a bug (observable gameplay behavior, kept as-is).
#[derive(Debug, Clone)]
pub struct AbilityCycle {
    cooldown: f32,
    duration: f32,
    cooldown_remaining: f32,
    active_remaining: f32,
    can_activate: bool,
    active: bool,
}

impl AbilityCycle {
    pub fn new(cooldown: f32, duration: f32) -> Self {
        Self {
            cooldown,
            duration,
            cooldown_remaining: 0.0,
            active_remaining: 0.0,
            can_activate: true,
            active: false,
        }
    }

    /// Attempt the Ready -> Active transition. Anything other than the
    /// Ready state makes this a silent no-op.
    pub fn try_activate(&mut self) -> bool {
        if !self.can_activate || self.active {
            return false;
        }

        self.active = true;
        self.can_activate = false;
        self.active_remaining = self.duration;
        self.cooldown_remaining = self.cooldown;
        true
    }

    /// Count both timers down by `dt`. Returns `true` exactly once, on
    /// the tick where the active window expires (the "ability end"
    /// edge).
    pub fn tick(&mut self, dt: f32) -> bool {
        // Cooling -> Ready runs regardless of the active window.
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining -= dt;
            if self.cooldown_remaining <= 0.0 {
                self.cooldown_remaining = 0.0;
                self.can_activate = true;
            }
        }

        if self.active {
            self.active_remaining -= dt;
            if self.active_remaining <= 0.0 {
                self.active_remaining = 0.0;
                self.active = false;
                return true;
            }
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn can_activate(&self) -> bool {
        self.can_activate
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn active_remaining(&self) -> f32 {
        self.active_remaining
    }
}
