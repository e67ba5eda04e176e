//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone)]
pub struct EnemyType(pub String);

/// Enemy stats loaded from RON data files. Health lives in the
/// enemy's `Actor`; these are the movement and contact numbers.
#[derive(Component, Clone)]
pub struct EnemyStats {
    /// Contact damage dealt to the player.
    pub damage: u32,
    pub move_speed: f32,
    pub patrol_range: f32,
    pub detection_range: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            damage: 1,
            move_speed: 2.0,
            patrol_range: 3.0,
            detection_range: 5.0,
        }
    }
}

/// Square patrol around a spawn origin.
///
/// The enemy bounces between the bounds independently on each axis;
/// detection steers the direction flags toward the player, so the
/// same bounce logic doubles as a crude chase.
#[derive(Component, Debug, Clone)]
pub struct Patrol {
    origin: Vec2,
    range: f32,
    moving_right: bool,
    moving_up: bool,
}

impl Patrol {
    pub fn new(origin: Vec2, range: f32) -> Self {
        Self::with_heading(origin, range, true, true)
    }

    pub fn with_heading(origin: Vec2, range: f32, moving_right: bool, moving_up: bool) -> Self {
        Self {
            origin,
            range,
            moving_right,
            moving_up,
        }
    }

    /// Movement direction for this tick, flipping the axis flags when
    /// the current position has reached the patrol bounds.
    pub fn step(&mut self, pos: Vec2) -> Vec2 {
        let mut dir = Vec2::ZERO;

        if self.moving_right {
            dir.x = 1.0;
            if pos.x >= self.origin.x + self.range {
                self.moving_right = false;
            }
        } else {
            dir.x = -1.0;
            if pos.x <= self.origin.x - self.range {
                self.moving_right = true;
            }
        }

        if self.moving_up {
            dir.y = 1.0;
            if pos.y >= self.origin.y + self.range {
                self.moving_up = false;
            }
        } else {
            dir.y = -1.0;
            if pos.y <= self.origin.y - self.range {
                self.moving_up = true;
            }
        }

        dir
    }

    /// Steer the direction flags toward the player. `to_player` is the
    /// normalized offset; a 0.1 deadzone per axis avoids jitter when
    /// lined up.
    pub fn steer_toward(&mut self, to_player: Vec2) {
        if to_player.x > 0.1 {
            self.moving_right = true;
        } else if to_player.x < -0.1 {
            self.moving_right = false;
        }

        if to_player.y > 0.1 {
            self.moving_up = true;
        } else if to_player.y < -0.1 {
            self.moving_up = false;
        }
    }

    pub fn is_moving_right(&self) -> bool {
        self.moving_right
    }

    pub fn is_moving_up(&self) -> bool {
        self.moving_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounces_off_the_right_bound() {
        let mut patrol = Patrol::new(Vec2::ZERO, 3.0);

        // Inside the bounds: keeps heading right.
        assert_eq!(patrol.step(Vec2::new(1.0, -3.5)).x, 1.0);
        assert!(patrol.is_moving_right());

        // At the bound: this step still moves right, then flips.
        assert_eq!(patrol.step(Vec2::new(3.0, 0.0)).x, 1.0);
        assert!(!patrol.is_moving_right());
        assert_eq!(patrol.step(Vec2::new(3.0, 0.0)).x, -1.0);
    }

    #[test]
    fn axes_flip_independently() {
        let mut patrol = Patrol::new(Vec2::ZERO, 2.0);
        patrol.step(Vec2::new(0.0, 2.0));
        assert!(patrol.is_moving_right());
        assert!(!patrol.is_moving_up());
    }

    #[test]
    fn detection_steers_toward_the_player() {
        let mut patrol = Patrol::new(Vec2::ZERO, 3.0);
        patrol.steer_toward(Vec2::new(-1.0, 0.0).normalize());
        assert!(!patrol.is_moving_right());

        // Within the deadzone the vertical flag is untouched.
        assert!(patrol.is_moving_up());
        patrol.steer_toward(Vec2::new(0.05, -0.99));
        assert!(!patrol.is_moving_up());
        assert!(!patrol.is_moving_right());
    }
}
