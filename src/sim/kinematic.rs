//! Kinematic jump model (Simulation A)
//!
//! Constant-speed ascent to a fixed height, constant-speed descent back to
//! the ground. No acceleration anywhere; the motion is a pure state machine
//! over {Grounded, Ascending, Descending}.

use glam::Vec2;

use super::trail::Trail;
use crate::consts::*;

/// Where the kinematic character is in its jump cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicPhase {
    /// Resting on the ground line
    Grounded,
    /// Moving up at constant speed toward the apex line
    Ascending,
    /// Moving down at constant speed toward the ground
    Descending,
}

/// Simulation A state
#[derive(Debug, Clone)]
pub struct KinematicJump {
    pub phase: KinematicPhase,
    pub position: Vec2,
    pub velocity: Vec2,
    pub trail: Trail,
}

/// Apex line for the constant-speed jump (canvas y of the turnaround point)
pub const APEX_Y: f32 = GROUND_Y - MAX_JUMP_HEIGHT;

impl KinematicJump {
    /// Character at rest on the ground, empty trail
    pub fn new() -> Self {
        Self {
            phase: KinematicPhase::Grounded,
            position: Vec2::new(CENTER_X, GROUND_CONTACT_Y),
            velocity: Vec2::ZERO,
            trail: Trail::new(),
        }
    }

    /// True while moving upward
    pub fn is_jumping(&self) -> bool {
        self.phase == KinematicPhase::Ascending
    }

    /// True while moving downward
    pub fn is_falling(&self) -> bool {
        self.phase == KinematicPhase::Descending
    }

    /// Begin a jump. Ignored (not queued) while airborne.
    pub fn start_jump(&mut self) {
        if self.phase != KinematicPhase::Grounded {
            return;
        }
        self.phase = KinematicPhase::Ascending;
        self.velocity.y = -JUMP_SPEED;
        self.trail.clear();
    }

    /// Advance the jump by `dt` seconds and record the trail point
    pub fn update(&mut self, dt: f32) {
        match self.phase {
            KinematicPhase::Ascending => {
                self.velocity.y = -JUMP_SPEED;
                self.position.y += self.velocity.y * dt;
                if self.position.y <= APEX_Y {
                    self.position.y = APEX_Y;
                    self.phase = KinematicPhase::Descending;
                    self.velocity.y = 0.0;
                }
            }
            KinematicPhase::Descending => {
                self.velocity.y = JUMP_SPEED;
                self.position.y += self.velocity.y * dt;
                if self.position.y >= GROUND_CONTACT_Y {
                    self.position.y = GROUND_CONTACT_Y;
                    self.phase = KinematicPhase::Grounded;
                    self.velocity.y = 0.0;
                }
            }
            KinematicPhase::Grounded => {
                self.velocity.y = 0.0;
            }
        }

        self.trail.record(self.position);
    }

    /// Force the character back to its initial rest state
    pub fn reset(&mut self) {
        self.phase = KinematicPhase::Grounded;
        self.position = Vec2::new(CENTER_X, GROUND_CONTACT_Y);
        self.velocity = Vec2::ZERO;
        self.trail.clear();
    }
}

impl Default for KinematicJump {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initializes_at_rest_on_the_ground() {
        let sim = KinematicJump::new();
        assert_eq!(sim.phase, KinematicPhase::Grounded);
        assert!(!sim.is_jumping());
        assert!(!sim.is_falling());
        assert_eq!(sim.position.y, GROUND_CONTACT_Y);
        assert_eq!(sim.velocity.y, 0.0);
        assert!(sim.trail.is_empty());
    }

    #[test]
    fn test_starts_jumping_only_when_grounded() {
        let mut sim = KinematicJump::new();
        sim.start_jump();
        assert!(sim.is_jumping());
        assert!(!sim.is_falling());

        // Starting again mid-air is ignored, not queued
        sim.update(0.05);
        let position = sim.position;
        let velocity = sim.velocity;
        sim.start_jump();
        assert!(sim.is_jumping());
        assert_eq!(sim.position, position);
        assert_eq!(sim.velocity, velocity);
    }

    #[test]
    fn test_ascends_to_apex_exactly_then_falls() {
        let mut sim = KinematicJump::new();
        sim.start_jump();

        let dt = 0.05;
        let mut elapsed = 0.0;
        while elapsed < 5.0 && sim.is_jumping() {
            sim.update(dt);
            elapsed += dt;
        }

        // Clamped to the apex line, now descending
        assert_eq!(sim.position.y, APEX_Y);
        assert!(!sim.is_jumping());
        assert!(sim.is_falling());
    }

    #[test]
    fn test_returns_to_ground_contact_exactly() {
        let mut sim = KinematicJump::new();
        sim.start_jump();

        let dt = 0.05;
        let mut elapsed = 0.0;
        while elapsed < 10.0 && sim.phase != KinematicPhase::Grounded {
            sim.update(dt);
            elapsed += dt;
        }

        assert_eq!(sim.phase, KinematicPhase::Grounded);
        assert_eq!(sim.position.y, GROUND_CONTACT_Y);
        assert_eq!(sim.velocity.y, 0.0);
    }

    #[test]
    fn test_start_jump_clears_trail() {
        let mut sim = KinematicJump::new();
        sim.update(0.016);
        sim.update(0.016);
        assert!(!sim.trail.is_empty());
        sim.start_jump();
        assert!(sim.trail.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state_mid_flight() {
        let mut sim = KinematicJump::new();
        sim.start_jump();
        sim.update(0.1);
        sim.update(0.1);
        assert_ne!(sim.position.y, GROUND_CONTACT_Y);

        sim.reset();
        assert_eq!(sim.phase, KinematicPhase::Grounded);
        assert_eq!(sim.position, Vec2::new(CENTER_X, GROUND_CONTACT_Y));
        assert_eq!(sim.velocity, Vec2::ZERO);
        assert!(sim.trail.is_empty());
    }

    proptest! {
        /// Jumping and falling are mutually exclusive at every observable
        /// point, for any non-negative step sizes, and the position stays
        /// clamped between the apex and the ground contact line.
        #[test]
        fn prop_phases_exclusive_and_position_bounded(
            steps in proptest::collection::vec(0.0f32..0.2, 0..200),
            jump_at in 0usize..200,
        ) {
            let mut sim = KinematicJump::new();
            for (i, dt) in steps.iter().enumerate() {
                if i == jump_at {
                    sim.start_jump();
                }
                sim.update(*dt);
                prop_assert!(!(sim.is_jumping() && sim.is_falling()));
                prop_assert!(sim.position.y >= APEX_Y);
                prop_assert!(sim.position.y <= GROUND_CONTACT_Y);
                prop_assert!(sim.trail.len() <= MAX_TRAIL_POINTS);
            }
        }
    }
}
