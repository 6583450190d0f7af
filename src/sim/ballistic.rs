//! Gravity-integrated jump model (Simulation B)
//!
//! An initial upward velocity decays under constant gravity, integrated with
//! explicit Euler steps each frame. The launch speed is derived from the
//! target jump height so the unclamped ballistic apex coincides with the
//! same line the kinematic model turns around at (within integration error
//! bounded by the step size).

use glam::Vec2;

use super::trail::Trail;
use crate::consts::*;

/// Canvas y of the target apex (measured up from the ground contact line)
pub const TARGET_APEX_Y: f32 = GROUND_CONTACT_Y - MAX_JUMP_HEIGHT;

/// Launch speed such that the ballistic apex matches `MAX_JUMP_HEIGHT`:
/// v₀ = sqrt(2 · g · h)
pub fn jump_force() -> f32 {
    (2.0 * GRAVITY * MAX_JUMP_HEIGHT).sqrt()
}

/// Simulation B state
#[derive(Debug, Clone)]
pub struct BallisticJump {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub trail: Trail,
}

impl BallisticJump {
    /// Character at rest on the ground, empty trail
    pub fn new() -> Self {
        Self {
            position: Vec2::new(CENTER_X, GROUND_CONTACT_Y),
            velocity: Vec2::ZERO,
            grounded: true,
            trail: Trail::new(),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Launch upward. Ignored (not queued) while airborne.
    pub fn start_jump(&mut self) {
        if !self.grounded {
            return;
        }
        self.velocity.y = -jump_force();
        self.grounded = false;
        self.trail.clear();
    }

    /// Advance by `dt` seconds (explicit Euler) and record the trail point
    pub fn update(&mut self, dt: f32) {
        if !self.grounded {
            self.velocity.y += GRAVITY * dt;
            self.position.y += self.velocity.y * dt;

            // Clamp at the apex line while still rising; gravity takes over
            // again on the next step
            if self.velocity.y < 0.0 && self.position.y <= TARGET_APEX_Y {
                self.position.y = TARGET_APEX_Y;
                self.velocity.y = 0.0;
            }

            // Landing: snap to the contact line and settle
            if self.position.y >= GROUND_CONTACT_Y {
                self.position.y = GROUND_CONTACT_Y;
                self.velocity.y = 0.0;
                self.grounded = true;
            }
        }

        self.trail.record(self.position);
    }

    /// Force the character back to its initial rest state
    pub fn reset(&mut self) {
        self.position = Vec2::new(CENTER_X, GROUND_CONTACT_Y);
        self.velocity = Vec2::ZERO;
        self.grounded = true;
        self.trail.clear();
    }
}

impl Default for BallisticJump {
    fn default() -> Self {
        Self::new()
    }
}
