//! Jump Compare - two jump models, side by side
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematic and ballistic jump models)
//! - `animation`: Frame-loop driver (run flag, clamped delta-time)
//! - `renderer`: 2D canvas rendering
//! - `controller`: Button wiring
//! - `error`: Startup error type

pub mod animation;
#[cfg(target_arch = "wasm32")]
pub mod controller;
pub mod error;
pub mod renderer;
pub mod sim;

pub use animation::AnimationDriver;
pub use error::SetupError;

/// Demo configuration constants
pub mod consts {
    /// Canvas dimensions (one canvas per simulation)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Ground baseline on the canvas (y grows downward)
    pub const GROUND_Y: f32 = 400.0;
    /// Character marker radius
    pub const CHARACTER_SIZE: f32 = 20.0;
    /// Resting y of the character center (sitting on the ground line)
    pub const GROUND_CONTACT_Y: f32 = GROUND_Y - CHARACTER_SIZE;
    /// Horizontal center of the simulation lane
    pub const CENTER_X: f32 = CANVAS_WIDTH / 2.0;

    /// Downward acceleration for the ballistic model (pixels/s²)
    pub const GRAVITY: f32 = 980.0;
    /// Constant ascent/descent speed for the kinematic model (pixels/s)
    pub const JUMP_SPEED: f32 = 400.0;
    /// Jump height both models aim for (pixels)
    pub const MAX_JUMP_HEIGHT: f32 = 260.0;

    /// Maximum trail points kept per simulation
    pub const MAX_TRAIL_POINTS: usize = 800;
    /// Delta-time clamp for the frame loop (protects against tab switches)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Character colors
    pub const CHARACTER_COLOR_A: &str = "#FF6B6B";
    pub const CHARACTER_COLOR_B: &str = "#4ECDC4";
    /// Ground line color
    pub const GROUND_COLOR: &str = "#333";
    /// Trail stroke opacity
    pub const TRAIL_ALPHA: f32 = 0.4;
}
