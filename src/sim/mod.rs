//! Deterministic simulation module
//!
//! Both jump models live here. This module must be pure and deterministic:
//! - Driven only by the delta-times it is handed
//! - No rendering or platform dependencies
//! - Same inputs, same trajectory

pub mod ballistic;
pub mod kinematic;
pub mod trail;

pub use ballistic::BallisticJump;
pub use kinematic::{KinematicJump, KinematicPhase};
pub use trail::Trail;
