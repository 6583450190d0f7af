//! Bounded motion trail shared by both jump models
//!
//! A fixed-capacity FIFO of past positions, used only for drawing a fading
//! path. Oldest points are evicted first once the buffer is full.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::MAX_TRAIL_POINTS;

/// Ordered history of past positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// Trail with the default demo capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRAIL_POINTS)
    }

    /// Trail with an explicit capacity (must be > 0)
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a position, evicting the oldest point when at capacity
    pub fn record(&mut self, position: Vec2) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    /// Drop all recorded points (on jump start and on reset)
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in recording order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
