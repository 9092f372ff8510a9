//! Road segments a vehicle's path refers to.
//!
//! Units:
//! - Distance/Position: meters (m)
//!
//! The car-following core only needs segment identity and length; topology and path
//! assignment belong to whoever builds the [`Road`].

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::{Arena, Id};

#[derive(Resource, Default)]
pub struct Road {
    pub segments: Arena<Segment>,
}

impl Road {
    /// Add a straight segment between two world positions.
    pub fn add_segment(&mut self, start: Vec3, end: Vec3) -> Id<Segment> {
        self.segments.alloc(Segment::new(start, end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub length: f32,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
        }
    }
}
