//! Fake collaborators для unit-тестов контроллера

use std::cell::Cell;

use bevy::prelude::*;

use super::body::{CameraPivot, PhysicsBody};

/// Тело с ручным управлением контактом с полом
pub struct FakeBody {
    pub basis: Mat3,
    pub on_floor: bool,
    pub velocity: Vec3,
    pub yaw: f32,
    pub slide_calls: u32,
    pub floor_queries: Cell<u32>,
}

impl FakeBody {
    pub fn grounded() -> Self {
        Self::new(true)
    }

    pub fn airborne() -> Self {
        Self::new(false)
    }

    fn new(on_floor: bool) -> Self {
        Self {
            basis: Mat3::IDENTITY,
            on_floor,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            slide_calls: 0,
            floor_queries: Cell::new(0),
        }
    }
}

impl PhysicsBody for FakeBody {
    fn basis(&self) -> Mat3 {
        self.basis
    }

    fn is_on_floor(&self) -> bool {
        self.floor_queries.set(self.floor_queries.get() + 1);
        self.on_floor
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn move_and_slide(&mut self) {
        self.slide_calls += 1;
    }

    fn rotate_yaw(&mut self, radians: f32) {
        self.yaw += radians;
    }
}

#[derive(Default)]
pub struct FakePivot {
    pub pitch: f32,
    pub fov: f32,
}

impl CameraPivot for FakePivot {
    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_pitch(&mut self, radians: f32) {
        self.pitch = radians;
    }

    fn set_fov(&mut self, degrees: f32) {
        self.fov = degrees;
    }
}
