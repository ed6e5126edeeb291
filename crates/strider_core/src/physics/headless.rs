//! Headless хост: Transform + плоскость пола
//!
//! Без Rapier: velocity интегрируем сами, коллизия только с плоскостью пола.
//! Используется headless бинарником и тестами детерминизма.

use bevy::prelude::*;

use super::body::{CameraPivot, PhysicsBody};

/// Плоскость пола для headless режима
#[derive(Resource, Debug, Clone, Copy)]
pub struct GroundPlane {
    pub height: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { height: 0.0 }
    }
}

/// Marker: персонаж, которого двигает headless хост
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct HeadlessBody;

/// Camera rig (pitch + FOV) для headless хоста
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    pub pitch: f32,
    pub fov: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            fov: 90.0,
        }
    }
}

impl CameraPivot for CameraRig {
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

/// PhysicsBody поверх Transform на один tick
///
/// Ground check: ноги (translation.y) не выше `ground + contact_distance`.
pub struct TransformBody<'a> {
    pub transform: &'a mut Transform,
    pub ground: GroundPlane,
    /// Допуск контакта с полом (метры, >= 0)
    pub contact_distance: f32,
    pub dt: f32,
    velocity: Vec3,
}

impl<'a> TransformBody<'a> {
    pub fn new(transform: &'a mut Transform, ground: GroundPlane, contact_distance: f32, dt: f32) -> Self {
        Self {
            transform,
            ground,
            contact_distance: contact_distance.abs(),
            dt,
            velocity: Vec3::ZERO,
        }
    }
}

impl PhysicsBody for TransformBody<'_> {
    fn basis(&self) -> Mat3 {
        Mat3::from_quat(self.transform.rotation)
    }

    fn is_on_floor(&self) -> bool {
        self.transform.translation.y <= self.ground.height + self.contact_distance
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn move_and_slide(&mut self) {
        // position += velocity * dt, затем выталкиваем из пола
        self.transform.translation += self.velocity * self.dt;
        if self.transform.translation.y < self.ground.height {
            self.transform.translation.y = self.ground.height;
        }
    }

    fn rotate_yaw(&mut self, radians: f32) {
        self.transform.rotate_y(radians);
    }
}
