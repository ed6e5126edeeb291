//! Godot реализации collaborator traits
//!
//! - `GodotBody` — CharacterBody3D (+ опциональный RayCast3D ground check)
//! - `GodotCameraPivot` — Node3D pivot (pitch) + Camera3D (FOV)
//! - `GodotInput` — Input singleton (actions: left/right/up/down/jump/dash)
//!
//! Конвертация Godot ↔ Bevy math типов поэлементно, без unsafe.

use bevy::prelude::{Mat3, Vec2, Vec3};
use godot::classes::{Camera3D, CharacterBody3D, Input, Node3D, RayCast3D};
use godot::prelude::*;
use strider_core::{CameraPivot, InputSource, PhysicsBody};

pub fn to_bevy_vec3(v: Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_godot_vec3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

pub fn to_bevy_vec2(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Basis → Mat3 (колонки = локальные оси X/Y/Z)
pub fn to_bevy_mat3(basis: Basis) -> Mat3 {
    Mat3::from_cols(
        to_bevy_vec3(basis.col_a()),
        to_bevy_vec3(basis.col_b()),
        to_bevy_vec3(basis.col_c()),
    )
}

/// CharacterBody3D как PhysicsBody
///
/// Ground check: RayCast3D если назначен, иначе `is_on_floor()` самого тела.
pub struct GodotBody {
    body: Gd<CharacterBody3D>,
    ground_check: Option<Gd<RayCast3D>>,
}

impl GodotBody {
    pub fn new(body: Gd<CharacterBody3D>, ground_check: Option<Gd<RayCast3D>>) -> Self {
        Self { body, ground_check }
    }
}

impl PhysicsBody for GodotBody {
    fn basis(&self) -> Mat3 {
        to_bevy_mat3(self.body.get_transform().basis)
    }

    fn is_on_floor(&self) -> bool {
        match &self.ground_check {
            Some(ray) => ray.is_colliding(),
            None => self.body.is_on_floor(),
        }
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.set_velocity(to_godot_vec3(velocity));
    }

    fn move_and_slide(&mut self) {
        self.body.move_and_slide();
    }

    fn rotate_yaw(&mut self, radians: f32) {
        self.body.rotate_y(radians);
    }
}

/// Camera pivot (pitch) + камера (FOV)
///
/// Оба node опциональны: без pivot pitch не применяется, но yaw тела и FOV
/// продолжают работать, а look delta всё равно забирается каждый кадр.
pub struct GodotCameraPivot {
    pivot: Option<Gd<Node3D>>,
    camera: Option<Gd<Camera3D>>,
}

impl GodotCameraPivot {
    pub fn new(pivot: Option<Gd<Node3D>>, camera: Option<Gd<Camera3D>>) -> Self {
        Self { pivot, camera }
    }
}

impl CameraPivot for GodotCameraPivot {
    fn pitch(&self) -> f32 {
        self.pivot
            .as_ref()
            .map_or(0.0, |pivot| pivot.get_rotation().x)
    }

    fn set_pitch(&mut self, radians: f32) {
        let Some(pivot) = self.pivot.as_mut() else {
            return;
        };
        let mut rotation = pivot.get_rotation();
        rotation.x = radians;
        pivot.set_rotation(rotation);
    }

    fn set_fov(&mut self, degrees: f32) {
        if let Some(camera) = self.camera.as_mut() {
            camera.set_fov(degrees);
        }
    }
}

/// Input singleton с input map actions
pub struct GodotInput {
    input: Gd<Input>,
}

impl GodotInput {
    pub fn new() -> Self {
        Self {
            input: Input::singleton(),
        }
    }
}

impl Default for GodotInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for GodotInput {
    fn move_vector(&self) -> Vec2 {
        // Deadzone и нормализация на стороне Godot input map
        to_bevy_vec2(self.input.get_vector("left", "right", "up", "down"))
    }

    fn jump_just_pressed(&self) -> bool {
        self.input.is_action_just_pressed("jump")
    }

    fn dash_just_pressed(&self) -> bool {
        self.input.is_action_just_pressed("dash")
    }
}
