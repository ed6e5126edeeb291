//! Collaborator interfaces контроллера
//!
//! Контроллер НЕ наследует engine тип (CharacterBody3D), а держит ссылку на
//! тело через эти traits. Реализации:
//! - Godot: CharacterBody3D + RayCast3D (strider_godot)
//! - Bevy headless: Transform + плоскость пола (`physics::headless`)
//! - Bevy + Rapier: KinematicCharacterController (`physics::rapier`)

use bevy::prelude::*;

use crate::movement::TickInput;

/// Физическое тело персонажа (collision resolution на стороне хоста)
pub trait PhysicsBody {
    /// Базис тела (колонки = локальные оси X/Y/Z в world space)
    fn basis(&self) -> Mat3;

    /// Контакт с полом. Запрашивается ровно один раз за physics tick.
    fn is_on_floor(&self) -> bool;

    fn set_velocity(&mut self, velocity: Vec3);

    /// Интеграция velocity + разрешение коллизий. Один вызов за tick, после `set_velocity`.
    fn move_and_slide(&mut self);

    /// Yaw поворот тела вокруг вертикальной оси (радианы)
    fn rotate_yaw(&mut self, radians: f32);
}

/// Camera pivot (child тела): pitch + FOV
pub trait CameraPivot {
    /// Текущий pitch в локальном фрейме pivot (радианы)
    fn pitch(&self) -> f32;

    fn set_pitch(&mut self, radians: f32);

    /// FOV камеры (градусы)
    fn set_fov(&mut self, degrees: f32);
}

/// Источник input, опрашиваемый каждый physics tick
///
/// Look delta сюда не входит: это асинхронные события между кадрами,
/// хост пушит их через `MovementController::push_look_delta`.
pub trait InputSource {
    /// Двухосевой move вектор, каждая ось в [-1, 1] (deadzone upstream)
    fn move_vector(&self) -> Vec2;

    /// Jump нажат на этом tick (edge, не hold)
    fn jump_just_pressed(&self) -> bool;

    /// Dash нажат на этом tick (edge, не hold)
    fn dash_just_pressed(&self) -> bool;

    /// Снимок input для одного tick
    fn sample(&self) -> TickInput {
        TickInput {
            move_vector: self.move_vector(),
            jump: self.jump_just_pressed(),
            dash: self.dash_just_pressed(),
        }
    }
}
