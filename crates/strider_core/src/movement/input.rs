//! Input для контроллера движения
//!
//! - `TickInput` — снимок на один physics tick (что видит state machine)
//! - `MovementInput` — ECS компонент для Bevy host (заполняется input системой / скриптом)
//! - `LookMotion` — ECS event смещения мыши (асинхронный, между кадрами)

use bevy::prelude::*;

use crate::physics::InputSource;

/// Снимок input на один physics tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Move вектор, каждая ось в [-1, 1]
    pub move_vector: Vec2,
    /// Jump pressed на этом tick (edge)
    pub jump: bool,
    /// Dash pressed на этом tick (edge)
    pub dash: bool,
}

impl TickInput {
    pub fn moving(move_vector: Vec2) -> Self {
        Self {
            move_vector,
            ..Default::default()
        }
    }

    pub fn has_move_input(&self) -> bool {
        self.move_vector != Vec2::ZERO
    }
}

/// Input компонент для headless / Rapier хостов
///
/// Для headless тестов: mock input через этот компонент.
/// `jump`/`dash`: edge флаги: physics система сбрасывает их после tick.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    pub move_vector: Vec2,
    pub jump: bool,
    pub dash: bool,
}

impl MovementInput {
    /// Снять edge флаги после обработки tick
    pub fn consume_edges(&mut self) {
        self.jump = false;
        self.dash = false;
    }
}

impl InputSource for MovementInput {
    fn move_vector(&self) -> Vec2 {
        self.move_vector.clamp_length_max(1.0)
    }

    fn jump_just_pressed(&self) -> bool {
        self.jump
    }

    fn dash_just_pressed(&self) -> bool {
        self.dash
    }
}

/// Event: смещение мыши для entity (накапливается до ближайшего look update)
#[derive(Event, Debug, Clone, Copy)]
pub struct LookMotion {
    pub entity: Entity,
    pub delta: Vec2,
}
