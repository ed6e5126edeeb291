//! Tunables контроллера движения
//!
//! Все значения задаются снаружи (Godot `#[export]` поля, headless spawn).
//! Единицы: метры, секунды, градусы (FOV и look sensitivity).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Настройки движения, прыжка, dash и FOV
///
/// `MovementConfig::simple()` — вырожденный вариант без dash и double jump.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementConfig {
    /// Градусы поворота на единицу смещения мыши
    pub look_sensitivity: f32,

    /// Максимальная горизонтальная скорость (m/s). Должна быть > 0.
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,

    /// Гравитация (m/s², положительная величина, направлена вниз)
    pub gravity: f32,
    pub jump_force: f32,
    /// Всего прыжков до приземления (включая наземный)
    pub max_jumps: u32,

    pub dash_enabled: bool,
    pub dash_speed: f32,
    pub dash_cooldown: f32,
    pub dash_duration: f32,

    pub base_fov: f32,
    pub max_fov: f32,

    /// Длина ground check луча (отрицательная = вниз от origin)
    pub max_distance_to_ground: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.05,
            max_speed: 12.0,
            acceleration: 20.0,
            deceleration: 10.0,
            air_acceleration: 10.0,
            air_deceleration: 10.0,
            gravity: 20.0,
            jump_force: 15.0,
            max_jumps: 2,
            dash_enabled: true,
            dash_speed: 20.0,
            dash_cooldown: 1.0,
            dash_duration: 0.2,
            base_fov: 90.0,
            max_fov: 103.0,
            max_distance_to_ground: -0.1,
        }
    }
}

impl MovementConfig {
    /// Один прыжок, без dash
    pub fn simple() -> Self {
        Self {
            max_jumps: 1,
            dash_enabled: false,
            ..Self::default()
        }
    }

    /// (acceleration, deceleration) для текущего состояния опоры
    pub fn blend_rates(&self, grounded: bool) -> (f32, f32) {
        if grounded {
            (self.acceleration, self.deceleration)
        } else {
            (self.air_acceleration, self.air_deceleration)
        }
    }

    /// Проверка preconditions. Вызывается хостом один раз при setup,
    /// tick path значения не перепроверяет.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_speed <= 0.0 {
            return Err(ConfigError::NonPositiveMaxSpeed(self.max_speed));
        }
        if self.dash_duration < 0.0 || self.dash_cooldown < 0.0 {
            return Err(ConfigError::NegativeDashTiming {
                duration: self.dash_duration,
                cooldown: self.dash_cooldown,
            });
        }
        if self.max_fov < self.base_fov {
            return Err(ConfigError::FovRange {
                base: self.base_fov,
                max: self.max_fov,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f32),
    #[error("dash timing must be non-negative (duration {duration}, cooldown {cooldown})")]
    NegativeDashTiming { duration: f32, cooldown: f32 },
    #[error("max_fov ({max}) is below base_fov ({base})")]
    FovRange { base: f32, max: f32 },
}

/// Одноразовая настройка окружения хоста (не состояние контроллера)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSetup {
    pub max_fps: i32,
    pub capture_mouse: bool,
}

impl Default for EngineSetup {
    fn default() -> Self {
        Self {
            max_fps: 144,
            capture_mouse: true,
        }
    }
}
