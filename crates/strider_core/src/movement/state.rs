//! Состояние контроллера движения (мутируется один раз за physics tick)

use bevy::prelude::*;

/// Dash sub-state
///
/// Пока `active`, обычный accel/decel blend приостановлен.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct DashState {
    pub active: bool,
    pub time_remaining: f32,
    /// Время старта последнего dash (часы контроллера). `None`: dash ещё не было.
    pub last_started_at: Option<f64>,
}

impl DashState {
    /// Cooldown прошёл (или dash ещё не использовался)
    pub fn cooldown_elapsed(&self, now: f64, cooldown: f32) -> bool {
        self.last_started_at
            .map_or(true, |started| now - started >= f64::from(cooldown))
    }
}

/// Состояние движения
///
/// Инварианты:
/// - 0 ≤ jumps_remaining ≤ max_jumps
/// - velocity.y == vertical_speed после каждого tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MovementState {
    /// Горизонтальная + вертикальная скорость, отданная телу в последний tick
    pub velocity: Vec3,
    /// Вертикальная компонента, интегрируется отдельно (gravity / jump)
    pub vertical_speed: f32,
    pub jumps_remaining: u32,
    pub dash: DashState,
    /// Опора на прошлом tick (только для детекта приземления)
    pub was_grounded_last_frame: bool,
    /// Часы контроллера (сумма dt всех physics ticks).
    /// f64: в f32 шаг 1/60 перестаёт прибавляться примерно через 6 суток.
    pub elapsed: f64,
}

impl MovementState {
    pub fn new(max_jumps: u32) -> Self {
        Self {
            jumps_remaining: max_jumps,
            ..Default::default()
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.active
    }

    /// Модуль полной скорости (для FOV feedback)
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
