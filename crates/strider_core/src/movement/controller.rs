//! MovementController — per-tick state machine движения
//!
//! Physics tick (фиксированный шаг), строго в этом порядке:
//! 1. Dash trigger (edge + cooldown + ненулевой move input)
//! 2. Dash countdown
//! 3. Ground transition (false → true: vertical speed = 0, прыжки восстановлены)
//! 4. Gravity (только airborne)
//! 5. Jump (на земле всегда, в воздухе если остались прыжки)
//! 6. Horizontal blend к `direction * max_speed` (пропускается во время dash)
//! 7. Compose velocity → body.set_velocity → body.move_and_slide
//!
//! Render frame (переменный шаг): look update + FOV feedback (см. `look.rs`).

use bevy::prelude::*;

use super::config::MovementConfig;
use super::events::{MovementEvent, TickReport};
use super::input::TickInput;
use super::state::MovementState;
use crate::logger;
use crate::physics::PhysicsBody;

/// Контроллер движения первого лица
///
/// Владеет только своим состоянием; тело, камера и input: внешние collaborators.
#[derive(Component, Debug, Clone)]
pub struct MovementController {
    pub config: MovementConfig,
    pub(crate) state: MovementState,
    /// Накопленное смещение мыши с последнего look update
    pub(crate) pending_look_delta: Vec2,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            state: MovementState::new(config.max_jumps),
            config,
            pending_look_delta: Vec2::ZERO,
        }
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn is_dashing(&self) -> bool {
        self.state.is_dashing()
    }

    pub fn jumps_remaining(&self) -> u32 {
        self.state.jumps_remaining
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    /// Направление движения: move input, повёрнутый в фрейм тела
    ///
    /// input.x → локальная X, input.y → локальная Z (Godot: "up" = -Z).
    pub fn move_direction(basis: Mat3, move_vector: Vec2) -> Vec3 {
        basis * Vec3::new(move_vector.x, 0.0, move_vector.y)
    }

    /// Один physics tick
    pub fn physics_process<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        input: TickInput,
        dt: f32,
    ) -> TickReport {
        let mut events = Vec::new();
        let now = self.state.elapsed;
        let direction = Self::move_direction(body.basis(), input.move_vector);

        // 1-2. Dash
        if input.dash {
            self.try_start_dash(&input, direction, now, &mut events);
        }
        self.tick_dash(dt, &mut events);

        // 3. Ground transition (один запрос за tick)
        let grounded = body.is_on_floor();
        if grounded && !self.state.was_grounded_last_frame {
            self.state.vertical_speed = 0.0;
            self.state.jumps_remaining = self.config.max_jumps;
            events.push(MovementEvent::Landed);
        }

        // 4. Gravity
        if !grounded {
            self.state.vertical_speed -= self.config.gravity * dt;
        }

        // 5. Jump
        if input.jump && (self.state.jumps_remaining > 0 || grounded) {
            self.state.jumps_remaining = self.state.jumps_remaining.saturating_sub(1);
            self.state.vertical_speed = self.config.jump_force;
            events.push(MovementEvent::Jumped {
                airborne: !grounded,
            });
        }

        // 6. Horizontal blend
        if !self.state.dash.active {
            self.blend_horizontal(direction, input.has_move_input(), grounded, dt);
        }

        // 7. Compose & integrate
        self.state.velocity.y = self.state.vertical_speed;
        body.set_velocity(self.state.velocity);
        body.move_and_slide();

        self.state.was_grounded_last_frame = grounded;
        self.state.elapsed += f64::from(dt);

        for event in &events {
            logger::log(&format!("MovementController: {:?}", event));
        }

        TickReport {
            grounded,
            velocity: self.state.velocity,
            events,
        }
    }

    fn try_start_dash(
        &mut self,
        input: &TickInput,
        direction: Vec3,
        now: f64,
        events: &mut Vec<MovementEvent>,
    ) {
        if !self.config.dash_enabled || self.state.dash.active {
            return;
        }
        if !self
            .state
            .dash
            .cooldown_elapsed(now, self.config.dash_cooldown)
        {
            return;
        }
        // Нулевой input: dash молча игнорируется
        if !input.has_move_input() || direction == Vec3::ZERO {
            return;
        }

        self.state.dash.active = true;
        self.state.dash.time_remaining = self.config.dash_duration;
        self.state.dash.last_started_at = Some(now);
        self.state.velocity = direction * self.config.dash_speed;
        events.push(MovementEvent::DashStarted { direction });
    }

    fn tick_dash(&mut self, dt: f32, events: &mut Vec<MovementEvent>) {
        if !self.state.dash.active {
            return;
        }
        self.state.dash.time_remaining -= dt;
        if self.state.dash.time_remaining <= 0.0 {
            self.state.dash.active = false;
            events.push(MovementEvent::DashEnded);
        }
    }

    /// current + (target - current) * min(1, rate * dt), только X/Z
    fn blend_horizontal(&mut self, direction: Vec3, has_input: bool, grounded: bool, dt: f32) {
        let (acceleration, deceleration) = self.config.blend_rates(grounded);
        let rate = if has_input { acceleration } else { deceleration };
        let factor = (rate * dt).min(1.0);

        let target = direction * self.config.max_speed;
        let current = Vec3::new(self.state.velocity.x, 0.0, self.state.velocity.z);
        let blended = current.lerp(Vec3::new(target.x, 0.0, target.z), factor);

        self.state.velocity.x = blended.x;
        self.state.velocity.z = blended.z;
    }
}
