//! Render-frame обновления: mouse look + FOV feedback
//!
//! # Mouse look
//! - Horizontal (yaw) → поворот тела
//! - Vertical (pitch) → поворот camera pivot, clamp [-90°, +90°]
//!
//! Look delta edge-triggered: input callback накапливает смещение, look update
//! забирает его и обнуляет. Нет событий мыши, нет поворота (stale delta не перечитывается).

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::controller::MovementController;
use crate::physics::{CameraPivot, PhysicsBody};

pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// FOV по текущей скорости: lerp(base, max, clamp(speed / max_speed, 0, 1))
///
/// Precondition: `max_speed > 0`.
pub fn fov_for_speed(base_fov: f32, max_fov: f32, speed: f32, max_speed: f32) -> f32 {
    let fraction = (speed / max_speed).clamp(0.0, 1.0);
    base_fov + (max_fov - base_fov) * fraction
}

impl MovementController {
    /// Накопить смещение мыши (вызывается из input callback, 0..N раз за кадр)
    pub fn push_look_delta(&mut self, delta: Vec2) {
        self.pending_look_delta += delta;
    }

    pub fn pending_look_delta(&self) -> Vec2 {
        self.pending_look_delta
    }

    /// Применить накопленный look delta и обнулить его
    ///
    /// Returns `false` если с прошлого вызова событий мыши не было (no-op).
    pub fn process_look<B, C>(&mut self, body: &mut B, pivot: &mut C) -> bool
    where
        B: PhysicsBody + ?Sized,
        C: CameraPivot + ?Sized,
    {
        let delta = std::mem::take(&mut self.pending_look_delta);
        if delta == Vec2::ZERO {
            return false;
        }

        let sensitivity = self.config.look_sensitivity;
        body.rotate_yaw(-(delta.x * sensitivity).to_radians());

        let pitch = pivot.pitch() - (delta.y * sensitivity).to_radians();
        pivot.set_pitch(pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT));
        true
    }

    /// FOV для текущей скорости (горизонтальная + вертикальная)
    pub fn current_fov(&self) -> f32 {
        fov_for_speed(
            self.config.base_fov,
            self.config.max_fov,
            self.state.speed(),
            self.config.max_speed,
        )
    }

    pub fn update_fov<C: CameraPivot + ?Sized>(&self, pivot: &mut C) {
        pivot.set_fov(self.current_fov());
    }

    /// Render frame: look, затем FOV
    pub fn process_frame<B, C>(&mut self, body: &mut B, pivot: &mut C)
    where
        B: PhysicsBody + ?Sized,
        C: CameraPivot + ?Sized,
    {
        self.process_look(body, pivot);
        self.update_fov(pivot);
    }
}
