//! PlayerMovement — first-person контроллер как Godot node
//!
//! Архитектура:
//! - Godot node (CharacterBody3D), все tunables как `#[export]` поля
//! - State machine живёт в strider_core::MovementController (композиция, не наследование)
//! - Node только адаптирует Godot API к collaborator traits (см. bridge.rs)
//!
//! Flow:
//! 1. input() — накапливает mouse motion (0..N раз между кадрами)
//! 2. process() — look update (yaw тела, pitch pivot) + FOV от скорости
//! 3. physics_process() — dash / ground / gravity / jump / blend → move_and_slide
//!
//! Scene setup:
//! - CameraPivot (Node3D) → PlayerCamera (Camera3D)
//! - GroundCheck (RayCast3D), target_position выставляется из max_distance_to_ground
//! - Input map: left, right, up, down, jump, dash

use godot::classes::{
    Camera3D, CharacterBody3D, ICharacterBody3D, InputEvent, InputEventMouseMotion, Node3D,
    RayCast3D,
};
use godot::prelude::*;
use strider_core::{
    EngineSetup, InputSource, LogLevel, MovementConfig, MovementController, MovementEvent,
};

use crate::bridge::{to_bevy_vec2, GodotBody, GodotCameraPivot, GodotInput};
use crate::logger::GodotLogger;
use crate::setup::apply_engine_setup;

#[derive(GodotClass)]
#[class(base=CharacterBody3D)]
pub struct PlayerMovement {
    // Look
    #[export]
    look_sensitivity: f32,

    // Movement
    #[export]
    speed: f32,
    #[export]
    acceleration: f32,
    #[export]
    deceleration: f32,
    #[export]
    air_acceleration: f32,
    #[export]
    air_deceleration: f32,
    #[export]
    jump_force: f32,
    #[export]
    max_jumps: i32,
    #[export]
    gravity: f32,

    // Camera
    #[export]
    base_fov: f32,
    #[export]
    max_fov: f32,
    #[export]
    camera_pivot: Option<Gd<Node3D>>,
    #[export]
    player_camera: Option<Gd<Camera3D>>,

    // Dash
    #[export]
    dash_enabled: bool,
    #[export]
    dash_speed: f32,
    #[export]
    dash_cooldown: f32,
    #[export]
    dash_duration: f32,

    // Ground check
    #[export]
    ground_check: Option<Gd<RayCast3D>>,
    #[export]
    max_distance_to_ground: f32,

    // Engine setup
    #[export]
    max_fps: i32,
    #[export]
    capture_mouse: bool,

    controller: MovementController,

    base: Base<CharacterBody3D>,
}

#[godot_api]
impl ICharacterBody3D for PlayerMovement {
    fn init(base: Base<CharacterBody3D>) -> Self {
        let config = MovementConfig::default();
        let setup = EngineSetup::default();

        Self {
            look_sensitivity: config.look_sensitivity,
            speed: config.max_speed,
            acceleration: config.acceleration,
            deceleration: config.deceleration,
            air_acceleration: config.air_acceleration,
            air_deceleration: config.air_deceleration,
            jump_force: config.jump_force,
            max_jumps: config.max_jumps as i32,
            gravity: config.gravity,
            base_fov: config.base_fov,
            max_fov: config.max_fov,
            camera_pivot: None,
            player_camera: None,
            dash_enabled: config.dash_enabled,
            dash_speed: config.dash_speed,
            dash_cooldown: config.dash_cooldown,
            dash_duration: config.dash_duration,
            ground_check: None,
            max_distance_to_ground: config.max_distance_to_ground,
            max_fps: setup.max_fps,
            capture_mouse: setup.capture_mouse,
            controller: MovementController::new(config),
            base,
        }
    }

    fn ready(&mut self) {
        GodotLogger::start_session();
        strider_core::set_logger(Box::new(GodotLogger));
        strider_core::set_log_level(LogLevel::Debug);

        apply_engine_setup(&self.engine_setup());

        let config = self.movement_config();
        if let Err(e) = config.validate() {
            strider_core::log_error(&format!("PlayerMovement: invalid config: {}", e));
        }
        self.controller = MovementController::new(config);

        if self.camera_pivot.is_none() {
            strider_core::log_warning("PlayerMovement: camera_pivot not assigned, vertical look disabled");
        }

        if let Some(camera) = self.player_camera.as_mut() {
            camera.set_fov(config.base_fov);
        } else {
            strider_core::log_warning("PlayerMovement: player_camera not assigned, FOV feedback disabled");
        }

        if let Some(ray) = self.ground_check.as_mut() {
            ray.set_target_position(Vector3::new(0.0, config.max_distance_to_ground, 0.0));
        } else {
            strider_core::log_warning("PlayerMovement: ground_check not assigned, using is_on_floor()");
        }

        strider_core::log("✅ PlayerMovement ready");
    }

    fn input(&mut self, event: Gd<InputEvent>) {
        // Несколько motion событий за кадр суммируются, process() их забирает
        if let Ok(motion) = event.try_cast::<InputEventMouseMotion>() {
            self.controller.push_look_delta(to_bevy_vec2(motion.get_relative()));
        }
    }

    fn process(&mut self, _delta: f64) {
        // Без pivot/камеры соответствующая часть просто пропускается,
        // look delta забирается каждый кадр
        let mut body = GodotBody::new(self.base().clone(), self.ground_check.clone());
        let mut pivot =
            GodotCameraPivot::new(self.camera_pivot.clone(), self.player_camera.clone());
        self.controller.process_frame(&mut body, &mut pivot);
    }

    fn physics_process(&mut self, delta: f64) {
        let input = GodotInput::new().sample();
        let mut body = GodotBody::new(self.base().clone(), self.ground_check.clone());

        let report = self
            .controller
            .physics_process(&mut body, input, delta as f32);

        for event in &report.events {
            match event {
                MovementEvent::DashStarted { direction } => strider_core::log(&format!(
                    "PlayerMovement: dash {:?}",
                    direction
                )),
                MovementEvent::Jumped { airborne: true } => strider_core::log(&format!(
                    "PlayerMovement: air jump, {} left",
                    self.controller.jumps_remaining()
                )),
                _ => {}
            }
        }
    }
}

#[godot_api]
impl PlayerMovement {
    /// Текущие export значения → MovementConfig
    pub fn movement_config(&self) -> MovementConfig {
        MovementConfig {
            look_sensitivity: self.look_sensitivity,
            max_speed: self.speed,
            acceleration: self.acceleration,
            deceleration: self.deceleration,
            air_acceleration: self.air_acceleration,
            air_deceleration: self.air_deceleration,
            gravity: self.gravity,
            jump_force: self.jump_force,
            max_jumps: self.max_jumps.max(0) as u32,
            dash_enabled: self.dash_enabled,
            dash_speed: self.dash_speed,
            dash_cooldown: self.dash_cooldown,
            dash_duration: self.dash_duration,
            base_fov: self.base_fov,
            max_fov: self.max_fov,
            max_distance_to_ground: self.max_distance_to_ground,
        }
    }

    pub fn engine_setup(&self) -> EngineSetup {
        EngineSetup {
            max_fps: self.max_fps,
            capture_mouse: self.capture_mouse,
        }
    }

    #[func]
    pub fn is_dashing(&self) -> bool {
        self.controller.is_dashing()
    }

    #[func]
    pub fn jumps_remaining(&self) -> i32 {
        self.controller.jumps_remaining() as i32
    }

    #[func]
    pub fn current_speed(&self) -> f32 {
        self.controller.state().speed()
    }
}
