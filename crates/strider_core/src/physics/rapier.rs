//! Rapier хост: KinematicCharacterController
//!
//! Архитектура:
//! - Rapier разрешает коллизии (move-and-slide, autostep, snap-to-ground)
//! - Velocity считает MovementController, Rapier получает `translation = velocity * dt`
//! - Контакт с полом: `KinematicCharacterControllerOutput.grounded` прошлого шага Rapier

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::body::PhysicsBody;
use super::headless::CameraRig;
use super::plugin::MovementSet;
use crate::movement::{MovementConfig, MovementController, MovementInput};

pub const CAPSULE_HALF_HEIGHT: f32 = 0.5;
pub const CAPSULE_RADIUS: f32 = 0.4;

/// PhysicsBody поверх Rapier character controller на один tick
pub struct RapierCharacterBody<'a> {
    pub transform: &'a mut Transform,
    pub character: &'a mut KinematicCharacterController,
    pub grounded: bool,
    pub dt: f32,
    velocity: Vec3,
}

impl<'a> RapierCharacterBody<'a> {
    pub fn new(
        transform: &'a mut Transform,
        character: &'a mut KinematicCharacterController,
        output: Option<&KinematicCharacterControllerOutput>,
        dt: f32,
    ) -> Self {
        Self {
            transform,
            character,
            grounded: output.is_some_and(|output| output.grounded),
            dt,
            velocity: Vec3::ZERO,
        }
    }
}

impl PhysicsBody for RapierCharacterBody<'_> {
    fn basis(&self) -> Mat3 {
        Mat3::from_quat(self.transform.rotation)
    }

    fn is_on_floor(&self) -> bool {
        self.grounded
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn move_and_slide(&mut self) {
        // Rapier применит перемещение в своём physics step
        self.character.translation = Some(self.velocity * self.dt);
    }

    fn rotate_yaw(&mut self, radians: f32) {
        self.transform.rotate_y(radians);
    }
}

/// Rapier в fixed schedule вместе с контроллером
///
/// - `RapierPhysicsPlugin` шагает в FixedPostUpdate: один Rapier step на каждый
///   physics tick, сколько бы тиков ни пришлось на кадр
/// - `MovementSet::Physics` идёт до `PhysicsSet::SyncBackend`, поэтому
///   `translation` каждого tick применяется, а `grounded` приходит от шага,
///   выполненного сразу после предыдущего tick
pub struct RapierHostPlugin;

impl Plugin for RapierHostPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
            .insert_resource(TimestepMode::Fixed {
                dt: (1.0 / crate::PHYSICS_HZ) as f32,
                substeps: 1,
            })
            .configure_sets(
                FixedUpdate,
                MovementSet::Physics.before(PhysicsSet::SyncBackend),
            );
    }
}

/// Компоненты Rapier персонажа
///
/// - Transform
/// - MovementController + MovementInput + CameraRig
/// - Rapier: RigidBody::KinematicPositionBased + Collider (capsule) + KinematicCharacterController
pub fn rapier_character_bundle(position: Vec3, config: MovementConfig) -> impl Bundle {
    (
        Transform::from_translation(position),
        MovementController::new(config),
        MovementInput::default(),
        CameraRig {
            fov: config.base_fov,
            ..Default::default()
        },
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS), // Высота 1.8m
        KinematicCharacterController {
            snap_to_ground: Some(CharacterLength::Absolute(config.max_distance_to_ground.abs())),
            ..default()
        },
    )
}

/// Spawn helper для Rapier персонажа
pub fn spawn_rapier_character(
    commands: &mut Commands,
    position: Vec3,
    config: MovementConfig,
) -> Entity {
    commands.spawn(rapier_character_bundle(position, config)).id()
}
