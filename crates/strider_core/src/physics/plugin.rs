//! Bevy plugin: MovementController в ECS
//!
//! Schedule:
//! - FixedUpdate (60Hz): physics tick для headless и Rapier персонажей
//! - Update: накопление LookMotion → look update + FOV
//!
//! Оба schedule выполняются в одном main loop, не параллельно друг другу
//! для одного entity (queries с `&mut MovementController` конфликтуют).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::headless::{CameraRig, GroundPlane, HeadlessBody, TransformBody};
use super::rapier::RapierCharacterBody;
use crate::movement::{
    LookMotion, MovementConfig, MovementController, MovementEventFired, MovementInput, TickReport,
};
use crate::physics::InputSource;

/// Physics tick для headless персонажей
pub fn drive_headless_bodies(
    mut query: Query<
        (Entity, &mut MovementController, &mut MovementInput, &mut Transform),
        With<HeadlessBody>,
    >,
    ground: Res<GroundPlane>,
    time: Res<Time<Fixed>>,
    mut events: EventWriter<MovementEventFired>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut input, mut transform) in query.iter_mut() {
        let contact_distance = controller.config.max_distance_to_ground;
        let mut body = TransformBody::new(&mut transform, *ground, contact_distance, dt);

        let report = controller.physics_process(&mut body, input.sample(), dt);
        input.consume_edges();

        emit_report(entity, &report, &mut events);
    }
}

/// Physics tick для Rapier персонажей (коллизии решает KinematicCharacterController)
pub fn drive_rapier_characters(
    mut query: Query<(
        Entity,
        &mut MovementController,
        &mut MovementInput,
        &mut Transform,
        &mut KinematicCharacterController,
        Option<&KinematicCharacterControllerOutput>,
    ), Without<HeadlessBody>>,
    time: Res<Time<Fixed>>,
    mut events: EventWriter<MovementEventFired>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut input, mut transform, mut character, output) in query.iter_mut() {
        let mut body = RapierCharacterBody::new(&mut transform, &mut character, output, dt);

        let report = controller.physics_process(&mut body, input.sample(), dt);
        input.consume_edges();

        emit_report(entity, &report, &mut events);
    }
}

fn emit_report(entity: Entity, report: &TickReport, events: &mut EventWriter<MovementEventFired>) {
    for event in &report.events {
        events.write(MovementEventFired {
            entity,
            event: *event,
        });
    }
}

/// Накопление смещений мыши (0..N событий между кадрами)
pub fn accumulate_look_motion(
    mut motions: EventReader<LookMotion>,
    mut query: Query<&mut MovementController>,
) {
    for motion in motions.read() {
        let Ok(mut controller) = query.get_mut(motion.entity) else {
            continue;
        };
        controller.push_look_delta(motion.delta);
    }
}

/// Render frame: look update + FOV
///
/// Yaw крутит Transform персонажа, pitch/FOV крутят CameraRig.
/// Физику не трогает: TransformBody здесь только ради rotate_yaw.
pub fn apply_look_and_fov(
    mut query: Query<(&mut MovementController, &mut Transform, &mut CameraRig)>,
) {
    for (mut controller, mut transform, mut rig) in query.iter_mut() {
        let mut body = TransformBody::new(&mut transform, GroundPlane::default(), 0.0, 0.0);
        controller.process_frame(&mut body, &mut *rig);
    }
}

/// System sets контроллера (для ordering внешних систем input)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// FixedUpdate: physics tick
    Physics,
    /// Update: look + FOV
    Frame,
}

/// Plugin контроллера движения
///
/// Регистрирует events и системы. Rapier сюда не входит:
/// для Rapier персонажей хост добавляет `RapierHostPlugin`.
pub struct MovementControllerPlugin;

impl Plugin for MovementControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MovementEventFired>()
            .add_event::<LookMotion>()
            .init_resource::<GroundPlane>()
            .add_systems(
                FixedUpdate,
                (drive_headless_bodies, drive_rapier_characters).in_set(MovementSet::Physics),
            )
            .add_systems(
                Update,
                (accumulate_look_motion, apply_look_and_fov)
                    .chain()
                    .in_set(MovementSet::Frame),
            );
    }
}

/// Компоненты headless персонажа
///
/// - Transform
/// - HeadlessBody marker
/// - MovementController + MovementInput
/// - CameraRig (pitch + FOV)
pub fn headless_character_bundle(position: Vec3, config: MovementConfig) -> impl Bundle {
    (
        Transform::from_translation(position),
        HeadlessBody,
        MovementController::new(config),
        MovementInput::default(),
        CameraRig {
            fov: config.base_fov,
            ..Default::default()
        },
    )
}

/// Spawn helper для headless персонажа
pub fn spawn_headless_character(
    commands: &mut Commands,
    position: Vec3,
    config: MovementConfig,
) -> Entity {
    commands.spawn(headless_character_bundle(position, config)).id()
}
