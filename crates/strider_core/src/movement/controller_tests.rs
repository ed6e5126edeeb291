//! Tests for MovementController physics tick.

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use bevy::prelude::*;

    use crate::movement::{MovementConfig, MovementController, MovementEvent, TickInput};
    use crate::physics::fake::FakeBody;

    const DT: f32 = 0.016;
    const FORWARD: Vec2 = Vec2::new(0.0, 1.0);

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    fn dash(move_vector: Vec2) -> TickInput {
        TickInput {
            move_vector,
            dash: true,
            ..Default::default()
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_grounded_acceleration_one_tick() {
        let mut controller = MovementController::new(MovementConfig {
            acceleration: 20.0,
            max_speed: 12.0,
            ..Default::default()
        });
        let mut body = FakeBody::grounded();

        let report = controller.physics_process(&mut body, TickInput::moving(FORWARD), DT);

        // lerp(0, 12, 20 * 0.016 = 0.32) = 3.84
        assert!(approx(report.velocity.z, 3.84), "velocity.z = {}", report.velocity.z);
        assert!(approx(report.velocity.x, 0.0));
        assert_eq!(body.velocity, report.velocity);
        assert_eq!(body.slide_calls, 1);
    }

    #[test]
    fn test_floor_queried_once_per_tick() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::airborne();

        controller.physics_process(&mut body, dash(FORWARD), DT);
        controller.physics_process(&mut body, jump(), DT);

        assert_eq!(body.floor_queries.get(), 2);
    }

    #[test]
    fn test_direction_follows_body_facing() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::grounded();
        body.basis = Mat3::from_rotation_y(FRAC_PI_2);

        let report = controller.physics_process(&mut body, TickInput::moving(FORWARD), DT);

        // Локальный +Z после поворота на 90° вокруг Y смотрит в world +X
        assert!(approx(report.velocity.x, 3.84), "velocity.x = {}", report.velocity.x);
        assert!(approx(report.velocity.z, 0.0), "velocity.z = {}", report.velocity.z);
    }

    #[test]
    fn test_deceleration_without_input() {
        let mut controller = MovementController::default();
        controller.state.velocity = Vec3::new(0.0, 0.0, 12.0);
        controller.state.was_grounded_last_frame = true;
        let mut body = FakeBody::grounded();

        let report = controller.physics_process(&mut body, TickInput::default(), DT);

        // 12 + (0 - 12) * (10 * 0.016) = 10.08
        assert!(approx(report.velocity.z, 10.08), "velocity.z = {}", report.velocity.z);
    }

    #[test]
    fn test_air_acceleration_constants() {
        let mut controller = MovementController::new(MovementConfig {
            acceleration: 20.0,
            air_acceleration: 10.0,
            ..Default::default()
        });
        let mut body = FakeBody::airborne();

        let report = controller.physics_process(&mut body, TickInput::moving(FORWARD), DT);

        // 12 * (10 * 0.016) = 1.92
        assert!(approx(report.velocity.z, 1.92), "velocity.z = {}", report.velocity.z);
    }

    #[test]
    fn test_blend_factor_saturates_at_one() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::grounded();

        let report = controller.physics_process(&mut body, TickInput::moving(FORWARD), 1.0);

        assert!(approx(report.velocity.z, 12.0), "velocity.z = {}", report.velocity.z);
    }

    #[test]
    fn test_gravity_applies_only_airborne() {
        let mut controller = MovementController::default(); // gravity 20
        let mut body = FakeBody::airborne();

        controller.physics_process(&mut body, TickInput::default(), 0.5);
        assert!(approx(controller.state().vertical_speed, -10.0));
        assert!(approx(body.velocity.y, -10.0));

        controller.physics_process(&mut body, TickInput::default(), 0.5);
        assert!(approx(controller.state().vertical_speed, -20.0));
    }

    #[test]
    fn test_landing_edge_resets_once() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::airborne();

        // Два прыжка в воздухе, бюджет исчерпан, падаем
        controller.physics_process(&mut body, jump(), DT);
        controller.physics_process(&mut body, jump(), DT);
        controller.physics_process(&mut body, TickInput::default(), 1.0);
        assert_eq!(controller.jumps_remaining(), 0);
        assert!(controller.state().vertical_speed < 0.0);

        // Приземление
        body.on_floor = true;
        let report = controller.physics_process(&mut body, TickInput::default(), DT);
        assert!(report.landed());
        assert_eq!(controller.jumps_remaining(), 2);
        assert_eq!(controller.state().vertical_speed, 0.0);

        // Прыжок на земле, следующий grounded tick НЕ обнуляет vertical speed
        let report = controller.physics_process(&mut body, jump(), DT);
        assert!(!report.landed());
        assert_eq!(controller.state().vertical_speed, 15.0);

        let report = controller.physics_process(&mut body, TickInput::default(), DT);
        assert!(!report.landed());
        assert_eq!(controller.state().vertical_speed, 15.0);
        assert_eq!(report.velocity.y, 15.0);
    }

    #[test]
    fn test_jump_on_landing_tick_is_preserved() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::airborne();
        controller.physics_process(&mut body, TickInput::default(), 0.5);

        body.on_floor = true;
        let report = controller.physics_process(&mut body, jump(), DT);

        assert_eq!(
            report.events,
            vec![MovementEvent::Landed, MovementEvent::Jumped { airborne: false }]
        );
        assert_eq!(controller.state().vertical_speed, 15.0);
        assert_eq!(controller.jumps_remaining(), 1);
    }

    #[test]
    fn test_air_jump_budget() {
        let mut controller = MovementController::default(); // max_jumps 2
        let mut body = FakeBody::airborne();

        let report = controller.physics_process(&mut body, jump(), DT);
        assert!(report.has(&MovementEvent::Jumped { airborne: true }));
        assert_eq!(controller.jumps_remaining(), 1);

        controller.physics_process(&mut body, jump(), DT);
        assert_eq!(controller.jumps_remaining(), 0);

        // Бюджет пуст: прыжок отклонён, работает только гравитация
        let before = controller.state().vertical_speed;
        let report = controller.physics_process(&mut body, jump(), DT);
        assert!(!report.jumped());
        assert!(approx(controller.state().vertical_speed, before - 20.0 * DT));
        assert_eq!(controller.jumps_remaining(), 0);
    }

    #[test]
    fn test_grounded_jump_allowed_at_zero_budget() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::grounded();
        controller.physics_process(&mut body, TickInput::default(), DT);
        controller.state.jumps_remaining = 0;

        let report = controller.physics_process(&mut body, jump(), DT);

        assert!(report.jumped());
        assert_eq!(controller.state().vertical_speed, 15.0);
        assert_eq!(controller.jumps_remaining(), 0);
    }

    #[test]
    fn test_simple_preset_has_no_air_jump() {
        let mut controller = MovementController::new(MovementConfig::simple());
        let mut body = FakeBody::grounded();
        controller.physics_process(&mut body, TickInput::default(), DT);

        controller.physics_process(&mut body, jump(), DT);
        assert_eq!(controller.jumps_remaining(), 0);

        body.on_floor = false;
        let report = controller.physics_process(&mut body, jump(), DT);
        assert!(!report.jumped());
    }

    #[test]
    fn test_dash_rejected_without_move_input() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::grounded();

        let report = controller.physics_process(&mut body, dash(Vec2::ZERO), DT);

        assert!(!report.dash_started());
        assert!(!controller.is_dashing());
        assert_eq!(controller.state().dash.last_started_at, None);
    }

    #[test]
    fn test_dash_disabled_by_config() {
        let mut controller = MovementController::new(MovementConfig::simple());
        let mut body = FakeBody::grounded();

        let report = controller.physics_process(&mut body, dash(FORWARD), DT);

        assert!(!report.dash_started());
        assert!(!controller.is_dashing());
    }

    #[test]
    fn test_dash_duration_and_cooldown_scenario() {
        let mut controller = MovementController::new(MovementConfig {
            dash_speed: 20.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            ..Default::default()
        });
        let mut body = FakeBody::grounded();
        let dt = 0.05;

        // t = 0: первый dash разрешён сразу
        let report = controller.physics_process(&mut body, dash(FORWARD), dt);
        assert!(report.dash_started());
        assert!(controller.is_dashing());
        assert_eq!(controller.state().dash.last_started_at, Some(0.0));
        assert!(approx(report.velocity.z, 20.0));

        // Пока идёт dash, blend не работает, скорость держится
        for _ in 0..2 {
            let report = controller.physics_process(&mut body, TickInput::default(), dt);
            assert!(controller.is_dashing());
            assert!(approx(report.velocity.z, 20.0));
        }

        // К 0.25 сек таймер точно истёк
        let mut ended = 0;
        for _ in 0..2 {
            let report = controller.physics_process(&mut body, TickInput::default(), dt);
            ended += report
                .events
                .iter()
                .filter(|event| **event == MovementEvent::DashEnded)
                .count();
        }
        assert_eq!(ended, 1);
        assert!(!controller.is_dashing());

        // До t = 0.5 (10 тиков)
        for _ in 0..5 {
            controller.physics_process(&mut body, TickInput::moving(FORWARD), dt);
        }
        assert!((controller.state().elapsed - 0.5).abs() < 1e-6);

        // Повторный dash на t = 0.5 при cooldown 1.0, отклонён
        let report = controller.physics_process(&mut body, dash(FORWARD), dt);
        assert!(!report.dash_started());
        assert!(!controller.is_dashing());
        assert_eq!(controller.state().dash.last_started_at, Some(0.0));
    }

    #[test]
    fn test_dash_allowed_after_cooldown() {
        let mut controller = MovementController::new(MovementConfig {
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            ..Default::default()
        });
        let mut body = FakeBody::grounded();
        let dt = 0.25;

        assert!(controller.physics_process(&mut body, dash(FORWARD), dt).dash_started());

        // t = 0.25, 0.5, 0.75, cooldown
        for _ in 0..3 {
            let report = controller.physics_process(&mut body, dash(FORWARD), dt);
            assert!(!report.dash_started());
        }

        // t = 1.0, cooldown ровно истёк
        let report = controller.physics_process(&mut body, dash(FORWARD), dt);
        assert!(report.dash_started());
        assert_eq!(controller.state().dash.last_started_at, Some(1.0));
    }

    #[test]
    fn test_dash_cooldown_expires_after_week_long_session() {
        let mut controller = MovementController::new(MovementConfig {
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            ..Default::default()
        });
        // ~7 суток непрерывной игры
        controller.state.elapsed = 7.0 * 24.0 * 3600.0;
        let mut body = FakeBody::grounded();
        let dt = 1.0 / 60.0;

        assert!(controller.physics_process(&mut body, dash(FORWARD), dt).dash_started());
        let started_at = controller.state().elapsed;

        let mut redash_tick = None;
        for tick in 1..=120 {
            if controller.physics_process(&mut body, dash(FORWARD), dt).dash_started() {
                redash_tick = Some(tick);
                break;
            }
        }

        // Часы продолжают идти, cooldown истекает через ~60 тиков
        assert!(controller.state().elapsed > started_at);
        assert!(matches!(redash_tick, Some(60..=61)), "redash at {:?}", redash_tick);
    }

    #[test]
    fn test_dash_ignored_while_dashing() {
        let mut controller = MovementController::new(MovementConfig {
            dash_duration: 10.0,
            dash_cooldown: 0.0,
            ..Default::default()
        });
        let mut body = FakeBody::grounded();

        controller.physics_process(&mut body, dash(FORWARD), DT);
        let report = controller.physics_process(&mut body, dash(Vec2::new(1.0, 0.0)), DT);

        assert!(!report.dash_started());
        // Направление первого dash сохраняется
        assert!(approx(report.velocity.z, 20.0));
        assert!(approx(report.velocity.x, 0.0));
    }

    #[test]
    fn test_blend_resumes_after_dash() {
        let mut controller = MovementController::new(MovementConfig {
            dash_duration: 0.1,
            ..Default::default()
        });
        let mut body = FakeBody::grounded();
        let dt = 0.125;

        controller.physics_process(&mut body, dash(FORWARD), dt);
        assert!(!controller.is_dashing());

        // Dash закончился, скорость тянется обратно к 0 (decel 10 * 0.125 = 1.25 → factor 1)
        let report = controller.physics_process(&mut body, TickInput::default(), dt);
        assert!(approx(report.velocity.z, 0.0), "velocity.z = {}", report.velocity.z);
    }

    #[test]
    fn test_dash_keeps_vertical_speed_from_gravity() {
        let mut controller = MovementController::default();
        let mut body = FakeBody::airborne();

        let report = controller.physics_process(&mut body, dash(FORWARD), 0.1);

        assert!(report.dash_started());
        assert!(approx(report.velocity.y, -2.0));
        assert!(approx(report.velocity.z, 20.0));
    }
}
