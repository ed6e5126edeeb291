//! Movement events

use bevy::prelude::*;

/// Что произошло с контроллером за один physics tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementEvent {
    /// Переход airborne → grounded (прыжки восстановлены)
    Landed,
    /// Прыжок; `airborne`: прыжок в воздухе (тратит air jump)
    Jumped { airborne: bool },
    /// Старт dash в направлении движения
    DashStarted { direction: Vec3 },
    /// Таймер dash истёк
    DashEnded,
}

/// Результат physics tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub grounded: bool,
    /// Скорость, переданная телу перед move_and_slide
    pub velocity: Vec3,
    /// События в порядке возникновения
    pub events: Vec<MovementEvent>,
}

impl TickReport {
    pub fn has(&self, event: &MovementEvent) -> bool {
        self.events.contains(event)
    }

    pub fn landed(&self) -> bool {
        self.has(&MovementEvent::Landed)
    }

    pub fn jumped(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, MovementEvent::Jumped { .. }))
    }

    pub fn dash_started(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, MovementEvent::DashStarted { .. }))
    }
}

/// ECS event: movement event конкретного entity (Bevy host)
#[derive(Event, Debug, Clone, Copy)]
pub struct MovementEventFired {
    pub entity: Entity,
    pub event: MovementEvent,
}
