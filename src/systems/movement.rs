//! Movement input handling and velocity/position integration.
//!
//! The integrator reads the speed the sprint system pushed into
//! [`MoveSpeed`]; it never computes speed itself.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};

use crate::components::{
    MoveIntent, MoveSpeed, MovementState, Orientation, Position, SprintState, Velocity,
};
use crate::constants::{GRAVITY, GROUND_HEIGHT, LOOK_SENSITIVITY, PITCH_LIMIT};
use crate::events::{EventQueue, GameEvent};
use crate::systems::stamina;
use crate::time_system::{GameClock, TimerScheduler};

/// Record new movement axes for the character.
///
/// Non-zero intent while sprinting re-asserts the drain loop (stop regen,
/// start drain); the start guards make this idempotent.
pub fn handle_move_input(
    world: &mut World,
    clock: &GameClock,
    scheduler: &mut TimerScheduler,
    entity: Entity,
    axes: Vec2,
) {
    let sprinting = {
        let Ok(mut intent) = world.get::<&mut MoveIntent>(entity) else {
            return;
        };
        intent.0 = axes;
        world
            .get::<&SprintState>(entity)
            .map(|s| s.sprinting)
            .unwrap_or(false)
    };

    if axes != Vec2::ZERO && sprinting {
        stamina::stop_regen(world, scheduler, entity);
        stamina::start_drain(world, clock, scheduler, entity);
    }
}

/// Apply look axes to the view orientation. Yaw wraps, pitch clamps to
/// ±89° so the camera never flips.
pub fn handle_look_input(world: &mut World, entity: Entity, axes: Vec2) {
    let Ok(mut orient) = world.get::<&mut Orientation>(entity) else {
        return;
    };
    orient.yaw = (orient.yaw + axes.x * LOOK_SENSITIVITY).rem_euclid(std::f32::consts::TAU);
    orient.pitch = (orient.pitch + axes.y * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Integrate one step of movement for every mobile entity.
///
/// Horizontal velocity is the yaw-rotated intent (clamped to unit length)
/// times the current speed; vertical velocity accumulates gravity while
/// airborne. Landing snaps to ground height and emits `Landed`.
pub fn integrate(world: &mut World, dt: f32, events: &mut EventQueue) {
    puffin::profile_function!();

    let mut landed = Vec::new();
    for (id, (intent, orient, speed, movement, vel, pos)) in world.query_mut::<(
        &MoveIntent,
        &Orientation,
        &MoveSpeed,
        &mut MovementState,
        &mut Velocity,
        &mut Position,
    )>() {
        let axes = intent.0.clamp_length_max(1.0);
        let horizontal = (orient.forward() * axes.y + orient.right() * axes.x) * speed.current;

        if !movement.grounded {
            movement.vertical_velocity -= GRAVITY * dt;
        }

        vel.0 = Vec3::new(horizontal.x, movement.vertical_velocity, horizontal.y);
        pos.0 += vel.0 * dt;

        if !movement.grounded && pos.0.y <= GROUND_HEIGHT {
            pos.0.y = GROUND_HEIGHT;
            movement.grounded = true;
            movement.vertical_velocity = 0.0;
            vel.0.y = 0.0;
            landed.push(id);
        }
    }

    for entity in landed {
        events.push(GameEvent::Landed { entity });
    }
}
