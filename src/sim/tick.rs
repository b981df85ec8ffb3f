//! Per-tick simulation step
//!
//! Advances the world by one discrete tick: paddle input, ball translation,
//! collision response, computer tracking, scoring, re-serve. Everything runs
//! in a fixed order so identical inputs produce identical trajectories.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// The player's intended paddle direction for this tick, sampled by the host
/// from whatever raw key state it observes. A snapshot, not an event queue:
/// only the most recent direction matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    Down,
    /// No movement requested (no key held, or both held)
    #[default]
    Hold,
}

/// Advance the game state by one tick
///
/// No-op unless the session is running; paused and not-yet-started states
/// pass through untouched. Total over its inputs: nothing here can fail.
pub fn tick(state: &mut GameState, intent: PaddleIntent) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.time_ticks += 1;

    // Player paddle, clamped to the arena
    match intent {
        PaddleIntent::Up => state.player.move_by(-PADDLE_SPEED, &state.arena),
        PaddleIntent::Down => state.player.move_by(PADDLE_SPEED, &state.arena),
        PaddleIntent::Hold => {}
    }

    // Ball translation
    state.ball.pos += state.ball.vel;

    // Top/bottom wall bounce. Position is not clamped; the flipped velocity
    // brings the ball back next tick.
    if collision::hits_horizontal_wall(&state.ball, &state.arena) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle reflections: only the horizontal component flips, no angle
    // change and no speed-up
    if collision::hits_player_paddle(&state.ball, &state.player) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if collision::hits_cpu_paddle(&state.ball, &state.cpu, &state.arena) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    track_ball(state);

    // Scoring: the ball cannot be past both edges at once, so at most one
    // side scores per tick
    if state.ball.pos.x <= 0.0 {
        state.cpu_score += 1;
        log::debug!(
            "cpu scores: {} - {} (tick {})",
            state.player_score,
            state.cpu_score,
            state.time_ticks
        );
        state.ball.reserve(&state.arena, &mut state.rng);
    } else if state.ball.pos.x >= state.arena.width {
        state.player_score += 1;
        log::debug!(
            "player scores: {} - {} (tick {})",
            state.player_score,
            state.cpu_score,
            state.time_ticks
        );
        state.ball.reserve(&state.arena, &mut state.rng);
    }
}

/// Computer paddle tracking rule
///
/// Chase the ball only when it is more than `CPU_DEAD_ZONE` away from the
/// paddle center, stepping a fixed `CPU_PADDLE_SPEED` per tick. The dead zone
/// and the slow step are the opponent's entire skill ceiling; both values are
/// deliberate.
fn track_ball(state: &mut GameState) {
    let center = state.cpu.center();
    let ball_y = state.ball.pos.y;
    if center < ball_y - CPU_DEAD_ZONE {
        state.cpu.move_by(CPU_PADDLE_SPEED, &state.arena);
    } else if center > ball_y + CPU_DEAD_ZONE {
        state.cpu.move_by(-CPU_PADDLE_SPEED, &state.arena);
    }
}
