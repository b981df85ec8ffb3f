//! Game state and core simulation types
//!
//! Everything the renderer and scoreboard read lives here, along with the
//! run-mode state machine (`NotStarted -> Running <-> Paused`).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current run mode of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session created, waiting for the start command
    NotStarted,
    /// Active gameplay, ticks advance the world
    Running,
    /// Frozen; ticks are no-ops until unpaused
    Paused,
}

/// The playing field. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Highest legal paddle top-edge position. Floored at zero so a
    /// degenerate host-configured arena shorter than a paddle still yields a
    /// valid clamp range.
    pub fn paddle_max_y(&self) -> f32 {
        (self.height - PADDLE_HEIGHT).max(0.0)
    }
}

/// A paddle, identified by which arena edge it docks at. Only the vertical
/// offset of the top edge varies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered in the arena's legal travel range
    pub fn centered(arena: &Arena) -> Self {
        Self {
            y: arena.paddle_max_y() / 2.0,
        }
    }

    /// Move by `dy`, clamped so the paddle stays fully inside the arena.
    /// Every mutation goes through here; the in-bounds invariant holds by
    /// construction.
    pub fn move_by(&mut self, dy: f32, arena: &Arena) {
        self.y = (self.y + dy).clamp(0.0, arena.paddle_max_y());
    }

    /// Vertical center of the paddle face
    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }
}

/// The ball. Position is its center; velocity sign encodes direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at arena center with the initial serve velocity
    pub fn serve(arena: &Arena) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::new(SERVE_SPEED, SERVE_SPEED),
        }
    }

    /// Re-serve after a point: recenter, reverse the horizontal direction the
    /// ball was traveling (it heads back toward the side that just scored
    /// against), and draw a fresh vertical speed for rally variety.
    pub fn reserve(&mut self, arena: &Arena, rng: &mut Pcg32) {
        use rand::Rng;
        self.pos = arena.center();
        self.vel.x = -self.vel.x;
        self.vel.y = rng.random_range(-SERVE_SPIN_MAX..SERVE_SPIN_MAX);
    }
}

/// Complete game state (deterministic, serializable)
///
/// Mutated in place by exactly one caller per tick; all fields the host
/// renders from are public and read-only at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Playing field, fixed at session start
    pub arena: Arena,
    /// Run mode state machine
    pub phase: GamePhase,
    /// Human paddle, left edge
    pub player: Paddle,
    /// Computer paddle, right edge
    pub cpu: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub cpu_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seeded RNG for re-serve angles, the only randomized behavior
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session with the default 800x600 arena
    pub fn new(seed: u64) -> Self {
        Self::with_arena(seed, Arena::default())
    }

    /// Create a session with a host-configured arena. The world is laid out
    /// (centered paddles and ball) but frozen until [`GameState::start`].
    pub fn with_arena(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            arena,
            phase: GamePhase::NotStarted,
            player: Paddle::centered(&arena),
            cpu: Paddle::centered(&arena),
            ball: Ball::serve(&arena),
            player_score: 0,
            cpu_score: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start the session: `NotStarted -> Running`, one-way. Re-initializes
    /// paddles, ball, and scores so a session always begins from the same
    /// layout. Has no effect once running or paused.
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.player = Paddle::centered(&self.arena);
        self.cpu = Paddle::centered(&self.arena);
        self.ball = Ball::serve(&self.arena);
        self.player_score = 0;
        self.cpu_score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::info!("session started (seed {})", self.seed);
    }

    /// Toggle `Running <-> Paused`. Touches nothing but the phase, so pausing
    /// and unpausing leaves the world bit-for-bit unchanged. No effect before
    /// the session starts.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("resumed");
            }
            GamePhase::NotStarted => {}
        }
    }
}
