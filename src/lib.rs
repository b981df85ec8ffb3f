//! Pong Duel - a headless two-paddle Pong simulation engine
//!
//! This crate is the authoritative game core only: a fixed-rule physics and
//! state machine advanced one tick at a time. Rendering, input capture, and
//! the frame loop are host concerns that talk to the engine through plain
//! data (`GameState` fields out, `PaddleIntent` and lifecycle commands in).
//! Renderers draw from those fields plus the fixed geometry in [`consts`]:
//! paddles are [`consts::PADDLE_WIDTH`] x [`consts::PADDLE_HEIGHT`] rectangles
//! docked at the arena edges, and the ball is a disc of
//! [`consts::BALL_RADIUS`] (half of [`consts::BALL_SIZE`]) centered on
//! `GameState::ball`.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, collisions, tick step)

pub mod sim;

pub use sim::{Arena, Ball, GamePhase, GameState, Paddle, PaddleIntent, tick};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults - player docks at the left edge, computer at the right
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Player paddle travel per tick
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_RADIUS: f32 = BALL_SIZE / 2.0;
    /// Horizontal serve speed (sign picks the receiving side)
    pub const SERVE_SPEED: f32 = 5.0;
    /// Re-serve vertical speed is drawn from [-SERVE_SPIN_MAX, SERVE_SPIN_MAX)
    pub const SERVE_SPIN_MAX: f32 = 5.0;

    /// Computer paddle travel per tick (slower than the player, on purpose)
    pub const CPU_PADDLE_SPEED: f32 = 2.0;
    /// Tracking dead zone around the computer paddle center. The paddle holds
    /// while the ball center is within this band, which keeps the opponent
    /// competent but beatable.
    pub const CPU_DEAD_ZONE: f32 = 35.0;
}
