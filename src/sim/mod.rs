//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick rules only (no wall-clock time, no dt)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drives it: sample input, call [`tick`] once per frame, hand the
//! state to the renderer.

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Arena, Ball, GamePhase, GameState, Paddle};
pub use tick::{PaddleIntent, tick};
