//! Collision predicates
//!
//! Pure tests over ball and paddle positions. The tick step decides what to
//! do with a hit (reflect, score); nothing here mutates state.
//!
//! Edge policy follows the reference behavior exactly: all comparisons are
//! inclusive, and positions are never clamped back inside the arena. A ball
//! may sit transiently past a wall for one tick; the reflected velocity pulls
//! it back on the next.

use crate::consts::*;

use super::state::{Arena, Ball, Paddle};

/// Ball touching or past the top or bottom wall
pub fn hits_horizontal_wall(ball: &Ball, arena: &Arena) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= arena.height
}

/// Ball within the left paddle's strike window
pub fn hits_player_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x <= PADDLE_WIDTH && in_paddle_span(ball.pos.y, paddle)
}

/// Ball within the right paddle's strike window
pub fn hits_cpu_paddle(ball: &Ball, paddle: &Paddle, arena: &Arena) -> bool {
    ball.pos.x >= arena.width - PADDLE_WIDTH && in_paddle_span(ball.pos.y, paddle)
}

/// Ball center between the paddle's top and bottom edges, inclusive
fn in_paddle_span(ball_y: f32, paddle: &Paddle) -> bool {
    ball_y >= paddle.y && ball_y <= paddle.y + PADDLE_HEIGHT
}
