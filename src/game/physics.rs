use rand::Rng;

use crate::config::PhysicsConfig;

use super::state::{Court, Move, Rect, Score, Velocity};

/// What happened during a single physics step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub paddle_collision: bool,
    pub goal_scored: bool,
}

impl PhysicsEvents {
    /// A paddle returned the ball and nobody scored this frame.
    pub fn rally_hit(&self) -> bool {
        self.paddle_collision && !self.goal_scored
    }
}

/// Advance the court by one frame and report what happened.
pub fn update_with_events<R: Rng + ?Sized>(
    court: &mut Court,
    physics: &PhysicsConfig,
    rng: &mut R,
) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    let before = court.velocity;
    let score_before = court.score;

    let (velocity, score) = advance(
        &mut court.ball,
        &court.left_paddle,
        &court.right_paddle,
        court.velocity,
        court.score,
        physics,
        rng,
    );

    events.goal_scored = score != score_before;
    // Only a paddle flips the horizontal direction
    events.paddle_collision = before.vx.signum() * velocity.vx.signum() < 0;

    court.velocity = velocity;
    court.score = score;
    events
}

/// Move the ball one frame, resolve wall and paddle collisions, and apply scoring.
///
/// Returns the new velocity and score. The ball rect is mutated in place; paddles
/// are read-only here.
pub fn advance<R: Rng + ?Sized>(
    ball: &mut Rect,
    left_paddle: &Rect,
    right_paddle: &Rect,
    velocity: Velocity,
    score: Score,
    physics: &PhysicsConfig,
    rng: &mut R,
) -> (Velocity, Score) {
    let Velocity { mut vx, mut vy } = velocity;
    let mut score = score;

    ball.x += vx;
    ball.y += vy;

    // Reflect only; the ball may sit inside the wall for a frame
    if ball.top() <= 0 || ball.bottom() >= physics.window_height {
        vy = -vy;
    }

    // Direction gate keeps a hit from being processed twice while the ball
    // is still overlapping the paddle
    if ball.collides_with(left_paddle) && vx < 0 {
        ball.set_left(left_paddle.right());
        (vx, vy) = bounce_off_paddle(ball, left_paddle, vx, vy, physics);
    } else if ball.collides_with(right_paddle) && vx > 0 {
        ball.set_right(right_paddle.left());
        (vx, vy) = bounce_off_paddle(ball, right_paddle, vx, vy, physics);
    }

    if ball.left() <= 0 {
        score.right += 1;
        let v = reset_ball(ball, physics, rng);
        (vx, vy) = (v.vx, v.vy);
    } else if ball.right() >= physics.window_width {
        score.left += 1;
        let v = reset_ball(ball, physics, rng);
        (vx, vy) = (v.vx, v.vy);
    }

    (Velocity::new(vx, vy), score)
}

/// Reverse horizontal direction and add spin based on where the ball met the paddle.
///
/// Contact near the paddle edges adds more vertical speed than contact near the
/// center. The result is clamped to `ball_max_y_speed` in both directions.
fn bounce_off_paddle(
    ball: &Rect,
    paddle: &Rect,
    vx: i32,
    vy: i32,
    physics: &PhysicsConfig,
) -> (i32, i32) {
    let vx = -vx;

    let half_height = physics.paddle_height as f64 / 2.0;
    let relative_hit = (ball.center_y() - paddle.center_y()) as f64 / half_height;
    // `as` truncates toward zero
    let spin = (relative_hit * physics.hit_spin as f64) as i32;

    let max = physics.ball_max_y_speed;
    let vy = vy.saturating_add(spin).clamp(-max, max);

    (vx, vy)
}

/// Center the ball and pick a fresh diagonal direction at the starting speed.
pub fn reset_ball<R: Rng + ?Sized>(ball: &mut Rect, physics: &PhysicsConfig, rng: &mut R) -> Velocity {
    ball.set_center(physics.window_width / 2, physics.window_height / 2);
    let x_direction = if rng.gen_bool(0.5) { 1 } else { -1 };
    let y_direction = if rng.gen_bool(0.5) { 1 } else { -1 };
    Velocity::new(
        physics.ball_start_speed * x_direction,
        physics.ball_start_speed * y_direction,
    )
}

/// Keep a paddle fully inside the window.
pub fn clamp_paddle(paddle: &mut Rect, physics: &PhysicsConfig) {
    if paddle.top() < 0 {
        paddle.set_top(0);
    }
    if paddle.bottom() > physics.window_height {
        paddle.set_bottom(physics.window_height);
    }
}

/// Apply one frame of paddle movement, then clamp.
pub fn move_paddle(paddle: &mut Rect, mv: Move, physics: &PhysicsConfig) {
    paddle.y += mv.delta() * physics.paddle_speed;
    clamp_paddle(paddle, physics);
}
