use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;

use super::physics;

/// Axis-aligned rectangle in window pixels (top-left origin, y grows downward).
///
/// Paddles and the ball are both rectangles. Width and height never change after
/// creation; only the position is moved each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    /// Strict overlap test. Rectangles that only share an edge do not collide,
    /// and an empty rectangle never collides with anything.
    pub fn collides_with(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Per-frame displacement of the ball. Positive vx = rightward, positive vy = downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Discrete vertical intent chosen by a controller each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Move {
    Up,
    #[default]
    Stay,
    Down,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Up, Move::Stay, Move::Down];

    /// Signed paddle direction: -1 up, 0 stay, 1 down.
    pub fn delta(self) -> i32 {
        match self {
            Move::Up => -1,
            Move::Stay => 0,
            Move::Down => 1,
        }
    }
}

impl From<i32> for Move {
    fn from(raw: i32) -> Self {
        match raw.signum() {
            -1 => Move::Up,
            1 => Move::Down,
            _ => Move::Stay,
        }
    }
}

/// Coerce any integer intent into -1, 0 or 1.
pub fn normalize(raw: i32) -> i32 {
    Move::from(raw).delta()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn leader(&self) -> Option<Side> {
        match self.left.cmp(&self.right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Authoritative court state: ball, both paddles, ball velocity and score.
///
/// Only the match that owns a `Court` mutates it. Controllers see it through
/// [`GameState`](super::GameState) snapshots.
#[derive(Debug, Clone)]
pub struct Court {
    pub ball: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub velocity: Velocity,
    pub score: Score,
}

impl Court {
    /// Paddles vertically centred at their margins, ball served from the center.
    pub fn new<R: Rng + ?Sized>(physics: &PhysicsConfig, rng: &mut R) -> Self {
        let paddle_top = physics.window_height / 2 - physics.paddle_height / 2;
        let left_paddle = Rect::new(
            physics.paddle_margin,
            paddle_top,
            physics.paddle_width,
            physics.paddle_height,
        );
        let right_paddle = Rect::new(
            physics.window_width - physics.paddle_margin - physics.paddle_width,
            paddle_top,
            physics.paddle_width,
            physics.paddle_height,
        );

        let mut ball = Rect::new(0, 0, physics.ball_size, physics.ball_size);
        let velocity = physics::reset_ball(&mut ball, physics, rng);

        Self {
            ball,
            left_paddle,
            right_paddle,
            velocity,
            score: Score::default(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Rect {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}
