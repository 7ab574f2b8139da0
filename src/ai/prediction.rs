// Trajectory helpers shared by the scripted controllers

use crate::game::{GameState, Side};

/// Is the ball heading toward this side's goal?
pub fn is_ball_moving_toward(state: &GameState) -> bool {
    match state.my_side {
        Side::Right => state.ball_vx > 0,
        Side::Left => state.ball_vx < 0,
    }
}

/// Fold a y value into `[0, height]` as if it bounced between the top and bottom walls.
///
/// This is a triangle wave with period `2 * height`. A non-positive height has no
/// room to bounce in and maps everything to 0.
pub fn reflect_y(y: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * height;
    let reflected = y.rem_euclid(period);
    if reflected > height {
        period - reflected
    } else {
        reflected
    }
}

/// Estimate where the ball will cross this side's paddle x coordinate.
///
/// Straight-line extrapolation with wall reflections. If the ball has no
/// horizontal speed, or has already passed the paddle, the current ball y is
/// the best guess.
pub fn predict_intercept_y(state: &GameState) -> f64 {
    if state.ball_vx == 0 {
        return state.ball_y as f64;
    }
    let steps = (state.my_paddle_x - state.ball_x) as f64 / state.ball_vx as f64;
    if steps < 0.0 {
        return state.ball_y as f64;
    }
    let predicted_y = state.ball_y as f64 + state.ball_vy as f64 * steps;
    reflect_y(predicted_y, state.window_height as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 500.0;

    fn state(side: Side, ball: (i32, i32), velocity: (i32, i32)) -> GameState {
        let (my_x, their_x) = match side {
            Side::Left => (30, 758),
            Side::Right => (758, 30),
        };
        GameState {
            window_width: 800,
            window_height: 500,
            paddle_height: 90,
            paddle_speed: 6,
            my_side: side,
            my_paddle_x: my_x,
            my_paddle_y: 205,
            opponent_paddle_x: their_x,
            opponent_paddle_y: 205,
            ball_x: ball.0,
            ball_y: ball.1,
            ball_vx: velocity.0,
            ball_vy: velocity.1,
        }
    }

    #[test]
    fn test_reflect_inside_range_is_identity() {
        for v in [0.0, 1.0, 250.0, 499.5, 500.0] {
            assert_eq!(reflect_y(v, HEIGHT), v);
        }
    }

    #[test]
    fn test_reflect_folds_both_walls() {
        assert_eq!(reflect_y(-30.0, HEIGHT), 30.0);
        assert_eq!(reflect_y(530.0, HEIGHT), 470.0);
        assert_eq!(reflect_y(1030.0, HEIGHT), 30.0);
        assert_eq!(reflect_y(-1030.0, HEIGHT), 30.0);
    }

    #[test]
    fn test_reflect_is_periodic_and_bounded() {
        let mut v = -3000.0;
        while v < 3000.0 {
            let r = reflect_y(v, HEIGHT);
            assert!((0.0..=HEIGHT).contains(&r), "reflect_y({v}) = {r}");
            assert!((reflect_y(v + 2.0 * HEIGHT, HEIGHT) - r).abs() < 1e-9);
            v += 37.25;
        }
    }

    #[test]
    fn test_reflect_degenerate_height() {
        assert_eq!(reflect_y(123.0, 0.0), 0.0);
        assert_eq!(reflect_y(-5.0, -10.0), 0.0);
    }

    #[test]
    fn test_moving_toward() {
        assert!(is_ball_moving_toward(&state(Side::Right, (400, 250), (5, 0))));
        assert!(!is_ball_moving_toward(&state(Side::Left, (400, 250), (5, 0))));
        assert!(is_ball_moving_toward(&state(Side::Left, (400, 250), (-5, 0))));
        // Stationary ball is not approaching anyone
        assert!(!is_ball_moving_toward(&state(Side::Left, (400, 250), (0, 3))));
        assert!(!is_ball_moving_toward(&state(Side::Right, (400, 250), (0, 3))));
    }

    #[test]
    fn test_predict_straight_line() {
        let s = state(Side::Right, (408, 250), (5, 0));
        assert_eq!(predict_intercept_y(&s), 250.0);

        // 70 steps at vy=2 => +140
        let s = state(Side::Right, (408, 100), (5, 2));
        assert_eq!(predict_intercept_y(&s), 240.0);
    }

    #[test]
    fn test_predict_with_wall_bounce() {
        // 70 steps at vy=-5 => y = 100 - 350 = -250 => reflects to 250
        let s = state(Side::Right, (408, 100), (5, -5));
        assert_eq!(predict_intercept_y(&s), 250.0);
    }

    #[test]
    fn test_predict_fallbacks() {
        let s = state(Side::Right, (400, 321), (0, 4));
        assert_eq!(predict_intercept_y(&s), 321.0);

        // Ball moving away: negative time to arrival
        let s = state(Side::Right, (400, 321), (-5, 4));
        assert_eq!(predict_intercept_y(&s), 321.0);
    }
}
