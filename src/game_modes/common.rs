//! Common utilities shared by the interactive game modes

use std::time::{Duration, Instant};

/// Frame budget for a target frame rate (a zero rate is treated as 1 FPS)
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.max(1))
}

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Call at the end of each loop iteration. Sleeps for whatever is left of the
/// frame budget if the frame finished early.
///
/// # Example
/// ```rust,no_run
/// use std::time::Instant;
/// # use pong_bench::game_modes::common::{frame_duration, limit_frame_rate};
/// let frame_start = Instant::now();
/// // ... game loop logic ...
/// limit_frame_rate(frame_start, frame_duration(60));
/// ```
pub fn limit_frame_rate(frame_start: Instant, budget: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < budget {
        std::thread::sleep(budget - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(60), Duration::from_millis(16));
        assert_eq!(frame_duration(0), Duration::from_millis(1000));
    }
}
