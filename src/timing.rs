//! Phase timing.
//!
//! Wraps a closure, measures how long it ran and logs the elapsed time under
//! the phase name.

use std::time::{Duration, Instant};

use tracing::Level;

/// Runs `f`, logs its duration at `level` and returns its output with the duration.
pub fn timed_at<T, F>(level: Level, phase: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let output = f();
    let elapsed = started.elapsed();

    match level {
        Level::ERROR => tracing::error!(phase, ?elapsed, "Phase finished"),
        Level::WARN => tracing::warn!(phase, ?elapsed, "Phase finished"),
        Level::INFO => tracing::info!(phase, ?elapsed, "Phase finished"),
        Level::DEBUG => tracing::debug!(phase, ?elapsed, "Phase finished"),
        _ => tracing::trace!(phase, ?elapsed, "Phase finished"),
    }

    (output, elapsed)
}

/// Runs `f` and logs its duration at `info`.
pub fn timed<T, F>(phase: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    timed_at(Level::INFO, phase, f).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_output() {
        assert_eq!(timed("sum", || 2 + 2), 4);
    }

    #[test]
    fn test_timed_at_measures_duration() {
        let (value, elapsed) = timed_at(Level::DEBUG, "sleep", || {
            std::thread::sleep(Duration::from_millis(5));
            "done"
        });
        assert_eq!(value, "done");
        assert!(elapsed >= Duration::from_millis(5));
    }
}
