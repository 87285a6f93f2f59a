//! Animated number counters for the balance cards.
//!
//! A counter eases linearly from zero to its target over a fixed duration,
//! stepping on a ~60fps timer. The interpolation lives in [`counter_value`]
//! so the math can be tested without running the timer.

use dioxus::prelude::*;

use crate::time::sleep_ms;

const STEP_MS: u64 = 16;

/// Value of the counter after `elapsed_ms` of a `duration_ms` animation.
/// Progress is clamped, so the counter never overshoots its target.
pub fn counter_value(elapsed_ms: f64, duration_ms: f64, end: f64) -> f64 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    progress * end
}

/// Hook: returns a signal that animates from 0 to `end` over `duration_ms`.
pub fn use_animated_counter(end: f64, duration_ms: u32) -> Signal<f64> {
    let mut value = use_signal(|| 0.0);

    use_effect(move || {
        spawn(async move {
            let duration = duration_ms as f64;
            let mut elapsed = 0.0;
            loop {
                sleep_ms(STEP_MS).await;
                elapsed += STEP_MS as f64;
                value.set(counter_value(elapsed, duration, end));
                if elapsed >= duration {
                    break;
                }
            }
        });
    });

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero_and_ends_at_target() {
        assert_eq!(counter_value(0.0, 2000.0, 32440.99), 0.0);
        assert_eq!(counter_value(2000.0, 2000.0, 32440.99), 32440.99);
    }

    #[test]
    fn test_counter_never_overshoots() {
        assert_eq!(counter_value(5000.0, 2000.0, 100.0), 100.0);
    }

    #[test]
    fn test_counter_is_monotone() {
        let mut last = -1.0;
        for step in 0..=125 {
            let v = counter_value(step as f64 * 16.0, 2000.0, 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        assert_eq!(counter_value(0.0, 0.0, 42.0), 42.0);
    }
}
