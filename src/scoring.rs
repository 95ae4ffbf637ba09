//! Round scoring.
//!
//! A round is worth [`BASE_POINTS`] scaled by two multipliers: one for how
//! many attempts it took and one for how long it took. Totals across rounds
//! are a plain sum kept by the caller.

use serde::{Deserialize, Serialize};

use crate::constants::scoring::{
    ATTEMPT_PENALTY, BASE_POINTS, GRACE_SECONDS, MIN_ATTEMPT_MULTIPLIER, MIN_TIME_MULTIPLIER,
    SLOW_SECONDS,
};

/// Multiplier for the 1-based attempt that found the answer.
///
/// 1.00, 0.85, 0.70, 0.55, 0.40 for attempts one to five, then 0.25.
/// Attempt 0 counts as the first.
pub fn attempt_multiplier(attempt: u32) -> f64 {
    let extra = attempt.max(1) - 1;
    (1.0 - ATTEMPT_PENALTY * f64::from(extra)).max(MIN_ATTEMPT_MULTIPLIER)
}

/// Multiplier for the seconds spent before answering.
///
/// Full value under ten seconds, 0.30 past two minutes, logarithmic decay in
/// between. Negative or NaN durations count as zero.
pub fn time_multiplier(elapsed_seconds: f64) -> f64 {
    let elapsed = if elapsed_seconds.is_nan() { 0.0 } else { elapsed_seconds.max(0.0) };

    if elapsed < GRACE_SECONDS {
        return 1.0;
    }
    if elapsed > SLOW_SECONDS {
        return MIN_TIME_MULTIPLIER;
    }

    let decay = (elapsed / GRACE_SECONDS).ln() / (SLOW_SECONDS / GRACE_SECONDS).ln();
    (1.0 - (1.0 - MIN_TIME_MULTIPLIER) * decay).clamp(MIN_TIME_MULTIPLIER, 1.0)
}

/// Points for answering on `attempt` after `elapsed_seconds`.
///
/// Never fails: out-of-range inputs are clamped first.
pub fn score(attempt: u32, elapsed_seconds: f64) -> u32 {
    let raw =
        f64::from(BASE_POINTS) * attempt_multiplier(attempt) * time_multiplier(elapsed_seconds);
    // raw is within 0..=BASE_POINTS
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = raw.round() as u32;
    points
}

/// A submitted guess, as seen by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessAttempt {
    /// What the player typed.
    pub guess: String,
    /// 1-based attempt index within the round.
    pub attempt: u32,
    /// Seconds since the round started.
    pub elapsed_seconds: f64,
}

impl GuessAttempt {
    /// Record a guess.
    pub fn new(guess: impl Into<String>, attempt: u32, elapsed_seconds: f64) -> Self {
        Self { guess: guess.into(), attempt, elapsed_seconds }
    }

    /// Points this guess earns if it is correct.
    pub fn score(&self) -> u32 {
        score(self.attempt, self.elapsed_seconds)
    }

    /// Full breakdown of the points this guess earns if it is correct.
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::new(self.attempt, self.elapsed_seconds)
    }
}

/// How a score was computed, for display after a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Final points.
    pub score: u32,
    /// Points before multipliers.
    pub base_points: u32,
    /// Attempt multiplier, rounded to two decimals.
    pub attempt_multiplier: f64,
    /// Time multiplier, rounded to two decimals.
    pub time_multiplier: f64,
    /// Attempt that found the answer.
    pub attempts: u32,
    /// Elapsed seconds, rounded to one decimal.
    pub elapsed_seconds: f64,
}

impl ScoreBreakdown {
    /// Compute the breakdown for one answer.
    pub fn new(attempt: u32, elapsed_seconds: f64) -> Self {
        let elapsed = if elapsed_seconds.is_nan() { 0.0 } else { elapsed_seconds.max(0.0) };
        Self {
            score: score(attempt, elapsed),
            base_points: BASE_POINTS,
            attempt_multiplier: round_to(attempt_multiplier(attempt), 2),
            time_multiplier: round_to(time_multiplier(elapsed), 2),
            attempts: attempt.max(1),
            elapsed_seconds: round_to(elapsed, 1),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_boundaries() {
        assert_eq!(score(1, 5.0), 1000);
        assert_eq!(score(1, 121.0), 300);
        assert_eq!(score(5, 5.0), 400);
        assert_eq!(score(6, 5.0), 250);
    }

    #[test]
    fn test_attempt_table() {
        let points: Vec<u32> = (1..=5).map(|n| score(n, 0.0)).collect();
        assert_eq!(points, vec![1000, 850, 700, 550, 400]);
        assert_eq!(score(42, 0.0), 250);
    }

    #[test]
    fn test_time_curve() {
        assert!((time_multiplier(10.0) - 1.0).abs() < 1e-9);
        assert!((time_multiplier(120.0) - 0.30).abs() < 1e-9);
        let mid = time_multiplier(60.0);
        assert!(mid < 1.0 && mid > 0.30);
        assert_eq!(score(1, 120.0), 300);
    }

    #[test]
    fn test_inputs_are_clamped() {
        assert_eq!(score(0, 5.0), score(1, 5.0));
        assert_eq!(score(1, -30.0), 1000);
        assert_eq!(score(1, f64::NAN), 1000);
        assert_eq!(score(1, f64::INFINITY), 300);
    }

    #[test]
    fn test_breakdown() {
        let breakdown = GuessAttempt::new("amour", 2, 64.04).breakdown();
        assert_eq!(breakdown.score, score(2, 64.04));
        assert_eq!(breakdown.base_points, 1000);
        assert!((breakdown.attempt_multiplier - 0.85).abs() < 1e-9);
        assert!((breakdown.elapsed_seconds - 64.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn score_never_increases_with_attempts(a in 0u32..20, b in 0u32..20, t in 0.0f64..500.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score(lo, t) >= score(hi, t));
        }

        #[test]
        fn score_never_increases_with_time(
            n in 1u32..8,
            a in -10.0f64..500.0,
            b in -10.0f64..500.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score(n, lo) >= score(n, hi));
        }

        #[test]
        fn score_stays_in_range(n in 0u32..100, t in -100.0f64..10_000.0) {
            let points = score(n, t);
            prop_assert!((75..=1000).contains(&points));
        }
    }
}
