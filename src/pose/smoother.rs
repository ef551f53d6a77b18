//! Exponential moving average over a single angle signal
//!
//! One instance per tracked signal; the left and right elbows each own
//! their own history and are never cross-mixed.

/// Blend weight for elbow-angle smoothing: equal parts new sample and history.
pub const ELBOW_ALPHA: f32 = 0.5;

/// Single-pole low-pass filter with cold-start passthrough.
pub struct AngleSmoother {
    /// Weight of the new sample; higher = more responsive, lower = smoother.
    alpha: f32,
    /// Filtered value from the previous frame, `None` until the first sample.
    prev: Option<f32>,
}

impl AngleSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, prev: None }
    }

    /// Elbow-tuned preset.
    pub fn for_elbow() -> Self {
        Self::new(ELBOW_ALPHA)
    }

    /// Filter one sample. The first sample passes through unchanged and
    /// initializes the history.
    pub fn apply(&mut self, value: f32) -> f32 {
        let filtered = match self.prev {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.prev = Some(filtered);
        filtered
    }

    /// Current filtered value, if the signal has been initialized.
    pub fn last(&self) -> Option<f32> {
        self.prev
    }

    /// Clear history; the next sample passes through unchanged.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::for_elbow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_passes_through() {
        for value in [0.0, 37.5, 180.0, -12.0] {
            let mut s = AngleSmoother::new(0.3);
            assert_eq!(s.apply(value), value);
        }
    }

    #[test]
    fn blends_toward_new_sample() {
        let mut s = AngleSmoother::new(0.5);
        s.apply(180.0);
        let filtered = s.apply(90.0);
        assert!((filtered - 135.0).abs() < 1e-4);
    }

    #[test]
    fn converges_to_constant_input() {
        let mut s = AngleSmoother::new(0.5);
        s.apply(0.0);
        let target = 100.0;
        let mut prev_error = f32::MAX;
        for _ in 0..20 {
            let filtered = s.apply(target);
            let error = (filtered - target).abs();
            assert!(error < prev_error, "error must strictly decrease");
            prev_error = error;
        }
        assert!(prev_error < 0.01);
    }

    #[test]
    fn output_between_current_and_previous() {
        for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let mut s = AngleSmoother::new(alpha);
            s.apply(40.0);
            let filtered = s.apply(160.0);
            assert!(
                (40.0..=160.0).contains(&filtered),
                "alpha {alpha} produced {filtered}"
            );
        }
    }

    #[test]
    fn alpha_one_tracks_input_exactly() {
        let mut s = AngleSmoother::new(1.0);
        s.apply(10.0);
        assert_eq!(s.apply(170.0), 170.0);
    }

    #[test]
    fn signals_are_independent() {
        let mut left = AngleSmoother::for_elbow();
        let mut right = AngleSmoother::for_elbow();
        left.apply(180.0);
        assert_eq!(right.apply(90.0), 90.0);
        assert!((left.apply(90.0) - 135.0).abs() < 1e-4);
    }

    #[test]
    fn reset_clears_history() {
        let mut s = AngleSmoother::for_elbow();
        s.apply(180.0);
        s.reset();
        assert_eq!(s.last(), None);
        assert_eq!(s.apply(90.0), 90.0);
    }
}
