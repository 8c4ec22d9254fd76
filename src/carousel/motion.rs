//! Scroll accumulation and exponential smoothing of the formation transform.

use crate::options::MotionOptions;

/// Linear interpolation from `a` toward `b` by factor `t`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// The transform the formation is easing toward. Scroll input accumulates
/// here without bound; the helix is logically infinite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionTarget {
    /// Target vertical offset of the formation.
    pub position_y: f32,
    /// Target rotation about the vertical axis, in radians.
    pub rotation_y: f32,
}

/// Smoothed motion state of the whole formation.
///
/// Holds both the accumulated [`MotionTarget`] and the actual transform,
/// which chases the target by a fixed exponential factor per tick. The
/// residual rotation the smoothing has not yet caught up to is exposed as
/// [`speed`](Self::speed) and drives the shader's motion distortion.
#[derive(Debug, Clone)]
pub struct Motion {
    target: MotionTarget,
    /// Actual vertical offset of the formation.
    pub position_y: f32,
    /// Actual rotation about the vertical axis, in radians.
    pub rotation_y: f32,
    speed: f32,
    opts: MotionOptions,
}

impl Motion {
    /// Create a motion state at rest (zero offset and rotation).
    #[must_use]
    pub fn new(opts: &MotionOptions) -> Self {
        Self {
            target: MotionTarget::default(),
            position_y: 0.0,
            rotation_y: 0.0,
            speed: 0.0,
            opts: opts.clone(),
        }
    }

    /// Accumulate a scroll delta into the target transform. No clamping.
    pub fn apply_scroll(&mut self, delta: f32) {
        let scaled = delta * self.opts.input_scale;
        self.target.position_y -= scaled * self.opts.position_coefficient;
        self.target.rotation_y -= scaled * self.opts.rotation_coefficient;
    }

    /// Advance one tick: ease the actual transform toward the target and
    /// recompute the speed residual fresh (not accumulated).
    pub fn advance(&mut self) {
        let t = self.opts.smoothing;
        self.position_y = lerp(self.position_y, self.target.position_y, t);
        self.rotation_y = lerp(self.rotation_y, self.target.rotation_y, t);
        self.speed = self.target.rotation_y - self.rotation_y;
    }

    /// Residual rotation left after this tick's smoothing step.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The accumulated scroll target.
    #[must_use]
    pub fn target(&self) -> MotionTarget {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_accumulates_into_target() {
        let mut motion = Motion::new(&MotionOptions::default());
        motion.apply_scroll(100.0);
        let target = motion.target();
        assert!((target.position_y - (-0.04)).abs() < 1e-6);
        assert!((target.rotation_y - (-0.168)).abs() < 1e-6);

        // Deltas keep accumulating, unbounded in either direction.
        motion.apply_scroll(-300.0);
        assert!((motion.target().position_y - 0.08).abs() < 1e-6);
    }

    #[test]
    fn one_tick_moves_seven_percent_toward_target() {
        let mut motion = Motion::new(&MotionOptions::default());
        motion.apply_scroll(100.0);
        motion.advance();
        assert!((motion.position_y - (-0.0028)).abs() < 1e-7);
        assert!((motion.rotation_y - (-0.168 * 0.07)).abs() < 1e-7);
    }

    #[test]
    fn smoothing_converges_monotonically_without_overshoot() {
        let mut motion = Motion::new(&MotionOptions::default());
        motion.apply_scroll(100.0);
        let target = motion.target().rotation_y;

        let mut previous_gap = (motion.rotation_y - target).abs();
        for _ in 0..400 {
            motion.advance();
            let gap = (motion.rotation_y - target).abs();
            assert!(gap <= previous_gap, "gap grew: {gap} > {previous_gap}");
            // Approach is one-sided: the actual value never crosses the
            // target (factor 0.07 < 1).
            assert!(motion.rotation_y >= target);
            previous_gap = gap;
        }
        assert!(previous_gap < 1e-6);
    }

    #[test]
    fn speed_is_the_residual_not_an_accumulator() {
        let mut motion = Motion::new(&MotionOptions::default());
        motion.apply_scroll(100.0);
        for _ in 0..10 {
            motion.advance();
            assert_eq!(
                motion.speed(),
                motion.target().rotation_y - motion.rotation_y
            );
        }
        // With no pending input the residual decays toward zero rather than
        // building up.
        assert!(motion.speed().abs() < 0.168);
    }
}
