//! Scalar interval used to normalize vertex depths.

/// A growable `[min, max]` interval over `f32`.
///
/// Seeded from [`Range::EMPTY`] and grown with [`Range::adjust`], so after
/// initialization from geometry `min <= max` always holds — the interval only
/// ever widens, never shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    /// The identity element of [`Range::adjust`]: covers nothing, so the
    /// first adjustment collapses it onto the observed value.
    pub const EMPTY: Range = Range {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Grows the interval to cover both `a` and `b`. Monotonic.
    pub fn adjust(&mut self, a: f32, b: f32) {
        self.min = self.min.min(a).min(b);
        self.max = self.max.max(a).max(b);
    }

    /// The historical shifted normalization (see
    /// [`DepthNormalization::Legacy`](crate::config::DepthNormalization)).
    ///
    /// Both bounds and the value are shifted by `|min| + |max|` before the
    /// ratio is taken, so this does not map `min -> 0, max -> 1`; it is a
    /// monotonically increasing function of `v` for a fixed `min < max`, and
    /// values outside the interval extrapolate through the same formula.
    ///
    /// A degenerate interval (`min == max == 0`) would divide by zero; that
    /// case returns the midpoint constant 0.5 instead.
    #[must_use]
    pub fn percent(&self, v: f32) -> f32 {
        let shift = self.min.abs() + self.max.abs();

        let shifted_min = self.min.min(self.max) + shift;
        let shifted_max = self.min.max(self.max) + shift;
        let shifted_v = v + shift;

        let denominator = shifted_min + shifted_max;
        if denominator.abs() < f32::EPSILON {
            return 0.5;
        }

        shifted_v / denominator
    }

    /// Standard `(v - min) / (max - min)` normalization (see
    /// [`DepthNormalization::Linear`](crate::config::DepthNormalization)),
    /// with the same 0.5 fallback for a degenerate interval.
    #[must_use]
    pub fn percent_linear(&self, v: f32) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f32::EPSILON {
            return 0.5;
        }
        (v - self.min) / span
    }

    /// Width of the interval.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}
