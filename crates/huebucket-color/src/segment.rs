//! Piecewise-linear segment tables
//!
//! A [`SegmentTable`] approximates a nonlinear function over a fixed domain
//! with N+1 (slope, intercept) line segments, so evaluating the function per
//! pixel reduces to one multiply-add after index selection.
//!
//! For each segment the function is sampled at the segment's two endpoints
//! and midpoint, and the line is fitted through a harmonic-mean form that
//! stays numerically stable for the gamma, root and arctangent families. The
//! fit runs in f64; only the final (slope, intercept) pairs are stored as
//! f32.

use crate::error::{ColorError, ColorResult};

/// Piecewise-linear approximation of a function over [0, domain_max].
///
/// Evaluation addresses the table in the scaled coordinate
/// `u = x * segments / domain_max`, so a query at the domain maximum lands
/// exactly on the last valid index. Out-of-domain queries extrapolate the
/// nearest end segment rather than faulting.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    slopes: Vec<f32>,
    intercepts: Vec<f32>,
}

impl SegmentTable {
    /// Build a table for `f` with the given segment count over
    /// [0, `domain_max`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Configuration`] if `segments` is zero or
    /// `domain_max` is not finite and positive.
    pub fn build<F>(f: F, segments: usize, domain_max: f64) -> ColorResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if segments == 0 {
            return Err(ColorError::Configuration(
                "segment count must be positive".to_string(),
            ));
        }
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ColorError::Configuration(format!(
                "domain maximum must be finite and positive, got {domain_max}"
            )));
        }

        Ok(Self::fit(f, segments, domain_max))
    }

    /// Fit without parameter validation, for callers with known-good
    /// constants.
    pub(crate) fn fit<F>(f: F, segments: usize, domain_max: f64) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut slopes = Vec::with_capacity(segments + 1);
        let mut intercepts = Vec::with_capacity(segments + 1);

        // Sample index i maps to x = domain_max * i / (2 * segments), so
        // segment s spans samples 2s, 2s+1, 2s+2.
        let denom = 2.0 * segments as f64;
        for seg in 0..=segments {
            let f0 = f(domain_max * (2 * seg) as f64 / denom);
            let f1 = f(domain_max * (2 * seg + 1) as f64 / denom);
            let f2 = f(domain_max * (2 * seg + 2) as f64 / denom);
            let de = f0 + 2.0 * f1 + f2;
            slopes.push((4.0 * f1 * (f2 - f0) / de) as f32);
            intercepts.push((4.0 * f0 * f1 / de) as f32);
        }

        SegmentTable { slopes, intercepts }
    }

    /// Number of segments (the table holds `segments() + 1` entries).
    pub fn segments(&self) -> usize {
        self.slopes.len() - 1
    }

    /// Evaluate at scaled coordinate `u`, selecting the segment by
    /// truncation.
    ///
    /// The index is clamped to the table, so `u` past either end of the
    /// domain extrapolates the first or last segment.
    #[inline]
    pub fn eval_floor(&self, u: f32) -> f32 {
        let s = (u as usize).min(self.slopes.len() - 1);
        let w = u - s as f32;
        self.slopes[s] * w + self.intercepts[s]
    }

    /// Evaluate at scaled coordinate `u`, selecting the nearest segment.
    ///
    /// The interpolation weight lies in [-0.5, 0.5], halving the worst-case
    /// distance from the fit point compared to floor addressing.
    #[inline]
    pub fn eval_nearest(&self, u: f32) -> f32 {
        let s = (u.round() as usize).min(self.slopes.len() - 1);
        let w = u - s as f32;
        self.slopes[s] * w + self.intercepts[s]
    }

    /// Derive a table computing `factor * f(x) + offset`.
    ///
    /// The scaling runs in f32 on the stored pairs, matching the precision
    /// of a table built directly for the scaled function.
    pub fn scaled(&self, factor: f32, offset: f32) -> Self {
        SegmentTable {
            slopes: self.slopes.iter().map(|&c| factor * c).collect(),
            intercepts: self.intercepts.iter().map(|&d| factor * d + offset).collect(),
        }
    }
}
