// src/trig/fast_sin.rs

use std::f64::consts::{FRAC_PI_2, PI};

use log::trace;
use num_traits::{AsPrimitive, Float};

use crate::errors::TrigError;

const TWO_PI: f64 = 2.0 * PI;
const FOUR_PI: f64 = 4.0 * PI;
const THREE_FRAC_PI_2: f64 = 3.0 * PI / 2.0;

/// Minimax coefficients for sin(x) on the first quadrant, constant term first.
/// Evaluated with Horner's scheme as x * (c0 + x^2 * (c1 + x^2 * (...))).
const DEGREE_7_COEFFS: [f64; 4] = [
    0.999_999_060_898_976,
    -0.166_655_540_927_576,
    0.008_311_899_801_389_87,
    -0.000_184_881_402_886_071,
];
const DEGREE_9_COEFFS: [f64; 5] = [
    0.999_999_994_686_007,
    -0.166_666_566_840_071,
    0.008_333_025_138_969_36,
    -0.000_198_074_187_274_269,
    2.601_903_067_651_46e-6,
];

/// Degree of the minimax polynomial used for the approximation.
///
/// Only the two tabulated degrees exist; any other degree is unrepresentable.
/// Use [`SinDegree::try_from`] when the degree comes from a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinDegree {
    /// Max error ~9.39101e-07
    #[default]
    Seven,
    /// Max error ~5.31399e-09
    Nine,
}

impl TryFrom<u32> for SinDegree {
    type Error = TrigError;

    fn try_from(degree: u32) -> Result<Self, Self::Error> {
        match degree {
            7 => Ok(SinDegree::Seven),
            9 => Ok(SinDegree::Nine),
            other => Err(TrigError::UnsupportedDegree(other)),
        }
    }
}

/// A stateful sine approximator for angles in radians.
///
/// `FastSin` trades a bounded numerical error (see [`SinDegree`]) for speed by
/// caching the full-cycle count of the previous call. When consecutive angles
/// are within about 2π of each other (e.g. incremental rotation updates such
/// as 1.521, 1.540, 1.600, 1.425) the reduction into `[0, 2π)` costs only a
/// couple of comparisons instead of a division and a truncation. Arbitrary
/// jumps still produce correct results, they just pay for a full reduction.
///
/// Each instance owns its cache exclusively and calls mutate it, so a single
/// instance must not be shared across threads. Use one instance per thread,
/// or [`par_sin_batch`](crate::trig::par_sin_batch) which does that for you.
///
/// Behavior for non-finite angles (NaN, ±infinity) is unspecified; the value
/// simply propagates through the reduction and polynomial arithmetic.
///
/// # Example
///
/// ```
/// use fast_sine::trig::{FastSin, SinDegree};
///
/// let mut fast_sin = FastSin::<f64>::with_degree(SinDegree::Nine);
/// let approx_sin = fast_sin.sin(0.268);
/// assert!((approx_sin - 0.268_f64.sin()).abs() < 5.4e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FastSin<T = f64> {
    degree: SinDegree,
    has_prior: bool,
    prior_angle: T,
    prior_cycles: i64,
    prior_cycles_angle: f64,
}

impl<T> FastSin<T>
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    /// Creates an approximator using the degree 7 polynomial.
    pub fn new() -> Self {
        Self::with_degree(SinDegree::default())
    }

    /// Creates an approximator using the given polynomial degree.
    pub fn with_degree(degree: SinDegree) -> Self {
        Self {
            degree,
            has_prior: false,
            prior_angle: T::zero(),
            prior_cycles: 0,
            prior_cycles_angle: 0.0,
        }
    }

    /// The polynomial degree this instance was built with.
    pub fn degree(&self) -> SinDegree {
        self.degree
    }

    /// Approximates the mathematical sine of `angle` (in radians).
    ///
    /// # Arguments
    /// * `angle` - The angle in radians. Must be finite; NaN and infinity are
    ///   unspecified and propagate as ordinary floating-point values.
    ///
    /// # Returns
    /// The approximate sine of `angle`, within the maximum error of the
    /// configured [`SinDegree`].
    #[inline]
    pub fn sin(&mut self, angle: T) -> T {
        // All range reduction happens in f64 regardless of T, so that f32
        // instances keep the accuracy characteristics of the reduction.
        let wide: f64 = angle.as_();
        let mut angle_short = wide - self.prior_cycles_angle;

        if self.has_prior {
            // The previous call's cycle count is a valid baseline as long as
            // the new angle stays within ±2π of it.
            let diff: f64 = (angle - self.prior_angle).as_();
            if diff > 0.0 {
                if angle_short > TWO_PI {
                    if angle_short <= FOUR_PI {
                        self.prior_cycles += 1;
                        self.prior_cycles_angle = self.prior_cycles as f64 * TWO_PI;
                        angle_short = wide - self.prior_cycles_angle;
                    } else {
                        trace!("angle jump of {} rad exceeds the incremental window, falling back to full reduction", diff);
                        self.has_prior = false;
                    }
                }
            } else if angle_short < 0.0 {
                if angle_short >= -TWO_PI {
                    self.prior_cycles -= 1;
                    self.prior_cycles_angle = self.prior_cycles as f64 * TWO_PI;
                    angle_short = wide - self.prior_cycles_angle;
                } else {
                    trace!("angle jump of {} rad exceeds the incremental window, falling back to full reduction", diff);
                    self.has_prior = false;
                }
            }
        }

        if !self.has_prior {
            // No usable baseline: reduce from scratch. The division and the
            // truncation here are exactly what the incremental path avoids.
            let div = wide / TWO_PI;
            self.prior_cycles = div as i64;
            self.prior_cycles_angle = self.prior_cycles as f64 * TWO_PI;
            angle_short = (div - div.trunc()) * TWO_PI;
        }

        // The polynomial only covers the first quadrant of the unit circle,
        // so fold the other three quadrants onto it using sine's symmetry.
        let mut negate = false;
        if angle_short > FRAC_PI_2 && angle_short <= PI {
            angle_short = PI - angle_short;
        } else if angle_short > PI && angle_short <= THREE_FRAC_PI_2 {
            angle_short -= PI;
            negate = true;
        } else if angle_short > THREE_FRAC_PI_2 && angle_short <= TWO_PI {
            angle_short = TWO_PI - angle_short;
            negate = true;
        }

        self.prior_angle = angle;
        self.has_prior = true;

        let x1: T = angle_short.as_();
        let x2 = x1 * x1;
        let y = match self.degree {
            SinDegree::Seven => {
                let [c0, c1, c2, c3] = DEGREE_7_COEFFS.map(|c| -> T { c.as_() });
                x1 * (c0 + x2 * (c1 + x2 * (c2 + c3 * x2)))
            }
            SinDegree::Nine => {
                let [c0, c1, c2, c3, c4] = DEGREE_9_COEFFS.map(|c| -> T { c.as_() });
                x1 * (c0 + x2 * (c1 + x2 * (c2 + x2 * (c3 + c4 * x2))))
            }
        };
        if negate {
            -y
        } else {
            y
        }
    }
}

impl<T> Default for FastSin<T>
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}
