use serde::{Deserialize, Serialize};

use crate::core::float_utils::abs_value;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ConvergenceParams {
    pub tolerance: f64,
    pub max_iter_count: u32,
}

impl Default for ConvergenceParams {
    fn default() -> ConvergenceParams {
        ConvergenceParams {
            tolerance: 1e-12,
            max_iter_count: 100,
        }
    }
}

/**
 * Data structure for storing the internal state of the Heron iteration
 *     x <- 0.5 * (x + a / x)
 * which converges quadratically to sqrt(a) for any positive starting point.
 * The state is public so that callers (tests, diagnostics) can observe the
 * individual iterates rather than only the converged result.
 */
pub struct HeronSqrtSequence {
    pub a: f64,
    pub x: f64,
    pub iter_count: u32,
}

impl HeronSqrtSequence {
    /// `magnitude` must be strictly positive; zero and negative inputs are
    /// dispatched before the iteration is ever constructed.
    pub fn new(magnitude: f64) -> HeronSqrtSequence {
        // x0 = a for a >= 1 and x0 = 1 otherwise. Either way x0 >= sqrt(a) > 0,
        // so from the first step on the sequence decreases toward the root
        // from above. A sharper guess would need bitwise exponent tricks,
        // which this kernel excludes.
        let initial_guess = if magnitude >= 1.0 { magnitude } else { 1.0 };
        HeronSqrtSequence {
            a: magnitude,
            x: initial_guess,
            iter_count: 0,
        }
    }

    // x_{n+1} = 0.5 * (x_n + a / x_n)
    pub fn step(&mut self) -> f64 {
        self.x = 0.5 * (self.x + self.a / self.x);
        self.iter_count += 1;
        self.x
    }

    /// Advance until |x_{n+1} - x_n| <= tolerance * (1 + |x_{n+1}|), a mixed
    /// test: near zero the leading 1 keeps an absolute floor of `tolerance`,
    /// while for large iterates it degenerates to a relative bound. Equality
    /// stops.
    /// @return: true if the stop test triggered, false if the iteration cap
    /// ran out first (the last estimate is retained in `x` either way).
    pub fn step_until_converged(&mut self, convergence_params: &ConvergenceParams) -> bool {
        while self.iter_count < convergence_params.max_iter_count {
            let x_prev = self.x;
            let x_next = self.step();
            let difference = abs_value(x_next - x_prev);
            let threshold = convergence_params.tolerance * (1.0 + abs_value(x_next));
            if difference <= threshold {
                return true;
            }
        }
        false
    }
}

/// Square root of `magnitude` using only +, -, *, / and comparisons.
///
/// Negative inputs have no real root and yield a quiet NaN; zero returns
/// exactly +0.0; positive inputs run the Heron iteration until the mixed
/// stop test triggers or `max_iter_count` steps have been taken. The result
/// is reported in-band: no panics, no `Result`, no side effects.
pub fn sqrt_newton(magnitude: f64, tolerance: f64, max_iter_count: u32) -> f64 {
    sqrt_with_params(
        magnitude,
        &ConvergenceParams {
            tolerance,
            max_iter_count,
        },
    )
}

pub fn sqrt_with_params(magnitude: f64, convergence_params: &ConvergenceParams) -> f64 {
    if magnitude < 0.0 {
        // The indeterminate form 0/0 produces a quiet NaN without touching
        // any math library.
        let zero = 0.0;
        return zero / zero;
    }
    if magnitude == 0.0 {
        return 0.0;
    }
    let mut sequence = HeronSqrtSequence::new(magnitude);
    sequence.step_until_converged(convergence_params);
    sequence.x
}

#[cfg(test)]
mod tests {
    use super::{sqrt_newton, sqrt_with_params, ConvergenceParams, HeronSqrtSequence};
    use crate::core::float_utils::is_nan;

    #[test]
    fn test_exact_squares() {
        let convergence_params = ConvergenceParams::default();
        assert_eq!(sqrt_with_params(1.0, &convergence_params), 1.0);
        assert_eq!(sqrt_with_params(4.0, &convergence_params), 2.0);
        assert_eq!(sqrt_with_params(9.0, &convergence_params), 3.0);
        assert_eq!(sqrt_with_params(0.25, &convergence_params), 0.5);
        assert_eq!(sqrt_with_params(1e12, &convergence_params), 1e6);
    }

    #[test]
    fn test_zero_returns_positive_zero_bitwise() {
        assert_eq!(sqrt_newton(0.0, 1e-12, 100).to_bits(), 0.0f64.to_bits());
        assert_eq!(sqrt_newton(0.0, 0.5, 0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_negative_input_returns_nan() {
        let root = sqrt_newton(-4.0, 1e-12, 100);
        assert!(is_nan(root));
    }

    #[test]
    fn test_one_step_is_idempotent_at_exact_roots() {
        for &(magnitude, root) in [(1.0, 1.0), (4.0, 2.0), (9.0, 3.0), (0.25, 0.5)].iter() {
            let mut sequence = HeronSqrtSequence::new(magnitude);
            sequence.x = root;
            assert_eq!(sequence.step(), root, "magnitude = {}", magnitude);
        }
    }

    #[test]
    fn test_initial_guess_bounds_the_root_from_above() {
        for &magnitude in [1e-12, 0.25, 0.9, 1.0, 2.0, 9.0, 1e12].iter() {
            let sequence = HeronSqrtSequence::new(magnitude);
            assert!(sequence.x * sequence.x >= magnitude);
        }
    }
}
