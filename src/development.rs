//! Loss-development factor derivation
//!
//! Reduces a claims triangle to one average age-to-age development factor
//! per column transition. Tolerates ragged observation: an origin row only
//! contributes to a transition when both of its cells are observed.

use crate::error::ReservingError;
use crate::triangle::Triangle;

/// Average age-to-age development factors, one per column transition.
///
/// Factor `y` is the arithmetic mean of `cell[x][y+1] / cell[x][y]` over all
/// origin rows `x` where both cells are observed. A transition with no
/// observed pairs yields exactly 0.0, meaning "no information", which the
/// caller must not confuse with "no development". Output length is `cols - 1`.
pub fn average_development_factors(triangle: &Triangle) -> Result<Vec<f64>, ReservingError> {
    if triangle.cols() < 2 {
        return Err(ReservingError::TooFewColumns {
            got: triangle.cols(),
        });
    }

    let mut factors = Vec::with_capacity(triangle.cols() - 1);

    for age in 0..triangle.cols() - 1 {
        let mut sum = 0.0;
        let mut pairs = 0u32;

        for row in 0..triangle.rows() {
            let (current, next) = match (triangle.cell(row, age), triangle.cell(row, age + 1)) {
                (Some(current), Some(next)) => (current, next),
                _ => continue,
            };
            sum += next / current;
            pairs += 1;
        }

        if pairs == 0 {
            log::warn!(
                "no observed pairs for development age {} -> {}; factor defaults to 0",
                age,
                age + 1
            );
            factors.push(0.0);
        } else {
            factors.push(sum / pairs as f64);
        }
    }

    Ok(factors)
}
