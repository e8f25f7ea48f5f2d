//! Bornhuetter-Ferguson blended estimate
//!
//! Blends reported loss with the unreported share of an a-priori expected
//! loss. With a cumulative LDF to ultimate, `1/LDF` is the percent reported
//! so far and `1 - 1/LDF` the percent still unreported.

use crate::error::ReservingError;
use serde::Serialize;

/// Result of a Bornhuetter-Ferguson calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BfEstimate {
    /// The blended ultimate estimate.
    pub estimate: f64,
    /// The a-priori expected loss that applied: the explicit override when
    /// one was supplied, otherwise `premium * elr`.
    pub expected_loss: f64,
}

/// Bornhuetter-Ferguson estimate:
/// `reported + premium * elr * (1 - 1/ldf)`.
///
/// The blend always uses the premium-based prior; an `expected_override`
/// only replaces the expected loss echoed back in the result. A zero `ldf`
/// is a caller error, rejected before any division.
pub fn bornhuetter_ferguson(
    reported: f64,
    premium: f64,
    elr: f64,
    ldf: f64,
    expected_override: Option<f64>,
) -> Result<BfEstimate, ReservingError> {
    if ldf == 0.0 {
        return Err(ReservingError::ZeroLdf);
    }

    let expected_loss = expected_override.unwrap_or(premium * elr);
    let pct_unreported = 1.0 - 1.0 / ldf;

    Ok(BfEstimate {
        estimate: reported + premium * elr * pct_unreported,
        expected_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_worked_example() {
        // RL=100, premium=1000, ELR=0.6, LDF=2 => EL 600, BF 400
        let result = bornhuetter_ferguson(100.0, 1000.0, 0.6, 2.0, None).unwrap();
        assert_relative_eq!(result.expected_loss, 600.0, epsilon = 1e-12);
        assert_relative_eq!(result.estimate, 400.0, epsilon = 1e-12);
    }

    #[test]
    fn test_override_replaces_expected_loss_only() {
        let result = bornhuetter_ferguson(100.0, 1000.0, 0.6, 2.0, Some(550.0)).unwrap();
        assert_relative_eq!(result.expected_loss, 550.0, epsilon = 1e-12);
        // The blend itself still uses premium * elr
        assert_relative_eq!(result.estimate, 400.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_ldf_is_rejected() {
        assert!(matches!(
            bornhuetter_ferguson(100.0, 1000.0, 0.6, 0.0, None),
            Err(ReservingError::ZeroLdf)
        ));
    }

    #[test]
    fn test_fully_reported_adds_nothing() {
        // LDF of 1 means everything is reported; BF collapses to RL
        let result = bornhuetter_ferguson(250.0, 1000.0, 0.6, 1.0, None).unwrap();
        assert_relative_eq!(result.estimate, 250.0, epsilon = 1e-12);
    }
}
