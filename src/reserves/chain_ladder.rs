//! Full chain-ladder run over a single triangle
//!
//! Derives development factors once, then projects every origin period from
//! its latest observed value through the remaining factors and reports
//! per-origin ultimates and IBNR alongside block totals.

use crate::development::average_development_factors;
use crate::error::ReservingError;
use crate::projection;
use crate::reserves::compute_ibnr;
use crate::triangle::Triangle;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

/// Projection result for one origin period.
#[derive(Debug, Clone, Serialize)]
pub struct OriginResult {
    /// Origin row index, oldest period first.
    pub origin: usize,
    /// Development age of the latest observed cell.
    pub latest_age: usize,
    /// Cumulative loss reported to date (the latest observed cell).
    pub reported: f64,
    /// Projected ultimate loss.
    pub ultimate: f64,
    /// IBNR reserve: ultimate minus reported.
    pub ibnr: f64,
}

/// Chain-ladder results for a whole triangle.
#[derive(Debug, Clone, Serialize)]
pub struct ChainLadderReport {
    /// Evaluation date the report was run as of, when the caller supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Average age-to-age development factors.
    pub factors: Vec<f64>,
    /// Per-origin projections, oldest period first.
    pub origins: Vec<OriginResult>,
    pub total_reported: f64,
    pub total_ultimate: f64,
    pub total_ibnr: f64,
}

/// Run the chain-ladder method over a triangle.
///
/// Every origin row must have at least one observed cell. A zero factor in
/// an origin's remaining development path means "no information" for that
/// transition and zeroes the projected ultimate; it is carried through
/// arithmetically, not raised. A non-finite projected ultimate is an
/// internal fault.
pub fn run_chain_ladder(
    triangle: &Triangle,
    as_of: Option<NaiveDate>,
) -> Result<ChainLadderReport, ReservingError> {
    let factors = average_development_factors(triangle)?;

    let origins: Vec<OriginResult> = (0..triangle.rows())
        .into_par_iter()
        .map(|row| {
            let (latest_age, reported) = triangle
                .latest_observed(row)
                .ok_or(ReservingError::EmptyOriginRow { row })?;

            let ultimate = projection::ultimate(reported, &factors[latest_age..]);
            if !ultimate.is_finite() {
                return Err(ReservingError::NonFiniteResult {
                    context: "ultimate projection",
                });
            }

            Ok(OriginResult {
                origin: row,
                latest_age,
                reported,
                ultimate,
                ibnr: compute_ibnr(ultimate, reported),
            })
        })
        .collect::<Result<_, _>>()?;

    let total_reported = origins.iter().map(|o| o.reported).sum();
    let total_ultimate = origins.iter().map(|o| o.ultimate).sum();

    Ok(ChainLadderReport {
        as_of,
        factors,
        origins,
        total_reported,
        total_ultimate,
        total_ibnr: compute_ibnr(total_ultimate, total_reported),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn worked_triangle() -> Triangle {
        Triangle::new(vec![
            vec![Some(100.0), Some(120.0), Some(130.0)],
            vec![Some(110.0), Some(140.0), None],
            vec![Some(120.0), None, None],
        ])
        .unwrap()
    }

    #[test]
    fn test_per_origin_projection() {
        let report = run_chain_ladder(&worked_triangle(), None).unwrap();
        let f01 = (1.2 + 140.0 / 110.0) / 2.0;
        let f12 = 130.0 / 120.0;

        assert_eq!(report.origins.len(), 3);

        // Oldest origin is fully developed: ultimate == reported, no IBNR
        assert_relative_eq!(report.origins[0].ultimate, 130.0, epsilon = 1e-9);
        assert_relative_eq!(report.origins[0].ibnr, 0.0, epsilon = 1e-9);

        // Middle origin develops one more age
        assert_relative_eq!(report.origins[1].ultimate, 140.0 * f12, epsilon = 1e-9);

        // Newest origin compounds both remaining factors
        assert_relative_eq!(
            report.origins[2].ultimate,
            120.0 * f01 * f12,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            report.origins[2].ibnr,
            120.0 * f01 * f12 - 120.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_totals_add_up() {
        let report = run_chain_ladder(&worked_triangle(), None).unwrap();

        let reported: f64 = report.origins.iter().map(|o| o.reported).sum();
        let ultimate: f64 = report.origins.iter().map(|o| o.ultimate).sum();
        assert_relative_eq!(report.total_reported, reported, epsilon = 1e-9);
        assert_relative_eq!(report.total_ultimate, ultimate, epsilon = 1e-9);
        assert_relative_eq!(
            report.total_ibnr,
            ultimate - reported,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_origin_row_is_rejected() {
        let tri = Triangle::new(vec![
            vec![Some(100.0), Some(120.0)],
            vec![None, None],
        ])
        .unwrap();

        assert!(matches!(
            run_chain_ladder(&tri, None),
            Err(ReservingError::EmptyOriginRow { row: 1 })
        ));
    }

    #[test]
    fn test_zero_information_tail_zeroes_the_ultimate() {
        // Age 1 -> 2 has no observed pairs, so its factor is 0 and any origin
        // developing through it projects to 0
        let tri = Triangle::new(vec![
            vec![Some(100.0), Some(120.0), None],
            vec![Some(110.0), None, None],
        ])
        .unwrap();

        let report = run_chain_ladder(&tri, None).unwrap();
        assert_eq!(report.origins[1].ultimate, 0.0);
        assert_relative_eq!(report.origins[1].ibnr, -110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_as_of_is_carried_through() {
        let as_of = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let report = run_chain_ladder(&worked_triangle(), Some(as_of)).unwrap();
        assert_eq!(report.as_of, Some(as_of));
    }
}
