//! Chain-ladder projection of losses to ultimate

/// Compound a seed loss through an ordered factor sequence.
///
/// Element `i` of the result is the seed multiplied by the cumulative
/// product of the first `i + 1` factors; the final element is the fully
/// developed ultimate. Each factor applies to the already-projected value
/// from the previous step, never to the original seed. An empty factor
/// sequence yields an empty result.
///
/// Zero or negative factors are not special-cased; they propagate
/// arithmetically.
pub fn project_ultimate(seed: f64, factors: &[f64]) -> Vec<f64> {
    let mut projected = Vec::with_capacity(factors.len());
    let mut running = seed;

    for factor in factors {
        running *= factor;
        projected.push(running);
    }

    projected
}

/// Fully developed ultimate loss: the last projected value, or the seed
/// itself when there are no factors left to apply.
pub fn ultimate(seed: f64, factors: &[f64]) -> f64 {
    project_ultimate(seed, factors).last().copied().unwrap_or(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_product_law() {
        let factors = [1.2, 1.1, 1.05, 0.98];
        let projected = project_ultimate(1000.0, &factors);

        assert_eq!(projected.len(), factors.len());
        let mut expected = 1000.0;
        for (i, factor) in factors.iter().enumerate() {
            expected *= factor;
            assert_relative_eq!(projected[i], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_compounds_sequentially_not_from_seed() {
        let projected = project_ultimate(100.0, &[2.0, 2.0]);
        assert_eq!(projected, vec![200.0, 400.0]);
    }

    #[test]
    fn test_empty_factors() {
        assert!(project_ultimate(500.0, &[]).is_empty());
        assert_eq!(ultimate(500.0, &[]), 500.0);
    }

    #[test]
    fn test_zero_factor_propagates() {
        let projected = project_ultimate(100.0, &[1.5, 0.0, 1.2]);
        assert_eq!(projected, vec![150.0, 0.0, 0.0]);
    }

    #[test]
    fn test_negative_factor_propagates() {
        let projected = project_ultimate(100.0, &[-1.0, 2.0]);
        assert_eq!(projected, vec![-100.0, -200.0]);
    }

    #[test]
    fn test_ultimate_is_last_element() {
        let factors = [1.2364, 1.0833];
        assert_relative_eq!(
            ultimate(120.0, &factors),
            120.0 * 1.2364 * 1.0833,
            epsilon = 1e-9
        );
    }
}
