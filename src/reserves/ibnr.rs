//! Incurred-but-not-reported reserve

/// IBNR reserve: projected ultimate loss minus loss reported/paid to date.
///
/// No clamping: a negative reserve is a valid over-reserved position, not
/// an error.
pub fn compute_ibnr(ultimate: f64, paid_to_date: f64) -> f64 {
    ultimate - paid_to_date
}
