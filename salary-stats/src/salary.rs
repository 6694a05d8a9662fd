/// Estimates a single ruble salary from a vacancy's partial range:
/// the midpoint when both bounds are known, otherwise the known bound
/// scaled up (lower) or down (upper). Every branch floors the result.
pub fn estimate_rub_salary(from: Option<u64>, to: Option<u64>) -> Option<u64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2),
        (Some(from), None) => Some((from as f64 * 1.2) as u64),
        (None, Some(to)) => Some((to as f64 * 0.8) as u64),
        (None, None) => None,
    }
}
