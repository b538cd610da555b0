//! Positional similarity scoring between a goal and a candidate.

use crate::MarmosetError;

/// Fraction of index positions at which `goal` and `candidate` hold the same
/// character, as a value in `[0.0, 1.0]`.
///
/// Pure function. Fails with [`MarmosetError::InvalidArgument`] when the two
/// strings differ in length or when `goal` is empty (the divisor would be
/// zero).
pub fn score(goal: &str, candidate: &str) -> Result<f64, MarmosetError> {
    let goal_len = goal.chars().count();
    let candidate_len = candidate.chars().count();
    if goal_len == 0 {
        return Err(MarmosetError::InvalidArgument(
            "goal string must not be empty".into(),
        ));
    }
    if goal_len != candidate_len {
        return Err(MarmosetError::InvalidArgument(format!(
            "length mismatch: goal has {goal_len} characters, candidate has {candidate_len}"
        )));
    }

    Ok(fraction(goal, candidate, goal_len))
}

/// Matched fraction for strings already validated to share the same
/// nonzero character count `len`.
pub(crate) fn fraction(goal: &str, candidate: &str, len: usize) -> f64 {
    let matches = goal
        .chars()
        .zip(candidate.chars())
        .filter(|(g, c)| g == c)
        .count();
    matches as f64 / len as f64
}
