//! Forward search for the moment a discrete function of time changes value.
//!
//! Sample at a fixed step until the value flips to the target, then bisect the
//! bracket down to `epsilon` days.

use super::{EphemerisError, EphemerisResult};

/// Default convergence threshold (one second, in days)
pub(crate) const EPSILON_DAYS: f64 = 1.0 / 86400.0;

/// Find the first time after `start` at which `f` changes into `target`.
///
/// `step_days` must be shorter than the time `f` spends on any single value,
/// otherwise a transition can be stepped over.
///
/// # Arguments
/// * `start` - MJD to search from (exclusive)
/// * `horizon_days` - How far past `start` to look before giving up
/// * `step_days` - Sampling interval in days
/// * `epsilon` - Bracket width at which bisection stops
/// * `target` - Value `f` must change into
/// * `f` - Discrete function of MJD
pub(crate) fn find_next_transition<F>(
    start: f64,
    horizon_days: f64,
    step_days: f64,
    epsilon: f64,
    target: i64,
    f: F,
) -> EphemerisResult<f64>
where
    F: Fn(f64) -> EphemerisResult<i64>,
{
    if !(step_days > 0.0 && epsilon > 0.0 && start.is_finite()) {
        return Err(EphemerisError::Domain(format!(
            "invalid search parameters: start={} step={} epsilon={}",
            start, step_days, epsilon
        )));
    }

    let end = start + horizon_days;
    let mut t0 = start;
    let mut y0 = f(t0)?;

    while t0 < end {
        let t1 = t0 + step_days;
        let y1 = f(t1)?;

        if y1 != y0 && y1 == target {
            return refine(t0, t1, y1, epsilon, &f);
        }

        t0 = t1;
        y0 = y1;
    }

    Err(EphemerisError::NotFound(format!(
        "value {} not reached within {} days of MJD {:.5}",
        target, horizon_days, start
    )))
}

/// Bisect `[lo, hi]` where `f(hi) == after` and `f(lo) != after`.
fn refine<F>(mut lo: f64, mut hi: f64, after: i64, epsilon: f64, f: &F) -> EphemerisResult<f64>
where
    F: Fn(f64) -> EphemerisResult<i64>,
{
    while hi - lo > epsilon {
        let mid = 0.5 * (lo + hi);
        if f(mid)? == after {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}
