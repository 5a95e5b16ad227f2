//! Continuous tick placement over a numeric range.
//!
//! Steps are restricted to 1, 2, or 5 times a power of ten, targeting about
//! five intervals across the range.

/// Upper bound on emitted ticks; guards against pathological float ranges.
const MAX_TICKS: usize = 500;

/// Compute sorted tick positions spanning at least `[min, max]`.
///
/// The first tick is at or below `min` and the last at or above `max`. A
/// degenerate range (`min == max`) yields that single value; a non-finite
/// range yields no ticks.
#[must_use]
pub fn optimize_ticks(min: f32, max: f32) -> Vec<f32> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if min == max {
        return vec![min];
    }

    let step = nice_step((max - min) / 5.0);
    if !step.is_finite() || step <= 0.0 {
        return vec![min, max];
    }

    let start = (min / step).floor() * step;
    let mut ticks = Vec::new();
    for i in 0..MAX_TICKS {
        // Index-based generation avoids accumulated rounding error
        let tick = step.mul_add(i as f32, start);
        ticks.push(tick);
        if tick >= max {
            break;
        }
    }
    ticks
}

/// Round `raw` up to the nearest 1, 2, or 5 times a power of ten.
fn nice_step(raw: f32) -> f32 {
    let exponent = raw.abs().log10().floor() as i32;
    let factor = 10f32.powi(exponent);
    let mantissa = raw / factor;
    let nice = if mantissa <= 1.0 {
        1.0
    } else if mantissa <= 2.0 {
        2.0
    } else if mantissa <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * factor
}
