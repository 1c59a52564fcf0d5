/// Step multipliers tried, in order, for each power of ten.
const NICE_FACTORS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Number of intervals the axes aim for.
pub const DEFAULT_TICK_TARGET: usize = 6;

/// Smallest "nice" step (1, 2, 2.5 or 5 × 10ᵏ) that splits `[min, max]`
/// into at most `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let raw = (max - min) / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = NICE_FACTORS
        .iter()
        .copied()
        .find(|&f| f >= normalized - 1e-9)
        .unwrap_or(10.0);
    factor * magnitude
}

/// Tick positions at multiples of `nice_step` that fall inside `[min, max]`.
///
/// Returns an empty vector for an empty or non-finite range, including a
/// range whose width overflows.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
        return Vec::new();
    }

    let step = nice_step(min, max, target);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let first = ((min - eps) / step).ceil();
    // Bounded so ranges narrower than an ulp of their endpoints still end.
    let mut ticks = Vec::new();
    for i in 0..=4 * target.max(1) {
        let value = (first + i as f64) * step;
        if value > max + eps {
            break;
        }
        // Avoid "-0" labels.
        ticks.push(if value.abs() < eps { 0.0 } else { value });
    }
    ticks
}

/// Formats `value` with just enough decimals to represent `step` exactly.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6) as usize;
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range_ticks() {
        assert_eq!(nice_ticks(0.0, 6.0, 6), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn thirty_uses_steps_of_five() {
        assert_eq!(nice_ticks(0.0, 30.0, 6), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
    }

    #[test]
    fn ticks_stay_inside_an_unaligned_range() {
        let ticks = nice_ticks(3.4, 10.9, 6);
        assert_eq!(ticks, vec![4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn quarter_steps() {
        assert_eq!(nice_step(0.0, 15.0, 6), 2.5);
    }

    #[test]
    fn empty_range_has_no_ticks() {
        assert!(nice_ticks(1.0, 1.0, 6).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 6).is_empty());
    }

    #[test]
    fn overflowing_width_has_no_ticks() {
        assert!(nice_ticks(-1e308, 1e308, 6).is_empty());
        assert!(nice_ticks(-f64::MAX, f64::MAX, 6).is_empty());
    }

    #[test]
    fn range_narrower_than_an_ulp_still_terminates() {
        let min = 1e300;
        let max = min + min * f64::EPSILON;
        assert!(nice_ticks(min, max, 6).len() <= 25);
    }

    #[test]
    fn labels_use_the_step_precision() {
        assert_eq!(format_tick(5.0, 5.0), "5");
        assert_eq!(format_tick(2.5, 2.5), "2.5");
        assert_eq!(format_tick(0.1 * 3.0, 0.1), "0.3");
        assert_eq!(format_tick(-0.5, 0.25), "-0.50");
    }
}
