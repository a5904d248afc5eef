//! Axis scales for the valuation chart.
//!
//! Pure helpers that map values and dates onto pixel ranges and produce
//! rounded tick positions. The chart component feeds these into its SVG
//! builders; nothing here touches the DOM.

use chrono::{Duration, NaiveDate};

/// Tick spacing covering `span / count`, rounded up to a 1, 2 or 5
/// multiple of a power of ten.
pub fn tick_step(span: f64, count: usize) -> f64 {
    if span <= 0.0 {
        return 1.0;
    }
    let step = span / count.max(1) as f64;
    let power = step.log10().floor();
    let base = 10f64.powf(power);
    let error = step / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Domain ceiling extended to a tick boundary, plus the tick positions
/// from zero up to that ceiling.
pub fn nice_ticks(max: f64, count: usize) -> (f64, Vec<f64>) {
    if max <= 0.0 {
        return (1.0, vec![0.0, 1.0]);
    }
    let step = tick_step(max, count);
    let nice_max = (max / step).ceil() * step;
    let segments = (nice_max / step).round() as usize;
    let ticks = (0..=segments).map(|i| i as f64 * step).collect();
    (nice_max, ticks)
}

/// Map `value` from the domain `[d0, d1]` onto the range `[r0, r1]`.
/// A collapsed domain parks everything at the range midpoint.
pub fn linear_pos(value: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    if (d1 - d0).abs() < f64::EPSILON {
        return (r0 + r1) / 2.0;
    }
    r0 + (value - d0) / (d1 - d0) * (r1 - r0)
}

/// Horizontal offset of `date` within `[min, max]` across `width` pixels.
/// A single-day domain centers its points.
pub fn date_pos(date: NaiveDate, min: NaiveDate, max: NaiveDate, width: f64) -> f64 {
    let total = (max - min).num_days();
    if total == 0 {
        return width / 2.0;
    }
    let offset = (date - min).num_days();
    offset as f64 / total as f64 * width
}

/// Evenly spaced tick dates across `[min, max]`, endpoints included.
pub fn date_ticks(min: NaiveDate, max: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if count < 2 || min >= max {
        return vec![min];
    }
    let total = (max - min).num_days();
    (0..count)
        .map(|i| min + Duration::days(total * i as i64 / (count - 1) as i64))
        .collect()
}

/// Label for an axis tick: whole numbers render without a fraction.
pub fn tick_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- tick step tests ---

    #[test]
    fn test_tick_step_picks_1_2_5_multiples() {
        assert!((tick_step(77.88, 5) - 20.0).abs() < 1e-9);
        assert!((tick_step(100.0, 5) - 20.0).abs() < 1e-9);
        assert!((tick_step(40.0, 5) - 10.0).abs() < 1e-9);
        assert!((tick_step(9.0, 5) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_step_handles_fractional_spans() {
        assert!((tick_step(1.0, 5) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_tick_step_degenerate_span() {
        assert!((tick_step(0.0, 5) - 1.0).abs() < 1e-9);
        assert!((tick_step(-3.0, 5) - 1.0).abs() < 1e-9);
    }

    // --- nice ticks tests ---

    #[test]
    fn test_nice_ticks_extends_to_boundary() {
        let (max, ticks) = nice_ticks(77.88, 5);
        assert!((max - 80.0).abs() < 1e-9);
        assert_eq!(ticks.len(), 5);
        assert!((ticks[0] - 0.0).abs() < 1e-9);
        assert!((ticks[4] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_nice_ticks_unit_domain_for_empty_data() {
        let (max, ticks) = nice_ticks(1.0, 5);
        assert!((max - 1.0).abs() < 1e-9);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[5] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_nice_ticks_nonpositive_max_falls_back() {
        let (max, ticks) = nice_ticks(0.0, 5);
        assert!((max - 1.0).abs() < 1e-9);
        assert_eq!(ticks, vec![0.0, 1.0]);
    }

    // --- position tests ---

    #[test]
    fn test_linear_pos_maps_endpoints_and_midpoint() {
        assert!((linear_pos(0.0, 0.0, 80.0, 0.0, 400.0) - 0.0).abs() < 1e-9);
        assert!((linear_pos(80.0, 0.0, 80.0, 0.0, 400.0) - 400.0).abs() < 1e-9);
        assert!((linear_pos(40.0, 0.0, 80.0, 0.0, 400.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_pos_collapsed_domain_centers() {
        assert!((linear_pos(5.0, 5.0, 5.0, 0.0, 100.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_date_pos_is_proportional() {
        let min = date(2023, 1, 1);
        let max = date(2023, 1, 11);
        let x = date_pos(date(2023, 1, 6), min, max, 500.0);
        assert!((x - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_date_pos_single_day_centers() {
        let day = date(2024, 6, 1);
        assert!((date_pos(day, day, day, 500.0) - 250.0).abs() < 1e-9);
    }

    // --- tick series tests ---

    #[test]
    fn test_date_ticks_include_both_endpoints() {
        let min = date(2022, 1, 1);
        let max = date(2024, 1, 1);
        let ticks = date_ticks(min, max, 6);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], min);
        assert_eq!(ticks[5], max);
    }

    #[test]
    fn test_date_ticks_collapsed_range_yields_single_tick() {
        let day = date(2024, 3, 1);
        assert_eq!(date_ticks(day, day, 6), vec![day]);
    }

    #[test]
    fn test_tick_label_formats() {
        assert_eq!(tick_label(20.0), "20");
        assert_eq!(tick_label(0.2), "0.2");
        assert_eq!(tick_label(0.0), "0");
    }
}
