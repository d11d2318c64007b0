//! Moving-average overlays for the price chart.

use crate::domain::Bar;

/// Exponential moving average aligned with `values`.
///
/// Recursive form seeded with the first value, `alpha = 2 / (period + 1)`.
/// The first `period - 1` outputs are `None` (not enough history yet);
/// `period == 0` yields all `None`.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for (i, &value) in values.iter().enumerate() {
        let current = match prev {
            None => value,
            Some(p) => alpha * value + (1.0 - alpha) * p,
        };
        prev = Some(current);
        out.push((i + 1 >= period).then_some(current));
    }
    out
}

/// EMA over bar closes
pub fn close_ema(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    ema(&closes, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn period_one_is_the_input() {
        let values = [6100.0, 6102.5, 6099.0];
        let out = ema(&values, 1);
        assert_eq!(out, vec![Some(6100.0), Some(6102.5), Some(6099.0)]);
    }

    #[test]
    fn warmup_values_are_none() {
        let values: Vec<f64> = (0..20).map(|i| 6000.0 + i as f64).collect();
        let out = ema(&values, 13);
        assert_eq!(out.len(), 20);
        assert!(out[..12].iter().all(Option::is_none));
        assert!(out[12..].iter().all(Option::is_some));
    }

    #[test]
    fn follows_recursive_definition() {
        let out = ema(&[1.0, 2.0, 3.0], 2);
        assert_eq!(out[0], None);
        assert!(approx(out[1].unwrap(), 5.0 / 3.0));
        assert!(approx(out[2].unwrap(), 23.0 / 9.0));
    }

    #[test]
    fn constant_series_stays_constant() {
        let out = ema(&[6130.0; 8], 5);
        assert!(out.iter().flatten().all(|v| approx(*v, 6130.0)));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(ema(&[], 5).is_empty());
        assert_eq!(ema(&[1.0, 2.0], 0), vec![None, None]);
        // Shorter than the period: nothing defined yet
        assert_eq!(ema(&[1.0, 2.0], 5), vec![None, None]);
    }
}
