//! Zone containment and magnet distance for the current price.
//!
//! Pure functions; no error conditions. A non-finite price yields
//! `Outside` and a non-finite distance rather than failing.

use crate::domain::{Bar, DynamicZone, ZoneStatus};

/// Inside iff `bottom <= price <= top`. An inverted zone is Outside for every price.
pub fn zone_status(price: f64, zone: &DynamicZone) -> ZoneStatus {
    if zone.contains(price) {
        ZoneStatus::Inside
    } else {
        ZoneStatus::Outside
    }
}

/// Signed: positive when price is above the magnet.
pub fn magnet_distance(price: f64, magnet: f64) -> f64 {
    price - magnet
}

/// The metrics row under the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusMetrics {
    pub current_price: f64,
    pub zone_status: ZoneStatus,
    pub magnet_distance: f64,
}

impl StatusMetrics {
    pub fn at_price(price: f64, zone: &DynamicZone, magnet: f64) -> Self {
        Self {
            current_price: price,
            zone_status: zone_status(price, zone),
            magnet_distance: magnet_distance(price, magnet),
        }
    }

    /// Uses the close of the latest bar. `None` without bars.
    pub fn from_bars(bars: &[Bar], zone: &DynamicZone, magnet: f64) -> Option<Self> {
        bars.last()
            .map(|bar| Self::at_price(bar.close, zone, magnet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn zone_bounds_are_inclusive() {
        let zone = DynamicZone::new(6143.0, 6105.0);
        assert_eq!(zone_status(6130.0, &zone), ZoneStatus::Inside);
        assert_eq!(zone_status(6143.0, &zone), ZoneStatus::Inside);
        assert_eq!(zone_status(6105.0, &zone), ZoneStatus::Inside);
        assert_eq!(zone_status(6150.0, &zone), ZoneStatus::Outside);
        assert_eq!(zone_status(6104.75, &zone), ZoneStatus::Outside);
    }

    #[test]
    fn inverted_zone_never_contains() {
        let zone = DynamicZone::new(6105.0, 6143.0);
        for price in [6000.0, 6105.0, 6120.0, 6143.0, 6200.0] {
            assert_eq!(zone_status(price, &zone), ZoneStatus::Outside);
        }
    }

    #[test]
    fn magnet_distance_is_signed_and_exact() {
        assert_eq!(magnet_distance(6132.5, 6130.0), 2.5);
        assert_eq!(magnet_distance(6120.25, 6130.0), -9.75);
        assert_eq!(magnet_distance(6130.0, 6130.0), 0.0);
        assert_eq!(magnet_distance(0.1 + 0.2, 0.1), (0.1 + 0.2) - 0.1);
    }

    #[test]
    fn non_finite_price_propagates() {
        let zone = DynamicZone::new(6143.0, 6105.0);
        assert_eq!(zone_status(f64::NAN, &zone), ZoneStatus::Outside);
        assert!(magnet_distance(f64::NAN, 6130.0).is_nan());
        assert_eq!(magnet_distance(f64::INFINITY, 6130.0), f64::INFINITY);
    }

    #[test]
    fn metrics_use_last_close() {
        let zone = DynamicZone::new(6143.0, 6105.0);
        assert_eq!(StatusMetrics::from_bars(&[], &zone, 6130.0), None);

        let t0 = Utc.with_ymd_and_hms(2025, 1, 6, 14, 30, 0).unwrap();
        let bars = vec![
            Bar::new(t0, 6150.0, 6152.0, 6148.0, 6151.0, 900.0),
            Bar::new(t0 + chrono::Duration::minutes(5), 6151.0, 6151.0, 6131.0, 6132.5, 1200.0),
        ];
        let metrics = StatusMetrics::from_bars(&bars, &zone, 6130.0).unwrap();
        assert_eq!(metrics.current_price, 6132.5);
        assert_eq!(metrics.zone_status, ZoneStatus::Inside);
        assert_eq!(metrics.magnet_distance, 2.5);
    }
}
