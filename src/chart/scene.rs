//! Turns bars plus level state into plain drawable primitives.
//!
//! Nothing here knows about egui; `ui::plot_layers` maps the scene onto plot items.
//! All x coordinates are unix seconds.

use crate::analysis::close_ema;
use crate::config::{DASHBOARD, PLOT_CONFIG};
use crate::domain::{Bar, LevelId, LevelKind, Timeframe};
use crate::models::{LevelStore, ViewSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStroke {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub timeframe: Timeframe,
    pub show_ema: bool,
    pub show_volume: bool,
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
}

impl From<&ViewSettings> for ChartOptions {
    fn from(view: &ViewSettings) -> Self {
        Self {
            timeframe: view.timeframe,
            show_ema: view.show_ema,
            show_volume: view.show_volume,
            ema_fast_period: DASHBOARD.indicators.ema_fast_period,
            ema_slow_period: DASHBOARD.indicators.ema_slow_period,
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from(&ViewSettings::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub rising: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelLine {
    pub id: LevelId,
    pub kind: LevelKind,
    pub price: f64,
    pub major: bool,
    pub stroke: LineStroke,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetLine {
    pub price: f64,
    pub stroke: LineStroke,
    pub width: f32,
}

/// Shaded rectangle between zone bottom and top over the visible bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBand {
    pub x_min: f64,
    pub x_max: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmaLine {
    pub period: usize,
    /// Only where the average is defined
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBar {
    pub x: f64,
    pub volume: f64,
    pub rising: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub candles: Vec<Candle>,
    /// Width of a candle body in x units
    pub candle_width: f64,
    pub level_lines: Vec<LevelLine>,
    pub magnet_line: MagnetLine,
    pub zone_band: Option<ZoneBand>,
    pub ema_fast: Option<EmaLine>,
    pub ema_slow: Option<EmaLine>,
    pub volume: Vec<VolumeBar>,
}

impl ChartScene {
    pub fn compose(bars: &[Bar], store: &LevelStore, options: &ChartOptions) -> Self {
        let candles = bars
            .iter()
            .map(|bar| Candle {
                x: bar.x(),
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                rising: bar.is_rising(),
            })
            .collect();

        let level_lines = [LevelKind::Support, LevelKind::Resistance]
            .into_iter()
            .flat_map(|kind| {
                store.list_levels(kind).iter().map(move |entry| {
                    let major = entry.is_major();
                    LevelLine {
                        id: entry.id,
                        kind,
                        price: entry.price(),
                        major,
                        stroke: if major {
                            LineStroke::Solid
                        } else {
                            LineStroke::Dotted
                        },
                        width: if major {
                            PLOT_CONFIG.major_line_width
                        } else {
                            PLOT_CONFIG.minor_line_width
                        },
                    }
                })
            })
            .collect();

        let magnet_line = MagnetLine {
            price: store.magnet_price(),
            stroke: LineStroke::Dotted,
            width: PLOT_CONFIG.magnet_line_width,
        };

        let zone = store.dynamic_zone();
        let zone_band = match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Some(ZoneBand {
                x_min: first.x(),
                x_max: last.x(),
                top: zone.top,
                bottom: zone.bottom,
            }),
            _ => None,
        };

        let (ema_fast, ema_slow) = if options.show_ema {
            (
                Some(ema_line(bars, options.ema_fast_period)),
                Some(ema_line(bars, options.ema_slow_period)),
            )
        } else {
            (None, None)
        };

        let volume = if options.show_volume {
            bars.iter()
                .map(|bar| VolumeBar {
                    x: bar.x(),
                    volume: bar.volume,
                    rising: bar.is_rising(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            candles,
            candle_width: options.timeframe.duration().as_secs_f64()
                * PLOT_CONFIG.candle_width_fraction,
            level_lines,
            magnet_line,
            zone_band,
            ema_fast,
            ema_slow,
            volume,
        }
    }

    /// First and last candle x, if any
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.candles.first()?.x, self.candles.last()?.x))
    }
}

fn ema_line(bars: &[Bar], period: usize) -> EmaLine {
    let points = bars
        .iter()
        .zip(close_ema(bars, period))
        .filter_map(|(bar, value)| value.map(|v| [bar.x(), v]))
        .collect();
    EmaLine { period, points }
}
