use eframe::egui::{Color32, Stroke};
use egui_plot::{Bar, BarChart, HLine, Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::chart::{ChartScene, EmaLine, LineStroke};
use crate::config::PLOT_CONFIG;
use crate::domain::LevelKind;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub scene: &'a ChartScene,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

fn line_style(stroke: LineStroke) -> LineStyle {
    match stroke {
        LineStroke::Solid => LineStyle::Solid,
        LineStroke::Dotted => LineStyle::dotted_dense(),
    }
}

// ============================================================================
// 1. DYNAMIC ZONE (shaded band, drawn first so everything sits on top)
// ============================================================================
pub struct ZoneLayer;

impl PlotLayer for ZoneLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(band) = ctx.scene.zone_band else {
            return;
        };

        let points = PlotPoints::new(vec![
            [band.x_min, band.bottom],
            [band.x_max, band.bottom],
            [band.x_max, band.top],
            [band.x_min, band.top],
        ]);

        plot_ui.polygon(
            Polygon::new("Dynamic Zone", points)
                .fill_color(PLOT_CONFIG.zone_fill_color)
                .stroke(Stroke::new(1.0, PLOT_CONFIG.zone_stroke_color)),
        );
    }
}

// ============================================================================
// 2. CANDLES (wick line + body polygon per bar)
// ============================================================================
pub struct CandleLayer;

impl PlotLayer for CandleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let half = ctx.scene.candle_width / 2.0;

        for candle in &ctx.scene.candles {
            let color = if candle.rising {
                PLOT_CONFIG.rising_color
            } else {
                PLOT_CONFIG.falling_color
            };

            plot_ui.line(
                Line::new("Price", PlotPoints::new(vec![[candle.x, candle.low], [candle.x, candle.high]]))
                    .color(color)
                    .width(1.0),
            );

            let (body_low, body_high) = if candle.rising {
                (candle.open, candle.close)
            } else {
                (candle.close, candle.open)
            };
            plot_ui.polygon(
                Polygon::new(
                    "Price",
                    PlotPoints::new(vec![
                        [candle.x - half, body_low],
                        [candle.x + half, body_low],
                        [candle.x + half, body_high],
                        [candle.x - half, body_high],
                    ]),
                )
                .fill_color(color)
                .stroke(Stroke::new(1.0, color)),
            );
        }
    }
}

// ============================================================================
// 3. EMA OVERLAYS
// ============================================================================
pub struct EmaLayer;

impl EmaLayer {
    fn draw(plot_ui: &mut PlotUi, ema: &EmaLine, color: Color32) {
        if ema.points.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(format!("EMA {}", ema.period), PlotPoints::new(ema.points.clone()))
                .color(color)
                .width(PLOT_CONFIG.ema_line_width),
        );
    }
}

impl PlotLayer for EmaLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(fast) = &ctx.scene.ema_fast {
            Self::draw(plot_ui, fast, PLOT_CONFIG.ema_fast_color);
        }
        if let Some(slow) = &ctx.scene.ema_slow {
            Self::draw(plot_ui, slow, PLOT_CONFIG.ema_slow_color);
        }
    }
}

// ============================================================================
// 4. SUPPORT / RESISTANCE LEVELS
// ============================================================================
pub struct LevelLayer;

impl PlotLayer for LevelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for line in &ctx.scene.level_lines {
            let color = match line.kind {
                LevelKind::Support => PLOT_CONFIG.support_color,
                LevelKind::Resistance => PLOT_CONFIG.resistance_color,
            };
            plot_ui.hline(
                HLine::new(line.kind.label(), line.price)
                    .color(color)
                    .width(line.width)
                    .style(line_style(line.stroke)),
            );
        }
    }
}

// ============================================================================
// 5. MAGNET
// ============================================================================
pub struct MagnetLayer;

impl PlotLayer for MagnetLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let magnet = ctx.scene.magnet_line;
        plot_ui.hline(
            HLine::new("Magnet", magnet.price)
                .color(PLOT_CONFIG.magnet_color)
                .width(magnet.width)
                .style(line_style(magnet.stroke)),
        );
    }
}

// ============================================================================
// VOLUME (lives in its own plot under the price chart)
// ============================================================================
pub struct VolumeLayer;

impl PlotLayer for VolumeLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.scene.volume.is_empty() {
            return;
        }

        let bars: Vec<Bar> = ctx
            .scene
            .volume
            .iter()
            .map(|v| {
                let color = if v.rising {
                    PLOT_CONFIG.rising_color
                } else {
                    PLOT_CONFIG.falling_color
                };
                Bar::new(v.x, v.volume)
                    .width(ctx.scene.candle_width)
                    .fill(color)
                    .stroke(Stroke::NONE)
            })
            .collect();

        plot_ui.bar_chart(BarChart::new("Volume", bars));
    }
}
