//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub support_color: Color32,
    pub resistance_color: Color32,
    pub magnet_color: Color32,
    pub zone_fill_color: Color32,
    pub zone_stroke_color: Color32,
    pub rising_color: Color32,
    pub falling_color: Color32,
    pub ema_fast_color: Color32,
    pub ema_slow_color: Color32,
    /// Width of major level lines
    pub major_line_width: f32,
    /// Width of minor level lines
    pub minor_line_width: f32,
    pub magnet_line_width: f32,
    pub ema_line_width: f32,
    /// Height of the price plot in points
    pub price_plot_height: f32,
    /// Height of the volume plot in points
    pub volume_plot_height: f32,
    /// Fraction of a bar interval each candle body occupies
    pub candle_width_fraction: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    support_color: Color32::from_rgb(0, 200, 0),      // Green
    resistance_color: Color32::from_rgb(200, 0, 0),   // Red
    magnet_color: Color32::from_rgb(30, 100, 255),    // Blue
    zone_fill_color: Color32::from_rgba_premultiplied(60, 60, 60, 51), // Grey, ~20% opacity
    zone_stroke_color: Color32::GRAY,
    rising_color: Color32::from_rgb(38, 166, 154),
    falling_color: Color32::from_rgb(239, 83, 80),
    ema_fast_color: Color32::from_rgb(41, 98, 255),   // #2962ff
    ema_slow_color: Color32::from_rgb(255, 109, 0),   // #ff6d00
    major_line_width: 2.0,
    minor_line_width: 1.0,
    magnet_line_width: 2.0,
    ema_line_width: 1.0,
    price_plot_height: 560.0,
    volume_plot_height: 140.0,
    candle_width_fraction: 0.7,
};
