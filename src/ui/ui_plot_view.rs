use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::chart::ChartScene;
use crate::config::PLOT_CONFIG;
use crate::ui::plot_layers::{
    CandleLayer, EmaLayer, LayerContext, LevelLayer, MagnetLayer, PlotLayer, VolumeLayer,
    ZoneLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_price, format_volume};
use crate::utils::time_utils::epoch_sec_to_local;

const X_AXIS_GROUP: &str = "dashboard_time_axis";

/// Draws a composed scene: price plot on top, optional volume plot below,
/// both sharing the time axis.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show(&self, ui: &mut egui::Ui, scene: &ChartScene, symbol: &str) {
        let ctx = LayerContext { scene };

        Plot::new("price_plot")
            .height(PLOT_CONFIG.price_plot_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .link_axis(X_AXIS_GROUP, [true, false])
            .link_cursor(X_AXIS_GROUP, [true, false])
            .custom_x_axes(vec![time_axis()])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(format!("{}  {}", symbol, UI_TEXT.plot_y_axis))
                    .formatter(|grid_mark, _range| format_price(grid_mark.value))
                    .placement(HPlacement::Right),
            ])
            .label_formatter(|name, value| {
                let when = epoch_sec_to_local(value.x as i64);
                if name.is_empty() {
                    format!("{}\n{}", when, format_price(value.y))
                } else {
                    format!("{}\n{}\n{}", name, when, format_price(value.y))
                }
            })
            .show(ui, |plot_ui| {
                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(ZoneLayer),
                    Box::new(CandleLayer),
                    Box::new(EmaLayer),
                    Box::new(LevelLayer),
                    Box::new(MagnetLayer),
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });

        if scene.volume.is_empty() {
            return;
        }

        Plot::new("volume_plot")
            .height(PLOT_CONFIG.volume_plot_height)
            .link_axis(X_AXIS_GROUP, [true, false])
            .link_cursor(X_AXIS_GROUP, [true, false])
            .custom_x_axes(vec![time_axis()])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(UI_TEXT.volume_y_axis)
                    .formatter(|grid_mark, _range| format_volume(grid_mark.value))
                    .placement(HPlacement::Right),
            ])
            .label_formatter(|_, value| format_volume(value.y))
            .include_y(0.0)
            .show(ui, |plot_ui| {
                VolumeLayer.render(plot_ui, &ctx);
            });
    }
}

fn time_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| {
        epoch_sec_to_local(grid_mark.value as i64)
    })
}
