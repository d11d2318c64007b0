use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::chart::{ChartOptions, ChartScene};
use crate::domain::ZoneStatus;
use crate::ui::app::{DashboardApp, DashboardTab};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    ChartControlsPanel, ChartEvent, LevelListPanel, Panel, QuickAddPanel, SnapshotPanel, ZonePanel,
};
use crate::ui::utils::{format_price, format_signed};
use crate::utils::time_utils::{clock_time, how_many_seconds_ago};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl DashboardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut events = QuickAddPanel::new(&mut self.level_form).render(ui);
                events.extend(ZonePanel::new(&mut self.zone_form).render(ui));

                for event in events {
                    self.apply_level_event(event);
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(8));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in DashboardTab::iter() {
                        if ui
                            .selectable_value(&mut self.active_tab, tab, tab.label())
                            .clicked()
                            && tab == DashboardTab::LevelManagement
                        {
                            self.refresh_snapshot_names();
                        }
                    }
                });
                ui.separator();

                match self.active_tab {
                    DashboardTab::Chart => self.render_chart_tab(ui),
                    DashboardTab::LevelManagement => {
                        ScrollArea::vertical()
                            .id_salt("level_management")
                            .show(ui, |ui| self.render_levels_tab(ui));
                    }
                }
            });
    }

    fn render_chart_tab(&mut self, ui: &mut Ui) {
        let events = ChartControlsPanel::new(self.session.view, self.is_fetching()).render(ui);
        for event in events {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Chart event: {:?}", event);
            }
            match event {
                ChartEvent::Timeframe(timeframe) => {
                    if self.session.set_timeframe(timeframe) {
                        self.request_fetch("timeframe changed");
                    }
                }
                ChartEvent::ShowEma(show) => self.session.view.show_ema = show,
                ChartEvent::ShowVolume(show) => self.session.view.show_volume = show,
                ChartEvent::Refresh => self.force_refresh(),
            }
        }

        ui.add_space(6.0);
        self.render_feed_banner(ui);
        self.render_metrics(ui);
        ui.add_space(6.0);

        if self.session.feed.bars().is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                if self.is_fetching() {
                    ui.spinner();
                    ui.add_space(12.0);
                    ui.heading(UI_TEXT.waiting_for_data);
                } else {
                    ui.heading(UI_TEXT.no_data);
                }
            });
            return;
        }

        let options = ChartOptions::from(&self.session.view);
        let scene = ChartScene::compose(self.session.feed.bars(), &self.session.levels, &options);
        self.plot_view.show(ui, &scene, &self.session.symbol);
    }

    fn render_feed_banner(&self, ui: &mut Ui) {
        let feed = &self.session.feed;
        let Some(error) = feed.last_error() else {
            return;
        };

        match feed.latest() {
            Some(series) => ui.label_warning(format!(
                "⚠ {} {} ({}s ago). {}: {}",
                UI_TEXT.stale_prefix,
                clock_time(series.fetched_at),
                how_many_seconds_ago(series.fetched_at),
                UI_TEXT.fetch_failed_prefix,
                error
            )),
            None => ui.label_error(format!("⚠ {}: {}", UI_TEXT.fetch_failed_prefix, error)),
        }
    }

    fn render_metrics(&self, ui: &mut Ui) {
        let Some(metrics) = self.session.metrics() else {
            return;
        };

        let zone_color = match metrics.zone_status {
            ZoneStatus::Inside => UI_CONFIG.colors.inside_zone,
            ZoneStatus::Outside => UI_CONFIG.colors.outside_zone,
        };
        let magnet_color = if metrics.magnet_distance >= 0.0 {
            UI_CONFIG.colors.status_ok
        } else {
            UI_CONFIG.colors.status_error
        };

        ui.columns(3, |columns| {
            columns[0].metric(
                UI_TEXT.metric_price,
                &format_price(metrics.current_price),
                Color32::WHITE,
            );
            columns[1].metric(UI_TEXT.metric_zone, metrics.zone_status.label(), zone_color);
            columns[2].metric(
                UI_TEXT.metric_magnet,
                &format_signed(metrics.magnet_distance),
                magnet_color,
            );
        });
    }

    fn render_levels_tab(&mut self, ui: &mut Ui) {
        let mut events = SnapshotPanel::new(&mut self.snapshot_form, &self.snapshot_names).render(ui);
        events.extend(LevelListPanel::new(&self.session.levels).render(ui));

        for event in events {
            self.apply_level_event(event);
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }

        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}  {}",
                            self.session.symbol, self.session.view.timeframe
                        ))
                        .monospace()
                        .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    if self.is_fetching() {
                        ui.label_warning(UI_TEXT.status_fetching);
                        ui.separator();
                    }

                    if let Some(series) = self.session.feed.latest() {
                        let color = if self.session.feed.is_stale() {
                            UI_CONFIG.colors.status_warning
                        } else {
                            UI_CONFIG.colors.status_ok
                        };
                        ui.label_subdued(UI_TEXT.status_updated);
                        ui.label(
                            RichText::new(clock_time(series.fetched_at))
                                .small()
                                .color(color),
                        );
                        ui.separator();
                    }

                    if let Some(message) = &self.status {
                        if message.is_error {
                            ui.label_error(&message.text);
                        } else {
                            ui.label(
                                RichText::new(&message.text).color(UI_CONFIG.colors.status_ok),
                            );
                        }
                    }
                });
            });
    }
}
