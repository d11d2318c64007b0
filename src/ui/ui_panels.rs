use eframe::egui::{Checkbox, ComboBox, DragValue, Grid, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::PLOT_CONFIG;
use crate::domain::{LevelId, LevelKind, Timeframe};
use crate::models::{LevelStore, ViewSettings};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{format_price, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Everything a panel can ask the level store or snapshot store to do
#[derive(Debug, Clone, PartialEq)]
pub enum LevelEvent {
    Add {
        kind: LevelKind,
        price: f64,
        major: bool,
    },
    UpdateZones {
        top: f64,
        bottom: f64,
        magnet: f64,
    },
    Delete {
        kind: LevelKind,
        id: LevelId,
    },
    Save(String),
    Load(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    Timeframe(Timeframe),
    ShowEma(bool),
    ShowVolume(bool),
    Refresh,
}

/// Half-typed quick add input, kept across frames
#[derive(Debug, Clone)]
pub struct LevelForm {
    pub price: f64,
    pub kind: LevelKind,
    pub major: bool,
}

impl Default for LevelForm {
    fn default() -> Self {
        Self {
            price: 6000.0,
            kind: LevelKind::Support,
            major: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneForm {
    pub top: f64,
    pub bottom: f64,
    pub magnet: f64,
}

impl ZoneForm {
    /// Prefill from the store so the widgets show what is currently drawn
    pub fn from_store(store: &LevelStore) -> Self {
        let zone = store.dynamic_zone();
        Self {
            top: zone.top,
            bottom: zone.bottom,
            magnet: store.magnet_price(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotForm {
    pub save_name: String,
    pub selected: Option<String>,
}

fn price_input(ui: &mut Ui, value: &mut f64) {
    ui.add(
        DragValue::new(value)
            .speed(UI_CONFIG.price_step)
            .fixed_decimals(2),
    );
}

/// Side panel: add one level
pub struct QuickAddPanel<'a> {
    form: &'a mut LevelForm,
}

impl<'a> QuickAddPanel<'a> {
    pub fn new(form: &'a mut LevelForm) -> Self {
        Self { form }
    }
}

impl<'a> Panel for QuickAddPanel<'a> {
    type Event = LevelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.quick_add_heading);

        Grid::new("quick_add_grid").num_columns(2).show(ui, |ui| {
            ui.label(UI_TEXT.quick_add_price);
            price_input(ui, &mut self.form.price);
            ui.end_row();

            ui.label(UI_TEXT.quick_add_kind);
            ComboBox::from_id_salt("quick_add_kind")
                .selected_text(self.form.kind.label())
                .show_ui(ui, |ui| {
                    for kind in LevelKind::iter() {
                        ui.selectable_value(&mut self.form.kind, kind, kind.label());
                    }
                });
            ui.end_row();
        });
        ui.add(Checkbox::new(&mut self.form.major, UI_TEXT.quick_add_major));

        if ui.button(UI_TEXT.quick_add_button).clicked() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Quick add requested: {:?}", self.form);
            }
            events.push(LevelEvent::Add {
                kind: self.form.kind,
                price: self.form.price,
                major: self.form.major,
            });
        }
        events
    }
}

/// Side panel: dynamic zone bounds and magnet, applied together
pub struct ZonePanel<'a> {
    form: &'a mut ZoneForm,
}

impl<'a> ZonePanel<'a> {
    pub fn new(form: &'a mut ZoneForm) -> Self {
        Self { form }
    }
}

impl<'a> Panel for ZonePanel<'a> {
    type Event = LevelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.zones_heading);

        Grid::new("zone_grid").num_columns(2).show(ui, |ui| {
            ui.label(UI_TEXT.zone_top);
            price_input(ui, &mut self.form.top);
            ui.end_row();

            ui.label(UI_TEXT.zone_bottom);
            price_input(ui, &mut self.form.bottom);
            ui.end_row();

            ui.label(UI_TEXT.magnet_price);
            price_input(ui, &mut self.form.magnet);
            ui.end_row();
        });

        if self.form.top < self.form.bottom {
            ui.label_warning("Top is below bottom");
        }

        if ui.button(UI_TEXT.update_zones_button).clicked() {
            events.push(LevelEvent::UpdateZones {
                top: self.form.top,
                bottom: self.form.bottom,
                magnet: self.form.magnet,
            });
        }
        events
    }
}

/// Chart tab header: timeframe and overlay toggles
pub struct ChartControlsPanel {
    view: ViewSettings,
    fetching: bool,
}

impl ChartControlsPanel {
    pub fn new(view: ViewSettings, fetching: bool) -> Self {
        Self { view, fetching }
    }
}

impl Panel for ChartControlsPanel {
    type Event = ChartEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.timeframe_label);
            ComboBox::from_id_salt("timeframe")
                .selected_text(self.view.timeframe.as_str())
                .show_ui(ui, |ui| {
                    for timeframe in Timeframe::iter() {
                        if ui
                            .selectable_value(&mut self.view.timeframe, timeframe, timeframe.as_str())
                            .clicked()
                        {
                            events.push(ChartEvent::Timeframe(timeframe));
                        }
                    }
                });

            ui.separator();
            if ui.checkbox(&mut self.view.show_ema, UI_TEXT.show_ema).changed() {
                events.push(ChartEvent::ShowEma(self.view.show_ema));
            }
            if ui
                .checkbox(&mut self.view.show_volume, UI_TEXT.show_volume)
                .changed()
            {
                events.push(ChartEvent::ShowVolume(self.view.show_volume));
            }

            ui.separator();
            if ui
                .add_enabled(!self.fetching, eframe::egui::Button::new(UI_TEXT.refresh_button))
                .clicked()
            {
                events.push(ChartEvent::Refresh);
            }
        });
        events
    }
}

/// Level management tab: save and load named snapshots
pub struct SnapshotPanel<'a> {
    form: &'a mut SnapshotForm,
    names: &'a [String],
}

impl<'a> SnapshotPanel<'a> {
    pub fn new(form: &'a mut SnapshotForm, names: &'a [String]) -> Self {
        Self { form, names }
    }
}

impl<'a> Panel for SnapshotPanel<'a> {
    type Event = LevelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.snapshots_heading);

        ui.horizontal(|ui| {
            ui.label(UI_TEXT.snapshot_name);
            ui.add(TextEdit::singleline(&mut self.form.save_name).desired_width(180.0));
            if ui.button(UI_TEXT.save_button).clicked() {
                events.push(LevelEvent::Save(self.form.save_name.clone()));
            }
        });

        ui.add_space(5.0);
        if self.names.is_empty() {
            ui.label_subdued(UI_TEXT.no_snapshots);
            return events;
        }

        ui.horizontal(|ui| {
            let selected_text = self
                .form
                .selected
                .clone()
                .unwrap_or_else(|| UI_TEXT.load_placeholder.to_string());
            ComboBox::from_id_salt("snapshot_names")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for name in self.names {
                        ui.selectable_value(&mut self.form.selected, Some(name.clone()), name);
                    }
                });

            let button = eframe::egui::Button::new(UI_TEXT.load_button);
            if ui.add_enabled(self.form.selected.is_some(), button).clicked() {
                if let Some(name) = &self.form.selected {
                    events.push(LevelEvent::Load(name.clone()));
                }
            }
        });
        events
    }
}

/// Level management tab: every stored level with a delete button
pub struct LevelListPanel<'a> {
    store: &'a LevelStore,
}

impl<'a> LevelListPanel<'a> {
    pub fn new(store: &'a LevelStore) -> Self {
        Self { store }
    }

    fn render_kind(&self, ui: &mut Ui, kind: LevelKind, events: &mut Vec<LevelEvent>) {
        let color = match kind {
            LevelKind::Support => PLOT_CONFIG.support_color,
            LevelKind::Resistance => PLOT_CONFIG.resistance_color,
        };
        ui.label_subheader(kind.label());

        let entries = self.store.list_levels(kind);
        if entries.is_empty() {
            ui.label_subdued(UI_TEXT.no_levels);
            return;
        }

        // Highest first reads like a price ladder
        for entry in entries.iter().rev() {
            ui.horizontal(|ui| {
                let mut text = RichText::new(format_price(entry.price())).color(color).monospace();
                if entry.is_major() {
                    text = text.strong();
                }
                ui.label(text);
                if entry.is_major() {
                    ui.label_subdued("major");
                }
                if ui
                    .small_button(UI_TEXT.delete_button)
                    .on_hover_text(format!("Delete {} {}", kind, entry.id))
                    .clicked()
                {
                    events.push(LevelEvent::Delete { kind, id: entry.id });
                }
            });
        }
    }
}

impl<'a> Panel for LevelListPanel<'a> {
    type Event = LevelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        spaced_separator(ui);
        section_heading(ui, UI_TEXT.current_levels_heading);

        ui.columns(2, |columns| {
            self.render_kind(&mut columns[0], LevelKind::Resistance, &mut events);
            self.render_kind(&mut columns[1], LevelKind::Support, &mut events);
        });

        spaced_separator(ui);
        let zone = self.store.dynamic_zone();
        ui.label_subdued(format!(
            "Zone {} - {}  |  Magnet {}",
            format_price(zone.bottom),
            format_price(zone.top),
            format_price(self.store.magnet_price())
        ));
        events
    }
}
