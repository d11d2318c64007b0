use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub status_ok: Color32,
    pub status_warning: Color32,
    pub status_error: Color32,
    pub inside_zone: Color32,
    pub outside_zone: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Step of the price drag widgets (one ES tick)
    pub price_step: f64,
    /// How long a status message stays in the status bar
    pub status_message_secs: i64,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 22, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        status_ok: Color32::from_rgb(100, 200, 100),
        status_warning: Color32::from_rgb(255, 215, 0),
        status_error: Color32::from_rgb(255, 100, 100),
        inside_zone: Color32::from_rgb(100, 200, 255),
        outside_zone: Color32::from_rgb(200, 200, 160),
    },
    side_panel_min_width: 220.0,
    price_step: 0.25,
    status_message_secs: 8,
};
