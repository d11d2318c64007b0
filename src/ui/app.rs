use chrono::{DateTime, Utc};
use eframe::{Frame, egui};
use poll_promise::Promise;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum_macros::EnumIter;
use tokio::runtime::Handle;

use crate::data::market::{CachedMarketData, YahooChartProvider};
use crate::data::persistence::{JsonSnapshotStore, SnapshotStore};
use crate::domain::DashboardResult;
use crate::models::{DashboardSession, ViewSettings};
use crate::ui::app_async::FetchOutcome;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{LevelEvent, LevelForm, SnapshotForm, ZoneForm};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub type SharedMarketData = Arc<CachedMarketData<YahooChartProvider>>;

/// Startup choices that are not persisted between runs
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub symbol: String,
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum DashboardTab {
    #[default]
    Chart,
    LevelManagement,
}

impl DashboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Chart => UI_TEXT.tab_chart,
            DashboardTab::LevelManagement => UI_TEXT.tab_levels,
        }
    }
}

/// One line of feedback for the last user action
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            at: Utc::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        (Utc::now() - self.at).num_seconds() >= UI_CONFIG.status_message_secs
    }
}

pub struct DashboardApp {
    pub(super) session: DashboardSession,
    /// None when the HTTP client could not be built; the chart then stays empty
    pub(super) market: Option<SharedMarketData>,
    pub(super) runtime: Handle,
    pub(super) snapshots: JsonSnapshotStore,
    pub(super) snapshot_names: Vec<String>,
    pub(super) plot_view: PlotView,
    pub(super) active_tab: DashboardTab,

    // Widget state
    pub(super) level_form: LevelForm,
    pub(super) zone_form: ZoneForm,
    pub(super) snapshot_form: SnapshotForm,

    // Background fetch
    pub(super) fetch_promise: Option<Promise<FetchOutcome>>,
    pub(super) last_fetch_started: Option<Instant>,
    pub(super) refetch_requested: bool,

    pub(super) status: Option<StatusMessage>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Handle, settings: AppSettings) -> Self {
        // Only the view settings are restored; levels come back through snapshots
        let view: ViewSettings = match cc.storage {
            Some(storage) => match eframe::get_value(storage, eframe::APP_KEY) {
                Some(view) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_serde {
                        log::info!("Successfully loaded persisted view settings: {:?}", view);
                    }
                    view
                }
                None => ViewSettings::default(),
            },
            None => ViewSettings::default(),
        };

        let market = match YahooChartProvider::new() {
            Ok(provider) => Some(Arc::new(CachedMarketData::new(provider))),
            Err(e) => {
                log::error!("❌ Market data disabled: {}", e);
                None
            }
        };

        let session = DashboardSession::new(settings.symbol, view);
        let snapshots = JsonSnapshotStore::new(settings.data_dir);
        Self::with_parts(session, market, runtime, snapshots)
    }

    pub fn with_parts(
        session: DashboardSession,
        market: Option<SharedMarketData>,
        runtime: Handle,
        snapshots: JsonSnapshotStore,
    ) -> Self {
        let zone_form = ZoneForm::from_store(&session.levels);
        let mut app = Self {
            session,
            market,
            runtime,
            snapshots,
            snapshot_names: Vec::new(),
            plot_view: PlotView,
            active_tab: DashboardTab::default(),
            level_form: LevelForm::default(),
            zone_form,
            snapshot_form: SnapshotForm::default(),
            fetch_promise: None,
            last_fetch_started: None,
            refetch_requested: false,
            status: None,
        };
        app.refresh_snapshot_names();
        app
    }

    pub(super) fn refresh_snapshot_names(&mut self) {
        match self.snapshots.list_names() {
            Ok(names) => {
                if let Some(selected) = &self.snapshot_form.selected {
                    if !names.contains(selected) {
                        self.snapshot_form.selected = None;
                    }
                }
                self.snapshot_names = names;
            }
            Err(e) => {
                log::warn!("⚠️  Could not list saved levels: {}", e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Apply one panel request. Failures leave the session as it was and end
    /// up in the status bar.
    pub(super) fn apply_level_event(&mut self, event: LevelEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Level event: {:?}", event);
        }

        let outcome: DashboardResult<String> = match event {
            LevelEvent::Add { kind, price, major } => self
                .session
                .levels
                .add_level(kind, price, major)
                .map(|_| format!("Added {} level at {:.2}", kind, price)),
            LevelEvent::UpdateZones { top, bottom, magnet } => {
                // Both or neither: validate the magnet before touching the zone
                crate::domain::errors::ensure_finite("magnet price", magnet)
                    .and_then(|_| self.session.levels.update_zone(top, bottom))
                    .and_then(|_| self.session.levels.update_magnet(magnet))
                    .map(|_| "Zones updated".to_string())
            }
            LevelEvent::Delete { kind, id } => self
                .session
                .levels
                .delete_level_by_id(kind, id)
                .map(|level| format!("Deleted {} level at {:.2}", kind, level.price)),
            LevelEvent::Save(name) => {
                let result = self
                    .session
                    .save_snapshot(&self.snapshots, &name)
                    .map(|saved| format!("Saved levels as '{}'", saved));
                if result.is_ok() {
                    self.refresh_snapshot_names();
                }
                result
            }
            LevelEvent::Load(name) => {
                let result = self
                    .session
                    .load_snapshot(&self.snapshots, &name)
                    .map(|loaded| format!("Loaded levels from '{}'", loaded));
                if result.is_ok() {
                    self.zone_form = ZoneForm::from_store(&self.session.levels);
                }
                result
            }
        };

        self.status = Some(match outcome {
            Ok(text) => StatusMessage::info(text),
            Err(e) => {
                log::warn!("⚠️  {}", e);
                StatusMessage::error(e.to_string())
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The fetch thread finishes on its own; nobody is listening any more
        self.fetch_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.session.view);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_fetch();
        self.schedule_refresh();

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // Keep polling the fetch thread and ticking the refresh clock
        if self.is_fetching() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
