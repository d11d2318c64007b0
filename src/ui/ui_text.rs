//! Every user-facing string of the shell in one place.

pub struct UiText {
    pub app_title: &'static str,
    // Side panel
    pub quick_add_heading: &'static str,
    pub quick_add_price: &'static str,
    pub quick_add_kind: &'static str,
    pub quick_add_major: &'static str,
    pub quick_add_button: &'static str,
    pub zones_heading: &'static str,
    pub zone_top: &'static str,
    pub zone_bottom: &'static str,
    pub magnet_price: &'static str,
    pub update_zones_button: &'static str,
    // Tabs
    pub tab_chart: &'static str,
    pub tab_levels: &'static str,
    // Chart tab
    pub timeframe_label: &'static str,
    pub show_ema: &'static str,
    pub show_volume: &'static str,
    pub refresh_button: &'static str,
    pub metric_price: &'static str,
    pub metric_zone: &'static str,
    pub metric_magnet: &'static str,
    pub waiting_for_data: &'static str,
    pub no_data: &'static str,
    pub stale_prefix: &'static str,
    pub fetch_failed_prefix: &'static str,
    pub plot_y_axis: &'static str,
    pub volume_y_axis: &'static str,
    // Level management tab
    pub snapshots_heading: &'static str,
    pub snapshot_name: &'static str,
    pub save_button: &'static str,
    pub load_button: &'static str,
    pub load_placeholder: &'static str,
    pub no_snapshots: &'static str,
    pub current_levels_heading: &'static str,
    pub delete_button: &'static str,
    pub no_levels: &'static str,
    // Status bar
    pub status_fetching: &'static str,
    pub status_updated: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Futures Levels Dashboard",
    quick_add_heading: "Quick Add Level",
    quick_add_price: "Price",
    quick_add_kind: "Type",
    quick_add_major: "Major Level",
    quick_add_button: "➕ Add Level",
    zones_heading: "Dynamic Zones",
    zone_top: "Zone Top",
    zone_bottom: "Zone Bottom",
    magnet_price: "Magnet Price",
    update_zones_button: "Update Zones",
    tab_chart: "📈 Chart",
    tab_levels: "📋 Level Management",
    timeframe_label: "Timeframe",
    show_ema: "EMA",
    show_volume: "Volume",
    refresh_button: "🔄 Refresh",
    metric_price: "Current Price",
    metric_zone: "Zone Status",
    metric_magnet: "Distance to Magnet",
    waiting_for_data: "Fetching market data...",
    no_data: "No market data available",
    stale_prefix: "Showing data from",
    fetch_failed_prefix: "Market data unavailable",
    plot_y_axis: "Price",
    volume_y_axis: "Volume",
    snapshots_heading: "Saved Levels",
    snapshot_name: "Name",
    save_button: "💾 Save Current Levels",
    load_button: "📂 Load",
    load_placeholder: "Select saved levels",
    no_snapshots: "Nothing saved yet",
    current_levels_heading: "Current Levels",
    delete_button: "🗑",
    no_levels: "None",
    status_fetching: "⏳ Fetching",
    status_updated: "Updated",
};
