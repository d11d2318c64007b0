//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! debug builds stay readable.

pub struct DebugFlags {
    /// Emit bar cache hit/miss diagnostics.
    pub print_cache_events: bool,
    /// Emit UI interaction logs (level edits, tab switches, manual refreshes).
    pub print_ui_interactions: bool,
    /// Emit snapshot serialization/deserialization logs.
    pub print_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_cache_events: false,
    print_ui_interactions: true,
    print_serde: false,
    print_shutdown: false,
};
