//! Level state a fresh session starts with.

/// (price, major)
pub type LevelSeed = (f64, bool);

pub struct DefaultLevels {
    pub support: &'static [LevelSeed],
    pub resistance: &'static [LevelSeed],
    pub zone_top: f64,
    pub zone_bottom: f64,
    pub magnet_price: f64,
}

// Listed as traders usually jot them down; the store sorts on insertion.
pub const DEFAULT_LEVELS: DefaultLevels = DefaultLevels {
    support: &[
        (6022.0, true),
        (6016.0, false),
        (6006.0, false),
        (6002.0, false),
        (5996.0, true),
    ],
    resistance: &[
        (6027.0, false),
        (6033.0, true),
        (6043.0, false),
        (6054.0, false),
    ],
    zone_top: 6143.0,
    zone_bottom: 6105.0,
    magnet_price: 6130.0,
};
