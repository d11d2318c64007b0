use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Global counter for generating level ids.
static NEXT_LEVEL_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier handed out when a level enters the store.
/// Never persisted: loading a snapshot assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(u64);

impl LevelId {
    pub fn next() -> Self {
        Self(NEXT_LEVEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum LevelKind {
    Support,
    Resistance,
}

impl LevelKind {
    pub fn label(&self) -> &'static str {
        match self {
            LevelKind::Support => "Support",
            LevelKind::Resistance => "Resistance",
        }
    }
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase so it reads naturally inside error messages
        match self {
            LevelKind::Support => write!(f, "support"),
            LevelKind::Resistance => write!(f, "resistance"),
        }
    }
}

/// A horizontal price line. This is exactly what goes into a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub major: bool,
}

impl Level {
    pub fn new(price: f64, major: bool) -> Self {
        Self { price, major }
    }

    pub fn major(price: f64) -> Self {
        Self::new(price, true)
    }

    pub fn minor(price: f64) -> Self {
        Self::new(price, false)
    }
}

/// A level as held by the store: the level plus its id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelEntry {
    pub id: LevelId,
    pub level: Level,
}

impl LevelEntry {
    pub fn new(level: Level) -> Self {
        Self {
            id: LevelId::next(),
            level,
        }
    }

    pub fn price(&self) -> f64 {
        self.level.price
    }

    pub fn is_major(&self) -> bool {
        self.level.major
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = LevelEntry::new(Level::minor(1.0));
        let b = LevelEntry::new(Level::minor(1.0));
        assert_ne!(a.id, b.id);
        assert_eq!(a.level, b.level);
    }

    #[test]
    fn level_serializes_to_price_and_major_only() {
        let json = serde_json::to_value(Level::major(6022.0)).unwrap();
        assert_eq!(json, serde_json::json!({"price": 6022.0, "major": true}));
    }
}
