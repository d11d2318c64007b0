use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV record for a time interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Close at or above open. Flat bars count as rising.
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        if self.is_rising() {
            (self.open, self.close)
        } else {
            (self.close, self.open)
        }
    }

    /// Plot x coordinate (unix seconds)
    pub fn x(&self) -> f64 {
        self.timestamp.timestamp() as f64
    }
}
