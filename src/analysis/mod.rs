// Indicator math over bar series
pub mod indicators;

pub use indicators::{close_ema, ema};
