// Chart composition, independent of the egui renderer
pub mod scene;

pub use scene::{
    Candle, ChartOptions, ChartScene, EmaLine, LevelLine, LineStroke, MagnetLine, VolumeBar,
    ZoneBand,
};
