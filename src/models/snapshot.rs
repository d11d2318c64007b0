use serde::{Deserialize, Serialize};

use crate::domain::{DynamicZone, Level};

/// The unit of persistence: everything the level store holds, minus ids.
/// All four fields are required when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub support: Vec<Level>,
    pub resistance: Vec<Level>,
    pub dynamic_zone: DynamicZone,
    pub magnet_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_documented_layout() {
        let json = r#"{
            "support": [{"price": 6016, "major": false}, {"price": 6022, "major": true}],
            "resistance": [{"price": 6033.5, "major": true}],
            "dynamic_zone": {"top": 6143.0, "bottom": 6105.0},
            "magnet_price": 6130
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.support, vec![Level::minor(6016.0), Level::major(6022.0)]);
        assert_eq!(snapshot.resistance, vec![Level::major(6033.5)]);
        assert_eq!(snapshot.dynamic_zone, DynamicZone::new(6143.0, 6105.0));
        assert_eq!(snapshot.magnet_price, 6130.0);
    }

    #[test]
    fn every_field_is_required() {
        let json = r#"{
            "support": [],
            "resistance": [],
            "dynamic_zone": {"top": 1.0, "bottom": 0.0}
        }"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());

        let wrong_type = r#"{
            "support": [{"price": "6016", "major": false}],
            "resistance": [],
            "dynamic_zone": {"top": 1.0, "bottom": 0.0},
            "magnet_price": 1.0
        }"#;
        assert!(serde_json::from_str::<Snapshot>(wrong_type).is_err());
    }
}
