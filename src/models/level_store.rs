use crate::config::DEFAULT_LEVELS;
use crate::domain::errors::{DashboardError, DashboardResult, ensure_finite};
use crate::domain::{DynamicZone, Level, LevelEntry, LevelId, LevelKind};
use crate::models::snapshot::Snapshot;

/// Support/resistance levels, the dynamic zone and the magnet price for one session.
///
/// Both level sequences are kept sorted ascending by price after every insertion.
/// Equal prices keep their insertion order (stable sort) and are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStore {
    support: Vec<LevelEntry>,
    resistance: Vec<LevelEntry>,
    dynamic_zone: DynamicZone,
    magnet_price: f64,
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LevelStore {
    /// Empty level sets with the given zone and magnet
    pub fn new(dynamic_zone: DynamicZone, magnet_price: f64) -> Self {
        Self {
            support: Vec::new(),
            resistance: Vec::new(),
            dynamic_zone,
            magnet_price,
        }
    }

    /// The state a fresh session starts with
    pub fn with_defaults() -> Self {
        let seeds = &DEFAULT_LEVELS;
        let mut store = Self::new(
            DynamicZone::new(seeds.zone_top, seeds.zone_bottom),
            seeds.magnet_price,
        );
        for (kind, list) in [
            (LevelKind::Support, seeds.support),
            (LevelKind::Resistance, seeds.resistance),
        ] {
            let levels = store.levels_mut(kind);
            levels.extend(
                list.iter()
                    .map(|&(price, major)| LevelEntry::new(Level::new(price, major))),
            );
            sort_by_price(levels);
        }
        store
    }

    /// Rebuilds a store from persisted state. Fresh ids; sequences re-sorted
    /// in case the file was edited by hand.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self::new(snapshot.dynamic_zone, snapshot.magnet_price);
        store.support = snapshot.support.into_iter().map(LevelEntry::new).collect();
        store.resistance = snapshot
            .resistance
            .into_iter()
            .map(LevelEntry::new)
            .collect();
        sort_by_price(&mut store.support);
        sort_by_price(&mut store.resistance);
        store
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            support: self.support.iter().map(|e| e.level).collect(),
            resistance: self.resistance.iter().map(|e| e.level).collect(),
            dynamic_zone: self.dynamic_zone,
            magnet_price: self.magnet_price,
        }
    }

    // --- MUTATORS ---

    pub fn add_level(
        &mut self,
        kind: LevelKind,
        price: f64,
        major: bool,
    ) -> DashboardResult<LevelId> {
        let price = ensure_finite("level price", price)?;
        let entry = LevelEntry::new(Level::new(price, major));
        let levels = self.levels_mut(kind);
        levels.push(entry);
        sort_by_price(levels);
        Ok(entry.id)
    }

    /// Removes the level currently at `index`.
    /// Positions shift after every delete, so prefer `delete_level_by_id` from UI code.
    pub fn delete_level(&mut self, kind: LevelKind, index: usize) -> DashboardResult<Level> {
        let levels = self.levels_mut(kind);
        if index >= levels.len() {
            return Err(DashboardError::IndexOutOfRange {
                kind,
                index,
                len: levels.len(),
            });
        }
        Ok(levels.remove(index).level)
    }

    pub fn delete_level_by_id(&mut self, kind: LevelKind, id: LevelId) -> DashboardResult<Level> {
        let levels = self.levels_mut(kind);
        let pos = levels
            .iter()
            .position(|e| e.id == id)
            .ok_or(DashboardError::LevelNotFound { kind, id })?;
        Ok(levels.remove(pos).level)
    }

    /// Both fields change or neither does. No `top >= bottom` check.
    pub fn update_zone(&mut self, top: f64, bottom: f64) -> DashboardResult<()> {
        let top = ensure_finite("zone top", top)?;
        let bottom = ensure_finite("zone bottom", bottom)?;
        self.dynamic_zone = DynamicZone::new(top, bottom);
        Ok(())
    }

    pub fn update_magnet(&mut self, price: f64) -> DashboardResult<()> {
        self.magnet_price = ensure_finite("magnet price", price)?;
        Ok(())
    }

    // --- ACCESSORS ---

    pub fn list_levels(&self, kind: LevelKind) -> &[LevelEntry] {
        match kind {
            LevelKind::Support => &self.support,
            LevelKind::Resistance => &self.resistance,
        }
    }

    pub fn dynamic_zone(&self) -> DynamicZone {
        self.dynamic_zone
    }

    pub fn magnet_price(&self) -> f64 {
        self.magnet_price
    }

    fn levels_mut(&mut self, kind: LevelKind) -> &mut Vec<LevelEntry> {
        match kind {
            LevelKind::Support => &mut self.support,
            LevelKind::Resistance => &mut self.resistance,
        }
    }
}

fn sort_by_price(levels: &mut [LevelEntry]) {
    // Prices are finite by construction, total_cmp just avoids the Option dance
    levels.sort_by(|a, b| a.price().total_cmp(&b.price()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(store: &LevelStore, kind: LevelKind) -> Vec<Level> {
        store.list_levels(kind).iter().map(|e| e.level).collect()
    }

    fn store_with_support(seed: &[Level]) -> LevelStore {
        LevelStore::from_snapshot(Snapshot {
            support: seed.to_vec(),
            resistance: Vec::new(),
            dynamic_zone: DynamicZone::new(6143.0, 6105.0),
            magnet_price: 6130.0,
        })
    }

    #[test]
    fn add_then_delete_by_position() {
        let mut store = store_with_support(&[Level::major(6022.0), Level::minor(6016.0)]);

        store.add_level(LevelKind::Support, 6018.0, false).unwrap();
        assert_eq!(
            levels(&store, LevelKind::Support),
            vec![Level::minor(6016.0), Level::minor(6018.0), Level::major(6022.0)]
        );

        let removed = store.delete_level(LevelKind::Support, 1).unwrap();
        assert_eq!(removed, Level::minor(6018.0));
        assert_eq!(
            levels(&store, LevelKind::Support),
            vec![Level::minor(6016.0), Level::major(6022.0)]
        );
    }

    #[test]
    fn any_sequence_of_adds_stays_sorted() {
        let mut store = LevelStore::new(DynamicZone::new(1.0, 0.0), 0.5);
        // Deterministic scramble, includes negatives and duplicates
        let prices: Vec<f64> = (0..200)
            .map(|i| ((i * 7919) % 257) as f64 * 0.25 - 20.0)
            .collect();
        for (i, price) in prices.iter().enumerate() {
            store
                .add_level(LevelKind::Resistance, *price, i % 3 == 0)
                .unwrap();
            let listed = store.list_levels(LevelKind::Resistance);
            assert_eq!(listed.len(), i + 1);
            assert!(listed.windows(2).all(|w| w[0].price() <= w[1].price()));
        }
        assert!(store.list_levels(LevelKind::Support).is_empty());
    }

    #[test]
    fn equal_prices_keep_insertion_order() {
        let mut store = LevelStore::new(DynamicZone::new(1.0, 0.0), 0.5);
        let first = store.add_level(LevelKind::Support, 10.0, true).unwrap();
        store.add_level(LevelKind::Support, 5.0, false).unwrap();
        let second = store.add_level(LevelKind::Support, 10.0, false).unwrap();

        let ids: Vec<LevelId> = store
            .list_levels(LevelKind::Support)
            .iter()
            .skip(1)
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn delete_keeps_relative_order_of_the_rest() {
        let mut store = LevelStore::with_defaults();
        let before = levels(&store, LevelKind::Resistance);

        for i in (0..before.len()).rev() {
            let mut s = store.clone();
            s.delete_level(LevelKind::Resistance, i).unwrap();
            let mut expected = before.clone();
            expected.remove(i);
            assert_eq!(levels(&s, LevelKind::Resistance), expected);
        }

        store.delete_level(LevelKind::Resistance, 0).unwrap();
        assert_eq!(store.list_levels(LevelKind::Resistance).len(), before.len() - 1);
    }

    #[test]
    fn stale_position_is_rejected_and_state_untouched() {
        let mut store = store_with_support(&[Level::minor(1.0), Level::minor(2.0)]);
        store.delete_level(LevelKind::Support, 1).unwrap();
        let before = store.clone();

        let err = store.delete_level(LevelKind::Support, 1).unwrap_err();
        assert_eq!(
            err,
            DashboardError::IndexOutOfRange {
                kind: LevelKind::Support,
                index: 1,
                len: 1
            }
        );
        assert_eq!(store, before);
    }

    #[test]
    fn delete_by_id_survives_shifting_positions() {
        let mut store = LevelStore::new(DynamicZone::new(1.0, 0.0), 0.5);
        let a = store.add_level(LevelKind::Support, 1.0, false).unwrap();
        let b = store.add_level(LevelKind::Support, 2.0, false).unwrap();
        let c = store.add_level(LevelKind::Support, 3.0, true).unwrap();

        // Two deletes issued against the same rendered list
        assert_eq!(
            store.delete_level_by_id(LevelKind::Support, a).unwrap(),
            Level::minor(1.0)
        );
        assert_eq!(
            store.delete_level_by_id(LevelKind::Support, c).unwrap(),
            Level::major(3.0)
        );
        assert_eq!(store.list_levels(LevelKind::Support)[0].id, b);

        let err = store.delete_level_by_id(LevelKind::Support, a).unwrap_err();
        assert!(matches!(err, DashboardError::LevelNotFound { id, .. } if id == a));
    }

    #[test]
    fn id_from_other_kind_is_not_found() {
        let mut store = LevelStore::new(DynamicZone::new(1.0, 0.0), 0.5);
        let id = store.add_level(LevelKind::Support, 1.0, false).unwrap();
        assert!(store.delete_level_by_id(LevelKind::Resistance, id).is_err());
        assert_eq!(store.list_levels(LevelKind::Support).len(), 1);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut store = LevelStore::with_defaults();
        let before = store.clone();

        assert!(matches!(
            store.add_level(LevelKind::Support, f64::NAN, true),
            Err(DashboardError::InvalidInput { .. })
        ));
        assert!(store
            .add_level(LevelKind::Resistance, f64::INFINITY, false)
            .is_err());
        // Top is fine, bottom is not: neither may change
        assert!(store.update_zone(6200.0, f64::NEG_INFINITY).is_err());
        assert!(store.update_magnet(f64::NAN).is_err());

        assert_eq!(store, before);
    }

    #[test]
    fn zone_and_magnet_updates() {
        let mut store = LevelStore::with_defaults();
        // Inverted zone is accepted as-is
        store.update_zone(6100.0, 6150.0).unwrap();
        assert_eq!(store.dynamic_zone(), DynamicZone::new(6100.0, 6150.0));

        store.update_magnet(6000.25).unwrap();
        assert_eq!(store.magnet_price(), 6000.25);
    }

    #[test]
    fn defaults_are_sorted() {
        let store = LevelStore::with_defaults();
        assert_eq!(
            levels(&store, LevelKind::Support),
            vec![
                Level::major(5996.0),
                Level::minor(6002.0),
                Level::minor(6006.0),
                Level::minor(6016.0),
                Level::major(6022.0),
            ]
        );
        assert_eq!(store.list_levels(LevelKind::Resistance).len(), 4);
        assert_eq!(store.dynamic_zone(), DynamicZone::new(6143.0, 6105.0));
        assert_eq!(store.magnet_price(), 6130.0);
    }

    #[test]
    fn snapshot_round_trip_reassigns_ids() {
        let store = LevelStore::with_defaults();
        let restored = LevelStore::from_snapshot(store.to_snapshot());

        assert_eq!(restored.to_snapshot(), store.to_snapshot());
        assert_ne!(
            restored.list_levels(LevelKind::Support)[0].id,
            store.list_levels(LevelKind::Support)[0].id
        );
    }
}
