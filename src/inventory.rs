//! Parking space inventory generation
//! Produces a fresh synthetic snapshot of every space on each call

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::models::{InventorySummary, ParkingSpace, SpaceStatus, SpaceType, ZoneSummary};

pub const DEFAULT_ZONES: &[&str] = &["A", "B", "C", "D"];
pub const DEFAULT_SPACES_PER_ZONE: usize = 15;

/// Draw above this value makes a space EV-charging (~20%)
const EV_CHARGING_THRESHOLD: f64 = 0.8;
/// Single status draw partitioned into occupied (~35%), reserved (~15%), available (~50%)
const OCCUPIED_THRESHOLD: f64 = 0.65;
const RESERVED_THRESHOLD: f64 = 0.50;

/// Shape of the generated inventory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryParams {
    pub zones: Vec<String>,
    pub spaces_per_zone: usize,
}

impl Default for InventoryParams {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.iter().map(|z| z.to_string()).collect(),
            spaces_per_zone: DEFAULT_SPACES_PER_ZONE,
        }
    }
}

impl InventoryParams {
    /// Saturates instead of overflowing; config keeps real inventories far below that
    pub fn total_spaces(&self) -> usize {
        self.zones.len().saturating_mul(self.spaces_per_zone)
    }
}

/// Map a uniform draw in [0, 1) to a space type
pub fn space_type_for_draw(draw: f64) -> SpaceType {
    if draw > EV_CHARGING_THRESHOLD {
        SpaceType::EvCharging
    } else {
        SpaceType::Standard
    }
}

/// Map one uniform draw in [0, 1) to a status using cumulative partitions
pub fn status_for_draw(draw: f64) -> SpaceStatus {
    if draw > OCCUPIED_THRESHOLD {
        SpaceStatus::Occupied
    } else if draw > RESERVED_THRESHOLD {
        SpaceStatus::Reserved
    } else {
        SpaceStatus::Available
    }
}

/// Generate one inventory snapshot from the supplied random source.
/// Spaces come out zone-major; the numbering counter runs across all zones.
pub fn generate_inventory<R: Rng + ?Sized>(params: &InventoryParams, rng: &mut R) -> Vec<ParkingSpace> {
    let unit = Uniform::new(0.0_f64, 1.0);
    let mut spaces = Vec::new();
    let mut counter: usize = 1;

    for zone in &params.zones {
        for _ in 0..params.spaces_per_zone {
            let space_type = space_type_for_draw(unit.sample(rng));
            let status = status_for_draw(unit.sample(rng));

            spaces.push(ParkingSpace {
                id: format!("space-{}", counter),
                zone: zone.clone(),
                number: format!("{}{:03}", zone, counter),
                space_type,
                status,
            });

            counter += 1;
        }
    }

    debug!(spaces = spaces.len(), zones = params.zones.len(), "generated inventory snapshot");
    spaces
}

/// Spaces a user may pick in the booking flow
pub fn available_spaces(spaces: &[ParkingSpace]) -> Vec<&ParkingSpace> {
    spaces.iter().filter(|s| s.is_available()).collect()
}

/// Dashboard counts for a snapshot. Zones are listed in the order they first appear.
pub fn summarize(spaces: &[ParkingSpace]) -> InventorySummary {
    let mut zones: Vec<ZoneSummary> = Vec::new();
    let mut available = 0;
    let mut occupied = 0;
    let mut reserved = 0;
    let mut ev_available = 0;

    for space in spaces {
        match space.status {
            SpaceStatus::Available => available += 1,
            SpaceStatus::Occupied => occupied += 1,
            SpaceStatus::Reserved => reserved += 1,
        }
        if space.is_available() && space.is_ev_charging() {
            ev_available += 1;
        }

        let idx = match zones.iter().position(|z| z.zone == space.zone) {
            Some(idx) => idx,
            None => {
                zones.push(ZoneSummary {
                    zone: space.zone.clone(),
                    available: 0,
                    total: 0,
                });
                zones.len() - 1
            }
        };
        zones[idx].total += 1;
        if space.is_available() {
            zones[idx].available += 1;
        }
    }

    let total = spaces.len();
    let occupancy_pct = if total > 0 {
        (total - available) as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    InventorySummary {
        total,
        available,
        occupied,
        reserved,
        ev_available,
        occupancy_pct,
        zones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_zones_times_spaces() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let spaces = generate_inventory(&params, &mut rng);

        assert_eq!(spaces.len(), 60);
        assert_eq!(spaces.len(), params.total_spaces());
    }

    #[test]
    fn test_numbers_use_global_counter() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let spaces = generate_inventory(&params, &mut rng);

        assert_eq!(spaces[0].number, "A001");
        assert_eq!(spaces[0].id, "space-1");
        assert_eq!(spaces[14].number, "A015");
        // Counter is not reset when the zone changes
        assert_eq!(spaces[15].number, "B016");
        assert_eq!(spaces[15].zone, "B");
        assert_eq!(spaces[59].number, "D060");
        assert_eq!(spaces[59].id, "space-60");
    }

    #[test]
    fn test_ids_and_numbers_are_unique() {
        let params = InventoryParams {
            zones: vec!["A".into(), "B".into(), "C".into(), "D".into(), "E".into()],
            spaces_per_zone: 250,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spaces = generate_inventory(&params, &mut rng);

        let ids: HashSet<_> = spaces.iter().map(|s| s.id.as_str()).collect();
        let numbers: HashSet<_> = spaces.iter().map(|s| s.number.as_str()).collect();
        assert_eq!(ids.len(), spaces.len());
        assert_eq!(numbers.len(), spaces.len());
    }

    #[test]
    fn test_zone_major_order() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let spaces = generate_inventory(&params, &mut rng);

        let zone_order: Vec<&str> = spaces.iter().map(|s| s.zone.as_str()).collect();
        for (i, zone) in DEFAULT_ZONES.iter().enumerate() {
            assert!(zone_order[i * 15..(i + 1) * 15].iter().all(|z| z == zone));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let params = InventoryParams::default();
        let first = generate_inventory(&params, &mut ChaCha8Rng::seed_from_u64(42));
        let second = generate_inventory(&params, &mut ChaCha8Rng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_status_partition_thresholds() {
        assert_eq!(status_for_draw(0.0), SpaceStatus::Available);
        assert_eq!(status_for_draw(0.50), SpaceStatus::Available);
        assert_eq!(status_for_draw(0.5001), SpaceStatus::Reserved);
        assert_eq!(status_for_draw(0.65), SpaceStatus::Reserved);
        assert_eq!(status_for_draw(0.6501), SpaceStatus::Occupied);
        assert_eq!(status_for_draw(0.9999), SpaceStatus::Occupied);
    }

    #[test]
    fn test_space_type_threshold() {
        assert_eq!(space_type_for_draw(0.0), SpaceType::Standard);
        assert_eq!(space_type_for_draw(0.8), SpaceType::Standard);
        assert_eq!(space_type_for_draw(0.8001), SpaceType::EvCharging);
    }

    #[test]
    fn test_distribution_converges() {
        let params = InventoryParams {
            zones: vec!["A".into()],
            spaces_per_zone: 100_000,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let spaces = generate_inventory(&params, &mut rng);

        assert!((share(&spaces, |s| s.is_ev_charging()) - 0.20).abs() < 0.01);
        assert!((share(&spaces, |s| s.status == SpaceStatus::Available) - 0.50).abs() < 0.01);
        assert!((share(&spaces, |s| s.status == SpaceStatus::Reserved) - 0.15).abs() < 0.01);
        assert!((share(&spaces, |s| s.status == SpaceStatus::Occupied) - 0.35).abs() < 0.01);
    }

    fn share(spaces: &[ParkingSpace], pred: impl Fn(&ParkingSpace) -> bool) -> f64 {
        spaces.iter().filter(|&s| pred(s)).count() as f64 / spaces.len() as f64
    }

    #[test]
    fn test_thread_rng_snapshot_uses_default_shape() {
        let spaces = generate_inventory(&InventoryParams::default(), &mut rand::thread_rng());
        assert_eq!(spaces.len(), 60);
    }

    #[test]
    fn test_summarize_counts() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let spaces = generate_inventory(&params, &mut rng);
        let summary = summarize(&spaces);

        assert_eq!(summary.total, 60);
        assert_eq!(summary.available + summary.occupied + summary.reserved, 60);
        assert_eq!(summary.available, available_spaces(&spaces).len());
        assert_eq!(summary.zones.len(), 4);
        assert_eq!(summary.zones[0].zone, "A");
        assert!(summary.zones.iter().all(|z| z.total == 15));
        assert_eq!(summary.zones.iter().map(|z| z.available).sum::<usize>(), summary.available);
        assert!(summary.ev_available <= summary.available);

        let expected_pct = (60 - summary.available) as f64 / 60.0 * 100.0;
        assert!((summary.occupancy_pct - expected_pct).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.occupancy_pct, 0.0);
        assert!(summary.zones.is_empty());
    }
}
