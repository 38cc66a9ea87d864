//! Monte Carlo sampling of inventory snapshots and occupancy statistics

use rand::Rng;

use crate::error::PricingError;
use crate::inventory::{generate_inventory, summarize, InventoryParams};
use crate::models::{DemandLevel, OccupancyStats};
use crate::pricing::classify_demand;

/// Slot in `OccupancyStats::demand_counts` for a demand level
fn tier_index(demand: DemandLevel) -> usize {
    match demand {
        DemandLevel::Low => 0,
        DemandLevel::Medium => 1,
        DemandLevel::High => 2,
    }
}

/// Generate `num_snapshots` inventories and gather occupancy statistics.
/// Fails only if the inventory shape is empty.
pub fn run_occupancy_simulation<R: Rng + ?Sized>(
    params: &InventoryParams,
    rng: &mut R,
    num_snapshots: usize,
) -> Result<OccupancyStats, PricingError> {
    let mut occupancies = Vec::new();
    let mut demand_counts = [0usize; 3];
    let mut ev = 0usize;
    let mut available = 0usize;
    let mut reserved = 0usize;
    let mut occupied = 0usize;

    for _ in 0..num_snapshots {
        let spaces = generate_inventory(params, rng);
        let summary = summarize(&spaces);

        let demand = classify_demand(summary.available, summary.total)?;
        demand_counts[tier_index(demand)] += 1;

        ev += spaces.iter().filter(|s| s.is_ev_charging()).count();
        available += summary.available;
        reserved += summary.reserved;
        occupied += summary.occupied;
        occupancies.push(summary.occupancy_pct);
    }

    // Calculate statistics
    occupancies.sort_by(|a, b| a.total_cmp(b));

    let count = occupancies.len().max(1) as f64;
    let mean_occupancy = occupancies.iter().sum::<f64>() / count;
    let variance = occupancies
        .iter()
        .map(|o| (o - mean_occupancy).powi(2))
        .sum::<f64>()
        / count;
    let std_dev_occupancy = variance.sqrt();

    let min_occupancy = occupancies.first().copied().unwrap_or(0.0);
    let max_occupancy = occupancies.last().copied().unwrap_or(0.0);

    let percentile = |p: f64| {
        if occupancies.is_empty() {
            return 0.0;
        }
        let index = ((p / 100.0) * (occupancies.len() as f64 - 1.0)).round() as usize;
        occupancies[index.min(occupancies.len() - 1)]
    };

    let spaces_total = (params.total_spaces() as f64 * num_snapshots as f64).max(1.0);

    Ok(OccupancyStats {
        num_snapshots,
        spaces_per_snapshot: params.total_spaces(),
        mean_occupancy,
        std_dev_occupancy,
        min_occupancy,
        max_occupancy,
        percentile_10: percentile(10.0),
        percentile_50: percentile(50.0),
        percentile_90: percentile(90.0),
        ev_share: ev as f64 / spaces_total,
        available_share: available as f64 / spaces_total,
        reserved_share: reserved as f64 / spaces_total,
        occupied_share: occupied as f64 / spaces_total,
        demand_counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_occupancy_statistics_converge() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let stats = run_occupancy_simulation(&params, &mut rng, 2_000).unwrap();

        assert_eq!(stats.num_snapshots, 2_000);
        assert_eq!(stats.spaces_per_snapshot, 60);
        assert_eq!(stats.demand_counts.iter().sum::<usize>(), 2_000);

        // Half the spaces are expected to be taken
        assert!((stats.mean_occupancy - 50.0).abs() < 1.0);
        assert!((stats.ev_share - 0.20).abs() < 0.01);
        assert!((stats.available_share - 0.50).abs() < 0.01);
        assert!((stats.reserved_share - 0.15).abs() < 0.01);
        assert!((stats.occupied_share - 0.35).abs() < 0.01);

        assert!(stats.min_occupancy <= stats.percentile_10);
        assert!(stats.percentile_10 <= stats.percentile_50);
        assert!(stats.percentile_50 <= stats.percentile_90);
        assert!(stats.percentile_90 <= stats.max_occupancy);
    }

    #[test]
    fn test_typical_snapshot_is_low_demand() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = run_occupancy_simulation(&params, &mut rng, 500).unwrap();

        // ~50% mean occupancy keeps most snapshots below the 60% tier
        assert!(stats.demand_counts[0] > stats.demand_counts[1]);
        assert!(stats.demand_counts[1] > stats.demand_counts[2]);
    }

    #[test]
    fn test_tier_index_follows_demand_order() {
        for (i, &demand) in DemandLevel::ALL.iter().enumerate() {
            assert_eq!(tier_index(demand), i);
        }
    }

    #[test]
    fn test_overflowing_shape_does_not_panic_on_shares() {
        let params = InventoryParams {
            zones: vec!["A".to_string(), "B".to_string()],
            spaces_per_zone: usize::MAX,
        };
        assert_eq!(params.total_spaces(), usize::MAX);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = run_occupancy_simulation(&params, &mut rng, 0).unwrap();
        assert_eq!(stats.ev_share, 0.0);
    }

    #[test]
    fn test_empty_inventory_fails() {
        let params = InventoryParams {
            zones: vec!["A".to_string()],
            spaces_per_zone: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(matches!(
            run_occupancy_simulation(&params, &mut rng, 10),
            Err(PricingError::EmptyInventory)
        ));
    }

    #[test]
    fn test_zero_snapshots() {
        let params = InventoryParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = run_occupancy_simulation(&params, &mut rng, 0).unwrap();

        assert_eq!(stats.mean_occupancy, 0.0);
        assert_eq!(stats.demand_counts, [0, 0, 0]);
    }
}
