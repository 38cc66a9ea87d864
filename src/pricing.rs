//! Demand classification and dynamic pricing
//! Base hourly rates per user category, scaled by a demand multiplier

use chrono::{NaiveTime, Timelike};
use tracing::debug;

use crate::error::PricingError;
use crate::models::{DemandLevel, PricingQuote, UserCategory};

const HIGH_DEMAND_OCCUPANCY_PCT: f64 = 80.0;
const MEDIUM_DEMAND_OCCUPANCY_PCT: f64 = 60.0;

/// Hourly rate before any demand adjustment
pub fn base_rate(category: UserCategory) -> f64 {
    match category {
        UserCategory::Resident => 2.00,
        UserCategory::Employee => 2.50,
        UserCategory::Customer => 3.50,
        UserCategory::Visitor => 4.00,
    }
}

pub fn demand_multiplier(demand: DemandLevel) -> f64 {
    match demand {
        DemandLevel::Low => 1.0,
        DemandLevel::Medium => 1.25,
        DemandLevel::High => 1.5,
    }
}

/// Round to 2 decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify demand from the number of available spaces out of `total`.
/// Tier boundaries are inclusive: exactly 80% is high, exactly 60% is medium.
pub fn classify_demand(available: usize, total: usize) -> Result<DemandLevel, PricingError> {
    if total == 0 {
        return Err(PricingError::EmptyInventory);
    }
    if available > total {
        return Err(PricingError::AvailableExceedsTotal { available, total });
    }

    let occupancy_pct = (total - available) as f64 / total as f64 * 100.0;
    let level = if occupancy_pct >= HIGH_DEMAND_OCCUPANCY_PCT {
        DemandLevel::High
    } else if occupancy_pct >= MEDIUM_DEMAND_OCCUPANCY_PCT {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    };

    debug!(available, total, occupancy_pct, demand = %level, "classified demand");
    Ok(level)
}

/// Current hourly rate for a category under the given demand
pub fn quote_rate(category: UserCategory, demand: DemandLevel) -> PricingQuote {
    let base = base_rate(category);
    let multiplier = demand_multiplier(demand);

    PricingQuote {
        base_rate: round2(base),
        current_rate: round2(base * multiplier),
        multiplier,
    }
}

/// True when the demand multiplier has pushed the rate above base
pub fn is_dynamic_pricing_active(quote: &PricingQuote) -> bool {
    quote.current_rate > quote.base_rate
}

/// Parse an `HH:MM` (or `HH:MM:SS`) time of day into minutes since midnight.
/// Seconds are ignored.
pub fn parse_time_of_day(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// Price for parking between `start_time` and `end_time` on the same day.
/// Returns 0 when either time is missing or unparseable, or when the end is
/// not after the start (no wraparound past midnight). The amount is unrounded.
pub fn compute_duration_price(
    start_time: &str,
    end_time: &str,
    category: UserCategory,
    demand: DemandLevel,
) -> f64 {
    let (start, end) = match (parse_time_of_day(start_time), parse_time_of_day(end_time)) {
        (Some(start), Some(end)) => (start, end),
        _ => return 0.0,
    };

    let duration_minutes = end as i64 - start as i64;
    if duration_minutes <= 0 {
        return 0.0;
    }

    let hours = duration_minutes as f64 / 60.0;
    hours * quote_rate(category, demand).current_rate
}
