//! Console output for the demo run
//! Prices are raw decimals up to this point; formatting to € with 2 decimals happens here

use crate::models::{
    DemandLevel, InventorySummary, OccupancyStats, ParkingSpace, PricingQuote, Reservation, UserCategory,
};
use crate::pricing::is_dynamic_pricing_active;

/// Format an amount for display
pub fn format_euros(amount: f64) -> String {
    format!("€{:.2}", amount)
}

fn demand_badge(demand: DemandLevel) -> &'static str {
    match demand {
        DemandLevel::High => "High demand",
        DemandLevel::Medium => "Medium demand",
        DemandLevel::Low => "Low demand",
    }
}

/// Display the run banner
pub fn display_banner() {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                      PARKING RESERVATION SIMULATOR                           ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

/// Display the availability dashboard and current rate for the user's category
pub fn display_dashboard(
    summary: &InventorySummary,
    demand: DemandLevel,
    category: UserCategory,
    quote: &PricingQuote,
) {
    println!("Parking Availability");
    println!(
        "  Available Spaces: {} of {} total | Occupancy: {:.0}% ({}) | EV Charging free: {}",
        summary.available,
        summary.total,
        summary.occupancy_pct,
        demand_badge(demand),
        summary.ev_available
    );
    println!(
        "  Occupied: {} | Reserved: {}",
        summary.occupied, summary.reserved
    );

    println!("\n  Zones:");
    for zone in &summary.zones {
        println!("    Zone {}: {}/{} available", zone.zone, zone.available, zone.total);
    }

    println!("\n  Pricing for {}:", category);
    println!("    Current Rate: {}/hour", format_euros(quote.current_rate));
    println!("    Base Rate:    {}/hour", format_euros(quote.base_rate));
    if is_dynamic_pricing_active(quote) {
        println!(
            "    Dynamic pricing active due to {} demand (x{})",
            demand, quote.multiplier
        );
    }
    println!();
}

/// Display spaces selectable in the booking flow
pub fn display_selectable_spaces(spaces: &[&ParkingSpace], limit: usize) {
    println!("Selectable spaces ({} available):", spaces.len());
    for space in spaces.iter().take(limit) {
        let ev = if space.is_ev_charging() { " (EV Charging)" } else { "" };
        println!("  Space {} - Zone {}{}", space.number, space.zone, ev);
    }
    if spaces.len() > limit {
        println!("  ... and {} more", spaces.len() - limit);
    }
    println!();
}

/// Display the live estimate for the booking form
pub fn display_estimate(start_time: &str, end_time: &str, category: UserCategory, demand: DemandLevel, price: f64) {
    let surcharge = if demand != DemandLevel::Low { " • Dynamic pricing applied" } else { "" };
    println!(
        "Estimate {} - {}: {} ({} rate{})",
        start_time,
        end_time,
        format_euros(price),
        category,
        surcharge
    );
}

/// Display a confirmed booking
pub fn display_confirmation(reservation: &Reservation) {
    println!("\n=== Booking Confirmed ===");
    println!("  Booking ID:    {}", reservation.id);
    println!("  Space:         {} (Zone {})", reservation.space_number, reservation.zone);
    println!("  Date:          {}", reservation.date);
    println!("  Time:          {} - {}", reservation.start_time, reservation.end_time);
    println!("  License Plate: {}", reservation.license_plate);
    println!("  Entry Code:    {}", reservation.qr_code);
    println!("  Total Paid:    {}", format_euros(reservation.price));
}

fn display_reservation_line(reservation: &Reservation) {
    println!(
        "  {} | {} (Zone {}) | {} {}-{} | {} | {}",
        reservation.id,
        reservation.space_number,
        reservation.zone,
        reservation.date,
        reservation.start_time,
        reservation.end_time,
        format_euros(reservation.price),
        reservation.status
    );
}

/// Display upcoming and past bookings
pub fn display_reservations(upcoming: &[&Reservation], past: &[&Reservation]) {
    println!("\n=== My Bookings ===");
    println!("Upcoming:");
    if upcoming.is_empty() {
        println!("  No upcoming reservations");
    }
    for reservation in upcoming {
        display_reservation_line(reservation);
    }

    println!("Past:");
    if past.is_empty() {
        println!("  No past reservations");
    }
    for reservation in past {
        display_reservation_line(reservation);
    }
}

/// Display occupancy statistics over many snapshots
pub fn display_occupancy_stats(stats: &OccupancyStats) {
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                  OCCUPANCY MONTE CARLO ({:>6} snapshots)                     ║", stats.num_snapshots);
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!("{} spaces per snapshot", stats.spaces_per_snapshot);
    println!(
        "Occupancy: {:.2}% ± {:.2}% | Median: {:.2}% | Range: [{:.2}%, {:.2}%]",
        stats.mean_occupancy,
        stats.std_dev_occupancy,
        stats.percentile_50,
        stats.min_occupancy,
        stats.max_occupancy
    );
    println!(
        "10th-90th Percentile: [{:.2}%, {:.2}%]",
        stats.percentile_10, stats.percentile_90
    );
    println!(
        "Observed shares: EV {:.1}% | available {:.1}% | reserved {:.1}% | occupied {:.1}%",
        stats.ev_share * 100.0,
        stats.available_share * 100.0,
        stats.reserved_share * 100.0,
        stats.occupied_share * 100.0
    );

    println!("Demand tiers:");
    for (demand, count) in DemandLevel::ALL.iter().zip(stats.demand_counts.iter()) {
        let share = if stats.num_snapshots > 0 {
            *count as f64 / stats.num_snapshots as f64 * 100.0
        } else {
            0.0
        };
        println!("  {:<6} {:>6} ({:.1}%)", demand.to_string(), count, share);
    }
}
