mod booking;
mod config;
mod error;
mod inventory;
mod models;
mod monte_carlo;
mod pricing;
mod reporting;
mod reservations;

use rand::{thread_rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};

use booking::{book_space, BookingRequest};
use config::SimConfig;
use error::AppError;
use inventory::{available_spaces, generate_inventory, summarize};
use monte_carlo::run_occupancy_simulation;
use pricing::{classify_demand, quote_rate};
use reporting::{display_banner, display_confirmation, display_dashboard, display_estimate,
                display_occupancy_stats, display_reservations, display_selectable_spaces};
use reservations::ReservationBook;

/// Reservation cancelled in the demo to show the "My bookings" flow
const DEMO_CANCELLATION: &str = "RES-002";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("parking_sim=info,warn")),
        )
        .init();

    if let Err(err) = run() {
        error!(error = %err, "simulation aborted");
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = SimConfig::from_env()?;

    // Seeded runs are reproducible; otherwise draw from the thread-local source
    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };
    info!(seed = ?config.seed, category = %config.category, "starting parking simulation");

    display_banner();

    // Step 1: Generate the current snapshot and classify demand
    let spaces = generate_inventory(&config.inventory, rng.as_mut());
    let summary = summarize(&spaces);
    let demand = classify_demand(summary.available, summary.total)?;
    let quote = quote_rate(config.category, demand);

    display_dashboard(&summary, demand, config.category, &quote);

    // Step 2: Booking flow against the same snapshot
    let selectable = available_spaces(&spaces);
    display_selectable_spaces(&selectable, 10);

    let mut book = ReservationBook::with_demo_data();

    match selectable.first() {
        Some(space) => {
            let request = BookingRequest {
                date: config.booking_date.clone(),
                start_time: config.start_time.clone(),
                end_time: config.end_time.clone(),
                space_id: space.id.clone(),
                license_plate: config.license_plate.clone(),
                category: config.category,
            };

            display_estimate(
                &request.start_time,
                &request.end_time,
                request.category,
                demand,
                request.estimate(demand),
            );

            let reservation = book_space(&request, &spaces, demand, rng.as_mut())?;
            display_confirmation(&reservation);
            book.add(reservation);
        }
        None => warn!("no available spaces in this snapshot; skipping booking"),
    }

    // Step 3: My bookings
    book.cancel(DEMO_CANCELLATION)?;
    display_reservations(&book.upcoming(), &book.past());

    // Step 4: Occupancy statistics over many snapshots
    let stats = run_occupancy_simulation(&config.inventory, rng.as_mut(), config.num_snapshots)?;
    display_occupancy_stats(&stats);

    info!(reservations = book.len(), "simulation finished");
    Ok(())
}
