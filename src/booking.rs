//! Booking flow: validates a reservation request against an inventory snapshot
//! and prices it with the current demand level

use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, warn};

use crate::error::BookingError;
use crate::models::{DemandLevel, ParkingSpace, Reservation, ReservationStatus, UserCategory};
use crate::pricing::{compute_duration_price, parse_time_of_day};

pub const MIN_LICENSE_PLATE_LEN: usize = 3;
const RESERVATION_ID_LEN: usize = 7;
const QR_CODE_LEN: usize = 8;
const CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Raw booking form input
#[derive(Clone, Debug, Default)]
pub struct BookingRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Space id (`space-12`) or display number (`A012`)
    pub space_id: String,
    pub license_plate: String,
    pub category: UserCategory,
}

impl BookingRequest {
    /// Live estimate shown while the form is being filled in
    pub fn estimate(&self, demand: DemandLevel) -> f64 {
        compute_duration_price(&self.start_time, &self.end_time, self.category, demand)
    }

    /// Check the form fields in the order they appear on the form
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.date.trim().is_empty() {
            return Err(BookingError::MissingDate);
        }
        if self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return Err(BookingError::MissingTime);
        }
        if self.space_id.trim().is_empty() {
            return Err(BookingError::MissingSpace);
        }
        if self.license_plate.trim().chars().count() < MIN_LICENSE_PLATE_LEN {
            return Err(BookingError::LicensePlateTooShort { min: MIN_LICENSE_PLATE_LEN });
        }
        Ok(())
    }
}

/// Random upper-case alphanumeric code of `len` characters
fn random_code<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

pub fn new_reservation_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("RES-{}", random_code(rng, RESERVATION_ID_LEN))
}

pub fn new_qr_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("QR-{}", random_code(rng, QR_CODE_LEN))
}

/// Book a space from the given snapshot.
/// Nothing is held against the snapshot; two bookings of the same space both succeed.
pub fn book_space<R: Rng + ?Sized>(
    request: &BookingRequest,
    spaces: &[ParkingSpace],
    demand: DemandLevel,
    rng: &mut R,
) -> Result<Reservation, BookingError> {
    if let Err(err) = request.validate() {
        warn!(error = %err, "booking request rejected");
        return Err(err);
    }

    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;

    let (start, end) = (request.start_time.trim(), request.end_time.trim());
    match (parse_time_of_day(start), parse_time_of_day(end)) {
        (Some(s), Some(e)) if e > s => {}
        _ => {
            return Err(BookingError::NonPositiveDuration {
                start: start.to_string(),
                end: end.to_string(),
            })
        }
    }

    let wanted = request.space_id.trim();
    let space = spaces
        .iter()
        .find(|s| s.id == wanted || s.number.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| BookingError::UnknownSpace(wanted.to_string()))?;

    if !space.is_available() {
        warn!(space = %space.number, status = %space.status, "selected space is not available");
        return Err(BookingError::SpaceUnavailable {
            number: space.number.clone(),
            status: space.status.to_string(),
        });
    }

    let price = compute_duration_price(start, end, request.category, demand);
    let reservation = Reservation {
        id: new_reservation_id(rng),
        space_number: space.number.clone(),
        zone: space.zone.clone(),
        date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        license_plate: request.license_plate.trim().to_uppercase(),
        price,
        qr_code: new_qr_code(rng),
        status: ReservationStatus::Active,
    };

    info!(
        reservation = %reservation.id,
        space = %reservation.space_number,
        category = %request.category,
        demand = %demand,
        price,
        "booking confirmed"
    );
    Ok(reservation)
}
