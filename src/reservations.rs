//! In-memory list of a user's reservations ("My bookings")
//! Nothing is persisted; the book lives only as long as the process

use chrono::NaiveDate;
use tracing::info;

use crate::error::BookingError;
use crate::models::{Reservation, ReservationStatus};

#[derive(Debug, Default)]
pub struct ReservationBook {
    reservations: Vec<Reservation>,
}

/// Evaluated in const context, so an invalid date fails the build
const fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo reservation date"),
    }
}

const DEMO_PLATE: &str = "ABC-1234";

/// One pre-filled booking row
struct DemoRow {
    id: &'static str,
    zone: &'static str,
    space_number: &'static str,
    date: NaiveDate,
    start_time: &'static str,
    end_time: &'static str,
    price: f64,
    qr_code: &'static str,
    status: ReservationStatus,
}

const DEMO_ROWS: [DemoRow; 3] = [
    DemoRow {
        id: "RES-001",
        zone: "A",
        space_number: "A015",
        date: demo_date(2026, 1, 20),
        start_time: "09:00",
        end_time: "17:00",
        price: 24.00,
        qr_code: "QR-A7B9C2D4",
        status: ReservationStatus::Active,
    },
    DemoRow {
        id: "RES-002",
        zone: "B",
        space_number: "B023",
        date: demo_date(2026, 1, 22),
        start_time: "14:00",
        end_time: "18:00",
        price: 12.00,
        qr_code: "QR-E5F8G1H3",
        status: ReservationStatus::Active,
    },
    DemoRow {
        id: "RES-000",
        zone: "C",
        space_number: "C012",
        date: demo_date(2026, 1, 15),
        start_time: "10:00",
        end_time: "15:00",
        price: 15.00,
        qr_code: "QR-C3D1E7F2",
        status: ReservationStatus::Completed,
    },
];

impl DemoRow {
    fn to_reservation(&self) -> Reservation {
        Reservation {
            id: self.id.to_string(),
            space_number: self.space_number.to_string(),
            zone: self.zone.to_string(),
            date: self.date,
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            license_plate: DEMO_PLATE.to_string(),
            price: self.price,
            qr_code: self.qr_code.to_string(),
            status: self.status,
        }
    }
}

impl ReservationBook {
    /// Book pre-filled with two upcoming bookings and one completed one
    pub fn with_demo_data() -> Self {
        Self {
            reservations: DEMO_ROWS.iter().map(DemoRow::to_reservation).collect(),
        }
    }

    pub fn add(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn upcoming(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Active)
            .collect()
    }

    /// Completed and cancelled reservations
    pub fn past(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status != ReservationStatus::Active)
            .collect()
    }

    /// Cancel an active reservation
    pub fn cancel(&mut self, id: &str) -> Result<(), BookingError> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BookingError::UnknownReservation(id.to_string()))?;

        if reservation.status != ReservationStatus::Active {
            return Err(BookingError::NotCancellable {
                id: id.to_string(),
                status: reservation.status.to_string(),
            });
        }

        reservation.status = ReservationStatus::Cancelled;
        info!(reservation = %id, space = %reservation.space_number, "reservation cancelled");
        Ok(())
    }
}
