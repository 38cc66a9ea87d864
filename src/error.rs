//! Error types for pricing, booking and configuration

use thiserror::Error;

/// Contract violations of the pricing engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("cannot classify demand for an empty inventory (total = 0)")]
    EmptyInventory,
    #[error("available spaces ({available}) exceed total spaces ({total})")]
    AvailableExceedsTotal { available: usize, total: usize },
    #[error("unknown user category: {0:?}")]
    UnknownCategory(String),
}

/// Reasons a booking request or reservation change is refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("a booking date is required")]
    MissingDate,
    #[error("invalid booking date: {0:?}")]
    InvalidDate(String),
    #[error("both start and end time are required")]
    MissingTime,
    #[error("end time {end} is not after start time {start}")]
    NonPositiveDuration { start: String, end: String },
    #[error("no parking space selected")]
    MissingSpace,
    #[error("license plate must have at least {min} characters")]
    LicensePlateTooShort { min: usize },
    #[error("parking space {0} does not exist")]
    UnknownSpace(String),
    #[error("parking space {number} is {status}")]
    SpaceUnavailable { number: String, status: String },
    #[error("reservation {0} not found")]
    UnknownReservation(String),
    #[error("reservation {id} is {status} and cannot be cancelled")]
    NotCancellable { id: String, status: String },
}

/// Invalid environment configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} = {value} exceeds the limit of {max}")]
    OutOfRange { key: &'static str, value: usize, max: usize },
    #[error("at least one zone is required")]
    NoZones,
    #[error("spaces per zone must be greater than zero")]
    NoSpaces,
    #[error(transparent)]
    Category(#[from] PricingError),
}

/// Top-level error surfaced by the demo binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),
    #[error("booking error: {0}")]
    Booking(#[from] BookingError),
}
