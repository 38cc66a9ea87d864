//! Core data types shared by the inventory, pricing and booking modules

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::PricingError;

/// Kind of bay a parking space offers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceType {
    Standard,
    EvCharging,
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::EvCharging => write!(f, "ev-charging"),
        }
    }
}

/// Simulated occupancy state of a parking space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceStatus {
    Available,
    Occupied,
    Reserved,
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::Reserved => write!(f, "reserved"),
        }
    }
}

/// A single generated parking space. Never mutated after generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkingSpace {
    pub id: String,
    pub zone: String,
    /// Display code: zone letter followed by the zero-padded global counter (e.g. `A001`)
    pub number: String,
    pub space_type: SpaceType,
    pub status: SpaceStatus,
}

impl ParkingSpace {
    pub fn is_available(&self) -> bool {
        self.status == SpaceStatus::Available
    }

    pub fn is_ev_charging(&self) -> bool {
        self.space_type == SpaceType::EvCharging
    }
}

/// Coarse occupancy tier driving the price multiplier.
/// Ordered so that `Low < Medium < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub const ALL: [DemandLevel; 3] = [DemandLevel::Low, DemandLevel::Medium, DemandLevel::High];
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Customer classification determining the base hourly rate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserCategory {
    Resident,
    Employee,
    Customer,
    #[default]
    Visitor,
}

impl UserCategory {
    pub const ALL: [UserCategory; 4] = [
        UserCategory::Resident,
        UserCategory::Employee,
        UserCategory::Customer,
        UserCategory::Visitor,
    ];
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resident => write!(f, "resident"),
            Self::Employee => write!(f, "employee"),
            Self::Customer => write!(f, "customer"),
            Self::Visitor => write!(f, "visitor"),
        }
    }
}

impl FromStr for UserCategory {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.to_string() == name)
            .ok_or(PricingError::UnknownCategory(name))
    }
}

/// Base and demand-adjusted hourly rate for one category.
/// Recomputed per request, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingQuote {
    pub base_rate: f64,
    pub current_rate: f64,
    pub multiplier: f64,
}

/// Lifecycle of a simulated reservation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationStatus {
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A booked (simulated) parking reservation
#[derive(Clone, Debug, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub space_number: String,
    pub zone: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub license_plate: String,
    pub price: f64,
    /// Entry code shown instead of a rendered QR image
    pub qr_code: String,
    pub status: ReservationStatus,
}

/// Availability counts for one zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneSummary {
    pub zone: String,
    pub available: usize,
    pub total: usize,
}

/// Aggregate view of one inventory snapshot, as shown on the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub ev_available: usize,
    pub occupancy_pct: f64,
    pub zones: Vec<ZoneSummary>,
}

/// Monte Carlo statistics over many inventory snapshots
#[derive(Debug, Clone)]
pub struct OccupancyStats {
    pub num_snapshots: usize,
    pub spaces_per_snapshot: usize,
    pub mean_occupancy: f64,
    pub std_dev_occupancy: f64,
    pub min_occupancy: f64,
    pub max_occupancy: f64,
    pub percentile_10: f64,
    pub percentile_50: f64,  // Median
    pub percentile_90: f64,
    pub ev_share: f64,
    pub available_share: f64,
    pub reserved_share: f64,
    pub occupied_share: f64,
    /// Snapshot counts per demand tier, indexed like `DemandLevel::ALL`
    pub demand_counts: [usize; 3],
}
