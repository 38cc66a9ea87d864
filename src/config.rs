//! Demo configuration: defaults overridable through `PARKING_*` environment variables

use std::str::FromStr;

use crate::error::ConfigError;
use crate::inventory::InventoryParams;
use crate::models::UserCategory;

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub inventory: InventoryParams,
    pub category: UserCategory,
    /// Seed for a reproducible run; `None` uses the thread-local random source
    pub seed: Option<u64>,
    /// Number of snapshots sampled for the occupancy statistics
    pub num_snapshots: usize,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub license_plate: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryParams::default(),
            category: UserCategory::default(),
            seed: None,
            num_snapshots: 500,
            booking_date: "2026-01-20".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            license_plate: "ABC-1234".to_string(),
        }
    }
}

/// Largest inventory a single snapshot may hold (zones × spaces per zone)
pub const MAX_TOTAL_SPACES: usize = 100_000;
pub const MAX_SNAPSHOTS: usize = 100_000;

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

impl SimConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PARKING_SEED") {
            config.seed = Some(parse_number("PARKING_SEED", &value)?);
        }
        if let Some(value) = lookup("PARKING_ZONES") {
            config.inventory.zones = value
                .split(',')
                .map(|z| z.trim().to_uppercase())
                .filter(|z| !z.is_empty())
                .collect();
        }
        if let Some(value) = lookup("PARKING_SPACES_PER_ZONE") {
            config.inventory.spaces_per_zone = parse_number("PARKING_SPACES_PER_ZONE", &value)?;
        }
        if let Some(value) = lookup("PARKING_USER_CATEGORY") {
            config.category = value.parse::<UserCategory>()?;
        }
        if let Some(value) = lookup("PARKING_SNAPSHOTS") {
            config.num_snapshots = parse_number("PARKING_SNAPSHOTS", &value)?;
        }
        if let Some(value) = lookup("PARKING_DATE") {
            config.booking_date = value;
        }
        if let Some(value) = lookup("PARKING_START") {
            config.start_time = value;
        }
        if let Some(value) = lookup("PARKING_END") {
            config.end_time = value;
        }
        if let Some(value) = lookup("PARKING_PLATE") {
            config.license_plate = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// An empty inventory would make demand classification undefined;
    /// an oversized one or too many snapshots would exhaust memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.zones.is_empty() {
            return Err(ConfigError::NoZones);
        }
        if self.inventory.spaces_per_zone == 0 {
            return Err(ConfigError::NoSpaces);
        }

        let total = self
            .inventory
            .zones
            .len()
            .checked_mul(self.inventory.spaces_per_zone)
            .filter(|&total| total <= MAX_TOTAL_SPACES);
        if total.is_none() {
            return Err(ConfigError::OutOfRange {
                key: "PARKING_SPACES_PER_ZONE",
                value: self.inventory.spaces_per_zone,
                max: MAX_TOTAL_SPACES / self.inventory.zones.len(),
            });
        }
        if self.num_snapshots > MAX_SNAPSHOTS {
            return Err(ConfigError::OutOfRange {
                key: "PARKING_SNAPSHOTS",
                value: self.num_snapshots,
                max: MAX_SNAPSHOTS,
            });
        }
        Ok(())
    }
}
