//! Factory Method
//!
//! `VehicleFactory` declares the creation step and builds a `Ride` on top of
//! it; each zone implements only the mapping from tag to vehicle. Unknown
//! tags are an error, never a placeholder vehicle.

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vehicle {
    LuxuryCar,
    PopularCar,
    PopularMotorcycle,
    LuxuryMotorcycle,
}

impl Vehicle {
    pub fn pick_up_customer(&self) -> String {
        match self {
            Vehicle::LuxuryCar => "Luxury car is picking up the customer...",
            Vehicle::PopularCar => "Popular car is picking up the customer...",
            Vehicle::PopularMotorcycle => "Popular motorcycle is picking up the customer...",
            Vehicle::LuxuryMotorcycle => "Motorcycle is picking up the customer...",
        }
        .to_string()
    }
}

/// A dispatched ride: the vehicle chosen by some factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ride {
    vehicle: Vehicle,
}

impl Ride {
    pub fn vehicle(&self) -> Vehicle {
        self.vehicle
    }

    pub fn pick_up_customer(&self) -> String {
        self.vehicle.pick_up_customer()
    }
}

pub trait VehicleFactory {
    /// Tags this factory understands, in a stable order.
    const AVAILABLE: &'static [&'static str];

    fn create(tag: &str) -> Result<Vehicle>;

    fn dispatch(tag: &str) -> Result<Ride> {
        let vehicle = Self::create(tag)?;
        tracing::debug!(tag, ?vehicle, "dispatched ride");
        Ok(Ride { vehicle })
    }
}

pub struct NorthZoneFactory;

impl VehicleFactory for NorthZoneFactory {
    const AVAILABLE: &'static [&'static str] = &["luxo", "popular", "moto", "moto_luxo"];

    fn create(tag: &str) -> Result<Vehicle> {
        match tag {
            "luxo" => Ok(Vehicle::LuxuryCar),
            "popular" => Ok(Vehicle::PopularCar),
            "moto" => Ok(Vehicle::PopularMotorcycle),
            "moto_luxo" => Ok(Vehicle::LuxuryMotorcycle),
            other => Err(PatternError::unknown_vehicle(other)),
        }
    }
}

pub struct SouthZoneFactory;

impl VehicleFactory for SouthZoneFactory {
    const AVAILABLE: &'static [&'static str] = &["luxo", "popular"];

    fn create(tag: &str) -> Result<Vehicle> {
        match tag {
            "luxo" => Ok(Vehicle::LuxuryCar),
            "popular" => Ok(Vehicle::PopularCar),
            other => Err(PatternError::unknown_vehicle(other)),
        }
    }
}
