//! Simple Factory
//!
//! One function maps a tag to a boxed `Vehicle`. The trait is sealed, so the
//! set of products is fixed to the implementors in this module.

use crate::error::{PatternError, Result};
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

pub trait Vehicle: sealed::Sealed {
    fn pick_up_customer(&self) -> String;
}

pub struct LuxuryCar;
pub struct PopularCar;
pub struct MotoTaxi;
pub struct LuxuryMotoTaxi;
pub struct DeliveryMotorcycle;

macro_rules! vehicle {
    ($ty:ty, $message:literal) => {
        impl sealed::Sealed for $ty {}

        impl Vehicle for $ty {
            fn pick_up_customer(&self) -> String {
                $message.to_string()
            }
        }
    };
}

vehicle!(LuxuryCar, "Luxury car picking up the customer...");
vehicle!(PopularCar, "Popular car picking up the customer...");
vehicle!(MotoTaxi, "Moto taxi picking up the customer...");
vehicle!(LuxuryMotoTaxi, "Luxury moto taxi picking up the customer...");
vehicle!(DeliveryMotorcycle, "Delivery motorcycle picking up the customer...");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Luxury,
    Popular,
    MotoTaxi,
    LuxuryMotoTaxi,
    Delivery,
}

impl VehicleKind {
    pub const TAGS: [&'static str; 5] = [
        "luxo",
        "popular",
        "moto_taxi",
        "moto_taxi_luxo",
        "moto_entrega",
    ];
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            "luxo" => Ok(VehicleKind::Luxury),
            "popular" => Ok(VehicleKind::Popular),
            "moto_taxi" => Ok(VehicleKind::MotoTaxi),
            "moto_taxi_luxo" => Ok(VehicleKind::LuxuryMotoTaxi),
            "moto_entrega" => Ok(VehicleKind::Delivery),
            _ => Err(PatternError::unknown_vehicle(tag)),
        }
    }
}

pub fn create_vehicle(tag: &str) -> Result<Box<dyn Vehicle>> {
    let kind: VehicleKind = tag.parse()?;
    tracing::debug!(tag, ?kind, "creating vehicle");
    Ok(match kind {
        VehicleKind::Luxury => Box::new(LuxuryCar),
        VehicleKind::Popular => Box::new(PopularCar),
        VehicleKind::MotoTaxi => Box::new(MotoTaxi),
        VehicleKind::LuxuryMotoTaxi => Box::new(LuxuryMotoTaxi),
        VehicleKind::Delivery => Box::new(DeliveryMotorcycle),
    })
}
