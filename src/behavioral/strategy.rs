//! Strategy
//!
//! A family of discount algorithms, interchangeable at construction time.
//! `Order` only ever calls `calculate`; adding a discount never touches it.

use crate::error::{PatternError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountStrategy {
    TwentyPercent,
    FiftyPercent,
    /// Zeroes the total, the same as the original catalogue.
    NoDiscount,
    Custom(Percent),
}

/// A percentage known to lie in `0..=100`. Only `Percent::new` builds one:
///
/// ```compile_fail
/// use design_patterns::behavioral::strategy::Percent;
/// let _ = Percent(150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(f64);

impl Percent {
    pub fn new(percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PatternError::OutOfRangeFloat {
                field: "discount percent",
                value: percent,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(Percent(percent))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl DiscountStrategy {
    /// A custom discount; `percent` must lie in `0..=100`.
    pub fn custom(percent: f64) -> Result<Self> {
        Ok(DiscountStrategy::Custom(Percent::new(percent)?))
    }

    pub fn calculate(&self, value: f64) -> f64 {
        match self {
            DiscountStrategy::TwentyPercent => value * 0.8,
            DiscountStrategy::FiftyPercent => value * 0.5,
            DiscountStrategy::NoDiscount => value * 0.0,
            DiscountStrategy::Custom(percent) => value * (1.0 - percent.value() / 100.0),
        }
    }
}

impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountStrategy::TwentyPercent => write!(f, "20% off"),
            DiscountStrategy::FiftyPercent => write!(f, "50% off"),
            DiscountStrategy::NoDiscount => write!(f, "no discount"),
            DiscountStrategy::Custom(percent) => write!(f, "custom {percent} off"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    total: f64,
    discount: DiscountStrategy,
}

impl Order {
    pub fn new(total: f64, discount: DiscountStrategy) -> Self {
        Order { total, discount }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn discount(&self) -> DiscountStrategy {
        self.discount
    }

    pub fn total_with_discount(&self) -> f64 {
        let discounted = self.discount.calculate(self.total);
        tracing::debug!(total = self.total, strategy = %self.discount, discounted, "applied discount");
        discounted
    }
}
