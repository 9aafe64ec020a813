//! SOLID, one restaurant at a time
//!
//! - Single responsibility: each type cooks, serves, or sauces; never two.
//! - Open/closed: a new sauce is a new type, `Restaurant` stays untouched.
//! - Liskov: any `Cook` can replace any other without surprises.
//! - Interface segregation: `RobotCook` only cooks, nobody makes it serve.
//! - Dependency inversion: `Restaurant` is generic over the traits.

pub trait Cook {
    fn cook(&self) -> String;
}

pub trait Serve {
    fn serve(&self, dish: &str) -> String;
}

pub trait Sauce {
    fn sauce(&self) -> String;
}

pub struct Fryer;
pub struct Oven;
pub struct RobotCook;
pub struct Waiter;
pub struct Ketchup;
pub struct Mayonnaise;
pub struct Barbecue;

impl Cook for Fryer {
    fn cook(&self) -> String {
        "Fried potato".to_string()
    }
}

impl Cook for Oven {
    fn cook(&self) -> String {
        "Baked potato".to_string()
    }
}

impl Cook for RobotCook {
    fn cook(&self) -> String {
        "Pressure-cooked potato".to_string()
    }
}

impl Serve for Waiter {
    fn serve(&self, dish: &str) -> String {
        format!("Serving: {dish}")
    }
}

impl Sauce for Ketchup {
    fn sauce(&self) -> String {
        "Ketchup".to_string()
    }
}

impl Sauce for Mayonnaise {
    fn sauce(&self) -> String {
        "Mayonnaise".to_string()
    }
}

impl Sauce for Barbecue {
    fn sauce(&self) -> String {
        "Barbecue".to_string()
    }
}

pub struct Restaurant<C, W, S> {
    kitchen: C,
    waiter: W,
    sauce: S,
}

impl<C: Cook, W: Serve, S: Sauce> Restaurant<C, W, S> {
    pub fn new(kitchen: C, waiter: W, sauce: S) -> Self {
        Restaurant {
            kitchen,
            waiter,
            sauce,
        }
    }

    pub fn order(&self) -> String {
        let dish = self.kitchen.cook();
        let served = self.waiter.serve(&dish);
        format!("{served} with {}", self.sauce.sauce())
    }
}

/// Open/closed with trait objects: any sauce, chosen at runtime.
pub fn serve_sauce(sauce: &dyn Sauce) -> String {
    sauce.sauce()
}
