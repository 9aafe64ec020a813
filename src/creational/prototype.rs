//! Prototype
//!
//! New objects come from copying an existing instance. `Clone` on these
//! types owns every nested field, so a clone shares nothing with its source.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: String,
}

impl Address {
    pub fn new(street: impl Into<String>, number: impl Into<String>) -> Self {
        Address {
            street: street.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(street={}, number={})", self.street, self.number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub addresses: Vec<Address>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
            addresses: Vec::new(),
        }
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    /// A fully independent copy to customise.
    pub fn clone_prototype(&self) -> Person {
        tracing::debug!(first_name = %self.first_name, "cloning prototype");
        self.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(first_name={}, last_name={}, addresses=[",
            self.first_name, self.last_name
        )?;
        for (i, address) in self.addresses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{address}")?;
        }
        write!(f, "])")
    }
}
