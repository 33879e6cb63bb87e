//! Value objects for the customer domain.

use serde::{Deserialize, Serialize};

use super::CustomerError;

/// A postal address.
///
/// Addresses are immutable; changing a customer's address replaces the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::InvalidAddress { field: "street" });
        }
        if self.number == 0 {
            return Err(CustomerError::InvalidAddress { field: "number" });
        }
        if self.zip.trim().is_empty() {
            return Err(CustomerError::InvalidAddress { field: "zip" });
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::InvalidAddress { field: "city" });
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let address = Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap();
        assert_eq!(address.to_string(), "Street 1, 123, 13330-250 São Paulo");
    }

    #[test]
    fn test_address_accessors() {
        let address = Address::new("Rua A", 10, "01000-000", "Recife").unwrap();
        assert_eq!(address.street(), "Rua A");
        assert_eq!(address.number(), 10);
        assert_eq!(address.zip(), "01000-000");
        assert_eq!(address.city(), "Recife");
    }

    #[test]
    fn test_address_requires_every_field() {
        assert_eq!(
            Address::new(" ", 1, "z", "c"),
            Err(CustomerError::InvalidAddress { field: "street" })
        );
        assert_eq!(
            Address::new("s", 0, "z", "c"),
            Err(CustomerError::InvalidAddress { field: "number" })
        );
        assert_eq!(
            Address::new("s", 1, "", "c"),
            Err(CustomerError::InvalidAddress { field: "zip" })
        );
        assert_eq!(
            Address::new("s", 1, "z", ""),
            Err(CustomerError::InvalidAddress { field: "city" })
        );
    }
}
