//! Phone number rules backed by libphonenumber metadata.

use phonenumber::country;

/// Example numbers quoted back to callers whose number is not valid.
pub const EXAMPLE_NUMBERS: [&str; 6] = [
    "1800 00 1234",
    "1300 65 9399",
    "+61 3 8685 1462",
    "03 8685 1462",
    "0491 570 156",
    "+61 491 570 156",
];

/// Reasons a phone number is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneViolation {
    /// The text could not be read as a phone number at all.
    #[error("Invalid phone number")]
    Unparseable,
    /// The text parsed but is not a valid number for its region.
    #[error(
        "Invalid phone number, some examples of valid numbers are: {}",
        EXAMPLE_NUMBERS.join(", ")
    )]
    Invalid,
}

/// Region-aware phone number validity checks.
///
/// Numbers without an international prefix are read as belonging to the
/// default region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRules {
    region: country::Id,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self::new(country::Id::AU)
    }
}

impl PhoneRules {
    /// Rules that read national numbers as belonging to `region`.
    #[must_use]
    pub const fn new(region: country::Id) -> Self {
        Self { region }
    }

    /// Check that `value` is a valid phone number.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneViolation::Unparseable`] when the text is not a phone
    /// number and [`PhoneViolation::Invalid`] when it is not a valid one.
    pub fn check(&self, value: &str) -> Result<(), PhoneViolation> {
        let number =
            phonenumber::parse(Some(self.region), value).map_err(|_| PhoneViolation::Unparseable)?;
        if phonenumber::is_valid(&number) {
            Ok(())
        } else {
            Err(PhoneViolation::Invalid)
        }
    }
}
