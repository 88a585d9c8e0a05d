//! Postal addresses attached to contacts.
//!
//! Address lines are held as a single `", "`-joined string, which is also the
//! storage form. Reading them back splits on commas, so a line that itself
//! contains a comma comes back as two lines.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::country::{self, Country};
use super::json::one_or_many;
use super::mask::mask;
use super::state::{self, MAXIMUM_STATE_NAME_LENGTH, State};
use super::validation::{ConstraintViolation, ConstraintViolations, Validate};

/// Most address lines accepted.
pub const MAXIMUM_LINES: usize = 5;
/// Longest joined line text accepted.
pub const MAXIMUM_LINES_LENGTH: usize = 512;
/// Longest locality accepted.
pub const MAXIMUM_LOCALITY_LENGTH: usize = 128;
/// Longest postcode accepted.
pub const MAXIMUM_POSTCODE_LENGTH: usize = 16;

const UNMASKED_LENGTH: usize = 5;
const SEPARATOR: &str = ", ";

/// A postal address. Every component is optional.
///
/// Blank components are dropped on construction, so an address built only
/// from blank text equals [`Address::EMPTY`].
///
/// Serialises as
/// `{"lines":[..],"locality":..,"postcode":..,"state":..,"country":..,"display":..}`
/// with absent components omitted; `display` is ignored on input.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AddressDocument", into = "AddressDocument")]
pub struct Address {
    lines: Option<String>,
    locality: Option<String>,
    postcode: Option<String>,
    state: Option<State>,
    country: Option<Country>,
}

/// Incremental construction of an [`Address`].
#[derive(Debug, Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    /// Address lines, joined for storage.
    #[must_use]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_owned())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        self.address.lines = non_blank(joined);
        self
    }

    /// Suburb, town or city.
    #[must_use]
    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.address.locality = non_blank(locality.into());
        self
    }

    /// Postal code.
    #[must_use]
    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.address.postcode = non_blank(postcode.into());
        self
    }

    /// State or province.
    #[must_use]
    pub fn state(mut self, state: impl Into<Option<State>>) -> Self {
        self.address.state = state.into();
        self
    }

    /// Country.
    #[must_use]
    pub fn country(mut self, country: impl Into<Option<Country>>) -> Self {
        self.address.country = country.into();
        self
    }

    /// Finish the address.
    #[must_use]
    pub fn build(self) -> Address {
        self.address
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}

impl Address {
    /// The address with no components.
    pub const EMPTY: Self = Self {
        lines: None,
        locality: None,
        postcode: None,
        state: None,
        country: None,
    };

    /// Start building an address.
    #[must_use]
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Individual address lines, split from the stored form.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .as_deref()
            .map(|lines| lines.split(',').map(|line| line.trim().to_owned()).collect())
            .unwrap_or_default()
    }

    /// The joined line text as stored.
    #[must_use]
    pub fn stored_lines(&self) -> Option<&str> {
        self.lines.as_deref()
    }

    /// Suburb, town or city.
    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// Postal code.
    #[must_use]
    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }

    /// State or province.
    #[must_use]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// Country.
    #[must_use]
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    /// Whether every component is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Single-line rendering of the address.
    ///
    /// Components are joined with `", "`. A state and postcode that are both
    /// present render together as `"State Postcode"`.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::{Address, Country, State};
    ///
    /// let address = Address::builder()
    ///     .lines(["100 Collins Street"])
    ///     .locality("Melbourne")
    ///     .postcode("3000")
    ///     .state(State::VICTORIA)
    ///     .country(Country::Australia)
    ///     .build();
    /// assert_eq!(
    ///     address.display(),
    ///     "100 Collins Street, Melbourne, Victoria 3000, Australia"
    /// );
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        let mut components: Vec<String> = Vec::with_capacity(5);
        components.extend(self.lines.clone());
        components.extend(self.locality.clone());
        match (&self.state, &self.postcode) {
            (Some(state), Some(postcode)) => components.push(format!("{state} {postcode}")),
            (state, postcode) => {
                components.extend(state.as_ref().map(ToString::to_string));
                components.extend(postcode.clone());
            }
        }
        components.extend(self.country.map(|country| country.name().to_owned()));
        components.join(SEPARATOR)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask(&self.display(), UNMASKED_LENGTH))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    /// Orders by display text; components break ties between addresses that
    /// render identically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.display()
            .cmp(&other.display())
            .then_with(|| self.lines.cmp(&other.lines))
            .then_with(|| self.locality.cmp(&other.locality))
            .then_with(|| self.postcode.cmp(&other.postcode))
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.country.cmp(&other.country))
    }
}

impl Validate for Address {
    fn collect_violations(&self, violations: &mut ConstraintViolations) {
        violations.require_max_items("lines", self.lines().len(), MAXIMUM_LINES);
        violations.require_max_chars("lines", self.stored_lines(), MAXIMUM_LINES_LENGTH);
        violations.require_max_chars("locality", self.locality(), MAXIMUM_LOCALITY_LENGTH);
        violations.require_max_chars("postcode", self.postcode(), MAXIMUM_POSTCODE_LENGTH);
        if self
            .state
            .as_ref()
            .is_some_and(|state| state.name().chars().count() > MAXIMUM_STATE_NAME_LENGTH)
        {
            violations.push(ConstraintViolation::field("state", "State is too long"));
        }
    }
}

#[derive(Serialize, Deserialize)]
struct AddressDocument {
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "one_or_many"
    )]
    lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    postcode: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "state::deserialize_optional"
    )]
    state: Option<State>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "country::deserialize_optional"
    )]
    country: Option<Country>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    display: String,
}

impl From<AddressDocument> for Address {
    fn from(document: AddressDocument) -> Self {
        let mut builder = Self::builder()
            .lines(document.lines)
            .state(document.state)
            .country(document.country);
        if let Some(locality) = document.locality {
            builder = builder.locality(locality);
        }
        if let Some(postcode) = document.postcode {
            builder = builder.postcode(postcode);
        }
        builder.build()
    }
}

impl From<Address> for AddressDocument {
    fn from(address: Address) -> Self {
        Self {
            lines: address.lines(),
            display: address.display(),
            locality: address.locality,
            postcode: address.postcode,
            state: address.state,
            country: address.country,
        }
    }
}
