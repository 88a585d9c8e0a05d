//! Directory contacts.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::mask::mask;
use super::phone::PhoneRules;
use super::validation::{ConstraintViolation, ConstraintViolations, Validate};

/// Longest contact name accepted.
pub const MAXIMUM_NAME_LENGTH: usize = 128;
/// Longest email address accepted.
pub const MAXIMUM_EMAIL_LENGTH: usize = 384;
/// Longest phone number accepted.
pub const MAXIMUM_PHONE_LENGTH: usize = 32;

const UNMASKED_LENGTH: usize = 2;

/// A named person or organisation with optional means of contact.
///
/// Blank email and phone values are treated as absent. Contacts order by
/// name, then email, phone and address, with absent values sorting as empty
/// text.
///
/// `Debug` output masks personal data:
///
/// ```
/// use directory_backend::domain::Contact;
///
/// let contact = Contact::builder("H P Lovecraft").email("hp@lovecraft.com").build();
/// assert_eq!(
///     format!("{contact:?}"),
///     r#"name="H *********ft", email="hp************om""#
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ContactDocument", into = "ContactDocument")]
pub struct Contact {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Address,
}

/// Incremental construction of a [`Contact`].
#[derive(Debug)]
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.contact.email = non_blank(email.into());
        self
    }

    /// Phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.contact.phone = non_blank(phone.into());
        self
    }

    /// Postal address.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.contact.address = address;
        self
    }

    /// Finish the contact.
    #[must_use]
    pub fn build(self) -> Contact {
        self.contact
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Contact {
    /// Start building a contact with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ContactBuilder {
        ContactBuilder {
            contact: Self::named(name),
        }
    }

    /// Contact with a name only.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            address: Address::EMPTY,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Postal address, [`Address::EMPTY`] when unknown.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Text shown for the contact in listings.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name=\"{}\"", mask(&self.name, UNMASKED_LENGTH))?;
        if let Some(email) = &self.email {
            write!(f, ", email=\"{}\"", mask(email, UNMASKED_LENGTH))?;
        }
        if let Some(phone) = &self.phone {
            write!(f, ", phone=\"{}\"", mask(phone, UNMASKED_LENGTH))?;
        }
        if !self.address.is_empty() {
            write!(f, ", address=\"{:?}\"", self.address)?;
        }
        Ok(())
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.email().unwrap_or("").cmp(other.email().unwrap_or("")))
            .then_with(|| self.phone().unwrap_or("").cmp(other.phone().unwrap_or("")))
            .then_with(|| self.address.cmp(&other.address))
    }
}

impl Validate for Contact {
    fn collect_violations(&self, violations: &mut ConstraintViolations) {
        violations.require_not_blank("name", &self.name);
        violations.require_max_chars("name", Some(&self.name), MAXIMUM_NAME_LENGTH);
        violations.require_max_chars("email", self.email(), MAXIMUM_EMAIL_LENGTH);
        violations.require_email("email", self.email());
        violations.require_max_chars("phone", self.phone(), MAXIMUM_PHONE_LENGTH);
        if let Some(Err(violation)) = self.phone().map(|phone| PhoneRules::default().check(phone)) {
            violations.push(ConstraintViolation::field("phone", violation.to_string()));
        }
        let mut nested = ConstraintViolations::new();
        self.address.collect_violations(&mut nested);
        violations.extend_nested("address", nested);
    }
}

#[derive(Serialize, Deserialize)]
struct ContactDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    display: String,
}

impl From<ContactDocument> for Contact {
    fn from(document: ContactDocument) -> Self {
        let mut builder = Self::builder(document.name)
            .address(document.address.unwrap_or(Address::EMPTY));
        if let Some(email) = document.email {
            builder = builder.email(email);
        }
        if let Some(phone) = document.phone {
            builder = builder.phone(phone);
        }
        builder.build()
    }
}

impl From<Contact> for ContactDocument {
    fn from(contact: Contact) -> Self {
        Self {
            display: contact.name.clone(),
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            address: Some(contact.address),
        }
    }
}
