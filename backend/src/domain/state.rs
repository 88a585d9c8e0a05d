//! States and provinces.
//!
//! The eight Australian states and territories are known by code and name.
//! Any other non-blank text becomes an ad-hoc state carrying that text as its
//! name so addresses outside Australia keep their region.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::country::equals_ignore_case;

/// Longest state name accepted by validation.
pub const MAXIMUM_STATE_NAME_LENGTH: usize = 128;

/// A state, territory or province.
///
/// Equality, hashing and ordering consider the name only, so an ad-hoc
/// `"Victoria"` equals [`State::VICTORIA`].
#[derive(Debug, Clone)]
pub struct State {
    code: Option<Cow<'static, str>>,
    name: Cow<'static, str>,
}

impl State {
    /// Australian Capital Territory.
    pub const AUSTRALIAN_CAPITAL_TERRITORY: Self =
        Self::known("ACT", "Australian Capital Territory");
    /// New South Wales.
    pub const NEW_SOUTH_WALES: Self = Self::known("NSW", "New South Wales");
    /// Northern Territory.
    pub const NORTHERN_TERRITORY: Self = Self::known("NT", "Northern Territory");
    /// Queensland.
    pub const QUEENSLAND: Self = Self::known("QLD", "Queensland");
    /// South Australia.
    pub const SOUTH_AUSTRALIA: Self = Self::known("SA", "South Australia");
    /// Tasmania.
    pub const TASMANIA: Self = Self::known("TAS", "Tasmania");
    /// Victoria.
    pub const VICTORIA: Self = Self::known("VIC", "Victoria");
    /// Western Australia.
    pub const WESTERN_AUSTRALIA: Self = Self::known("WA", "Western Australia");

    /// Every known state.
    pub const KNOWN: [Self; 8] = [
        Self::AUSTRALIAN_CAPITAL_TERRITORY,
        Self::NEW_SOUTH_WALES,
        Self::NORTHERN_TERRITORY,
        Self::QUEENSLAND,
        Self::SOUTH_AUSTRALIA,
        Self::TASMANIA,
        Self::VICTORIA,
        Self::WESTERN_AUSTRALIA,
    ];

    const fn known(code: &'static str, name: &'static str) -> Self {
        Self {
            code: Some(Cow::Borrowed(code)),
            name: Cow::Borrowed(name),
        }
    }

    /// Parse free text into a state.
    ///
    /// Blank input yields `None`. A case-insensitive match on the code or
    /// name of a known state returns that state; anything else returns an
    /// ad-hoc state with no code and the trimmed text as its name.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::State;
    ///
    /// assert_eq!(State::parse("vic"), Some(State::VICTORIA));
    /// assert_eq!(State::parse("Wisconsin").map(|s| s.code().is_none()), Some(true));
    /// assert_eq!(State::parse(" "), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let search = text.trim();
        if search.is_empty() {
            return None;
        }
        let state = Self::KNOWN
            .into_iter()
            .find(|candidate| {
                equals_ignore_case(search, &candidate.name)
                    || candidate
                        .code
                        .as_deref()
                        .is_some_and(|code| equals_ignore_case(search, code))
            })
            .unwrap_or_else(|| Self {
                code: None,
                name: Cow::Owned(search.to_owned()),
            });
        Some(state)
    }

    /// Abbreviation for known states.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value written to storage: the code when known, otherwise the name.
    #[must_use]
    pub fn to_storage(&self) -> &str {
        self.code().unwrap_or(self.name())
    }

    /// Rebuild a state from its storage form.
    #[must_use]
    pub fn from_storage(value: &str) -> Option<Self> {
        Self::parse(value)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Deserialise an optional state where blank text means "no state".
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<State>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(State::parse))
}
