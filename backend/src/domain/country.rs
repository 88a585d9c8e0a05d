//! Closed enumeration of countries with case-insensitive lookup.
//!
//! Each entry carries an ISO 3166 alpha-2 code, a canonical English name, the
//! upper snake case constant used by the normalised fallback lookup, and a
//! list of aliases (alpha-3 codes, sporting codes and native names).
//!
//! Countries serialise as their canonical name and are stored by code.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! countries {
    (
        $(
            $variant:ident => $code:literal, $name:literal, $constant:literal,
                [$($alias:literal),* $(,)?];
        )*
    ) => {
        /// A country known to the directory.
        ///
        /// Declaration order defines [`Ord`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Country {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl Country {
            /// Every country in declaration order.
            pub const ALL: &'static [Country] = &[$(Country::$variant,)*];

            /// ISO 3166 alpha-2 code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Country::$variant => $code,)*
                }
            }

            /// Canonical English name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Country::$variant => $name,)*
                }
            }

            /// Upper snake case constant, e.g. `UNITED_KINGDOM`.
            #[must_use]
            pub const fn constant(self) -> &'static str {
                match self {
                    $(Country::$variant => $constant,)*
                }
            }

            /// Alternative spellings accepted by [`Country::parse`].
            #[must_use]
            pub const fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Country::$variant => &[$($alias),*],)*
                }
            }
        }
    };
}

mod table;

pub use table::Country;

/// Raised when non-blank input matches no known country.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country: {input}")]
pub struct UnknownCountry {
    /// The trimmed input that failed to match.
    pub input: String,
}

/// Unicode-aware case-insensitive comparison without allocating.
pub(crate) fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

impl Country {
    /// Parse free text into a country.
    ///
    /// Blank input yields `Ok(None)`. Otherwise the first country (in
    /// declaration order) whose code, name or any alias matches the trimmed
    /// input case-insensitively is returned. Failing that, the input is
    /// upper-cased, spaces become underscores, and the result is matched
    /// against [`Country::constant`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCountry`] when nothing matches.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::Country;
    ///
    /// assert_eq!(Country::parse("aus").ok().flatten(), Some(Country::Australia));
    /// assert_eq!(Country::parse("  ").ok().flatten(), None);
    /// assert!(Country::parse("Narnia").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Option<Self>, UnknownCountry> {
        let search = text.trim();
        if search.is_empty() {
            return Ok(None);
        }

        let matched = Self::ALL.iter().copied().find(|candidate| {
            equals_ignore_case(search, candidate.code())
                || equals_ignore_case(search, candidate.name())
                || candidate
                    .aliases()
                    .iter()
                    .any(|alias| equals_ignore_case(search, alias))
        });
        if let Some(country) = matched {
            return Ok(Some(country));
        }

        let constant = search.to_uppercase().replace(' ', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.constant() == constant)
            .map(Some)
            .ok_or_else(|| UnknownCountry {
                input: search.to_owned(),
            })
    }

    /// Look up a country by its exact alpha-2 code, as written to storage.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.code() == code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match Self::parse(&text) {
            Ok(Some(country)) => Ok(country),
            Ok(None) => Err(serde::de::Error::custom("country must not be blank")),
            Err(err) => Err(serde::de::Error::custom(err)),
        }
    }
}

/// Deserialise an optional country where blank text means "no country".
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Country>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text {
        Some(text) => Country::parse(&text).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
