//! The directory aggregate: a named, de-duplicated set of contacts.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::audit::AuditStamps;
use super::contact::Contact;
use super::json::one_or_many;
use super::validation::{ConstraintViolations, Validate};

/// Longest directory name accepted.
pub const MAXIMUM_NAME_LENGTH: usize = 64;

/// `chrono` format of timestamps in JSON and debug output,
/// e.g. `2026-03-14T09:26:53+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Stable directory identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryId(Uuid);

impl DirectoryId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for DirectoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for DirectoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for DirectoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A directory of contacts.
///
/// Contacts are held in their natural order with duplicates removed. The
/// identifier and audit stamps are assigned by persistence; a directory built
/// by [`Directory::new`] has neither.
///
/// Serialises as `{"name":..,"contacts":[..],"id":..,"created":..,"modified":..}`.
/// `id`, `created` and `modified` are read-only and ignored on input;
/// `contacts` accepts a single object in place of a list.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DirectoryDocument", into = "DirectoryDocument")]
pub struct Directory {
    id: Option<DirectoryId>,
    name: Option<String>,
    contacts: BTreeSet<Contact>,
    audit: AuditStamps,
}

impl Directory {
    /// Directory with an optional name.
    pub fn new(name: Option<String>, contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            id: None,
            name,
            contacts: contacts.into_iter().collect(),
            audit: AuditStamps::default(),
        }
    }

    /// Directory with neither name nor identifier.
    pub fn anonymous(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self::new(None, contacts)
    }

    /// The same directory under another identifier.
    #[must_use]
    pub fn with_id(mut self, id: DirectoryId) -> Self {
        self.id = Some(id);
        self
    }

    /// The same directory carrying `audit`.
    #[must_use]
    pub fn with_audit(mut self, audit: AuditStamps) -> Self {
        self.audit = audit;
        self
    }

    /// Identifier, once persisted.
    #[must_use]
    pub fn id(&self) -> Option<DirectoryId> {
        self.id
    }

    /// Optional name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Contacts in natural order, copied.
    #[must_use]
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.iter().cloned().collect()
    }

    /// Contacts in natural order.
    pub fn iter_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Creation and modification stamps.
    #[must_use]
    pub fn audit(&self) -> &AuditStamps {
        &self.audit
    }

    /// Anonymous directory holding the contacts of both directories.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::{Contact, Directory};
    ///
    /// let cream = Directory::new(Some("cream".into()), [Contact::named("Jack Bruce")]);
    /// let primus = Directory::new(Some("primus".into()), [Contact::named("Les Claypool")]);
    /// let union = cream.union(&primus);
    /// assert_eq!(union.name(), None);
    /// assert_eq!(union.contacts().len(), 2);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::anonymous(self.contacts.union(&other.contacts).cloned())
    }

    /// Anonymous directory holding the contacts present in both directories.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::anonymous(self.contacts.intersection(&other.contacts).cloned())
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "id=\"{id}\"")?,
            None => f.write_str("id=null")?,
        }
        if let Some(creator) = &self.audit.creator {
            write!(f, ", creator=\"{creator:?}\"")?;
        }
        if let Some(created) = &self.audit.created {
            write!(f, ", created=\"{}\"", created.format(TIMESTAMP_FORMAT))?;
        }
        if let Some(modifier) = &self.audit.modifier {
            write!(f, ", modifier=\"{modifier:?}\"")?;
        }
        if let Some(modified) = &self.audit.modified {
            write!(f, ", modified=\"{}\"", modified.format(TIMESTAMP_FORMAT))?;
        }
        match &self.name {
            Some(name) => write!(f, ", name=\"{name}\"")?,
            None => f.write_str(", name=null")?,
        }
        if !self.contacts.is_empty() {
            f.write_str(", contacts=[")?;
            for (index, contact) in self.contacts.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{{{contact:?}}}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl Validate for Directory {
    fn collect_violations(&self, violations: &mut ConstraintViolations) {
        violations.require_max_chars("name", self.name(), MAXIMUM_NAME_LENGTH);
        for (index, contact) in self.contacts.iter().enumerate() {
            let mut nested = ConstraintViolations::new();
            contact.collect_violations(&mut nested);
            violations.extend_nested(&format!("contacts/{index}"), nested);
        }
    }
}

fn serialize_timestamp<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none(),
    }
}

#[derive(Serialize, Deserialize)]
struct DirectoryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    contacts: Vec<Contact>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    id: Option<DirectoryId>,
    #[serde(
        skip_deserializing,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    created: Option<DateTime<Utc>>,
    #[serde(
        skip_deserializing,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    modified: Option<DateTime<Utc>>,
}

impl From<DirectoryDocument> for Directory {
    fn from(document: DirectoryDocument) -> Self {
        Self::new(document.name, document.contacts)
    }
}

impl From<Directory> for DirectoryDocument {
    fn from(directory: Directory) -> Self {
        Self {
            name: directory.name,
            contacts: directory.contacts.into_iter().collect(),
            id: directory.id,
            created: directory.audit.created,
            modified: directory.audit.modified,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for directory set operations, rendering and JSON.
    use super::*;
    use crate::domain::audit::Actor;
    use crate::domain::{Address, Country};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn directory(name: &str, contacts: &[&str]) -> Directory {
        Directory::new(
            Some(name.to_owned()),
            contacts.iter().map(|name| Contact::named(*name)),
        )
    }

    #[fixture]
    fn global() -> Directory {
        directory("global", &["Les Claypool", "Frank Zappa", "Jack Bruce"])
    }

    #[rstest]
    fn contacts_are_sorted_and_deduplicated() {
        let directory = directory("bass", &["Jack Bruce", "Frank Zappa", "Jack Bruce"]);
        let names: Vec<_> = directory
            .iter_contacts()
            .map(Contact::name)
            .collect();
        assert_eq!(names, vec!["Frank Zappa", "Jack Bruce"]);
    }

    #[rstest]
    fn union_combines_contacts_anonymously() {
        let metallica = directory("metallica", &["Jason Newstead", "Cliff Burton"]);
        let flotsam = directory("flotsam", &["Jason Newstead", "Michael Spencer"])
            .with_id(DirectoryId::random());

        let union = metallica.union(&flotsam);
        assert_eq!(union.id(), None);
        assert_eq!(union.name(), None);
        let names: Vec<_> = union.iter_contacts().map(Contact::name).collect();
        assert_eq!(
            names,
            vec!["Cliff Burton", "Jason Newstead", "Michael Spencer"]
        );
    }

    #[rstest]
    fn intersection_keeps_shared_contacts() {
        let metallica = directory("metallica", &["Jason Newstead", "Cliff Burton"]);
        let flotsam = directory("flotsam", &["Jason Newstead", "Michael Spencer"]);

        let intersection = metallica.intersection(&flotsam);
        assert_eq!(intersection.name(), None);
        assert_eq!(intersection.contacts(), vec![Contact::named("Jason Newstead")]);
    }

    #[rstest]
    fn intersection_uses_full_contact_equality() {
        let plain = Directory::anonymous([Contact::named("Jason Newstead")]);
        let detailed = Directory::anonymous([Contact::builder("Jason Newstead")
            .email("jason@metallica.com")
            .build()]);
        assert!(plain.intersection(&detailed).contacts().is_empty());
        assert_eq!(plain.union(&detailed).contacts().len(), 2);
    }

    #[rstest]
    fn operations_leave_inputs_untouched(global: Directory) {
        let other = directory("other", &["Geddy Lee"]);
        let _ = global.union(&other);
        let _ = global.intersection(&other);
        assert_eq!(global.contacts().len(), 3);
        assert_eq!(global.name(), Some("global"));
    }

    #[rstest]
    fn debug_lists_masked_contacts() {
        let id = DirectoryId::new(Uuid::from_u128(0x1234));
        let directory = directory("cream", &["Jack Bruce", "Eric Clapton"]).with_id(id);
        assert_eq!(
            format!("{directory:?}"),
            concat!(
                r#"id="00000000-0000-0000-0000-000000001234", name="cream", "#,
                r#"contacts=[{name="Er********on"}, {name="Ja******ce"}]"#
            )
        );
    }

    #[rstest]
    fn debug_without_name_or_contacts() {
        assert_eq!(format!("{:?}", Directory::default()), "id=null, name=null");
    }

    #[rstest]
    fn debug_includes_audit_stamps() {
        let created = Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("timestamp");
        let directory = Directory::default().with_audit(AuditStamps {
            creator: Some(Actor::new(Uuid::nil())),
            created: Some(created),
            modifier: None,
            modified: None,
        });
        assert_eq!(
            format!("{directory:?}"),
            concat!(
                r#"id=null, creator="id="00000000-0000-0000-0000-000000000000", type="actor"", "#,
                r#"created="2026-01-02T03:04:05+0000", name=null"#
            )
        );
    }

    #[rstest]
    fn serialises_contacts_in_order(global: Directory) {
        let json = serde_json::to_string(&global).expect("serialise");
        assert_eq!(
            json,
            concat!(
                r#"{"name":"global","contacts":["#,
                r#"{"name":"Frank Zappa","address":{},"display":"Frank Zappa"},"#,
                r#"{"name":"Jack Bruce","address":{},"display":"Jack Bruce"},"#,
                r#"{"name":"Les Claypool","address":{},"display":"Les Claypool"}]}"#
            )
        );
    }

    #[rstest]
    fn serialises_read_only_fields() {
        let id = DirectoryId::new(Uuid::from_u128(42));
        let stamp = Utc
            .with_ymd_and_hms(2026, 5, 6, 7, 8, 9)
            .single()
            .expect("timestamp");
        let directory = Directory::anonymous([]).with_id(id).with_audit(AuditStamps {
            creator: None,
            created: Some(stamp),
            modifier: None,
            modified: Some(stamp),
        });
        let value = serde_json::to_value(&directory).expect("serialise");
        assert_eq!(
            value,
            json!({
                "contacts": [],
                "id": "00000000-0000-0000-0000-00000000002a",
                "created": "2026-05-06T07:08:09+0000",
                "modified": "2026-05-06T07:08:09+0000"
            })
        );
    }

    #[rstest]
    fn read_only_fields_are_ignored_on_input() {
        let directory: Directory = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-00000000002a",
            "created": "2026-05-06T07:08:09+0000",
            "name": "imported",
            "contacts": {"name": "Geddy Lee", "address": {"country": "Canada"}}
        }))
        .expect("deserialise");
        assert_eq!(directory.id(), None);
        assert_eq!(directory.audit(), &AuditStamps::default());
        let contact = Contact::builder("Geddy Lee")
            .address(Address::builder().country(Country::Canada).build())
            .build();
        assert_eq!(directory, Directory::new(Some("imported".into()), [contact]));
    }

    #[rstest]
    fn json_round_trip_preserves_directory(global: Directory) {
        let json = serde_json::to_string(&global).expect("serialise");
        let parsed: Directory = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, global);
    }

    #[rstest]
    fn validation_paths_follow_contact_order() {
        let directory = Directory::new(
            Some("n".repeat(MAXIMUM_NAME_LENGTH + 1)),
            [
                Contact::builder("Zed").email("bad").build(),
                Contact::named(" "),
            ],
        );
        let violations = directory.validate().expect_err("violations");
        let reported: Vec<_> = violations
            .iter()
            .map(|violation| violation.field_path())
            .collect();
        assert_eq!(
            reported,
            vec![Some("name"), Some("contacts/0/name"), Some("contacts/1/email")]
        );
    }

    #[rstest]
    fn valid_directory_passes(global: Directory) {
        assert!(global.validate().is_ok());
        assert!(Directory::default().validate().is_ok());
    }

    #[rstest]
    fn directory_id_parses_uuid_text() {
        let id: DirectoryId = "00000000-0000-0000-0000-00000000002a"
            .parse()
            .expect("uuid");
        assert_eq!(id, DirectoryId::new(Uuid::from_u128(42)));
        assert!("nope".parse::<DirectoryId>().is_err());
    }
}
