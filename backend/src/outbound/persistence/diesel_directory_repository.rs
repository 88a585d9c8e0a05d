//! PostgreSQL-backed `DirectoryRepository` implementation using Diesel ORM.
//!
//! A directory is one `directories` row plus its `contacts` rows. Saving
//! replaces the contact rows wholesale inside the same transaction that writes
//! the directory row and its audit stamps.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{
    Actor, Address, AuditStamps, Auditor, Contact, Country, DEFAULT_ACTOR_KIND, Directory,
    DirectoryId, State,
};

use super::models::{ContactRow, DirectoryRecord, DirectoryRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::{contacts, directories};

/// Diesel-backed implementation of the `DirectoryRepository` port.
///
/// Audit stamps come from the injected [`Auditor`]: new rows receive
/// creation stamps, existing rows keep their creator and receive fresh
/// modification stamps.
#[derive(Clone)]
pub struct DieselDirectoryRepository {
    pool: DbPool,
    auditor: Auditor,
}

impl DieselDirectoryRepository {
    /// Create a new repository with the given connection pool and auditor.
    pub fn new(pool: DbPool, auditor: Auditor) -> Self {
        Self { pool, auditor }
    }
}

/// Map pool errors to domain directory repository errors.
fn map_pool_error(error: PoolError) -> DirectoryRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DirectoryRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain directory repository errors.
fn map_diesel_error(error: diesel::result::Error) -> DirectoryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DirectoryRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            DirectoryRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DirectoryRepositoryError::connection("database connection error")
        }
        _ => DirectoryRepositoryError::query("database error"),
    }
}

fn row_actor(id: Option<Uuid>, kind: Option<String>) -> Option<Actor> {
    id.map(|id| Actor::with_kind(id, kind.unwrap_or_else(|| DEFAULT_ACTOR_KIND.to_owned())))
}

fn row_stamps(row: &DirectoryRow) -> AuditStamps {
    AuditStamps {
        creator: row_actor(row.creator_id, row.creator_type.clone()),
        created: row.created,
        modifier: row_actor(row.modifier_id, row.modifier_type.clone()),
        modified: row.modified,
    }
}

fn row_country(row: &ContactRow) -> Option<Country> {
    let code = row.address_country.as_deref()?;
    let country = Country::from_code(code);
    if country.is_none() {
        warn!(
            value = code,
            directory_id = %row.directory_id,
            "unrecognised country code, dropping it"
        );
    }
    country
}

/// Convert a contact row to a domain contact.
fn row_to_contact(row: ContactRow) -> Contact {
    let country = row_country(&row);
    let mut address = Address::builder()
        .lines(row.address_lines.as_deref())
        .state(row.address_state.as_deref().and_then(State::from_storage))
        .country(country);
    if let Some(locality) = row.address_locality {
        address = address.locality(locality);
    }
    if let Some(postcode) = row.address_postcode {
        address = address.postcode(postcode);
    }

    let mut contact = Contact::builder(row.name).address(address.build());
    if let Some(email) = row.email {
        contact = contact.email(email);
    }
    if let Some(phone) = row.phone {
        contact = contact.phone(phone);
    }
    contact.build()
}

/// Convert a directory row and its contact rows to a domain directory.
fn rows_to_directory(row: DirectoryRow, contact_rows: Vec<ContactRow>) -> Directory {
    let stamps = row_stamps(&row);
    Directory::new(row.name, contact_rows.into_iter().map(row_to_contact))
        .with_id(DirectoryId::from(row.id))
        .with_audit(stamps)
}

fn directory_record<'a>(
    id: Uuid,
    directory: &'a Directory,
    stamps: &'a AuditStamps,
) -> DirectoryRecord<'a> {
    DirectoryRecord {
        id,
        name: directory.name(),
        creator_id: stamps.creator.as_ref().map(Actor::id),
        creator_type: stamps.creator.as_ref().map(Actor::kind),
        created: stamps.created,
        modifier_id: stamps.modifier.as_ref().map(Actor::id),
        modifier_type: stamps.modifier.as_ref().map(Actor::kind),
        modified: stamps.modified,
    }
}

fn contact_rows(
    id: Uuid,
    directory: &Directory,
) -> Result<Vec<NewContactRow<'_>>, DirectoryRepositoryError> {
    directory
        .iter_contacts()
        .enumerate()
        .map(|(index, contact)| {
            let position = i32::try_from(index)
                .map_err(|_| DirectoryRepositoryError::query("too many contacts"))?;
            let address = contact.address();
            Ok(NewContactRow {
                directory_id: id,
                position,
                name: contact.name(),
                email: contact.email(),
                phone: contact.phone(),
                address_lines: address.stored_lines(),
                address_locality: address.locality(),
                address_postcode: address.postcode(),
                address_state: address.state().map(State::to_storage),
                address_country: address.country().map(Country::code),
            })
        })
        .collect()
}

#[async_trait]
impl DirectoryRepository for DieselDirectoryRepository {
    async fn find_by_id(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<Directory>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let key = *id.as_uuid();

        // One snapshot for both tables so a concurrent save is seen whole.
        let loaded = conn
            .transaction(|conn| {
                async move {
                    let row: Option<DirectoryRow> = directories::table
                        .find(key)
                        .select(DirectoryRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(row) = row else {
                        return Ok(None);
                    };
                    let contact_rows: Vec<ContactRow> = contacts::table
                        .filter(contacts::directory_id.eq(key))
                        .order_by(contacts::position)
                        .select(ContactRow::as_select())
                        .load(conn)
                        .await?;
                    Ok(Some((row, contact_rows)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(loaded.map(|(row, contact_rows)| rows_to_directory(row, contact_rows)))
    }

    async fn save(&self, directory: Directory) -> Result<Directory, DirectoryRepositoryError> {
        let id = directory.id().unwrap_or_else(DirectoryId::random);
        let key = *id.as_uuid();
        let auditor = &self.auditor;

        // The checkout and the borrows of `directory` end with this block.
        let stamps = {
            let written = &directory;
            let new_contacts = contact_rows(key, written)?;
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            conn.transaction(|conn| {
                async move {
                    let existing: Option<DirectoryRow> = directories::table
                        .find(key)
                        .select(DirectoryRow::as_select())
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;

                    let stamps = match &existing {
                        Some(row) => auditor.modified(&row_stamps(row)),
                        None => auditor.created(),
                    };
                    let record = directory_record(key, written, &stamps);

                    if existing.is_some() {
                        diesel::update(directories::table.find(key))
                            .set(&record)
                            .execute(conn)
                            .await?;
                        diesel::delete(contacts::table.filter(contacts::directory_id.eq(key)))
                            .execute(conn)
                            .await?;
                    } else {
                        diesel::insert_into(directories::table)
                            .values(&record)
                            .execute(conn)
                            .await?;
                    }

                    if !new_contacts.is_empty() {
                        diesel::insert_into(contacts::table)
                            .values(&new_contacts)
                            .execute(conn)
                            .await?;
                    }

                    Ok(stamps)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?
        };

        debug!(%id, "directory saved");
        Ok(directory.with_id(id).with_audit(stamps))
    }

    async fn exists_by_id(&self, id: &DirectoryId) -> Result<bool, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(directories::table.find(*id.as_uuid())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: &DirectoryId) -> Result<(), DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Contact rows go with the directory via ON DELETE CASCADE.
        diesel::delete(directories::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn contact_row(name: &str) -> ContactRow {
        ContactRow {
            directory_id: Uuid::nil(),
            name: name.to_owned(),
            email: None,
            phone: None,
            address_lines: None,
            address_locality: None,
            address_postcode: None,
            address_state: None,
            address_country: None,
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(repo_err, DirectoryRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    #[case::not_found(diesel::result::Error::NotFound, "record not found")]
    #[case::rollback(diesel::result::Error::RollbackTransaction, "database error")]
    fn diesel_error_maps_to_query_error(
        #[case] diesel_err: diesel::result::Error,
        #[case] expected: &str,
    ) {
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(repo_err, DirectoryRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains(expected));
    }

    #[rstest]
    fn row_to_contact_restores_address() {
        let row = ContactRow {
            email: Some("jack@example.com".to_owned()),
            address_lines: Some("1 Main Street, Flat 2".to_owned()),
            address_locality: Some("Glasgow".to_owned()),
            address_state: Some("VIC".to_owned()),
            address_country: Some("GB".to_owned()),
            ..contact_row("Jack Bruce")
        };

        let contact = row_to_contact(row);

        assert_eq!(contact.name(), "Jack Bruce");
        assert_eq!(contact.email(), Some("jack@example.com"));
        assert_eq!(
            contact.address().lines(),
            vec!["1 Main Street".to_owned(), "Flat 2".to_owned()]
        );
        assert_eq!(contact.address().state(), Some(&State::VICTORIA));
        assert_eq!(contact.address().country(), Some(Country::UnitedKingdom));
    }

    #[rstest]
    fn row_to_contact_drops_unknown_country_code() {
        let row = ContactRow {
            address_country: Some("XX".to_owned()),
            ..contact_row("Les Claypool")
        };

        let contact = row_to_contact(row);

        assert_eq!(contact.address().country(), None);
        assert!(contact.address().is_empty());
    }

    #[rstest]
    fn rows_to_directory_restores_audit_stamps() {
        let created = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid timestamp");
        let creator = Uuid::from_u128(7);
        let row = DirectoryRow {
            id: Uuid::from_u128(42),
            name: Some("cream".to_owned()),
            creator_id: Some(creator),
            creator_type: None,
            created: Some(created),
            modifier_id: None,
            modifier_type: None,
            modified: Some(created),
        };

        let directory = rows_to_directory(
            row,
            vec![contact_row("Jack Bruce"), contact_row("Eric Clapton")],
        );

        assert_eq!(directory.id(), Some(DirectoryId::from(Uuid::from_u128(42))));
        assert_eq!(directory.name(), Some("cream"));
        assert_eq!(directory.audit().creator, Some(Actor::new(creator)));
        assert_eq!(directory.audit().modifier, None);
        assert_eq!(directory.audit().created, Some(created));
        let names: Vec<_> = directory.iter_contacts().map(Contact::name).collect();
        assert_eq!(names, ["Eric Clapton", "Jack Bruce"]);
    }

    #[rstest]
    fn contact_rows_follow_natural_order() {
        let directory = Directory::anonymous([
            Contact::builder("Les Claypool")
                .address(
                    Address::builder()
                        .state(State::parse("Tasmania"))
                        .country(Country::Australia)
                        .build(),
                )
                .build(),
            Contact::named("Jack Bruce"),
        ]);
        let key = Uuid::from_u128(1);

        let rows = contact_rows(key, &directory).expect("rows");

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].name, rows[0].position), ("Jack Bruce", 0));
        assert_eq!((rows[1].name, rows[1].position), ("Les Claypool", 1));
        assert_eq!(rows[1].address_state, Some("TAS"));
        assert_eq!(rows[1].address_country, Some("AU"));
        assert!(rows.iter().all(|row| row.directory_id == key));
    }
}
