//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{contacts, directories};

/// Row struct for reading from the directories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = directories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DirectoryRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub creator_id: Option<Uuid>,
    pub creator_type: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modifier_id: Option<Uuid>,
    pub modifier_type: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

/// Insertable and changeset struct for directory records.
///
/// `None` fields write `NULL` on update so a replaced directory can lose its
/// name.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = directories)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct DirectoryRecord<'a> {
    pub id: Uuid,
    pub name: Option<&'a str>,
    pub creator_id: Option<Uuid>,
    pub creator_type: Option<&'a str>,
    pub created: Option<DateTime<Utc>>,
    pub modifier_id: Option<Uuid>,
    pub modifier_type: Option<&'a str>,
    pub modified: Option<DateTime<Utc>>,
}

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub directory_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_lines: Option<String>,
    pub address_locality: Option<String>,
    pub address_postcode: Option<String>,
    pub address_state: Option<String>,
    pub address_country: Option<String>,
}

/// Insertable struct for contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub directory_id: Uuid,
    pub position: i32,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address_lines: Option<&'a str>,
    pub address_locality: Option<&'a str>,
    pub address_postcode: Option<&'a str>,
    pub address_state: Option<&'a str>,
    pub address_country: Option<&'a str>,
}
