//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Directories with their audit stamps.
    directories (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        name -> Nullable<Varchar>,
        creator_id -> Nullable<Uuid>,
        creator_type -> Nullable<Varchar>,
        created -> Nullable<Timestamptz>,
        modifier_id -> Nullable<Uuid>,
        modifier_type -> Nullable<Varchar>,
        modified -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Contacts embedded in a directory.
    ///
    /// Rows are owned by their directory and removed with it. The address is
    /// flattened into nullable columns; `address_state` holds the state code
    /// or, for unlisted states, the free-text name.
    contacts (directory_id, position) {
        directory_id -> Uuid,
        /// Zero-based index in the directory's natural contact order.
        position -> Int4,
        name -> Varchar,
        email -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        address_lines -> Nullable<Varchar>,
        address_locality -> Nullable<Varchar>,
        address_postcode -> Nullable<Varchar>,
        address_state -> Nullable<Varchar>,
        /// ISO 3166 alpha-2 code.
        address_country -> Nullable<Varchar>,
    }
}

diesel::joinable!(contacts -> directories (directory_id));

diesel::allow_tables_to_appear_in_same_query!(contacts, directories);
