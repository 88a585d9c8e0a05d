//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: model directories of contacts independently of HTTP and storage.
//! Value types are immutable once built; constraint checks are collected via
//! [`Validate`] rather than enforced on construction so callers can report
//! every violation at once.
//!
//! Public surface:
//! - Country / State: reference data parsed from free text.
//! - Address / Contact / Directory: value objects and the aggregate.
//! - Actor / AuditStamps / Auditor: audit metadata and its producer.
//! - DirectoryError: failure taxonomy of directory use-cases.
//! - DirectoryService: implementation of the directory driving ports.

pub mod address;
pub mod audit;
pub mod contact;
pub mod country;
pub mod directory;
pub mod directory_service;
pub mod error;
mod json;
pub mod mask;
pub mod phone;
pub mod ports;
pub mod state;
pub mod trace_id;
pub mod validation;

pub use self::address::{Address, AddressBuilder};
pub use self::audit::{
    Actor, AuditStamps, Auditor, CompositeCurrentActor, DEFAULT_ACTOR_KIND, StaticCurrentActor,
};
pub use self::contact::{Contact, ContactBuilder};
pub use self::country::{Country, UnknownCountry};
pub use self::directory::{Directory, DirectoryId, TIMESTAMP_FORMAT};
pub use self::directory_service::DirectoryService;
pub use self::error::DirectoryError;
pub use self::phone::{PhoneRules, PhoneViolation};
pub use self::state::State;
pub use self::trace_id::TraceId;
pub use self::validation::{ConstraintViolation, ConstraintViolations, Validate};
