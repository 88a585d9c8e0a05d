//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Address`].
///
/// Postal address; empty members are omitted.
#[derive(ToSchema)]
#[schema(as = crate::domain::Address)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddressSchema {
    /// Street lines; a single string is accepted as one line.
    #[schema(example = json!(["100 Collins Street"]))]
    lines: Option<Vec<String>>,
    /// Suburb, town or city.
    #[schema(example = "Melbourne")]
    locality: Option<String>,
    #[schema(example = "3000")]
    postcode: Option<String>,
    /// State code or name.
    #[schema(example = "Victoria")]
    state: Option<String>,
    /// Country code, name or alias; rendered as the canonical name.
    #[schema(example = "Australia")]
    country: Option<String>,
    /// Read-only single line rendering.
    #[schema(read_only, example = "100 Collins Street, Melbourne, Victoria 3000, Australia")]
    display: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Contact)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    #[schema(example = "H. P. Lovecraft")]
    name: String,
    #[schema(format = "email", example = "hp@example.com")]
    email: Option<String>,
    /// Australian phone number.
    #[schema(example = "+61 3 8685 1462")]
    phone: Option<String>,
    address: Option<AddressSchema>,
    /// Read-only rendering, currently the name.
    #[schema(read_only)]
    display: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Directory`].
///
/// Named set of contacts ordered by name.
#[derive(ToSchema)]
#[schema(as = crate::domain::Directory)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DirectorySchema {
    /// Server assigned identifier.
    #[schema(read_only, format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: Option<String>,
    #[schema(example = "global")]
    name: Option<String>,
    /// Contacts; a single object is accepted as one contact.
    contacts: Vec<ContactSchema>,
    #[schema(read_only, example = "2024-05-01T09:30:00+0000")]
    created: Option<String>,
    #[schema(read_only, example = "2024-05-01T09:30:00+0000")]
    modified: Option<String>,
}

/// Plain JSON envelope around a directory.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DirectoryDocumentSchema {
    data: DirectorySchema,
}

/// JSON:API resource object for a directory.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DirectoryResourceSchema {
    #[schema(format = "uuid")]
    id: Option<String>,
    #[schema(example = "directory")]
    r#type: String,
    attributes: DirectorySchema,
}

/// JSON:API envelope around a directory resource.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DirectoryResourceDocumentSchema {
    data: DirectoryResourceSchema,
}
