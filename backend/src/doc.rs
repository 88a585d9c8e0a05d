//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: the directory endpoints and health probes
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`], both document envelopes, and the
//!   error document returned by every failure
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::document::JSON_API_MEDIA_TYPE;
use crate::inbound::http::error::{ErrorDocument, ErrorObject, ErrorSource};
use crate::inbound::http::schemas::{
    AddressSchema, ContactSchema, DirectoryDocumentSchema, DirectoryResourceDocumentSchema,
    DirectoryResourceSchema, DirectorySchema,
};
use utoipa::openapi::extensions::ExtensionsBuilder;
use utoipa::{Modify, OpenApi};

/// Record the media types the API negotiates between.
struct MediaTypeAddon;

impl Modify for MediaTypeAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let extensions = ExtensionsBuilder::new()
            .add(
                "x-media-types",
                serde_json::json!(["application/json", JSON_API_MEDIA_TYPE]),
            )
            .build();
        match openapi.extensions.as_mut() {
            Some(existing) => existing.merge(extensions),
            None => openapi.extensions = Some(extensions),
        }
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&MediaTypeAddon),
    info(
        title = "Directory API",
        description = "Create, read, replace and delete directories of contacts. \
            Bodies use a plain `{\"data\": ...}` envelope or JSON:API resource objects.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::directories::create_directory,
        crate::inbound::http::directories::get_directory,
        crate::inbound::http::directories::update_directory,
        crate::inbound::http::directories::delete_directory,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AddressSchema,
        ContactSchema,
        DirectorySchema,
        DirectoryDocumentSchema,
        DirectoryResourceSchema,
        DirectoryResourceDocumentSchema,
        ErrorDocument,
        ErrorObject,
        ErrorSource
    )),
    tags(
        (name = "directories", description = "Directory lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
