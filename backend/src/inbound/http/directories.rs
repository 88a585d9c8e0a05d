//! Directory HTTP handlers.
//!
//! ```text
//! POST   /directories
//! GET    /directories/{id}
//! PUT    /directories/{id}
//! DELETE /directories/{id}
//! ```
//!
//! Bodies pass through the document envelope; identifiers that are not UUIDs
//! name no directory and are reported as 404.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::debug;

use crate::domain::{Directory, DirectoryId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::document::{Document, DocumentBody};
use crate::inbound::http::error::{ApiError, ErrorDocument, ErrorObject};
use crate::inbound::http::schemas::{DirectoryDocumentSchema, DirectoryResourceDocumentSchema};
use crate::inbound::http::state::HttpState;

fn parse_directory_id(raw: &str) -> Result<DirectoryId, ApiError> {
    raw.parse().map_err(|_| {
        debug!(id = raw, "path identifier is not a UUID");
        ApiError::single(
            ErrorObject::new(StatusCode::NOT_FOUND)
                .with_detail(format!("Directory not found: {raw}"))
                .with_parameter("id"),
        )
    })
}

/// Create a directory.
#[utoipa::path(
    post,
    path = "/directories",
    request_body(
        content(
            (DirectoryDocumentSchema = "application/json"),
            (DirectoryResourceDocumentSchema = "application/vnd.api+json")
        )
    ),
    responses(
        (status = 201, description = "Directory created", content(
            (DirectoryDocumentSchema = "application/json"),
            (DirectoryResourceDocumentSchema = "application/vnd.api+json")
        )),
        (status = 400, description = "Malformed or invalid directory", body = ErrorDocument),
        (status = 500, description = "Storage failure", body = ErrorDocument)
    ),
    tags = ["directories"],
    operation_id = "createDirectory"
)]
#[post("/directories")]
pub async fn create_directory(
    state: web::Data<HttpState>,
    payload: DocumentBody<Directory>,
) -> ApiResult<Document<Directory>> {
    let created = state
        .directories
        .create(payload.into_inner())
        .await
        .map_err(|err| state.errors.map_directory_error(err))?;
    Ok(Document::created(created))
}

/// Fetch a directory by identifier.
#[utoipa::path(
    get,
    path = "/directories/{id}",
    params(("id" = uuid::Uuid, Path, description = "Directory identifier")),
    responses(
        (status = 200, description = "Directory found", content(
            (DirectoryDocumentSchema = "application/json"),
            (DirectoryResourceDocumentSchema = "application/vnd.api+json")
        )),
        (status = 404, description = "No such directory", body = ErrorDocument),
        (status = 500, description = "Storage failure", body = ErrorDocument)
    ),
    tags = ["directories"],
    operation_id = "getDirectory"
)]
#[get("/directories/{id}")]
pub async fn get_directory(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<Document<Directory>> {
    let id = parse_directory_id(&path)?;
    let directory = state
        .directories_query
        .get(&id)
        .await
        .map_err(|err| state.errors.map_directory_error(err))?;
    Ok(Document::ok(directory))
}

/// Replace a directory; the identifier always comes from the path.
#[utoipa::path(
    put,
    path = "/directories/{id}",
    params(("id" = uuid::Uuid, Path, description = "Directory identifier")),
    request_body(
        content(
            (DirectoryDocumentSchema = "application/json"),
            (DirectoryResourceDocumentSchema = "application/vnd.api+json")
        )
    ),
    responses(
        (status = 200, description = "Directory updated", content(
            (DirectoryDocumentSchema = "application/json"),
            (DirectoryResourceDocumentSchema = "application/vnd.api+json")
        )),
        (status = 400, description = "Malformed or invalid directory", body = ErrorDocument),
        (status = 404, description = "No such directory", body = ErrorDocument),
        (status = 500, description = "Storage failure", body = ErrorDocument)
    ),
    tags = ["directories"],
    operation_id = "updateDirectory"
)]
#[put("/directories/{id}")]
pub async fn update_directory(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: DocumentBody<Directory>,
) -> ApiResult<Document<Directory>> {
    let id = parse_directory_id(&path)?;
    let updated = state
        .directories
        .update(&id, payload.into_inner())
        .await
        .map_err(|err| state.errors.map_directory_error(err))?;
    Ok(Document::ok(updated))
}

/// Remove a directory.
#[utoipa::path(
    delete,
    path = "/directories/{id}",
    params(("id" = uuid::Uuid, Path, description = "Directory identifier")),
    responses(
        (status = 204, description = "Directory removed"),
        (status = 404, description = "No such directory", body = ErrorDocument),
        (status = 500, description = "Storage failure", body = ErrorDocument)
    ),
    tags = ["directories"],
    operation_id = "deleteDirectory"
)]
#[delete("/directories/{id}")]
pub async fn delete_directory(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_directory_id(&path)?;
    state
        .directories
        .delete(&id)
        .await
        .map_err(|err| state.errors.map_directory_error(err))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Fallback for requests no route matches.
pub async fn unmatched(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(ApiError::single(
        ErrorObject::new(StatusCode::NOT_FOUND)
            .with_detail(format!("No handler for {} {}", req.method(), req.path())),
    ))
}

/// Register the directory routes on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_directory)
        .service(get_directory)
        .service(update_directory)
        .service(delete_directory);
}

#[cfg(test)]
#[path = "directories_tests.rs"]
mod tests;
