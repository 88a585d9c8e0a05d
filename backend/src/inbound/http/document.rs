//! Document envelope for request and response bodies.
//!
//! Bodies travel inside a `data` member. Plain JSON clients send and receive
//! the resource itself under `data`; JSON:API clients see each resource split
//! into `id`, `type` and `attributes`. The style is chosen once per request
//! from its media type and applied symmetrically on the way in and out.
//!
//! Plain JSON requests without a `data` member are accepted as the bare
//! resource.

use std::future::Future;
use std::pin::Pin;

use actix_web::body::BoxBody;
use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header::{ACCEPT, CONTENT_TYPE, HeaderName};
use actix_web::{FromRequest, HttpRequest, HttpResponse, Responder, ResponseError, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use crate::domain::Directory;
use crate::inbound::http::error::ApiError;

/// Media type selecting the JSON:API envelope.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

const PLAIN_MEDIA_TYPE: &str = "application/json";
const DATA: &str = "data";
const ID: &str = "id";
const TYPE: &str = "type";
const ATTRIBUTES: &str = "attributes";

/// Resource type name reported in JSON:API documents.
pub trait ResourceType {
    /// Lower case type name, e.g. `directory`.
    const RESOURCE_TYPE: &'static str;
}

impl ResourceType for Directory {
    const RESOURCE_TYPE: &'static str = "directory";
}

impl<T: ResourceType> ResourceType for Vec<T> {
    const RESOURCE_TYPE: &'static str = T::RESOURCE_TYPE;
}

/// Envelope convention of a single exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStyle {
    /// `{"data": <resource>}`.
    Plain,
    /// `{"data": {"id", "type", "attributes"}}`.
    JsonApi,
}

fn names_json_api(req: &HttpRequest, header: HeaderName) -> Option<bool> {
    let value = req.headers().get(header)?.to_str().ok()?;
    Some(value.split(',').any(|range| {
        range
            .split(';')
            .next()
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_API_MEDIA_TYPE))
    }))
}

impl DocumentStyle {
    /// Style of `req`: its `Content-Type` decides; bodiless requests fall
    /// back to `Accept`.
    #[must_use]
    pub fn of_request(req: &HttpRequest) -> Self {
        let json_api = names_json_api(req, CONTENT_TYPE)
            .or_else(|| names_json_api(req, ACCEPT))
            .unwrap_or(false);
        if json_api { Self::JsonApi } else { Self::Plain }
    }

    /// Response media type for this style.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Plain => PLAIN_MEDIA_TYPE,
            Self::JsonApi => JSON_API_MEDIA_TYPE,
        }
    }

    /// Extract the resource from an inbound document.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::inbound::http::document::DocumentStyle;
    /// use serde_json::json;
    ///
    /// let body = json!({"data": {"id": "1", "type": "directory", "attributes": {"name": "x"}}});
    /// assert_eq!(DocumentStyle::JsonApi.unwrap(body), json!({"id": "1", "name": "x"}));
    /// ```
    #[must_use]
    pub fn unwrap(self, document: Value) -> Value {
        let data = match document {
            Value::Object(mut root) if root.contains_key(DATA) => {
                root.remove(DATA).unwrap_or(Value::Null)
            }
            other => other,
        };
        match self {
            Self::Plain => data,
            Self::JsonApi => map_resources(data, flatten_resource),
        }
    }

    /// Wrap an outbound resource; `null` is returned untouched.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::inbound::http::document::DocumentStyle;
    /// use serde_json::json;
    ///
    /// let wrapped = DocumentStyle::JsonApi.wrap(json!({"id": "1", "name": "x"}), "directory");
    /// assert_eq!(
    ///     wrapped,
    ///     json!({"data": {"id": "1", "type": "directory", "attributes": {"name": "x"}}})
    /// );
    /// ```
    #[must_use]
    pub fn wrap(self, body: Value, resource_type: &str) -> Value {
        if body.is_null() {
            return body;
        }
        let data = match self {
            Self::Plain => body,
            Self::JsonApi => map_resources(body, |node| to_resource(node, resource_type)),
        };
        let mut document = Map::new();
        document.insert(DATA.to_owned(), data);
        Value::Object(document)
    }
}

fn map_resources(data: Value, f: impl Fn(Value) -> Value) -> Value {
    match data {
        Value::Array(items) => Value::Array(items.into_iter().map(f).collect()),
        other => f(other),
    }
}

/// Non-object resources flatten to an empty object.
fn flatten_resource(node: Value) -> Value {
    let Value::Object(mut resource) = node else {
        return Value::Object(Map::new());
    };
    let mut flat = match resource.remove(ATTRIBUTES) {
        Some(Value::Object(attributes)) => attributes,
        _ => Map::new(),
    };
    if let Some(id) = resource.remove(ID) {
        flat.insert(ID.to_owned(), id);
    }
    Value::Object(flat)
}

fn to_resource(node: Value, resource_type: &str) -> Value {
    let Value::Object(mut attributes) = node else {
        return node;
    };
    let mut resource = Map::new();
    if let Some(id) = attributes.remove(ID) {
        resource.insert(ID.to_owned(), id);
    }
    let kind = attributes
        .remove(TYPE)
        .unwrap_or_else(|| Value::String(resource_type.to_owned()));
    resource.insert(TYPE.to_owned(), kind);
    resource.insert(ATTRIBUTES.to_owned(), Value::Object(attributes));
    Value::Object(resource)
}

/// Request body read through the envelope of its [`DocumentStyle`].
///
/// Malformed documents are rejected with a single 400 entry carrying the
/// parser message.
#[derive(Debug)]
pub struct DocumentBody<T>(pub T);

impl<T> DocumentBody<T> {
    /// Unwrap into the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for DocumentBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let style = DocumentStyle::of_request(req);
        let bytes = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = bytes.await.map_err(ApiError::from)?;
            let document: Value = serde_json::from_slice(&bytes).map_err(ApiError::malformed)?;
            serde_json::from_value(style.unwrap(document))
                .map(DocumentBody)
                .map_err(ApiError::malformed)
        })
    }
}

/// Response body written through the envelope of the request's
/// [`DocumentStyle`].
#[derive(Debug)]
pub struct Document<T> {
    status: StatusCode,
    body: T,
}

impl<T> Document<T> {
    /// `200 OK` carrying `body`.
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// `201 Created` carrying `body`.
    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    /// Arbitrary status carrying `body`.
    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T> Responder for Document<T>
where
    T: Serialize + ResourceType,
{
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let style = DocumentStyle::of_request(req);
        let rendered = serde_json::to_value(&self.body)
            .map(|value| style.wrap(value, T::RESOURCE_TYPE))
            .and_then(|document| serde_json::to_vec(&document));
        match rendered {
            Ok(bytes) => HttpResponse::build(self.status)
                .content_type(style.media_type())
                .body(bytes),
            Err(err) => {
                error!(error = %err, "failed to serialise response document");
                ApiError::status(StatusCode::INTERNAL_SERVER_ERROR).error_response()
            }
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
