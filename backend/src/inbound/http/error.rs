//! HTTP error documents.
//!
//! Purpose: render every failure as `{"errors":[..]}` with one entry per
//! problem, and pick a single response status for the whole document.
//!
//! Error documents are never wrapped in a `data` envelope.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::TraceId;
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Location of the problem inside the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorSource {
    /// JSON pointer into the request document, e.g. `/data/name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "/data/contacts/0/email")]
    pub pointer: Option<String>,
    /// Name of the offending query or path parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// One problem encountered while serving a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorObject {
    /// HTTP status applicable to this problem, as a string.
    #[serde(with = "status_text")]
    #[schema(value_type = String, example = "400")]
    status: StatusCode,
    /// Machine-readable code, e.g. `error.invalidField`.
    #[schema(example = "error.invalidField")]
    code: String,
    /// Short summary of the kind of problem.
    #[schema(example = "Invalid Field")]
    title: String,
    /// Explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    /// Where in the request the problem lies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<ErrorSource>,
}

mod status_text {
    use super::*;

    pub(super) fn serialize<S: Serializer>(
        status: &StatusCode,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&status.as_u16())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<StatusCode, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid status: {text}")))
    }
}

/// `"error."` followed by the lower camel case reason phrase,
/// e.g. `error.notFound`.
fn default_code(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Internal Server Error");
    let mut code = String::from("error.");
    let words = reason
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty());
    for (index, word) in words.enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                code.push(first.to_ascii_lowercase());
            } else {
                code.push(first.to_ascii_uppercase());
            }
            code.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    code
}

impl ErrorObject {
    /// Problem with the default code and title for `status`.
    ///
    /// Statuses without a reason phrase are reported as 500.
    ///
    /// # Examples
    /// ```
    /// use actix_web::http::StatusCode;
    /// use directory_backend::inbound::http::error::ErrorObject;
    ///
    /// let error = ErrorObject::new(StatusCode::NOT_FOUND);
    /// assert_eq!(error.code(), "error.notFound");
    /// assert_eq!(error.title(), "Not Found");
    /// ```
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        let status = if status.canonical_reason().is_some() {
            status
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            code: default_code(status),
            title: status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_owned(),
            detail: None,
            source: None,
        }
    }

    /// Replace the code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach a detail message; blank text is ignored.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if !detail.trim().is_empty() {
            self.detail = Some(detail);
        }
        self
    }

    /// Point at a location in the request document.
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.source = Some(ErrorSource {
            pointer: Some(pointer.into()),
            parameter: None,
        });
        self
    }

    /// Name the offending request parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.source = Some(ErrorSource {
            pointer: None,
            parameter: Some(parameter.into()),
        });
        self
    }

    /// HTTP status of this problem.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Short summary.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Occurrence-specific explanation.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Location of the problem.
    #[must_use]
    pub fn source(&self) -> Option<&ErrorSource> {
        self.source.as_ref()
    }
}

/// Combine two statuses into the one reported for both.
///
/// Equal statuses stay as they are. Two different server errors become 500;
/// a server error outranks anything else; two different client statuses
/// become 400.
#[must_use]
pub fn combine_status(left: StatusCode, right: StatusCode) -> StatusCode {
    match (left.is_server_error(), right.is_server_error()) {
        _ if left == right => left,
        (true, true) => StatusCode::INTERNAL_SERVER_ERROR,
        (true, false) => left,
        (false, true) => right,
        (false, false) => StatusCode::BAD_REQUEST,
    }
}

/// Fold statuses with [`combine_status`]; no statuses at all yields 500.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use directory_backend::inbound::http::error::reduce_status;
///
/// assert_eq!(
///     reduce_status([StatusCode::NOT_FOUND, StatusCode::CONFLICT]),
///     StatusCode::BAD_REQUEST
/// );
/// assert_eq!(reduce_status([]), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[must_use]
pub fn reduce_status(statuses: impl IntoIterator<Item = StatusCode>) -> StatusCode {
    statuses
        .into_iter()
        .reduce(combine_status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// The `{"errors":[..]}` response document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDocument {
    /// Every problem found, in discovery order.
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// Document holding `errors`.
    #[must_use]
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }

    /// Aggregate status for the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        reduce_status(self.errors.iter().map(ErrorObject::status))
    }
}

/// Handler failure rendered as an [`ErrorDocument`].
///
/// Captures the trace identifier in scope when created so the response can
/// echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    document: ErrorDocument,
    trace_id: Option<TraceId>,
}

impl ApiError {
    /// Failure made of the given problems.
    #[must_use]
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self {
            document: ErrorDocument::new(errors),
            trace_id: TraceId::current(),
        }
    }

    /// Failure with a single problem.
    #[must_use]
    pub fn single(error: ErrorObject) -> Self {
        Self::new(vec![error])
    }

    /// Failure with a default problem for `status`.
    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        Self::single(ErrorObject::new(status))
    }

    /// The request body could not be read as the expected document.
    #[must_use]
    pub fn malformed(detail: impl fmt::Display) -> Self {
        Self::single(ErrorObject::new(StatusCode::BAD_REQUEST).with_detail(detail.to_string()))
    }

    /// The rendered document.
    #[must_use]
    pub fn document(&self) -> &ErrorDocument {
        &self.document
    }

    /// Trace identifier captured at creation.
    #[must_use]
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s), status {}", self.document.errors.len(), self.document.status())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.document.status()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(ContentType::json());
        if let Some(id) = self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        match serde_json::to_vec(&self.document) {
            Ok(body) => builder.body(body),
            Err(err) => {
                error!(error = %err, "failed to serialise error document");
                builder.finish()
            }
        }
    }
}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        // Keep the framework's status; its message may expose internals.
        let status = err.as_response_error().status_code();
        warn!(error = %err, %status, "actix error promoted to API error");
        Self::status(status)
    }
}
