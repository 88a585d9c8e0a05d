//! Translate domain failures into HTTP error documents.
//!
//! Constraint violations become one 400 entry each, pointing into the
//! request document at `/data/<field path>`. Missing directories become a 404
//! naming the identifier. Storage failures become a bare 500 so internal
//! messages never reach clients.

use std::sync::Arc;

use actix_web::http::StatusCode;
use tracing::{debug, error};

use crate::domain::{ConstraintViolation, ConstraintViolations, DirectoryError};
use crate::inbound::http::error::{ApiError, ErrorObject};
use crate::inbound::http::messages::{
    INVALID_FIELD, INVALID_OBJECT, MessageSource, StaticMessages, message_or,
};

/// Maps [`DirectoryError`] values onto [`ApiError`] documents.
#[derive(Clone)]
pub struct ErrorMapper {
    messages: Arc<dyn MessageSource>,
}

impl Default for ErrorMapper {
    fn default() -> Self {
        Self::new(Arc::new(StaticMessages::default()))
    }
}

impl ErrorMapper {
    /// Mapper resolving titles through `messages`.
    pub fn new(messages: Arc<dyn MessageSource>) -> Self {
        Self { messages }
    }

    /// Render a directory use-case failure.
    pub fn map_directory_error(&self, err: DirectoryError) -> ApiError {
        match err {
            DirectoryError::NotFound { .. } => {
                debug!(error = %err, "directory not found");
                ApiError::single(ErrorObject::new(StatusCode::NOT_FOUND).with_detail(err.to_string()))
            }
            DirectoryError::Validation(violations) => self.map_violations(&violations),
            DirectoryError::Read { .. }
            | DirectoryError::Create { .. }
            | DirectoryError::Update { .. }
            | DirectoryError::Delete { .. } => {
                error!(error = %err, "directory operation failed");
                ApiError::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// One 400 entry per violation, in the order they were found.
    pub fn map_violations(&self, violations: &ConstraintViolations) -> ApiError {
        ApiError::new(violations.iter().map(|v| self.map_violation(v)).collect())
    }

    fn map_violation(&self, violation: &ConstraintViolation) -> ErrorObject {
        let status = ErrorObject::new(StatusCode::BAD_REQUEST);
        match violation.field_path() {
            Some(path) => status
                .with_code(INVALID_FIELD)
                .with_title(message_or(self.messages.as_ref(), INVALID_FIELD, "Invalid Field"))
                .with_detail(violation.message())
                .with_pointer(format!("/data/{path}")),
            None => status
                .with_code(INVALID_OBJECT)
                .with_title(message_or(self.messages.as_ref(), INVALID_OBJECT, "Invalid Object"))
                .with_detail(violation.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::DirectoryId;
    use crate::inbound::http::error::ErrorSource;
    use crate::inbound::http::messages::MockMessageSource;
    use actix_web::ResponseError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn mapper() -> ErrorMapper {
        ErrorMapper::default()
    }

    #[rstest]
    fn not_found_names_identifier(mapper: ErrorMapper) {
        let id = DirectoryId::random();
        let err = mapper.map_directory_error(DirectoryError::not_found(id));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let only = &err.document().errors[0];
        assert_eq!(only.code(), "error.notFound");
        assert_eq!(
            only.detail(),
            Some(format!("Directory not found: {id}").as_str())
        );
    }

    #[rstest]
    #[case::read(DirectoryError::read("connection reset"))]
    #[case::create(DirectoryError::create("unique violation"))]
    #[case::update(DirectoryError::update("deadlock"))]
    #[case::delete(DirectoryError::delete("timeout"))]
    fn storage_failures_are_redacted(mapper: ErrorMapper, #[case] failure: DirectoryError) {
        let err = mapper.map_directory_error(failure);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let only = &err.document().errors[0];
        assert_eq!(only.code(), "error.internalServerError");
        assert!(only.detail().is_none());
    }

    #[rstest]
    fn violations_become_pointed_bad_requests(mapper: ErrorMapper) {
        let mut violations = ConstraintViolations::new();
        violations.push(ConstraintViolation::field("name", "Name is too long"));
        violations.push(ConstraintViolation::field(
            "contacts/0/address/postcode",
            "Postcode is too long",
        ));
        violations.push(ConstraintViolation::object("Directory is inconsistent"));

        let err = mapper.map_directory_error(DirectoryError::Validation(violations));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let errors = &err.document().errors;
        assert_eq!(errors.len(), 3);

        assert_eq!(errors[0].code(), INVALID_FIELD);
        assert_eq!(errors[0].title(), "Invalid Field");
        assert_eq!(errors[0].detail(), Some("Name is too long"));
        assert_eq!(
            errors[1].source(),
            Some(&ErrorSource {
                pointer: Some("/data/contacts/0/address/postcode".to_owned()),
                parameter: None,
            })
        );
        assert_eq!(errors[2].code(), INVALID_OBJECT);
        assert_eq!(errors[2].title(), "Invalid Object");
        assert!(errors[2].source().is_none());
    }

    #[rstest]
    fn titles_come_from_message_source() {
        let mut messages = MockMessageSource::new();
        messages
            .expect_lookup()
            .returning(|code| Some(format!("title for {code}")));
        let mapper = ErrorMapper::new(Arc::new(messages));
        let mut violations = ConstraintViolations::new();
        violations.push(ConstraintViolation::field("name", "Name is required"));

        let err = mapper.map_violations(&violations);
        assert_eq!(
            err.document().errors[0].title(),
            "title for error.invalidField"
        );
    }
}
