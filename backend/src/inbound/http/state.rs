//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DirectoryCommand, DirectoryQuery, FixtureDirectoryCommand, FixtureDirectoryQuery,
};
use crate::inbound::http::error_mapper::ErrorMapper;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directories: Arc<dyn DirectoryCommand>,
    pub directories_query: Arc<dyn DirectoryQuery>,
    pub errors: ErrorMapper,
}

impl HttpState {
    /// Construct state from the directory ports with the default error mapper.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use directory_backend::domain::ports::{FixtureDirectoryCommand, FixtureDirectoryQuery};
    /// use directory_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureDirectoryCommand),
    ///     Arc::new(FixtureDirectoryQuery),
    /// );
    /// let _query = state.directories_query.clone();
    /// ```
    pub fn new(
        directories: Arc<dyn DirectoryCommand>,
        directories_query: Arc<dyn DirectoryQuery>,
    ) -> Self {
        Self {
            directories,
            directories_query,
            errors: ErrorMapper::default(),
        }
    }

    /// Replace the error mapper, e.g. to localize titles.
    #[must_use]
    pub fn with_error_mapper(mut self, errors: ErrorMapper) -> Self {
        self.errors = errors;
        self
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureDirectoryCommand),
            Arc::new(FixtureDirectoryQuery),
        )
    }
}
