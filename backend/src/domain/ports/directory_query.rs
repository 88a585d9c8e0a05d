//! Driving port for directory lookups.

use async_trait::async_trait;

use crate::domain::{Directory, DirectoryError, DirectoryId};

/// Domain use-case port for reading directories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Fetch an existing directory.
    ///
    /// Fails with [`DirectoryError::NotFound`] when `id` is unknown.
    async fn get(&self, id: &DirectoryId) -> Result<Directory, DirectoryError>;
}

/// Fixture query for which every directory is missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryQuery;

#[async_trait]
impl DirectoryQuery for FixtureDirectoryQuery {
    async fn get(&self, id: &DirectoryId) -> Result<Directory, DirectoryError> {
        Err(DirectoryError::not_found(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_query_reports_not_found() {
        let id = DirectoryId::random();
        let error = FixtureDirectoryQuery.get(&id).await.expect_err("missing");
        assert_eq!(error, DirectoryError::not_found(id));
    }
}
