//! Port for directory persistence.
//!
//! The [`DirectoryRepository`] trait is the storage contract the directory
//! service depends on. Adapters assign identifiers and audit stamps when
//! saving.

use async_trait::async_trait;

use crate::domain::{Directory, DirectoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory repository adapters.
    pub enum DirectoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "directory repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "directory repository query failed: {message}",
    }
}

/// Port for directory storage and retrieval.
///
/// `save` inserts when the directory has no identifier, or when the
/// identifier is not stored yet, and replaces the stored directory otherwise.
/// The returned directory carries the identifier and audit stamps that were
/// written.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Fetch a directory by identifier.
    async fn find_by_id(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<Directory>, DirectoryRepositoryError>;

    /// Insert or replace a directory.
    async fn save(&self, directory: Directory) -> Result<Directory, DirectoryRepositoryError>;

    /// Whether a directory with `id` is stored.
    async fn exists_by_id(&self, id: &DirectoryId) -> Result<bool, DirectoryRepositoryError>;

    /// Remove the directory with `id`; absent identifiers are ignored.
    async fn delete_by_id(&self, id: &DirectoryId) -> Result<(), DirectoryRepositoryError>;
}

/// Fixture implementation for testing without a real database.
///
/// Lookups find nothing and saves echo the directory back with an identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryRepository;

#[async_trait]
impl DirectoryRepository for FixtureDirectoryRepository {
    async fn find_by_id(
        &self,
        _id: &DirectoryId,
    ) -> Result<Option<Directory>, DirectoryRepositoryError> {
        Ok(None)
    }

    async fn save(&self, directory: Directory) -> Result<Directory, DirectoryRepositoryError> {
        let id = directory.id().unwrap_or_else(DirectoryId::random);
        Ok(directory.with_id(id))
    }

    async fn exists_by_id(&self, _id: &DirectoryId) -> Result<bool, DirectoryRepositoryError> {
        Ok(false)
    }

    async fn delete_by_id(&self, _id: &DirectoryId) -> Result<(), DirectoryRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_repository_lookup_returns_none() {
        let repo = FixtureDirectoryRepository;
        let id = DirectoryId::random();

        let result = repo.find_by_id(&id).await.expect("fixture lookup");
        assert!(result.is_none());
        assert!(!repo.exists_by_id(&id).await.expect("fixture exists"));
    }

    #[tokio::test]
    async fn fixture_repository_assigns_identifier_on_save() {
        let repo = FixtureDirectoryRepository;
        let directory = Directory::anonymous([Contact::named("Jack Bruce")]);

        let saved = repo.save(directory.clone()).await.expect("fixture save");
        assert!(saved.id().is_some());
        assert_eq!(saved.contacts(), directory.contacts());
    }

    #[tokio::test]
    async fn fixture_repository_keeps_existing_identifier() {
        let repo = FixtureDirectoryRepository;
        let id = DirectoryId::random();

        let saved = repo
            .save(Directory::default().with_id(id))
            .await
            .expect("fixture save");
        assert_eq!(saved.id(), Some(id));
    }

    #[rstest]
    fn query_error_formats_correctly() {
        let error = DirectoryRepositoryError::query("relation missing");
        assert_eq!(
            error.to_string(),
            "directory repository query failed: relation missing"
        );
    }
}
