//! Driving port for directory mutations.
//!
//! Inbound adapters use this port to create, replace and remove directories
//! without depending on persistence concerns.

use async_trait::async_trait;

use crate::domain::{Directory, DirectoryError, DirectoryId};

/// Domain use-case port for changing directories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryCommand: Send + Sync {
    /// Validate and persist a new directory, returning it as stored.
    async fn create(&self, directory: Directory) -> Result<Directory, DirectoryError>;

    /// Validate and replace the directory `id`.
    ///
    /// The identifier always comes from `id`; any identifier carried by
    /// `directory` is ignored. Fails with [`DirectoryError::NotFound`] when
    /// `id` is unknown.
    async fn update(
        &self,
        id: &DirectoryId,
        directory: Directory,
    ) -> Result<Directory, DirectoryError>;

    /// Remove the directory `id`.
    ///
    /// Fails with [`DirectoryError::NotFound`] when `id` is unknown.
    async fn delete(&self, id: &DirectoryId) -> Result<(), DirectoryError>;
}

/// Fixture command that accepts every mutation without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryCommand;

#[async_trait]
impl DirectoryCommand for FixtureDirectoryCommand {
    async fn create(&self, directory: Directory) -> Result<Directory, DirectoryError> {
        Ok(directory.with_id(DirectoryId::random()))
    }

    async fn update(
        &self,
        id: &DirectoryId,
        directory: Directory,
    ) -> Result<Directory, DirectoryError> {
        Ok(directory.with_id(*id))
    }

    async fn delete(&self, _id: &DirectoryId) -> Result<(), DirectoryError> {
        Ok(())
    }
}
