//! Directory domain service.
//!
//! Implements the directory driving ports over a [`DirectoryRepository`],
//! validating input before any storage call and classifying storage failures
//! by the operation that hit them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    DirectoryCommand, DirectoryQuery, DirectoryRepository, DirectoryRepositoryError,
};
use crate::domain::{Directory, DirectoryError, DirectoryId, Validate};

#[derive(Debug, Clone, Copy)]
enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

fn map_repository_error(operation: Operation, error: DirectoryRepositoryError) -> DirectoryError {
    error!(?operation, error = %error, "directory repository call failed");
    let message = error.to_string();
    match operation {
        Operation::Read => DirectoryError::read(message),
        Operation::Create => DirectoryError::create(message),
        Operation::Update => DirectoryError::update(message),
        Operation::Delete => DirectoryError::delete(message),
    }
}

/// Directory service implementing the query and command driving ports.
#[derive(Clone)]
pub struct DirectoryService<R> {
    directory_repo: Arc<R>,
}

impl<R> DirectoryService<R> {
    /// Create a new service over the directory repository.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use directory_backend::domain::DirectoryService;
    /// # use directory_backend::domain::ports::FixtureDirectoryRepository;
    /// let service = DirectoryService::new(Arc::new(FixtureDirectoryRepository));
    /// # let _ = service;
    /// ```
    pub fn new(directory_repo: Arc<R>) -> Self {
        Self { directory_repo }
    }
}

impl<R> DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn require_existing(
        &self,
        id: &DirectoryId,
        operation: Operation,
    ) -> Result<(), DirectoryError> {
        let exists = self
            .directory_repo
            .exists_by_id(id)
            .await
            .map_err(|err| map_repository_error(operation, err))?;
        if exists {
            Ok(())
        } else {
            info!(%id, "Directory not found");
            Err(DirectoryError::not_found(*id))
        }
    }
}

#[async_trait]
impl<R> DirectoryQuery for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn get(&self, id: &DirectoryId) -> Result<Directory, DirectoryError> {
        info!(%id, "Attempting to read directory");
        let directory = self
            .directory_repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(Operation::Read, err))?
            .ok_or_else(|| {
                info!(%id, "Directory not found");
                DirectoryError::not_found(*id)
            })?;
        info!(?directory, "Successfully read directory");
        Ok(directory)
    }
}

#[async_trait]
impl<R> DirectoryCommand for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn create(&self, directory: Directory) -> Result<Directory, DirectoryError> {
        info!(?directory, "Attempting to create directory");
        directory.validate()?;
        let created = self
            .directory_repo
            .save(directory)
            .await
            .map_err(|err| map_repository_error(Operation::Create, err))?;
        info!(directory = ?created, "Successfully created directory");
        Ok(created)
    }

    async fn update(
        &self,
        id: &DirectoryId,
        directory: Directory,
    ) -> Result<Directory, DirectoryError> {
        let directory = directory.with_id(*id);
        info!(?directory, "Attempting to update directory");
        directory.validate()?;
        self.require_existing(id, Operation::Update).await?;
        let updated = self
            .directory_repo
            .save(directory)
            .await
            .map_err(|err| map_repository_error(Operation::Update, err))?;
        info!(directory = ?updated, "Successfully updated directory");
        Ok(updated)
    }

    async fn delete(&self, id: &DirectoryId) -> Result<(), DirectoryError> {
        info!(%id, "Attempting to delete directory");
        self.require_existing(id, Operation::Delete).await?;
        self.directory_repo
            .delete_by_id(id)
            .await
            .map_err(|err| map_repository_error(Operation::Delete, err))?;
        info!(%id, "Successfully deleted directory");
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
