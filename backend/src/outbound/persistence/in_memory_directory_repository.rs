//! In-memory `DirectoryRepository` for development runs without PostgreSQL.
//!
//! Directories live in a map behind an async read/write lock and are lost on
//! restart. Audit stamps are applied the same way as the Diesel adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{Auditor, Directory, DirectoryId};

/// Map-backed implementation of the `DirectoryRepository` port.
pub struct InMemoryDirectoryRepository {
    directories: RwLock<HashMap<DirectoryId, Directory>>,
    auditor: Auditor,
}

impl InMemoryDirectoryRepository {
    /// Create an empty repository stamping saves with `auditor`.
    pub fn new(auditor: Auditor) -> Self {
        Self {
            directories: RwLock::new(HashMap::new()),
            auditor,
        }
    }

    /// Number of stored directories.
    pub async fn count(&self) -> usize {
        self.directories.read().await.len()
    }

    /// Remove every stored directory.
    pub async fn clear(&self) {
        self.directories.write().await.clear();
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn find_by_id(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<Directory>, DirectoryRepositoryError> {
        Ok(self.directories.read().await.get(id).cloned())
    }

    async fn save(&self, directory: Directory) -> Result<Directory, DirectoryRepositoryError> {
        let id = directory.id().unwrap_or_else(DirectoryId::random);
        let mut directories = self.directories.write().await;
        let stamps = match directories.get(&id) {
            Some(existing) => self.auditor.modified(existing.audit()),
            None => self.auditor.created(),
        };
        let saved = directory.with_id(id).with_audit(stamps);
        directories.insert(id, saved.clone());
        Ok(saved)
    }

    async fn exists_by_id(&self, id: &DirectoryId) -> Result<bool, DirectoryRepositoryError> {
        Ok(self.directories.read().await.contains_key(id))
    }

    async fn delete_by_id(&self, id: &DirectoryId) -> Result<(), DirectoryRepositoryError> {
        self.directories.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Actor, Contact, StaticCurrentActor};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use mockable::Clock;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn moment(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn auditor(at: DateTime<Utc>, actor: Actor) -> Auditor {
        Auditor::new(
            Arc::new(FixtureClock(at)),
            Arc::new(StaticCurrentActor::new(Some(actor))),
        )
    }

    #[fixture]
    fn cream() -> Directory {
        Directory::new(
            Some("cream".to_owned()),
            [Contact::named("Jack Bruce"), Contact::named("Ginger Baker")],
        )
    }

    #[rstest]
    #[tokio::test]
    async fn save_assigns_identifier_and_creation_stamps(cream: Directory) {
        let alice = Actor::new(Uuid::from_u128(1));
        let repo = InMemoryDirectoryRepository::new(auditor(moment(9), alice.clone()));

        let saved = repo.save(cream.clone()).await.expect("save");

        let id = saved.id().expect("identifier assigned");
        assert_eq!(saved.contacts(), cream.contacts());
        assert_eq!(saved.audit().creator, Some(alice));
        assert_eq!(saved.audit().created, Some(moment(9)));
        assert_eq!(repo.find_by_id(&id).await.expect("find"), Some(saved));
        assert_eq!(repo.count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn resave_keeps_creator_and_updates_modifier(cream: Directory) {
        let alice = Actor::new(Uuid::from_u128(1));
        let bob = Actor::new(Uuid::from_u128(2));
        let first = InMemoryDirectoryRepository::new(auditor(moment(9), alice.clone()));
        let saved = first.save(cream).await.expect("save");
        let id = saved.id().expect("identifier assigned");

        let repo = InMemoryDirectoryRepository {
            directories: RwLock::new(HashMap::from([(id, saved)])),
            auditor: auditor(moment(10), bob.clone()),
        };
        let replaced = repo
            .save(Directory::anonymous([Contact::named("Eric Clapton")]).with_id(id))
            .await
            .expect("resave");

        assert_eq!(replaced.name(), None);
        assert_eq!(replaced.audit().creator, Some(alice));
        assert_eq!(replaced.audit().created, Some(moment(9)));
        assert_eq!(replaced.audit().modifier, Some(bob));
        assert_eq!(replaced.audit().modified, Some(moment(10)));
        assert_eq!(repo.count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_and_ignores_absent(cream: Directory) {
        let repo = InMemoryDirectoryRepository::new(auditor(
            moment(9),
            Actor::new(Uuid::from_u128(1)),
        ));
        let id = repo
            .save(cream)
            .await
            .expect("save")
            .id()
            .expect("identifier assigned");

        assert!(repo.exists_by_id(&id).await.expect("exists"));
        repo.delete_by_id(&id).await.expect("delete");
        repo.delete_by_id(&id).await.expect("second delete");
        assert!(!repo.exists_by_id(&id).await.expect("exists"));
        assert_eq!(repo.find_by_id(&id).await.expect("find"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn clear_empties_the_store(cream: Directory) {
        let repo = InMemoryDirectoryRepository::new(auditor(
            moment(9),
            Actor::new(Uuid::from_u128(1)),
        ));
        repo.save(cream.clone()).await.expect("save");
        repo.save(cream).await.expect("save");
        assert_eq!(repo.count().await, 2);

        repo.clear().await;
        assert_eq!(repo.count().await, 0);
    }
}
