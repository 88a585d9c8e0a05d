//! Builders for HTTP state ports and repository-backed services.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use directory_backend::domain::ports::{DirectoryCommand, DirectoryQuery, DirectoryRepository};
use directory_backend::domain::{Auditor, DirectoryService};
use directory_backend::inbound::http::state::HttpState;
use directory_backend::outbound::persistence::{
    DieselDirectoryRepository, InMemoryDirectoryRepository,
};

use super::ServerConfig;

type DirectoryPorts = (Arc<dyn DirectoryCommand>, Arc<dyn DirectoryQuery>);

fn service_ports<R>(repository: R) -> DirectoryPorts
where
    R: DirectoryRepository + 'static,
{
    let service = Arc::new(DirectoryService::new(Arc::new(repository)));
    (service.clone(), service)
}

/// Build the directory ports over a pool-backed repository when a pool is
/// available, otherwise over the in-memory repository.
fn build_directory_ports_with_pool<Pool, R, MakeRepo>(
    pool: &Option<Pool>,
    auditor: &Auditor,
    make_repo: MakeRepo,
) -> DirectoryPorts
where
    R: DirectoryRepository + 'static,
    MakeRepo: FnOnce(&Pool, Auditor) -> R,
{
    match pool {
        Some(pool) => service_ports(make_repo(pool, auditor.clone())),
        None => {
            info!("no database configured, keeping directories in memory");
            service_ports(InMemoryDirectoryRepository::new(auditor.clone()))
        }
    }
}

/// Build the shared HTTP state from the configured storage.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (directories, directories_query) =
        build_directory_ports_with_pool(&config.db_pool, &config.auditor, |pool, auditor| {
            DieselDirectoryRepository::new(pool.clone(), auditor)
        });
    web::Data::new(HttpState::new(directories, directories_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_backend::domain::ports::FixtureDirectoryRepository;
    use directory_backend::domain::{
        Contact, Directory, DirectoryError, StaticCurrentActor,
    };
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn auditor() -> Auditor {
        Auditor::new(
            Arc::new(DefaultClock),
            Arc::new(StaticCurrentActor::default()),
        )
    }

    fn cream() -> Directory {
        Directory::new(Some("cream".to_owned()), [Contact::named("Jack Bruce")])
    }

    #[rstest]
    #[tokio::test]
    async fn pool_present_selects_pool_backed_repository(auditor: Auditor) {
        let (command, query) =
            build_directory_ports_with_pool(&Some(()), &auditor, |_, _| FixtureDirectoryRepository);

        let created = command.create(cream()).await.expect("fixture save");
        let id = created.id().expect("identifier assigned");

        let lookup = query.get(&id).await;
        assert!(matches!(lookup, Err(DirectoryError::NotFound { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn pool_absent_keeps_directories_in_memory(auditor: Auditor) {
        let (command, query) = build_directory_ports_with_pool::<(), FixtureDirectoryRepository, _>(
            &None,
            &auditor,
            |_, _| FixtureDirectoryRepository,
        );

        let created = command.create(cream()).await.expect("memory save");
        let id = created.id().expect("identifier assigned");

        let found = query.get(&id).await.expect("stored directory");
        assert_eq!(found, created);
        assert!(found.audit().created.is_some());
    }
}
