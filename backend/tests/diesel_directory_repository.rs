//! Integration tests for `DieselDirectoryRepository` against embedded PostgreSQL.
//!
//! Each test gets its own cluster and freshly migrated database via
//! `pg-embedded-setup-unpriv`.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use directory_backend::domain::ports::{DirectoryCommand, DirectoryQuery, DirectoryRepository};
use directory_backend::domain::{
    Actor, Address, Auditor, Contact, Country, Directory, DirectoryError, DirectoryId,
    DirectoryService, State, StaticCurrentActor,
};
use directory_backend::outbound::persistence::{
    DbPool, DieselDirectoryRepository, PoolConfig, run_pending_migrations,
};
use mockable::Clock;
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "diesel_directory_repo_test";

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 26, 53)
        .single()
        .expect("valid timestamp")
}

fn auditor(hour: u32, actor: &Actor) -> Auditor {
    Auditor::new(
        Arc::new(FixedClock(at(hour))),
        Arc::new(StaticCurrentActor::new(Some(actor.clone()))),
    )
}

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    pool: DbPool,
    alice: Actor,
}

impl TestContext {
    fn repository(&self, hour: u32, actor: &Actor) -> DieselDirectoryRepository {
        DieselDirectoryRepository::new(self.pool.clone(), auditor(hour, actor))
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = reset_database(&cluster, TEST_DB)?;
    runtime
        .block_on(run_pending_migrations(&database_url))
        .map_err(|err| err.to_string())?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        pool,
        alice: Actor::with_kind(Uuid::new_v4(), "user"),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn cream() -> Directory {
    Directory::new(
        Some("cream".to_owned()),
        [
            Contact::builder("Jack Bruce")
                .email("jack@example.com")
                .address(
                    Address::builder()
                        .lines(["1 Main Street", "Flat 2"])
                        .locality("Glasgow")
                        .country(Country::UnitedKingdom)
                        .build(),
                )
                .build(),
            Contact::builder("Ginger Baker")
                .phone("+61 3 8685 1462")
                .address(
                    Address::builder()
                        .locality("Melbourne")
                        .postcode("3000")
                        .state(State::parse("vic"))
                        .country(Country::Australia)
                        .build(),
                )
                .build(),
            Contact::named("Eric Clapton"),
        ],
    )
}

#[rstest]
fn save_then_find_round_trips_contacts_and_stamps(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: save_then_find_round_trips_contacts_and_stamps skipped");
        return;
    };
    let repository = context.repository(9, &context.alice);
    let directory = cream();

    let saved = context
        .runtime
        .block_on(repository.save(directory.clone()))
        .expect("save directory");
    let id = saved.id().expect("identifier assigned");

    let found = context
        .runtime
        .block_on(repository.find_by_id(&id))
        .expect("find directory")
        .expect("directory stored");

    assert_eq!(found, saved);
    assert_eq!(found.contacts(), directory.contacts());
    assert_eq!(found.audit().creator, Some(context.alice.clone()));
    assert_eq!(found.audit().created, Some(at(9)));
    let ginger = found
        .iter_contacts()
        .find(|contact| contact.name() == "Ginger Baker")
        .expect("contact stored");
    assert_eq!(ginger.address().state(), Some(&State::VICTORIA));
    assert_eq!(ginger.phone(), Some("+61 3 8685 1462"));
}

#[rstest]
fn resave_replaces_contacts_and_keeps_creation_stamps(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: resave_replaces_contacts_and_keeps_creation_stamps skipped");
        return;
    };
    let bob = Actor::new(Uuid::new_v4());
    let saved = context
        .runtime
        .block_on(context.repository(9, &context.alice).save(cream()))
        .expect("save directory");
    let id = saved.id().expect("identifier assigned");

    let replacement = Directory::anonymous([Contact::named("Les Claypool")]).with_id(id);
    let later = context.repository(11, &bob);
    context
        .runtime
        .block_on(later.save(replacement))
        .expect("resave directory");

    let found = context
        .runtime
        .block_on(later.find_by_id(&id))
        .expect("find directory")
        .expect("directory stored");
    let names: Vec<_> = found.iter_contacts().map(Contact::name).collect();
    assert_eq!(names, ["Les Claypool"]);
    assert_eq!(found.name(), None);
    assert_eq!(found.audit().creator, Some(context.alice.clone()));
    assert_eq!(found.audit().created, Some(at(9)));
    assert_eq!(found.audit().modifier, Some(bob));
    assert_eq!(found.audit().modified, Some(at(11)));
}

#[rstest]
fn delete_removes_directory_and_contacts(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_removes_directory_and_contacts skipped");
        return;
    };
    let repository = context.repository(9, &context.alice);
    let id = context
        .runtime
        .block_on(repository.save(cream()))
        .expect("save directory")
        .id()
        .expect("identifier assigned");

    assert!(
        context
            .runtime
            .block_on(repository.exists_by_id(&id))
            .expect("exists")
    );
    context
        .runtime
        .block_on(repository.delete_by_id(&id))
        .expect("delete directory");

    assert!(
        !context
            .runtime
            .block_on(repository.exists_by_id(&id))
            .expect("exists")
    );
    assert_eq!(
        context
            .runtime
            .block_on(repository.find_by_id(&id))
            .expect("find directory"),
        None
    );
    // A second save under the same id starts from a clean slate.
    let resaved = context
        .runtime
        .block_on(repository.save(Directory::anonymous(Vec::<Contact>::new()).with_id(id)))
        .expect("save after delete");
    assert!(resaved.contacts().is_empty());
}

#[rstest]
fn service_reports_unknown_identifiers(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: service_reports_unknown_identifiers skipped");
        return;
    };
    let service = DirectoryService::new(Arc::new(context.repository(9, &context.alice)));
    let missing = DirectoryId::random();

    let read = context.runtime.block_on(service.get(&missing));
    let update = context
        .runtime
        .block_on(service.update(&missing, cream()));
    let delete = context.runtime.block_on(service.delete(&missing));

    assert!(matches!(read, Err(DirectoryError::NotFound { .. })));
    assert!(matches!(update, Err(DirectoryError::NotFound { .. })));
    assert!(matches!(delete, Err(DirectoryError::NotFound { .. })));
}
