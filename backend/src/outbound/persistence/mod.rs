//! Directory storage adapters.
//!
//! [`DieselDirectoryRepository`] stores directories in PostgreSQL through
//! `diesel-async` and a `bb8` pool. [`InMemoryDirectoryRepository`] keeps
//! them in process memory for local runs and tests.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal; repositories translate them to domain types and map database
//! failures to `DirectoryRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! # async fn wire(auditor: directory_backend::domain::Auditor) -> color_eyre::Result<()> {
//! use directory_backend::outbound::persistence::{
//!     DbPool, DieselDirectoryRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! let url = "postgres://localhost/directory";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselDirectoryRepository::new(pool, auditor);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_directory_repository;
mod in_memory_directory_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_directory_repository::DieselDirectoryRepository;
pub use in_memory_directory_repository::InMemoryDirectoryRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
