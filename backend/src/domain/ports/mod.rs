//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod current_actor;
mod directory_command;
mod directory_query;
mod directory_repository;

#[cfg(test)]
pub use current_actor::MockCurrentActor;
pub use current_actor::CurrentActor;
#[cfg(test)]
pub use directory_command::MockDirectoryCommand;
pub use directory_command::{DirectoryCommand, FixtureDirectoryCommand};
#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
pub use directory_query::{DirectoryQuery, FixtureDirectoryQuery};
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
pub use directory_repository::{
    DirectoryRepository, DirectoryRepositoryError, FixtureDirectoryRepository,
};
