//! Port naming the actor behind the current operation.

use crate::domain::Actor;

/// Supplies the actor recorded in audit stamps.
///
/// Providers return `None` when they cannot tell who is acting, letting a
/// composite fall through to the next provider.
#[cfg_attr(test, mockall::automock)]
pub trait CurrentActor: Send + Sync {
    /// Actor responsible for the operation in progress, if known.
    fn current_actor(&self) -> Option<Actor>;
}
