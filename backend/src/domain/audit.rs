//! Audit metadata for persisted entities.
//!
//! Persistence adapters call [`Auditor`] as a hook while saving so that
//! entities carry who created and last modified them, and when.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use uuid::Uuid;

use super::ports::CurrentActor;

/// Actor kind used when none is given.
pub const DEFAULT_ACTOR_KIND: &str = "actor";

/// Something that creates or modifies entities: a user, a system job.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Actor {
    id: Uuid,
    kind: String,
}

impl Actor {
    /// Actor of the default kind.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self::with_kind(id, DEFAULT_ACTOR_KIND)
    }

    /// Actor of a specific kind, e.g. `"system"`.
    #[must_use]
    pub fn with_kind(id: Uuid, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Kind discriminator.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id=\"{}\", type=\"{}\"", self.id, self.kind)
    }
}

/// Creation and modification stamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditStamps {
    /// Who created the entity.
    pub creator: Option<Actor>,
    /// When the entity was created.
    pub created: Option<DateTime<Utc>>,
    /// Who last modified the entity.
    pub modifier: Option<Actor>,
    /// When the entity was last modified.
    pub modified: Option<DateTime<Utc>>,
}

/// Yields the actor from the first provider that has one.
#[derive(Clone, Default)]
pub struct CompositeCurrentActor {
    providers: Vec<Arc<dyn CurrentActor>>,
}

impl CompositeCurrentActor {
    /// Consult `providers` in order.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn CurrentActor>>) -> Self {
        Self { providers }
    }
}

impl CurrentActor for CompositeCurrentActor {
    fn current_actor(&self) -> Option<Actor> {
        self.providers
            .iter()
            .find_map(|provider| provider.current_actor())
    }
}

/// Always yields the same actor, or none.
#[derive(Debug, Clone, Default)]
pub struct StaticCurrentActor {
    actor: Option<Actor>,
}

impl StaticCurrentActor {
    /// Provider yielding `actor`.
    #[must_use]
    pub fn new(actor: Option<Actor>) -> Self {
        Self { actor }
    }
}

impl CurrentActor for StaticCurrentActor {
    fn current_actor(&self) -> Option<Actor> {
        self.actor.clone()
    }
}

/// Produces audit stamps from a clock and the current actor.
#[derive(Clone)]
pub struct Auditor {
    clock: Arc<dyn Clock>,
    actor: Arc<dyn CurrentActor>,
}

impl Auditor {
    /// Build an auditor.
    pub fn new(clock: Arc<dyn Clock>, actor: Arc<dyn CurrentActor>) -> Self {
        Self { clock, actor }
    }

    // Microsecond precision, as stored by PostgreSQL.
    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(6)
    }

    /// Stamps for an entity being created.
    #[must_use]
    pub fn created(&self) -> AuditStamps {
        let now = self.now();
        let actor = self.actor.current_actor();
        AuditStamps {
            creator: actor.clone(),
            created: Some(now),
            modifier: actor,
            modified: Some(now),
        }
    }

    /// Stamps for an entity being modified, keeping the creation stamps.
    #[must_use]
    pub fn modified(&self, existing: &AuditStamps) -> AuditStamps {
        AuditStamps {
            creator: existing.creator.clone(),
            created: existing.created,
            modifier: self.actor.current_actor(),
            modified: Some(self.now()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockCurrentActor;
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn moment() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn alice() -> Actor {
        Actor::with_kind(Uuid::from_u128(1), "user")
    }

    #[rstest]
    fn actor_defaults_kind() {
        let actor = Actor::new(Uuid::nil());
        assert_eq!(actor.kind(), "actor");
        assert_eq!(
            format!("{actor:?}"),
            r#"id="00000000-0000-0000-0000-000000000000", type="actor""#
        );
    }

    #[rstest]
    fn composite_uses_first_provider_with_actor(alice: Actor) {
        let mut empty = MockCurrentActor::new();
        empty.expect_current_actor().times(1).return_const(None::<Actor>);
        let mut present = MockCurrentActor::new();
        present
            .expect_current_actor()
            .times(1)
            .return_const(Some(alice.clone()));
        let mut unused = MockCurrentActor::new();
        unused.expect_current_actor().never();

        let providers: Vec<Arc<dyn CurrentActor>> =
            vec![Arc::new(empty), Arc::new(present), Arc::new(unused)];
        let composite = CompositeCurrentActor::new(providers);
        assert_eq!(composite.current_actor(), Some(alice));
    }

    #[rstest]
    fn composite_without_providers_yields_none() {
        assert_eq!(CompositeCurrentActor::default().current_actor(), None);
    }

    #[rstest]
    fn created_stamps_both_sides(moment: DateTime<Utc>, alice: Actor) {
        let auditor = Auditor::new(
            Arc::new(FixtureClock(moment)),
            Arc::new(StaticCurrentActor::new(Some(alice.clone()))),
        );
        let stamps = auditor.created();
        assert_eq!(stamps.creator, Some(alice.clone()));
        assert_eq!(stamps.modifier, Some(alice));
        assert_eq!(stamps.created, Some(moment));
        assert_eq!(stamps.modified, Some(moment));
    }

    #[rstest]
    fn modified_preserves_creation(moment: DateTime<Utc>, alice: Actor) {
        let original = AuditStamps {
            creator: Some(Actor::new(Uuid::from_u128(7))),
            created: Some(moment - chrono::Duration::days(1)),
            modifier: None,
            modified: None,
        };
        let auditor = Auditor::new(
            Arc::new(FixtureClock(moment)),
            Arc::new(StaticCurrentActor::new(Some(alice.clone()))),
        );
        let stamps = auditor.modified(&original);
        assert_eq!(stamps.creator, original.creator);
        assert_eq!(stamps.created, original.created);
        assert_eq!(stamps.modifier, Some(alice));
        assert_eq!(stamps.modified, Some(moment));
    }

    #[rstest]
    fn stamps_drop_sub_microsecond_precision(moment: DateTime<Utc>) {
        let precise = moment + chrono::Duration::nanoseconds(1_234_567);
        let auditor = Auditor::new(
            Arc::new(FixtureClock(precise)),
            Arc::new(StaticCurrentActor::default()),
        );
        let stamps = auditor.created();
        assert_eq!(
            stamps.created,
            Some(moment + chrono::Duration::microseconds(1_234))
        );
        assert_eq!(stamps.creator, None);
    }
}
