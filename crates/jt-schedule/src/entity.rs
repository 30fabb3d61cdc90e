//! `Entity` (one schedule) and `EntitySet` (an ordered population).

use jt_core::EntityId;

use crate::{ScheduleError, ScheduleResult};

// ── Entity ────────────────────────────────────────────────────────────────────

/// One simulated subject and the millisecond timestamps of its events.
///
/// The schedule is never empty: every public constructor seeds at least one
/// value, and the only mutation is appending through
/// [`ScheduleGenerator`](crate::ScheduleGenerator).
///
/// Equality compares `id` and `schedule`.  `spread` only steers generation
/// and is not persisted by the codec, so decoded entities carry `0.0`.
#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) id:       EntityId,
    pub(crate) schedule: Vec<f64>,
    pub(crate) spread:   f64,
}

impl Entity {
    /// Seed a one-event schedule at `initial_ms`.
    pub fn new(id: EntityId, initial_ms: f64, spread: f64) -> Self {
        Self { id, schedule: vec![initial_ms], spread }
    }

    /// Build an entity from an existing, non-empty schedule.
    pub fn from_schedule(id: EntityId, schedule: Vec<f64>, spread: f64) -> ScheduleResult<Self> {
        if schedule.is_empty() {
            return Err(ScheduleError::EmptySchedule(id));
        }
        Ok(Self { id, schedule, spread })
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// All event times, in generation order.
    #[inline]
    pub fn schedule(&self) -> &[f64] {
        &self.schedule
    }

    /// The most recent event time.  `None` only for a malformed entity.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.schedule.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, at_ms: f64) {
        self.schedule.push(at_ms);
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.schedule == other.schedule
    }
}

// ── EntitySet ─────────────────────────────────────────────────────────────────

/// Insertion-ordered collection of entities.
///
/// Ids are expected to be unique but this is not enforced; the codec and the
/// histogram never look entities up by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntitySet(Vec<Entity>);

impl EntitySet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, entity: Entity) {
        self.0.push(entity);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.0
    }

    /// Every event time of every entity, entity by entity in collection order.
    pub fn timestamps(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().flat_map(|e| e.schedule.iter().copied())
    }

    /// Total number of events across all entities.
    pub fn event_count(&self) -> usize {
        self.0.iter().map(Entity::len).sum()
    }
}

impl From<Vec<Entity>> for EntitySet {
    fn from(entities: Vec<Entity>) -> Self {
        Self(entities)
    }
}

impl FromIterator<Entity> for EntitySet {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EntitySet {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
