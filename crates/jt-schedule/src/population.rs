//! Population driver: builds every entity of a run and grows it to the
//! horizon.

use jt_core::{EntityId, EntityRng, SimConfig};

use crate::{Entity, EntitySet, ScheduleGenerator, ScheduleResult};

/// Generate `config.entity_count` entities with ids `0..entity_count`.
///
/// Every entity starts at `config.initial_offset_ms`, uses `config.spread`,
/// and draws from its own [`EntityRng`] seeded from `config.seed`, so the
/// result depends only on the configuration, never on iteration order.  With
/// the `parallel` feature entities are generated on Rayon's pool and the
/// output is identical to a sequential run.
pub fn generate_population(
    config: &SimConfig,
    generator: &ScheduleGenerator,
) -> ScheduleResult<EntitySet> {
    config.validate()?;

    let horizon_ms = config.horizon_ms as f64;
    let build = |i: usize| -> ScheduleResult<Entity> {
        let id = EntityId(i as u32);
        let mut rng = EntityRng::new(config.seed, id);
        let mut entity = Entity::new(id, config.initial_offset_ms as f64, config.spread);
        generator.extend_until(&mut entity, horizon_ms, &mut rng)?;
        Ok(entity)
    };

    #[cfg(not(feature = "parallel"))]
    let entities: Vec<Entity> = (0..config.entity_count)
        .map(build)
        .collect::<ScheduleResult<_>>()?;

    #[cfg(feature = "parallel")]
    let entities: Vec<Entity> = {
        use rayon::prelude::*;

        (0..config.entity_count)
            .into_par_iter()
            .map(build)
            .collect::<ScheduleResult<_>>()?
    };

    let set = EntitySet::from(entities);
    tracing::debug!(
        entities = set.len(),
        events = set.event_count(),
        horizon_ms = config.horizon_ms,
        "population generated"
    );
    Ok(set)
}
