//! Plan cache
//!
//! Compiled plans keyed by (source type, target type). Plans are built
//! outside the lock; when two callers race on the same pair the first plan
//! published is kept and both receive it.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::MappingPlan;
use crate::error::MapResult;

/// Identity of a (source, target) type pair
pub type PlanKey = (TypeId, TypeId);

pub fn plan_key<S: 'static, T: 'static>() -> PlanKey {
    (TypeId::of::<S>(), TypeId::of::<T>())
}

#[derive(Default)]
pub struct PlanCache {
    plans: RwLock<HashMap<PlanKey, Arc<MappingPlan>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a plan, counting the hit or miss
    pub fn get(&self, key: PlanKey) -> Option<Arc<MappingPlan>> {
        let found = self.plans.read().get(&key).cloned();
        match &found {
            Some(plan) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(
                    source = plan.source_type,
                    target = plan.target_type,
                    "Plan cache hit"
                );
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
            }
        }
        found
    }

    /// Return the cached plan for `key`, building it with `build` on a miss.
    ///
    /// A failed build is not cached, so the next call retries.
    pub fn get_or_try_insert_with<F>(&self, key: PlanKey, build: F) -> MapResult<Arc<MappingPlan>>
    where
        F: FnOnce() -> MapResult<MappingPlan>,
    {
        if let Some(plan) = self.get(key) {
            return Ok(plan);
        }

        let built = Arc::new(build()?);
        let mut plans = self.plans.write();
        Ok(Arc::clone(plans.entry(key).or_insert(built)))
    }

    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.plans.read().contains_key(&plan_key::<S, T>())
    }

    pub fn len(&self) -> usize {
        self.plans.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.read().is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drop every plan. Callers already holding a plan keep using it.
    pub fn clear(&self) {
        let mut plans = self.plans.write();
        let dropped = plans.len();
        plans.clear();
        debug!(dropped, "Cleared plan cache");
    }
}

impl fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanCache")
            .field("len", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
