//! Mapping engine
//!
//! `Mapper` is the public entry point. It looks up (or builds and caches)
//! the plan for a type pair and executes it against a source instance.

use std::any::{Any, TypeId};
use std::sync::Arc;

use tracing::trace;

use crate::application::cache::{plan_key, PlanCache};
use crate::application::registry::ConverterRegistry;
use crate::config::MapperConfig;
use crate::domain::entities::{MappingPlan, PropertyResolution, TargetSlot};
use crate::domain::ports::{Mappable, ValueConverter};
use crate::domain::services::{
    compose, decompose, ConverterInvoker, PlanResolver, PropertyCatalog, ValueCoercer,
};
use crate::domain::value_objects::{PropertyBag, Value};
use crate::error::{MapError, MapResult};

/// Object-to-object mapper
///
/// Owns its converter registry and plan cache. A `Mapper` is `Send + Sync`;
/// share one behind an `Arc` to reuse plans across threads.
#[derive(Debug, Default)]
pub struct Mapper {
    config: MapperConfig,
    coercer: ValueCoercer,
    registry: ConverterRegistry,
    cache: PlanCache,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration. Cached plans are dropped.
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.coercer = ValueCoercer::new(config.coercion.clone());
        self.config = config;
        self.cache.clear();
        self
    }

    /// Register a named converter
    pub fn with_converter<C>(mut self, name: impl Into<String>, converter: C) -> Self
    where
        C: ValueConverter + 'static,
    {
        self.register_converter(name, converter);
        self
    }

    /// Register a named converter. Cached plans are dropped, since they may
    /// be bound to a converter this one replaces.
    pub fn register_converter<C>(&mut self, name: impl Into<String>, converter: C)
    where
        C: ValueConverter + 'static,
    {
        self.registry.register(name, converter);
        self.cache.clear();
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Map `source` into a new `T`.
    ///
    /// An absent source yields `T::default()` without touching the plan
    /// cache. A `PropertyBag` target is filled by dynamic projection.
    pub fn map_one<S, T>(&self, source: Option<&S>) -> MapResult<T>
    where
        S: Mappable,
        T: Mappable,
    {
        let Some(source) = source else {
            return Ok(T::default());
        };

        if TypeId::of::<T>() == TypeId::of::<PropertyBag>() {
            let projected: Box<dyn Any> = Box::new(self.project(Some(source))?);
            if let Ok(target) = projected.downcast::<T>() {
                return Ok(*target);
            }
        }

        let plan = self.plan_for::<S, T>()?;
        let mut target = T::default();
        self.execute(&plan, source, &mut target)?;
        Ok(target)
    }

    pub fn map<S, T>(&self, source: &S) -> MapResult<T>
    where
        S: Mappable,
        T: Mappable,
    {
        self.map_one(Some(source))
    }

    /// Map each source in order, stopping at the first failure.
    ///
    /// An absent sequence yields an empty one.
    pub fn map_many<S, T>(&self, sources: Option<&[S]>) -> MapResult<Vec<T>>
    where
        S: Mappable,
        T: Mappable,
    {
        sources
            .unwrap_or_default()
            .iter()
            .map(|source| self.map(source))
            .collect()
    }

    /// Every non-null readable property of `source`, in declaration order
    pub fn project<S: Mappable>(&self, source: Option<&S>) -> MapResult<PropertyBag> {
        let Some(source) = source else {
            return Ok(PropertyBag::new());
        };

        if let Some(bag) = (source as &dyn Any).downcast_ref::<PropertyBag>() {
            return Ok(bag.clone());
        }

        let catalog = PropertyCatalog::readable(&S::describe());
        let mut bag = PropertyBag::new();
        for property in catalog.iter() {
            if let Some(value) = read_present(source, &property.name) {
                bag.insert(property.name.clone(), value);
            }
        }
        Ok(bag)
    }

    /// The plan used to map `S` into `T`, building it if needed
    pub fn plan_for<S, T>(&self) -> MapResult<Arc<MappingPlan>>
    where
        S: Mappable,
        T: Mappable,
    {
        if !self.config.cache.enabled {
            return self.build_plan::<S, T>().map(Arc::new);
        }
        self.cache
            .get_or_try_insert_with(plan_key::<S, T>(), || self.build_plan::<S, T>())
    }

    /// Drop every cached plan; the next mapping of any pair rebuilds
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn build_plan<S, T>(&self) -> MapResult<MappingPlan>
    where
        S: Mappable,
        T: Mappable,
    {
        let source = PropertyCatalog::readable(&S::describe());
        let target = PropertyCatalog::writable(&T::describe());
        PlanResolver::new(&self.registry).resolve(&source, &target)
    }

    fn execute<S, T>(&self, plan: &MappingPlan, source: &S, target: &mut T) -> MapResult<()>
    where
        S: Mappable,
        T: Mappable,
    {
        trace!(
            source = plan.source_type,
            target = plan.target_type,
            resolutions = plan.len(),
            "Executing mapping plan"
        );
        for resolution in &plan.resolutions {
            self.apply(resolution, source, target)
                .map_err(|e| MapError::mapping(resolution.property(), e))?;
        }
        Ok(())
    }

    fn apply<S, T>(&self, resolution: &PropertyResolution, source: &S, target: &mut T) -> MapResult<()>
    where
        S: Mappable,
        T: Mappable,
    {
        match resolution {
            PropertyResolution::DirectCopy { source: name, target: slot } => {
                match read_present(source, name) {
                    Some(value) => self.store(target, slot, value),
                    None => Ok(()),
                }
            }
            PropertyResolution::ConvertedSingle {
                source: name,
                target: slot,
                converter,
            } => match read_present(source, name) {
                Some(value) => {
                    let converted = ConverterInvoker::invoke(value, converter)?;
                    self.store(target, slot, converted)
                }
                None => Ok(()),
            },
            PropertyResolution::AggregateToOne {
                sources,
                target: slot,
                converter,
            } => {
                let values: Vec<Value> = sources
                    .iter()
                    .map(|name| source.read(name).unwrap_or_default())
                    .collect();
                if values.iter().all(Value::is_null) {
                    return Ok(());
                }

                let shape = converter
                    .as_ref()
                    .map_or(&slot.value_type, |c| c.input_type());
                let composed = compose(values, shape)?;
                let output = match converter {
                    Some(converter) => ConverterInvoker::invoke(composed, converter)?,
                    None => composed,
                };
                self.store(target, slot, output)
            }
            PropertyResolution::OneToAggregate {
                source: name,
                targets,
                converter,
            } => {
                let Some(value) = read_present(source, name) else {
                    return Ok(());
                };
                let output = match converter {
                    Some(converter) => ConverterInvoker::invoke(value, converter)?,
                    None => value,
                };

                let names: Vec<String> = targets.iter().map(|t| t.name.clone()).collect();
                for ((_, part), slot) in decompose(output, &names)?.into_iter().zip(targets) {
                    self.store(target, slot, part)
                        .map_err(|e| MapError::mapping(&slot.name, e))?;
                }
                Ok(())
            }
            PropertyResolution::Skip { .. } => Ok(()),
        }
    }

    /// Coerce `value` to the slot type and write it; null is never written
    fn store<T: Mappable>(&self, target: &mut T, slot: &TargetSlot, value: Value) -> MapResult<()> {
        let value = self.coercer.coerce(value, &slot.value_type)?;
        if value.is_null() {
            return Ok(());
        }
        target.write(&slot.name, value)
    }
}

fn read_present<S: Mappable>(source: &S, name: &str) -> Option<Value> {
    source.read(name).filter(|value| !value.is_null())
}
