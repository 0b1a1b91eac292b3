//! Mapping plan resolution
//!
//! Turns the readable catalog of a source type and the writable catalog of a
//! target type into a [`MappingPlan`]. All converter directions are fixed
//! here so that execution never inspects annotations again.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::entities::{
    BoundConverter, ConverterRef, Direction, MappingAnnotation, MappingPlan, PropertyDescriptor,
    PropertyResolution, ResolutionStrategy, TargetSlot,
};
use crate::domain::ports::{ConverterLookup, ValueConverter};
use crate::domain::services::aggregate::composed_type;
use crate::domain::services::catalog::PropertyCatalog;
use crate::domain::services::converter_invoker::ConverterInvoker;
use crate::domain::value_objects::ValueType;
use crate::error::{MapError, MapResult};

/// Builds mapping plans, resolving named converters through `lookup`
pub struct PlanResolver<'a> {
    lookup: &'a dyn ConverterLookup,
}

impl<'a> PlanResolver<'a> {
    pub fn new(lookup: &'a dyn ConverterLookup) -> Self {
        Self { lookup }
    }

    /// Pick the strategy for a pair of catalogs.
    ///
    /// Target annotations win over source annotations; with neither the
    /// pair is matched by name.
    pub fn strategy(source: &PropertyCatalog, target: &PropertyCatalog) -> ResolutionStrategy {
        if target.is_annotated() {
            ResolutionStrategy::TargetDriven
        } else if source.is_annotated() {
            ResolutionStrategy::SourceDriven
        } else {
            ResolutionStrategy::Convention
        }
    }

    pub fn resolve(
        &self,
        source: &PropertyCatalog,
        target: &PropertyCatalog,
    ) -> MapResult<MappingPlan> {
        let strategy = Self::strategy(source, target);
        let mut plan = MappingPlan::new(source.type_name(), target.type_name(), strategy);

        match strategy {
            ResolutionStrategy::Convention => resolve_by_convention(source, target, &mut plan),
            ResolutionStrategy::TargetDriven => {
                self.resolve_target_driven(source, target, &mut plan)?
            }
            ResolutionStrategy::SourceDriven => {
                self.resolve_source_driven(source, target, &mut plan)?
            }
        }

        debug!(
            source = plan.source_type,
            target = plan.target_type,
            strategy = %plan.strategy,
            resolutions = plan.len(),
            "Built mapping plan"
        );
        Ok(plan)
    }

    fn resolve_target_driven(
        &self,
        source: &PropertyCatalog,
        target: &PropertyCatalog,
        plan: &mut MappingPlan,
    ) -> MapResult<()> {
        for property in target.iter() {
            let resolution = match &property.annotation {
                None => source.get(&property.name).map(|_| PropertyResolution::DirectCopy {
                    source: property.name.clone(),
                    target: slot(property),
                }),
                Some(annotation) if annotation.ignored => Some(PropertyResolution::Skip {
                    property: property.name.clone(),
                }),
                Some(annotation) => self
                    .target_resolution(property, annotation, source)
                    .map_err(|e| MapError::mapping(&property.name, e))?,
            };
            push(plan, resolution);
        }
        Ok(())
    }

    fn target_resolution(
        &self,
        property: &PropertyDescriptor,
        annotation: &MappingAnnotation,
        source: &PropertyCatalog,
    ) -> MapResult<Option<PropertyResolution>> {
        let names: Vec<String> = if annotation.aliases.is_empty() {
            vec![property.name.clone()]
        } else {
            annotation.aliases.clone()
        };

        let mut source_types = Vec::with_capacity(names.len());
        for name in &names {
            match source.get(name) {
                Some(found) => source_types.push(found.declared_type.clone()),
                None => {
                    warn!(
                        property = %property.name,
                        alias = %name,
                        source = source.type_name(),
                        "Alias not found on source type; property left at its default"
                    );
                    return Ok(None);
                }
            }
        }

        let target = slot(property);
        let converter = self.converter_for(annotation)?;

        if names.len() == 1 {
            let source = names.into_iter().next().unwrap_or_default();
            return Ok(Some(match converter {
                None => PropertyResolution::DirectCopy { source, target },
                Some(converter) => {
                    let direction = ConverterInvoker::infer_direction(
                        &converter.descriptor(),
                        &source_types[0],
                        Some(&target.value_type),
                    )?;
                    PropertyResolution::ConvertedSingle {
                        source,
                        target,
                        converter: BoundConverter::new(converter, direction),
                    }
                }
            }));
        }

        let converter = converter
            .map(|c| bind_aggregate_input(c, &source_types, &target.value_type))
            .transpose()?;
        Ok(Some(PropertyResolution::AggregateToOne {
            sources: names,
            target,
            converter,
        }))
    }

    fn resolve_source_driven(
        &self,
        source: &PropertyCatalog,
        target: &PropertyCatalog,
        plan: &mut MappingPlan,
    ) -> MapResult<()> {
        for property in source.iter() {
            let resolution = match &property.annotation {
                None => target
                    .get(&property.name)
                    .map(|found| PropertyResolution::DirectCopy {
                        source: property.name.clone(),
                        target: slot(found),
                    }),
                Some(annotation) if annotation.ignored => Some(PropertyResolution::Skip {
                    property: property.name.clone(),
                }),
                Some(annotation) => self
                    .source_resolution(property, annotation, target)
                    .map_err(|e| MapError::mapping(&property.name, e))?,
            };
            push(plan, resolution);
        }
        Ok(())
    }

    fn source_resolution(
        &self,
        property: &PropertyDescriptor,
        annotation: &MappingAnnotation,
        target: &PropertyCatalog,
    ) -> MapResult<Option<PropertyResolution>> {
        let converter = self.converter_for(annotation)?;

        if annotation.aliases.len() > 1 {
            let targets = annotation
                .aliases
                .iter()
                .map(|name| {
                    target
                        .get(name)
                        .map(slot)
                        .ok_or_else(|| MapError::UnresolvedTargetProperty {
                            property: name.clone(),
                            target_type: target.type_name().to_string(),
                        })
                })
                .collect::<MapResult<Vec<_>>>()?;

            let converter = match converter {
                None => None,
                Some(converter) => {
                    let direction = ConverterInvoker::infer_direction(
                        &converter.descriptor(),
                        &property.declared_type,
                        None,
                    )?;
                    Some(BoundConverter::new(converter, direction))
                }
            };
            return Ok(Some(PropertyResolution::OneToAggregate {
                source: property.name.clone(),
                targets,
                converter,
            }));
        }

        let name = annotation.aliases.first().unwrap_or(&property.name);
        let Some(found) = target.get(name) else {
            warn!(
                property = %property.name,
                alias = %name,
                target = target.type_name(),
                "Alias not found on target type; property not mapped"
            );
            return Ok(None);
        };

        let target = slot(found);
        let source = property.name.clone();
        Ok(Some(match converter {
            None => PropertyResolution::DirectCopy { source, target },
            Some(converter) => {
                let direction = ConverterInvoker::infer_direction(
                    &converter.descriptor(),
                    &property.declared_type,
                    Some(&target.value_type),
                )?;
                PropertyResolution::ConvertedSingle {
                    source,
                    target,
                    converter: BoundConverter::new(converter, direction),
                }
            }
        }))
    }

    fn converter_for(
        &self,
        annotation: &MappingAnnotation,
    ) -> MapResult<Option<Arc<dyn ValueConverter>>> {
        match &annotation.converter {
            None => Ok(None),
            Some(ConverterRef::Instance(converter)) => Ok(Some(Arc::clone(converter))),
            Some(ConverterRef::Named(name)) => self
                .lookup
                .lookup(name)
                .map(Some)
                .ok_or_else(|| MapError::ConverterContractMissing {
                    converter: name.clone(),
                }),
        }
    }
}

fn resolve_by_convention(source: &PropertyCatalog, target: &PropertyCatalog, plan: &mut MappingPlan) {
    for property in target.iter() {
        if source.contains(&property.name) {
            push(
                plan,
                Some(PropertyResolution::DirectCopy {
                    source: property.name.clone(),
                    target: slot(property),
                }),
            );
        }
    }
}

fn push(plan: &mut MappingPlan, resolution: Option<PropertyResolution>) {
    if let Some(resolution) = resolution {
        trace!(resolution = %resolution, "Resolved property");
        plan.push(resolution);
    }
}

fn slot(property: &PropertyDescriptor) -> TargetSlot {
    TargetSlot::new(property.name.clone(), property.declared_type.clone())
}

/// Bind a converter fed by several source values.
///
/// The composed input shape depends on which declared type consumes it, so
/// forward is tried with the source-shaped composition and backward with the
/// target-shaped one.
fn bind_aggregate_input(
    converter: Arc<dyn ValueConverter>,
    element_types: &[ValueType],
    destination: &ValueType,
) -> MapResult<BoundConverter> {
    let descriptor = converter.descriptor();

    let forward_input = composed_type(&descriptor.source_type, element_types);
    if descriptor.source_type.accepts(&forward_input) && destination.accepts(&descriptor.target_type)
    {
        return Ok(BoundConverter::new(converter, Direction::Forward));
    }

    let backward_input = composed_type(&descriptor.target_type, element_types);
    let backward_fits = descriptor.target_type.accepts(&backward_input)
        && destination.accepts(&descriptor.source_type);
    if backward_fits {
        if !descriptor.capability.supports_backward() {
            return Err(MapError::OneWayConverter {
                converter: descriptor.name,
            });
        }
        return Ok(BoundConverter::new(converter, Direction::Backward));
    }

    for declared in [&descriptor.source_type, &descriptor.target_type] {
        if let Some(expected) = declared.tuple_arity() {
            if expected != element_types.len() {
                return Err(MapError::ArityMismatch {
                    expected,
                    actual: element_types.len(),
                });
            }
        }
    }

    Err(MapError::ConverterMismatch {
        converter: descriptor.name.clone(),
        declared_source: descriptor.source_type.clone(),
        declared_target: descriptor.target_type.clone(),
        actual: format!("{} into {}", forward_input, destination),
    })
}
