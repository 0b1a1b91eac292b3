//! Mapping plan entity
//!
//! The compiled, ordered list of per-property resolutions for one
//! (source type, target type) pair. Plans hold no data instances and are
//! shared read-only across threads once built.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{ConverterDescriptor, ValueConverter};
use crate::domain::value_objects::ValueType;

/// Which converter method a resolution calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `convert_to`: declared source type -> declared target type
    Forward,
    /// `convert_from`: declared target type -> declared source type
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Which metadata set drove plan construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStrategy {
    /// Same-name matching, no annotations on either side
    Convention,
    /// Target annotations drive resolution (wins when both sides are annotated)
    TargetDriven,
    /// Source annotations drive resolution
    SourceDriven,
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStrategy::Convention => write!(f, "convention"),
            ResolutionStrategy::TargetDriven => write!(f, "target-driven"),
            ResolutionStrategy::SourceDriven => write!(f, "source-driven"),
        }
    }
}

/// A target property together with its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSlot {
    pub name: String,
    pub value_type: ValueType,
}

impl TargetSlot {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// A converter with its invocation direction fixed at plan build time
#[derive(Clone)]
pub struct BoundConverter {
    pub converter: Arc<dyn ValueConverter>,
    pub descriptor: ConverterDescriptor,
    pub direction: Direction,
}

impl BoundConverter {
    pub fn new(converter: Arc<dyn ValueConverter>, direction: Direction) -> Self {
        let descriptor = converter.descriptor();
        Self {
            converter,
            descriptor,
            direction,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Declared type the converter consumes in this direction
    pub fn input_type(&self) -> &ValueType {
        match self.direction {
            Direction::Forward => &self.descriptor.source_type,
            Direction::Backward => &self.descriptor.target_type,
        }
    }
}

impl PartialEq for BoundConverter {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor && self.direction == other.direction
    }
}

impl fmt::Debug for BoundConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundConverter")
            .field("name", &self.descriptor.name)
            .field("direction", &self.direction)
            .finish()
    }
}

/// How one property (or property group) is populated
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyResolution {
    DirectCopy {
        source: String,
        target: TargetSlot,
    },
    ConvertedSingle {
        source: String,
        target: TargetSlot,
        converter: BoundConverter,
    },
    /// N source values are combined into one converter input
    AggregateToOne {
        sources: Vec<String>,
        target: TargetSlot,
        converter: Option<BoundConverter>,
    },
    /// One converter output is decomposed across N targets in listed order
    OneToAggregate {
        source: String,
        targets: Vec<TargetSlot>,
        converter: Option<BoundConverter>,
    },
    /// Annotated ignore
    Skip { property: String },
}

impl PropertyResolution {
    /// Property named in errors raised by this resolution
    pub fn property(&self) -> &str {
        match self {
            PropertyResolution::DirectCopy { target, .. }
            | PropertyResolution::ConvertedSingle { target, .. }
            | PropertyResolution::AggregateToOne { target, .. } => &target.name,
            PropertyResolution::OneToAggregate { source, .. } => source,
            PropertyResolution::Skip { property } => property,
        }
    }

    pub fn converter(&self) -> Option<&BoundConverter> {
        match self {
            PropertyResolution::ConvertedSingle { converter, .. } => Some(converter),
            PropertyResolution::AggregateToOne { converter, .. }
            | PropertyResolution::OneToAggregate { converter, .. } => converter.as_ref(),
            _ => None,
        }
    }
}

fn write_via(f: &mut fmt::Formatter<'_>, converter: Option<&BoundConverter>) -> fmt::Result {
    match converter {
        Some(c) => write!(f, " via {} ({})", c.name(), c.direction),
        None => Ok(()),
    }
}

impl fmt::Display for PropertyResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyResolution::DirectCopy { source, target } => {
                write!(f, "{} <- {}", target.name, source)
            }
            PropertyResolution::ConvertedSingle {
                source,
                target,
                converter,
            } => {
                write!(f, "{} <- {}", target.name, source)?;
                write_via(f, Some(converter))
            }
            PropertyResolution::AggregateToOne {
                sources,
                target,
                converter,
            } => {
                write!(f, "{} <- [{}]", target.name, sources.join(", "))?;
                write_via(f, converter.as_ref())
            }
            PropertyResolution::OneToAggregate {
                source,
                targets,
                converter,
            } => {
                let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
                write!(f, "[{}] <- {}", names.join(", "), source)?;
                write_via(f, converter.as_ref())
            }
            PropertyResolution::Skip { property } => write!(f, "{}: ignored", property),
        }
    }
}

/// Compiled mapping plan for one ordered type pair
#[derive(Debug, Clone, PartialEq)]
pub struct MappingPlan {
    pub source_type: &'static str,
    pub target_type: &'static str,
    pub strategy: ResolutionStrategy,
    pub resolutions: Vec<PropertyResolution>,
}

impl MappingPlan {
    pub fn new(
        source_type: &'static str,
        target_type: &'static str,
        strategy: ResolutionStrategy,
    ) -> Self {
        Self {
            source_type,
            target_type,
            strategy,
            resolutions: Vec::new(),
        }
    }

    pub fn push(&mut self, resolution: PropertyResolution) {
        self.resolutions.push(resolution);
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
}

impl fmt::Display for MappingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source_type, self.target_type, self.strategy
        )?;
        for resolution in &self.resolutions {
            write!(f, "\n  {}", resolution)?;
        }
        Ok(())
    }
}
