//! Application Layer
//!
//! The mapping engine and the state it owns.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain resolution rules (those are in Domain)
//! - Owns the plan cache and the converter registry
//!
//! ## Components
//!
//! - `Mapper` - Looks up or builds plans and executes them
//! - `PlanCache` - Plans keyed by (source type, target type)
//! - `ConverterRegistry` - Named converters referenced by annotations

pub mod cache;
pub mod mapper;
pub mod registry;

pub use cache::{plan_key, PlanCache, PlanKey};
pub use mapper::Mapper;
pub use registry::ConverterRegistry;
