//! Domain Layer
//!
//! The core of dtomap - plan resolution and value handling without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Descriptors, annotations and the compiled `MappingPlan`
//! - `value_objects/` - Runtime values and declared types (Value, ValueType, PropertyBag)
//! - `services/` - Domain services (PlanResolver, ValueCoercer, ConverterInvoker)
//! - `ports/` - Traits implemented by host types and converters
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Plans are data** - Every decision is made when a plan is built
//! 3. **Ports & Adapters** - Host types plug in through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
