//! Domain Services
//!
//! Pure mapping logic that operates on descriptors and values.
//! These services have no I/O dependencies and are easily testable.

pub mod aggregate;
mod catalog;
mod coercion;
mod converter_invoker;
mod plan_resolver;

pub use aggregate::{compose, composed_type, decompose};
pub use catalog::{Access, PropertyCatalog};
pub use coercion::ValueCoercer;
pub use converter_invoker::ConverterInvoker;
pub use plan_resolver::PlanResolver;
