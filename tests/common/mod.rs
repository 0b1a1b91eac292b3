//! Common test utilities for dtomap contract and scenario tests.
//!
//! This module provides:
//! - Fixtures: host models, DTOs and demo converters
//! - `mapper()`: a `Mapper` with every demo converter registered

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
