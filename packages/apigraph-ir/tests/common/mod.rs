//! Common test utilities for apigraph-ir
//!
//! Record builders, canned universes and graph assertions shared by the
//! integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
