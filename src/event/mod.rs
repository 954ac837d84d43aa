//! Event system: triggering from the catalog and applying player choices

mod processor;
pub mod selector;

#[cfg(test)]
mod property_tests;

pub use processor::*;
pub use selector::*;
