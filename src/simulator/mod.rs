//! Simulation engine module

mod engine;
mod score;
mod session;

#[cfg(test)]
mod property_tests;

pub use engine::*;
pub use score::*;
pub use session::*;
