//! Company data model
//!
//! The `Company` aggregate and the records it owns. Everything here is plain
//! serde data; the monthly rules live in the system modules. The
//! employee/project relation is changed only through [`assignment`].

pub mod assignment;
mod employee;
mod event;
mod project;
mod state;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
pub(crate) mod test_support;

pub use employee::*;
pub use event::*;
pub use project::*;
pub use state::*;
