//! Company Sim Core - turn-based company management simulation engine
//!
//! Advances a company one month at a time: morale and turnover, project
//! progress and payment, monthly books, narrative events, culture drift and
//! achievements. Player commands are separate operations on the same
//! [`company::Company`] aggregate. Python bindings are available behind the
//! `python` feature.

pub mod achievement;
pub mod company;
pub mod config;
pub mod culture;
pub mod employee;
pub mod error;
pub mod event;
pub mod finance;
pub mod generator;
pub mod project;
pub mod simulator;

#[cfg(feature = "python")]
mod python;

pub use company::Company;
pub use config::{EventDeck, GameConfig};
pub use error::{GameError, Result};
pub use simulator::{GameSession, MonthResult, SimulationEngine};
