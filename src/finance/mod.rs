//! Financial system: monthly books, burn rate and runway

mod ledger;

pub use ledger::*;
