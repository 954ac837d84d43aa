//! Employee system: morale, productivity and turnover

mod morale;
mod turnover;


pub use morale::*;
pub use turnover::*;
