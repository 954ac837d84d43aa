//! Culture system

mod drift;

pub use drift::*;
