//! Project system: progress, quality, milestones and completion

mod outcome;
mod progress;


pub use outcome::*;
pub use progress::*;
