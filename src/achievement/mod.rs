//! Achievement evaluation against the fixed catalog

mod checker;


pub use checker::*;
