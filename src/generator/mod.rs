//! Random generation of employees and projects
//!
//! All randomness comes from the caller's RNG, so a seeded engine produces
//! the same candidates and projects on every run.

mod employee;
pub mod names;
mod project;

#[cfg(test)]
mod property_tests;

pub use employee::*;
pub use project::*;

use rand::Rng;

/// Random 128-bit id rendered as a version-4 UUID string
pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let raw: u128 = rng.gen();
    let v = (raw & !(0xFu128 << 76) & !(0x3u128 << 62)) | (0x4u128 << 76) | (0x2u128 << 62);
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (v >> 96) as u32,
        (v >> 80) as u16,
        (v >> 64) as u16,
        (v >> 48) as u16,
        v & 0xFFFF_FFFF_FFFF
    )
}
