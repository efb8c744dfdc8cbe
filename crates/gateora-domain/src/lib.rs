//! Pure risk evaluation (no IO).
//!
//! Input: a transaction intent and a policy, both constructed elsewhere.
//! Output: score + verdict + reason trail + top signal + summary.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod format;
pub mod model;
pub mod policy;
pub mod signals;
pub mod summary;
pub mod verdict;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
