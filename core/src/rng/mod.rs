//! SuperKISS64 random number generation
//!
//! Lag-table engine, combiner primitives, seeding strategies and output
//! conversions.
//! CRITICAL: Output must stay bit-compatible with the reference vectors in
//! [`reference`].

mod combiners;
mod engine;
pub mod reference;
mod seeding;
mod source;

pub use engine::{SuperKiss64, QSIZE};
pub use reference::VerifyError;
pub use source::RandomSource;
