//! # Domain Models
//!
//! Core data structures shared by the calculator, the collector and the CLI.
//!
//! ## Core Entities
//! * [`journey::Journey`]: one caravan crossing one linear chain of tolls.
//!
//! ## Value Objects
//! * [`elapsed::ElapsedTime`]: a whole number of seconds with its display policy.
//!
//! ## Design Principles
//! * **Rich Models**: constructors validate, so a built value is always usable.
//! * **Immutability**: nothing is mutated after construction.

pub mod elapsed;
pub mod journey;
