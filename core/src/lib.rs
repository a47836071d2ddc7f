//! The caravan calculation and the console session around it.
//!
//! * [`collector`] asks the operator for a [`Journey`](caravan_common::models::journey::Journey).
//! * [`delay`] turns the journey into a total time.
//! * [`report`] renders the inputs and the total.
//! * [`session`] ties the three together over any reader/writer pair.
//!
//! Nothing in here touches stdin or stdout directly; the binary passes
//! them in, tests pass in-memory buffers.

pub mod collector;
pub mod delay;
pub mod error;
pub mod report;
pub mod session;

pub use error::SessionError;
pub use session::{Outcome, run_session};
