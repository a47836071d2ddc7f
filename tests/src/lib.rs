//! End-to-end sessions driven through in-memory streams.

mod properties;
mod session;
mod util;
