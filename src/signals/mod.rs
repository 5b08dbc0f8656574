//! Signal building blocks.
//!
//! This module provides the basic abstractions shared by the rest of the
//! library:
//! - `TimeVector` for evenly spaced timestamps
//! - `Signal` trait for streaming sample sources

mod core;
mod time;

pub use core::Signal;
pub use time::TimeVector;
