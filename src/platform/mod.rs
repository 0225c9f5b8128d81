//! Platform abstraction layer
//!
//! Handles the outside world the simulation is driven by:
//! - Input events (`input`)
//! - Fixed-rate frame pacing (`time`)

pub mod input;
pub mod time;

pub use input::InputSource;
pub use time::FrameClock;
