//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the owning
//! application.
//!
//! # Tasks
//! - Cache sweeper: removes expired entries at a configured interval

mod cleanup;

pub use cleanup::{start_sweeper, SweeperHandle};
