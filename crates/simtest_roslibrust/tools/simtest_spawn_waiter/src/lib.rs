//! simtest_spawn_waiter
//!
//! Generated simulator message types, their binding to `simtest_core`, and the
//! command line configuration of the `simtest_spawn_waiter` binary.

include!(concat!(env!("OUT_DIR"), "/messages.rs"));

pub mod config;
pub mod interfaces;
