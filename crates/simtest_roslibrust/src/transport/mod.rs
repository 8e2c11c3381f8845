//! Transport adapters.

pub mod roslibrust;
