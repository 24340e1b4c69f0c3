//! Configuration and dependency wiring for the gateway.

mod dependencies;

pub use dependencies::Dependencies;
