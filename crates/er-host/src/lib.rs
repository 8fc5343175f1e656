//! Host layer: configuration, tracing, dependency wiring and the scripted runner.

pub mod adapters;
pub mod bootstrap;
