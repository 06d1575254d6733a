//! Events for Oracle Accountability subsystem

pub mod outgoing;

pub use outgoing::*;
