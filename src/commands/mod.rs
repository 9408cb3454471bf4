//! Backend Command Wrappers
//!
//! Frontend bindings to the remote task service.

mod tasks;

pub use tasks::*;
