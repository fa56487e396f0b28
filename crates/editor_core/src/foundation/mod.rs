//! Foundation utilities shared across the editor core
//!
//! Math types, color handling, and logging support. These carry no scene
//! state of their own.

pub mod color;
pub mod logging;
pub mod math;
