//! Systems that read or prune the world model.
//!
//! Systems are plain functions over `&World` or `&mut World`. They do not own
//! state; all state lives in components.

pub mod bounds;
pub mod cleanup;
