//! Thin wrappers over the browser APIs the page consumes. Every wrapper
//! degrades quietly when its API is missing.

pub mod clock;
pub mod dom;
pub mod files;
pub mod listener;
pub mod media;
pub mod network;
pub mod share;
pub mod sound;
