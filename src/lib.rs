//! Text formatting helpers for media player front ends: track durations,
//! readable byte sizes, and list merging for refreshed metadata.

pub mod config;
pub mod duration;
pub mod merge;
pub mod size;
