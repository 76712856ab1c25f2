// extensions/mod.rs
//
// Optional modules decoupled from the simulation core — drivers opt in.

pub mod easing;

pub use easing::{ease, ease_dvec3, lerp, Easing};
