//! Shrdlite World: the deterministic carrier of the blocks world.
//!
//! This crate holds everything the planner layers above it agree on:
//! object taxonomy, the read-only world snapshot, the mutable-by-copy
//! search state, the physical feasibility table, the positional relation
//! extensor, the primitive arm moves with their cost model, and
//! domain-separated state fingerprinting.
//!
//! # Crate dependency graph
//!
//! ```text
//! shrdlite_world  ←  shrdlite_search  ←  shrdlite_planner
//! (pure carrier)     (frontier, A*)      (interpreter, renderer)
//! ```
//!
//! # Module dependency direction
//!
//! `objects` ← `snapshot`/`state` ← `relations`/`physics` ← `moves`
//!
//! One-way only. No cycles. `fingerprint` depends on `state` alone.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod moves;
pub mod objects;
pub mod physics;
pub mod relations;
pub mod snapshot;
pub mod state;
