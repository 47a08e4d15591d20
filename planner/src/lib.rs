//! Shrdlite Planner: from parsed utterances to actuator plans.
//!
//! The pipeline is a three-stage fold over one user utterance:
//!
//! ```text
//! Command  ──►  interpret  ──►  DnfFormula  ──►  astar  ──►  render
//!               (resolver +                     (PlannerSpace:
//!                goal compiler)                  moves, goal, heuristic)
//! ```
//!
//! # Module dependency direction
//!
//! `parse` ← `formula` ← `interpret` / `heuristic` ← `space` ←
//! `describe`/`render` ← `pipeline`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]

pub mod describe;
pub mod formula;
pub mod heuristic;
pub mod interpret;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod space;
