//! Star Collector — a fixed-timestep arcade game for the terminal.
//!
//! Core modules:
//! - `compute`: the per-tick simulation (pure logic, seeded RNG)
//! - `entities`: entity types and the scene state that owns them
//!
//! Rendering and input live in the binary (`display` + `main`); the
//! library never touches the terminal.

pub mod compute;
pub mod entities;
