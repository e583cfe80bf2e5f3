//! # Backdrop Simulation
//!
//! Per-frame particle field for a decorative page background: drifting
//! particles with decaying lifetimes, transient force-exerting bonds
//! between them, and the pools that respawn and prune both.

pub mod bond;
pub mod field;
pub mod params;
pub mod particle;

pub use bond::*;
pub use field::*;
pub use params::*;
pub use particle::*;
