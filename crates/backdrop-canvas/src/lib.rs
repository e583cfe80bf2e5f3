//! # Backdrop Canvas
//!
//! Retained CPU raster surface with canvas-style paint operations, plus
//! the frame painter that renders a simulation frame in the mandated
//! order (fade fill, bonds, particles).

pub mod canvas;
pub mod frame;

pub use canvas::*;
pub use frame::*;
