//! # Backdrop Page Effects
//!
//! Host-agnostic page-effect state: viewport binding, scroll-driven
//! parallax offsets, and one-way visibility reveals. Independent of the
//! particle loop; the host feeds scroll offsets and visibility ratios.

pub mod parallax;
pub mod reveal;
pub mod viewport;

pub use parallax::*;
pub use reveal::*;
pub use viewport::*;
