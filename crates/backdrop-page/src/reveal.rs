//! One-way visibility reveals
//!
//! Mirrors an intersection observer: once a tracked element's visible
//! ratio crosses the threshold it is revealed for good; later
//! observations never undo it.

/// Reveal state for a fixed set of tracked elements.
#[derive(Debug, Clone)]
pub struct RevealSet {
    threshold: f32,
    revealed: Vec<bool>,
}

impl RevealSet {
    pub const DEFAULT_THRESHOLD: f32 = 0.2;

    pub fn new(count: usize) -> Self {
        Self::with_threshold(count, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(count: usize, threshold: f32) -> Self {
        Self {
            threshold,
            revealed: vec![false; count],
        }
    }

    /// Feed one visibility observation. Returns the element's reveal
    /// state after the observation.
    pub fn observe(&mut self, index: usize, visible_ratio: f32) -> bool {
        if visible_ratio >= self.threshold && !self.revealed[index] {
            log::debug!("element {index} revealed at ratio {visible_ratio:.2}");
            self.revealed[index] = true;
        }
        self.revealed[index]
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed[index]
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
