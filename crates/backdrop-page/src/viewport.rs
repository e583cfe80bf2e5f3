//! Viewport binding: tracks the window's inner size

/// Last known viewport dimensions in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Record a resize. Returns true only when the size actually
    /// changed, so callers can skip surface reallocation otherwise.
    pub fn set(&mut self, width: u32, height: u32) -> bool {
        let next = Self::new(width, height);
        if next == *self {
            return false;
        }
        log::debug!(
            "viewport {}x{} -> {}x{}",
            self.width,
            self.height,
            next.width,
            next.height
        );
        *self = next;
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
