//! Scroll-proportional vertical offsets for layered elements

/// Depth-scaled parallax for a stack of decorative layers: layer `i`
/// (0-based) translates by `scroll_y * depth_step * (i + 1)`.
#[derive(Debug, Clone, Copy)]
pub struct ParallaxRack {
    layers: usize,
    depth_step: f32,
}

impl ParallaxRack {
    pub const DEFAULT_DEPTH_STEP: f32 = 0.1;

    pub fn new(layers: usize) -> Self {
        Self {
            layers,
            depth_step: Self::DEFAULT_DEPTH_STEP,
        }
    }

    pub fn with_depth_step(layers: usize, depth_step: f32) -> Self {
        Self { layers, depth_step }
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Vertical offset for one layer at the given scroll position.
    pub fn offset(&self, index: usize, scroll_y: f32) -> f32 {
        debug_assert!(index < self.layers);
        scroll_y * self.depth_step * (index + 1) as f32
    }

    /// Offsets for every layer, shallowest first.
    pub fn offsets(&self, scroll_y: f32) -> impl Iterator<Item = f32> + '_ {
        (0..self.layers).map(move |i| self.offset(i, scroll_y))
    }
}
