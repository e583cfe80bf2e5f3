//! Transient force-exerting bonds between particle pool slots

use crate::particle::{sample_range, Color, Particle};
use crate::SimParams;
use rand::Rng;

/// Closed set of bond kinds, each with a fixed stroke color and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondKind {
    Electromagnetic,
    Weak,
    Strong,
}

/// All kinds, for uniform sampling.
pub const BOND_KINDS: [BondKind; 3] = [
    BondKind::Electromagnetic,
    BondKind::Weak,
    BondKind::Strong,
];

impl BondKind {
    pub fn color(self) -> Color {
        match self {
            BondKind::Electromagnetic => [0xff, 0xd1, 0x66],
            BondKind::Weak => [0xff, 0x6b, 0x6b],
            BondKind::Strong => [0x06, 0xd6, 0xa0],
        }
    }

    /// Stroke width in pixels.
    pub fn width(self) -> f32 {
        match self {
            BondKind::Electromagnetic => 1.0,
            BondKind::Weak => 2.0,
            BondKind::Strong => 3.0,
        }
    }

    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        BOND_KINDS[rng.random_range(0..BOND_KINDS.len())]
    }
}

/// A decaying link between two particle pool slots.
///
/// Bonds address particles by slot index, not identity: when the pool
/// respawns an expired particle in place, a bond referencing that slot
/// simply acts on the new occupant for the rest of its own lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub kind: BondKind,
    /// Impulse scale, randomized at spawn.
    pub strength: f32,
    /// Starts at 1.0; the pool prunes the bond once it reaches zero.
    pub life: f32,
    pub decay: f32,
}

impl Bond {
    /// Create a bond between slots `a` and `b` with randomized strength.
    pub fn spawn<R: Rng>(rng: &mut R, a: usize, b: usize, kind: BondKind, params: &SimParams) -> Self {
        Self {
            a,
            b,
            kind,
            strength: sample_range(rng, params.min_strength, params.max_strength),
            life: 1.0,
            decay: params.bond_decay,
        }
    }

    /// Decay the bond and pull its endpoints together with a softened
    /// inverse-square impulse, equal and opposite on both particles.
    /// Coincident endpoints skip the force entirely; only the decay
    /// applies that frame.
    pub fn step(&mut self, particles: &mut [Particle], params: &SimParams) {
        self.life -= self.decay;

        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();
        if dist > 0.0 {
            let force = self.strength * params.force_scale / (dist * dist);
            let impulse = delta / dist * force;
            particles[self.a].vel += impulse;
            particles[self.b].vel -= impulse;
        }
    }

    /// True once the owning pool should prune this bond.
    pub fn expired(&self) -> bool {
        self.life <= 0.0
    }
}
