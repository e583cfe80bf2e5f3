//! Particle kinds and per-frame particle motion

use crate::SimParams;
use glam::Vec2;
use rand::Rng;

/// RGB color, straight (non-premultiplied).
pub type Color = [u8; 3];

/// Closed set of particle kinds.
///
/// Each kind has a total mapping to a palette color and a size
/// multiplier, so adding a kind forces both mappings to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Electron,
    Photon,
    Muon,
    Neutrino,
}

/// All kinds, for uniform sampling.
pub const PARTICLE_KINDS: [ParticleKind; 4] = [
    ParticleKind::Electron,
    ParticleKind::Photon,
    ParticleKind::Muon,
    ParticleKind::Neutrino,
];

impl ParticleKind {
    /// Palette color for this kind.
    pub fn color(self) -> Color {
        match self {
            ParticleKind::Electron => [0x64, 0xff, 0xda],
            ParticleKind::Photon => [0xff, 0xd1, 0x66],
            ParticleKind::Muon => [0xbb, 0x86, 0xfc],
            ParticleKind::Neutrino => [0xff, 0x6b, 0x6b],
        }
    }

    /// Multiplier applied to the sampled base size.
    pub fn size_scale(self) -> f32 {
        match self {
            ParticleKind::Photon => 1.5,
            ParticleKind::Neutrino => 0.5,
            ParticleKind::Electron | ParticleKind::Muon => 1.0,
        }
    }

    /// Uniform random kind.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        PARTICLE_KINDS[rng.random_range(0..PARTICLE_KINDS.len())]
    }
}

/// A single drifting particle with a decaying lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in surface space, wrapped into [0, width) x [0, height).
    pub pos: Vec2,
    pub vel: Vec2,
    /// Render radius, already scaled by the kind multiplier.
    pub size: f32,
    pub kind: ParticleKind,
    /// Starts at 1.0; may go negative before the pool respawns the slot.
    pub life: f32,
    /// Fixed per-frame life decrement, randomized at spawn.
    pub decay: f32,
}

impl Particle {
    /// Create a particle at `pos` with randomized velocity, size and decay.
    pub fn spawn<R: Rng>(rng: &mut R, pos: Vec2, kind: ParticleKind, params: &SimParams) -> Self {
        let vel = if params.max_speed > 0.0 {
            Vec2::new(
                rng.random_range(-params.max_speed..params.max_speed),
                rng.random_range(-params.max_speed..params.max_speed),
            )
        } else {
            Vec2::ZERO
        };
        Self {
            pos,
            vel,
            size: sample_range(rng, params.min_size, params.max_size) * kind.size_scale(),
            kind,
            life: 1.0,
            decay: sample_range(rng, params.min_decay, params.max_decay),
        }
    }

    /// One frame of motion: drift plus jitter, lifetime decay, toroidal
    /// wrap against the current bounds, then velocity damping.
    pub fn step<R: Rng>(&mut self, rng: &mut R, bounds: Vec2, params: &SimParams) {
        let mut delta = self.vel;
        if params.jitter > 0.0 {
            delta.x += rng.random_range(-params.jitter..params.jitter);
            delta.y += rng.random_range(-params.jitter..params.jitter);
        }
        self.pos += delta;
        self.life -= self.decay;

        self.pos.x = wrap(self.pos.x, bounds.x);
        self.pos.y = wrap(self.pos.y, bounds.y);
        debug_assert!(self.pos.x.is_finite() && self.pos.y.is_finite());

        self.vel *= params.damping;
    }

    /// True once the owning pool should respawn this slot.
    pub fn expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Wrap a coordinate toroidally into [0, extent).
fn wrap(v: f32, extent: f32) -> f32 {
    if (0.0..extent).contains(&v) {
        return v;
    }
    let wrapped = v.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negatives.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Uniform sample from [min, max), degenerating to `min` when the range
/// is empty (used by tests that pin a value by setting min == max).
pub(crate) fn sample_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_stays_in_half_open_interval() {
        assert_eq!(wrap(5.0, 10.0), 5.0);
        assert_eq!(wrap(-0.5, 10.0), 9.5);
        assert_eq!(wrap(10.5, 10.0), 0.5);
        // The upper edge maps to the lower one, keeping [0, extent).
        assert_eq!(wrap(10.0, 10.0), 0.0);
    }

    #[test]
    fn step_keeps_position_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = SimParams::default();
        let bounds = Vec2::new(320.0, 200.0);
        let mut p = Particle::spawn(&mut rng, Vec2::new(1.0, 199.0), ParticleKind::Muon, &params);
        // Aim it at the corner so it has to wrap repeatedly.
        p.vel = Vec2::new(-3.0, 4.0);
        for _ in 0..500 {
            p.step(&mut rng, bounds, &params);
            assert!((0.0..bounds.x).contains(&p.pos.x), "x = {}", p.pos.x);
            assert!((0.0..bounds.y).contains(&p.pos.y), "y = {}", p.pos.y);
        }
    }

    #[test]
    fn life_decreases_by_exactly_decay() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = SimParams {
            jitter: 0.0,
            ..SimParams::default()
        };
        let mut p = Particle::spawn(&mut rng, Vec2::splat(50.0), ParticleKind::Electron, &params);
        let decay = p.decay;
        let before = p.life;
        p.step(&mut rng, Vec2::splat(100.0), &params);
        assert_eq!(p.life, before - decay);
        p.step(&mut rng, Vec2::splat(100.0), &params);
        assert_eq!(p.life, before - decay - decay);
    }

    #[test]
    fn kind_mappings_are_total() {
        for kind in PARTICLE_KINDS {
            assert!(kind.size_scale() > 0.0);
            // Every kind has a non-black palette entry.
            assert_ne!(kind.color(), [0, 0, 0]);
        }
    }

    #[test]
    fn photon_and_neutrino_scale_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = SimParams {
            min_size: 2.0,
            max_size: 2.0,
            ..SimParams::default()
        };
        let photon = Particle::spawn(&mut rng, Vec2::ZERO, ParticleKind::Photon, &params);
        let neutrino = Particle::spawn(&mut rng, Vec2::ZERO, ParticleKind::Neutrino, &params);
        assert_eq!(photon.size, 3.0);
        assert_eq!(neutrino.size, 1.0);
    }
}
