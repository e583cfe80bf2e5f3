//! The particle field: both pools and the per-frame update pass

use crate::{Bond, BondKind, Particle, ParticleKind, SimParams};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the particle and bond pools and advances them one frame at a
/// time. All mutation happens inside [`Field::step`]; the host only
/// feeds bounds changes and reads the pools back for rendering.
pub struct Field {
    /// Fixed-length particle pool; expired slots are respawned in place.
    pub particles: Vec<Particle>,
    /// Live bonds, pruned each frame and capped at `params.bond_cap`.
    pub bonds: Vec<Bond>,
    pub params: SimParams,
    bounds: Vec2,
    rng: StdRng,
}

impl Field {
    /// Build a field with `params.particle_count` particles at uniform
    /// random positions and kinds within `width` x `height`.
    pub fn new(width: f32, height: f32, params: SimParams) -> Self {
        Self::with_rng(width, height, params, StdRng::from_os_rng())
    }

    /// Deterministic construction for tests and reproducible runs.
    pub fn with_seed(width: f32, height: f32, params: SimParams, seed: u64) -> Self {
        Self::with_rng(width, height, params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, params: SimParams, mut rng: StdRng) -> Self {
        let bounds = Vec2::new(width, height);
        let particles = (0..params.particle_count)
            .map(|_| spawn_anywhere(&mut rng, bounds, &params))
            .collect();
        log::info!(
            "initialized particle field: {} particles in {}x{}",
            params.particle_count,
            width,
            height
        );
        Self {
            particles,
            bonds: Vec::with_capacity(params.bond_cap),
            params,
            bounds,
            rng,
        }
    }

    /// Current wrap bounds.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Update the wrap bounds after a viewport resize. Idempotent for
    /// unchanged dimensions; existing particles are left where they are
    /// and re-wrap against the new bounds on the next step.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        let bounds = Vec2::new(width, height);
        if bounds != self.bounds {
            log::debug!("field bounds {}x{} -> {}x{}", self.bounds.x, self.bounds.y, width, height);
            self.bounds = bounds;
        }
    }

    /// Advance the field one frame, in strict order:
    /// 1. every live bond applies its impulse and decays,
    /// 2. every particle moves; expired slots respawn in place,
    /// 3. expired bonds are pruned,
    /// 4. at most one new bond may spawn.
    pub fn step(&mut self) {
        for bond in &mut self.bonds {
            bond.step(&mut self.particles, &self.params);
        }

        for i in 0..self.particles.len() {
            self.particles[i].step(&mut self.rng, self.bounds, &self.params);
            if self.particles[i].expired() {
                self.particles[i] = spawn_anywhere(&mut self.rng, self.bounds, &self.params);
            }
        }

        self.bonds.retain(|b| !b.expired());
        self.maybe_spawn_bond();
    }

    /// Run `n` frames back to back.
    pub fn advance_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// With probability `bond_spawn_chance`, and only below the cap,
    /// sample two independent slots and link them when they are distinct
    /// and closer than `bond_distance`.
    fn maybe_spawn_bond(&mut self) {
        if self.bonds.len() >= self.params.bond_cap {
            return;
        }
        if self.rng.random::<f32>() >= self.params.bond_spawn_chance {
            return;
        }

        let a = self.rng.random_range(0..self.particles.len());
        let b = self.rng.random_range(0..self.particles.len());
        if a == b {
            return;
        }
        let dist = self.particles[a].pos.distance(self.particles[b].pos);
        if dist >= self.params.bond_distance {
            return;
        }

        let kind = BondKind::sample(&mut self.rng);
        self.bonds.push(Bond::spawn(&mut self.rng, a, b, kind, &self.params));
    }
}

fn spawn_anywhere<R: Rng>(rng: &mut R, bounds: Vec2, params: &SimParams) -> Particle {
    let pos = Vec2::new(
        rng.random_range(0.0..bounds.x),
        rng.random_range(0.0..bounds.y),
    );
    let kind = ParticleKind::sample(rng);
    Particle::spawn(rng, pos, kind, params)
}
