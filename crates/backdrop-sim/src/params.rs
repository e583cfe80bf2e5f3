//! Field parameters for runtime tuning
//!
//! Every tunable of the simulation lives here so hosts and tests can
//! override individual values; defaults reproduce the reference look.

#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    // Pool sizes
    /// Fixed number of particles in the pool.
    pub particle_count: usize,
    /// Maximum number of live bonds at any time.
    pub bond_cap: usize,

    // Particle creation
    /// Each velocity component is uniform in [-max_speed, max_speed).
    pub max_speed: f32,
    /// Base size range before the kind multiplier, uniform in [min, max).
    pub min_size: f32,
    pub max_size: f32,
    /// Per-particle lifetime decay, uniform in [min, max), fixed after spawn.
    pub min_decay: f32,
    pub max_decay: f32,

    // Particle integration
    /// Per-axis positional jitter added each frame, uniform in [-jitter, jitter).
    /// Zero disables the jitter draw entirely.
    pub jitter: f32,
    /// Multiplicative velocity damping applied each frame.
    pub damping: f32,

    // Bonds
    /// Per-frame chance of attempting to spawn one bond.
    pub bond_spawn_chance: f32,
    /// Maximum endpoint distance for a bond to form.
    pub bond_distance: f32,
    /// Bond strength, uniform in [min, max).
    pub min_strength: f32,
    pub max_strength: f32,
    /// Fixed lifetime decay shared by all bonds.
    pub bond_decay: f32,
    /// Scale on the inverse-square attraction impulse.
    pub force_scale: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            particle_count: 60,
            bond_cap: 12,

            max_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            min_decay: 0.002,
            max_decay: 0.006,

            jitter: 0.05,
            damping: 0.99,

            bond_spawn_chance: 0.08,
            bond_distance: 220.0,
            min_strength: 0.2,
            max_strength: 0.7,
            bond_decay: 0.01,
            force_scale: 0.001,
        }
    }
}
