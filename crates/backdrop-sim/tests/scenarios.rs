//! End-to-end field scenarios exercising several frames at a time.

use backdrop_sim::{Field, SimParams};
use glam::Vec2;

#[test]
fn motionless_particles_stay_put_while_life_runs_down() {
    // Zero velocity and zero jitter: 1000 frames must not move anything,
    // and each particle's life must follow its own fixed decay exactly.
    let params = SimParams {
        max_speed: 0.0,
        jitter: 0.0,
        // Slow decay so nothing expires within the window.
        min_decay: 0.0005,
        max_decay: 0.0005,
        bond_spawn_chance: 0.0,
        ..SimParams::default()
    };
    let mut field = Field::with_seed(800.0, 600.0, params, 1234);
    assert_eq!(field.particles.len(), 60);

    let start: Vec<(Vec2, f32)> = field.particles.iter().map(|p| (p.pos, p.decay)).collect();

    field.advance_frames(1000);

    for (p, (pos, decay)) in field.particles.iter().zip(&start) {
        assert_eq!(p.pos, *pos, "motionless particle drifted");
        // Accumulated float error over 1000 subtractions stays tiny.
        let expected = 1.0 - 1000.0 * decay;
        assert!(
            (p.life - expected).abs() < 1e-3,
            "life {} vs expected {}",
            p.life,
            expected
        );
    }
}

#[test]
fn every_position_stays_inside_bounds_over_a_long_run() {
    let mut field = Field::with_seed(800.0, 600.0, SimParams::default(), 99);
    for _ in 0..1000 {
        field.step();
        for p in &field.particles {
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!((0.0..600.0).contains(&p.pos.y));
        }
    }
}

#[test]
fn bonds_make_their_endpoints_approach_each_other() {
    let params = SimParams {
        // Quiet background so the bond impulse is the only velocity source.
        max_speed: 0.0,
        jitter: 0.0,
        min_decay: 0.0001,
        max_decay: 0.0001,
        bond_spawn_chance: 1.0,
        bond_distance: f32::INFINITY,
        bond_cap: 1,
        ..SimParams::default()
    };
    let mut field = Field::with_seed(800.0, 600.0, params, 7);
    // A spawn attempt can sample the same slot twice; retry until one lands.
    while field.bonds.is_empty() {
        field.step();
    }

    // The next step applies the first impulse; the relative velocity
    // must point inward along the separation (mutual attraction).
    field.step();
    let bond = field.bonds[0];
    let (a, b) = (&field.particles[bond.a], &field.particles[bond.b]);
    let separation = b.pos - a.pos;
    let closing = (b.vel - a.vel).dot(separation);
    assert!(closing < 0.0, "endpoints are not approaching: {closing}");
}

#[test]
fn resize_mid_run_keeps_the_simulation_consistent() {
    let mut field = Field::with_seed(1280.0, 720.0, SimParams::default(), 55);
    field.advance_frames(100);

    field.set_bounds(640.0, 360.0);
    field.advance_frames(1);

    for p in &field.particles {
        assert!((0.0..640.0).contains(&p.pos.x));
        assert!((0.0..360.0).contains(&p.pos.y));
    }

    // Growing the bounds back must not strand anyone either.
    field.set_bounds(1280.0, 720.0);
    field.advance_frames(1);
    for p in &field.particles {
        assert!((0.0..1280.0).contains(&p.pos.x));
        assert!((0.0..720.0).contains(&p.pos.y));
    }
}
