//! Frame painter: one simulation frame in the mandated order

use crate::Canvas;
use backdrop_sim::{Bond, Color, Field, Particle};
use glam::Vec2;

/// Fixed styling for the painted frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    /// Overlay color for the trail fade (also the clear color).
    pub background: Color,
    /// Opacity of the per-frame overlay fill; lower = longer trails.
    pub fade_alpha: f32,
    /// Particle core disk opacity at full life.
    pub core_alpha: f32,
    /// Glow disk opacity at full life.
    pub glow_alpha: f32,
    /// Glow disk radius as a multiple of the particle size.
    pub glow_scale: f32,
    /// Bond stroke opacity at full life.
    pub bond_alpha: f32,
    /// Angular frequency of the bond midpoint wiggle, in rad/s.
    pub wiggle_freq: f32,
    /// Wiggle amplitude in pixels, applied to both axes.
    pub wiggle_amp: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background: [15, 15, 25],
            fade_alpha: 0.15,
            core_alpha: 0.8,
            glow_alpha: 0.3,
            glow_scale: 3.0,
            bond_alpha: 0.6,
            wiggle_freq: 10.0,
            wiggle_amp: 5.0,
        }
    }
}

/// Paint one frame: translucent fade fill, then every live bond, then
/// every particle (core disk, then its glow on top).
///
/// `time` is wall-clock seconds and only drives the bond wiggle.
pub fn paint_frame(canvas: &mut Canvas, field: &Field, time: f32, style: &FrameStyle) {
    canvas.fill(style.background, style.fade_alpha);

    for bond in &field.bonds {
        draw_bond(canvas, bond, &field.particles, time, style);
    }
    for particle in &field.particles {
        draw_particle(canvas, particle, style);
    }
}

/// Core disk plus a larger, more transparent glow disk. A particle past
/// the end of its life paints nothing (alpha clamps to zero).
pub fn draw_particle(canvas: &mut Canvas, particle: &Particle, style: &FrameStyle) {
    let life = particle.life.clamp(0.0, 1.0);
    if life <= 0.0 {
        return;
    }
    let color = particle.kind.color();
    canvas.disk(particle.pos, particle.size, color, life * style.core_alpha);
    canvas.disk(
        particle.pos,
        particle.size * style.glow_scale,
        color,
        life * style.glow_alpha,
    );
}

/// Quadratic curve between the bond's endpoints, control point at the
/// midpoint plus a time-seeded sinusoidal offset. No-op once expired.
pub fn draw_bond(canvas: &mut Canvas, bond: &Bond, particles: &[Particle], time: f32, style: &FrameStyle) {
    if bond.life <= 0.0 {
        return;
    }
    let a = particles[bond.a].pos;
    let b = particles[bond.b].pos;
    let wiggle = (time * style.wiggle_freq).sin() * style.wiggle_amp;
    let ctrl = (a + b) / 2.0 + Vec2::splat(wiggle);

    canvas.stroke_quad(
        a,
        ctrl,
        b,
        bond.kind.width(),
        bond.kind.color(),
        (bond.life * style.bond_alpha).clamp(0.0, 1.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_sim::{BondKind, ParticleKind, SimParams};

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: 2.0,
            kind: ParticleKind::Electron,
            life: 1.0,
            decay: 0.003,
        }
    }

    #[test]
    fn expired_bond_paints_nothing() {
        let mut canvas = Canvas::new(64, 64, [0, 0, 0]);
        let particles = vec![particle_at(8.0, 32.0), particle_at(56.0, 32.0)];
        let bond = Bond {
            a: 0,
            b: 1,
            kind: BondKind::Strong,
            strength: 0.5,
            life: 0.0,
            decay: 0.01,
        };
        let before = canvas.as_rgba_bytes().to_vec();
        draw_bond(&mut canvas, &bond, &particles, 1.25, &FrameStyle::default());
        assert_eq!(canvas.as_rgba_bytes(), &before[..]);
    }

    #[test]
    fn dead_particle_paints_nothing() {
        let mut canvas = Canvas::new(32, 32, [0, 0, 0]);
        let mut particle = particle_at(16.0, 16.0);
        particle.life = -0.002;
        let before = canvas.as_rgba_bytes().to_vec();
        draw_particle(&mut canvas, &particle, &FrameStyle::default());
        assert_eq!(canvas.as_rgba_bytes(), &before[..]);
    }

    #[test]
    fn live_particle_leaves_a_glow_wider_than_the_core() {
        let mut canvas = Canvas::new(64, 64, [0, 0, 0]);
        let particle = particle_at(32.0, 32.0);
        draw_particle(&mut canvas, &particle, &FrameStyle::default());

        // Core region is bright, glow region dimmer but present.
        assert!(canvas.pixel(32, 32)[0] > 0);
        let glow = canvas.pixel(32 + 4, 32)[0];
        assert!(glow > 0, "glow ring missing");
        assert!(glow < canvas.pixel(32, 32)[0]);
        // Outside the glow radius: untouched.
        assert_eq!(canvas.pixel(32 + 12, 32)[0], 0);
    }

    #[test]
    fn paint_frame_runs_on_a_real_field() {
        let mut field = Field::with_seed(64.0, 64.0, SimParams::default(), 2);
        let mut canvas = Canvas::new(64, 64, FrameStyle::default().background);
        field.advance_frames(5);
        for frame in 0..5 {
            paint_frame(&mut canvas, &field, frame as f32 / 60.0, &FrameStyle::default());
            field.step();
        }
        // The fade fill alone guarantees the surface is not all zero.
        assert!(canvas.as_rgba_bytes().iter().any(|&b| b > 0));
    }
}
