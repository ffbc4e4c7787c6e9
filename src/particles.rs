//! Decorative particle field behind the page content.
//!
//! The field is a fixed ensemble of independent points that drift with a
//! constant velocity and bounce off the surface edges. Drawing lives in
//! `wasm::render`; this module only owns the simulation so it can run on
//! the host in tests.

use fastrand::Rng;

use crate::config::ParticleConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut Rng, width: f64, height: f64, cfg: &ParticleConfig) -> Self {
        Particle {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: uniform(rng, cfg.radius_min, cfg.radius_max),
            dx: uniform(rng, -cfg.max_speed, cfg.max_speed),
            dy: uniform(rng, -cfg.max_speed, cfg.max_speed),
            opacity: uniform(rng, cfg.opacity_min, cfg.opacity_max),
        }
    }

    /// Move one step, then reflect the velocity on any axis that left
    /// `[0, bound]`. Position is not clamped, so it may sit outside the
    /// bounds by at most one step until the reflected velocity brings it back.
    ///
    /// Only outward velocity is reflected. A particle stranded outside after
    /// the surface shrinks therefore drifts back in instead of jittering in
    /// place.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.dx;
        self.y += self.dy;

        if (self.x < 0.0 && self.dx < 0.0) || (self.x > width && self.dx > 0.0) {
            self.dx = -self.dx;
        }
        if (self.y < 0.0 && self.dy < 0.0) || (self.y > height && self.dy > 0.0) {
            self.dy = -self.dy;
        }
    }
}

fn uniform(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.f64() * (hi - lo)
}

/// Number of particles seeded for a `width x height` surface.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
    if width <= 0.0 || height <= 0.0 || density <= 0.0 {
        return 0;
    }
    (width * height / density).floor() as usize
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, cfg: &ParticleConfig, rng: &mut Rng) -> Self {
        let count = particle_count(width, height, cfg.density);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height, cfg))
            .collect();
        ParticleField {
            particles,
            width,
            height,
        }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        ParticleField {
            particles,
            width,
            height,
        }
    }

    /// Track new surface bounds. The ensemble is kept as is; particles that
    /// now sit outside simply bounce their way back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// One frame of simulation.
    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// CSS colour for a particle of the given opacity.
pub fn fill_style(color: [u8; 3], opacity: f64) -> String {
    format!("rgba({}, {}, {}, {})", color[0], color[1], color[2], opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_rounds_down() {
        assert_eq!(particle_count(1920.0, 1080.0, 20_000.0), 103);
        assert_eq!(particle_count(100.0, 100.0, 20_000.0), 0);
        assert_eq!(particle_count(0.0, 1080.0, 20_000.0), 0);
    }

    #[test]
    fn seeded_values_fall_in_their_ranges() {
        let cfg = ParticleConfig::default();
        let mut rng = Rng::with_seed(42);
        let field = ParticleField::new(800.0, 600.0, &cfg, &mut rng);
        assert_eq!(field.len(), 24);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.5..2.5).contains(&p.radius));
            assert!((-0.15..0.15).contains(&p.dx));
            assert!((-0.15..0.15).contains(&p.dy));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn bounce_flips_only_the_crossed_axis() {
        let mut p = Particle {
            x: 99.95,
            y: 50.0,
            radius: 1.0,
            dx: 0.1,
            dy: 0.1,
            opacity: 0.5,
        };
        p.advance(100.0, 100.0);
        assert!(p.x > 100.0);
        assert_eq!(p.dx, -0.1);
        assert_eq!(p.dy, 0.1);

        p.advance(100.0, 100.0);
        assert!(p.x <= 100.0);
        assert_eq!(p.dx, -0.1);
    }

    #[test]
    fn resize_keeps_the_ensemble() {
        let cfg = ParticleConfig::default();
        let mut rng = Rng::with_seed(1);
        let mut field = ParticleField::new(1000.0, 1000.0, &cfg, &mut rng);
        let before = field.particles().to_vec();
        field.resize(200.0, 200.0);
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.size(), (200.0, 200.0));
    }

    #[test]
    fn fill_style_formats_rgba() {
        assert_eq!(fill_style([58, 242, 255], 0.5), "rgba(58, 242, 255, 0.5)");
    }
}
