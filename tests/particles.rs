use fastrand::Rng;
use landing_wasm::config::ParticleConfig;
use landing_wasm::particles::{particle_count, Particle, ParticleField};

fn within(v: f64, bound: f64, slack: f64) -> bool {
    v >= -slack && v <= bound + slack
}

#[test]
fn count_matches_area_over_density() {
    let cfg = ParticleConfig::default();
    for (w, h) in [(1920.0, 1080.0), (390.0, 844.0), (1.0, 1.0), (20_000.0, 1.0)] {
        let mut rng = Rng::with_seed(11);
        let field = ParticleField::new(w, h, &cfg, &mut rng);
        assert_eq!(field.len(), (w * h / 20_000.0).floor() as usize);
        assert_eq!(field.len(), particle_count(w, h, cfg.density));
    }
}

#[test]
fn particles_stay_within_one_step_of_bounds() {
    let cfg = ParticleConfig::default();
    let (w, h) = (640.0, 480.0);
    for seed in 0..8 {
        let mut rng = Rng::with_seed(seed);
        let mut field = ParticleField::new(w, h, &cfg, &mut rng);
        for _ in 0..10_000 {
            field.advance();
            for p in field.particles() {
                assert!(within(p.x, w, p.dx.abs()), "x={} dx={}", p.x, p.dx);
                assert!(within(p.y, h, p.dy.abs()), "y={} dy={}", p.y, p.dy);
            }
        }
    }
}

#[test]
fn velocity_flips_exactly_on_crossing() {
    let cfg = ParticleConfig::default();
    let (w, h) = (300.0, 200.0);
    let mut rng = Rng::with_seed(5);
    let mut field = ParticleField::new(w, h, &cfg, &mut rng);

    for _ in 0..5_000 {
        let before: Vec<Particle> = field.particles().to_vec();
        field.advance();
        for (old, new) in before.iter().zip(field.particles()) {
            let nx = old.x + old.dx;
            let ny = old.y + old.dy;
            let crossed_x = !(0.0..=w).contains(&nx);
            let crossed_y = !(0.0..=h).contains(&ny);
            assert_eq!(new.dx != old.dx, crossed_x);
            assert_eq!(new.dy != old.dy, crossed_y);
        }
    }
}

#[test]
fn shrinking_surface_lets_particles_bounce_back_in() {
    let p = Particle {
        x: 900.0,
        y: 50.0,
        radius: 1.0,
        dx: 0.1,
        dy: 0.0,
        opacity: 0.4,
    };
    let mut field = ParticleField::from_particles(1000.0, 100.0, vec![p]);
    field.resize(500.0, 100.0);
    field.advance();
    assert!(field.particles()[0].dx < 0.0);

    // Drifts back inside and then keeps to the new bounds.
    for _ in 0..5_000 {
        field.advance();
    }
    let p = field.particles()[0];
    assert!(p.x >= -0.2 && p.x <= 500.2, "x={}", p.x);
}

#[test]
fn inward_velocity_outside_bounds_is_kept() {
    let mut p = Particle {
        x: 600.0,
        y: 50.0,
        radius: 1.0,
        dx: -0.1,
        dy: 0.0,
        opacity: 0.4,
    };
    p.advance(500.0, 100.0);
    assert!((p.x - 599.9).abs() < 1e-9, "x={}", p.x);
    assert_eq!(p.dx, -0.1);

    // The same particle moving outward is turned around.
    p.dx = 0.1;
    p.advance(500.0, 100.0);
    assert_eq!(p.dx, -0.1);
}
