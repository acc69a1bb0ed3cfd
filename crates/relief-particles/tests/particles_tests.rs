//! Integration tests for relief-particles.

use relief_math::{ScriptedRandom, SeededRandom, Vec3};
use relief_particles::{
    CollisionPolicy, Container, FrameClock, Particle, ParticleConfig, ParticleSimulator,
    StepOutcome, Wall,
};
use relief_types::{ParticleId, ReliefError};

fn weightless() -> ParticleConfig {
    ParticleConfig {
        gravity: [0.0, 0.0, 0.0],
        drag_constant: 1.0,
        ..Default::default()
    }
}

fn ball(position: Vec3, velocity: Vec3, radius: f32) -> Particle {
    Particle::new(position, velocity, radius, radius, [1.0, 0.0, 0.0]).unwrap()
}

// ─── Container Tests ──────────────────────────────────────────

#[test]
fn container_rejects_bad_half_width() {
    assert!(Container::new(0.0).is_err());
    assert!(Container::new(-1.0).is_err());
    assert!(Container::new(f32::NAN).is_err());
    assert!(Container::new(f32::INFINITY).is_err());
    assert_eq!(Container::new(3.0).unwrap().floor(), -3.0);
}

#[test]
fn no_hit_inside_or_touching() {
    let c = Container::new(3.0).unwrap();
    assert!(c.deepest_penetration(Vec3::ZERO, 0.5).is_none());
    // Touching the +x wall exactly is not a crossing
    assert!(c.deepest_penetration(Vec3::new(2.5, 0.0, 0.0), 0.5).is_none());
    assert!(c.contains(Vec3::new(2.5, -2.5, 2.5), 0.5));
}

#[test]
fn each_wall_is_detected() {
    let c = Container::new(3.0).unwrap();
    let cases = [
        (Vec3::new(2.9, 0.0, 0.0), Wall::PosX),
        (Vec3::new(-2.9, 0.0, 0.0), Wall::NegX),
        (Vec3::new(0.0, 2.9, 0.0), Wall::PosY),
        (Vec3::new(0.0, -2.9, 0.0), Wall::NegY),
        (Vec3::new(0.0, 0.0, 2.9), Wall::PosZ),
        (Vec3::new(0.0, 0.0, -2.9), Wall::NegZ),
    ];
    for (center, wall) in cases {
        let hit = c.deepest_penetration(center, 0.5).unwrap();
        assert_eq!(hit.wall, wall);
        assert!((hit.penetration - 0.4).abs() < 1e-5);
    }
}

#[test]
fn deepest_wall_wins() {
    let c = Container::new(3.0).unwrap();
    let hit = c.deepest_penetration(Vec3::new(2.75, -2.875, 0.0), 0.5).unwrap();
    assert_eq!(hit.wall, Wall::NegY);
    assert_eq!(hit.penetration, 0.375);
}

#[test]
fn ties_keep_first_wall() {
    let c = Container::new(3.0).unwrap();
    let hit = c.deepest_penetration(Vec3::new(2.75, 2.75, -2.75), 0.5).unwrap();
    assert_eq!(hit.wall, Wall::PosX);
    let hit = c.deepest_penetration(Vec3::new(0.0, -2.75, -2.75), 0.5).unwrap();
    assert_eq!(hit.wall, Wall::NegY);
}

#[test]
fn wall_normals_point_inward() {
    let c = Container::new(3.0).unwrap();
    for wall in Wall::ALL {
        let n = wall.normal();
        assert!((n.length() - 1.0).abs() < 1e-6);
        let outside = -n * 2.9;
        let nudged = outside + n * 0.1;
        assert!(c.penetration(wall, nudged, 0.5) < c.penetration(wall, outside, 0.5));
    }
    assert_eq!(Wall::PosX.normal(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(Wall::NegY.normal(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(Wall::PosZ.to_string(), "+z");
}

// ─── Particle Tests ───────────────────────────────────────────

#[test]
fn invalid_particles_fail_fast() {
    for radius in [0.0, -0.5, f32::NAN] {
        let err = Particle::new(Vec3::ZERO, Vec3::ZERO, 1.0, radius, [0.0; 3]).unwrap_err();
        assert!(matches!(err, ReliefError::InvalidConfig(_)));
    }
    assert!(Particle::new(Vec3::ZERO, Vec3::ZERO, 0.0, 0.2, [0.0; 3]).is_err());
    assert!(Particle::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO, 1.0, 0.2, [0.0; 3]).is_err());
}

#[test]
fn zero_dt_at_rest_is_a_no_op() {
    let mut sim = ParticleSimulator::new(ParticleConfig::default()).unwrap();
    sim.insert(ball(Vec3::new(0.5, 1.0, -0.25), Vec3::ZERO, 0.3)).unwrap();

    let report = sim.step(0.0);
    let p = &sim.particles()[0];
    assert_eq!(p.position, Vec3::new(0.5, 1.0, -0.25));
    assert_eq!(p.velocity, Vec3::ZERO);
    assert!(p.is_moving());
    assert!(report.collisions.is_empty());
    assert!(report.settled.is_empty());
}

#[test]
fn drag_and_gravity_are_applied_before_moving() {
    let config = ParticleConfig::default();
    let container = config.container().unwrap();
    let mut p = ball(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.2);

    let dt = 0.01;
    let drag = config.drag_factor(dt);
    let dv = config.velocity_increment(dt);
    let outcome = p.physics(dt, drag, dv, &container, &config);

    let expected_v = Vec3::new(drag, -9.81 * dt, 0.0);
    assert!((p.velocity - expected_v).length() < 1e-6);
    assert!((p.position - expected_v * dt).length() < 1e-6);
    assert!(outcome.active);
    assert!(!outcome.settled);
    assert!(outcome.collision.is_none());
}

#[test]
fn head_on_hit_rejects_step_and_reflects() {
    let config = weightless();
    let container = config.container().unwrap();
    let start = Vec3::new(2.0, 0.0, 0.0);
    let mut p = ball(start, Vec3::new(10.0, 0.0, 0.0), 0.5);

    let outcome = p.physics(0.1, 1.0, Vec3::ZERO, &container, &config);

    let hit = outcome.collision.unwrap();
    assert_eq!(hit.wall, Wall::PosX);
    assert_eq!(p.position, start);
    assert!(p.velocity.x < 0.0);
    assert!((p.velocity.x + 10.0 * config.collision_scale).abs() < 1e-5);
    assert_eq!(p.velocity.y, 0.0);
    assert_eq!(p.velocity.z, 0.0);
}

#[test]
fn oblique_hit_keeps_tangential_velocity() {
    let config = weightless();
    let container = config.container().unwrap();
    let start = Vec3::new(0.0, -2.0, 0.0);
    let mut p = ball(start, Vec3::new(3.0, -10.0, 2.0), 0.5);

    let outcome = p.physics(0.1, 1.0, Vec3::ZERO, &container, &config);

    assert_eq!(outcome.collision.unwrap().wall, Wall::NegY);
    assert_eq!(p.position, start);
    let csf = config.collision_scale;
    assert!((p.velocity - Vec3::new(3.0 * csf, 10.0 * csf, 2.0 * csf)).length() < 1e-5);
}

#[test]
fn time_of_impact_policy_places_after_bounce() {
    let config = ParticleConfig {
        collision_policy: CollisionPolicy::TimeOfImpact,
        ..weightless()
    };
    let container = config.container().unwrap();
    let mut p = ball(Vec3::new(2.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 0.5);

    let outcome = p.physics(0.1, 1.0, Vec3::ZERO, &container, &config);

    assert_eq!(outcome.collision.unwrap().wall, Wall::PosX);
    // Contact at x = 2.5 after 0.05 s, then 0.05 s back at 9.9 m/s
    assert!((p.position.x - (2.5 - 9.9 * 0.05)).abs() < 1e-4);
    assert!((p.velocity.x + 9.9).abs() < 1e-4);
    assert!(container.contains(p.position, p.radius()));
}

#[test]
fn settles_once_near_floor() {
    let config = ParticleConfig::default();
    let mut sim = ParticleSimulator::new(config).unwrap();
    let radius = 0.2;
    let id = sim
        .insert(ball(Vec3::new(0.0, -3.0 + radius + 0.005, 0.0), Vec3::ZERO, radius))
        .unwrap();

    let report = sim.step(0.001);
    assert_eq!(report.settled, vec![id]);
    let p = sim.particle(id).unwrap();
    assert!(!p.is_moving());
    assert_eq!(p.velocity, Vec3::ZERO);
    let rest = p.position;

    for _ in 0..200 {
        let report = sim.step(0.01);
        assert!(report.settled.is_empty());
        assert!(report.collisions.is_empty());
    }
    let p = sim.particle(id).unwrap();
    assert!(!p.is_moving());
    assert_eq!(p.position, rest);
    assert_eq!(sim.moving_count(), 0);
}

#[test]
fn settled_particle_ignores_velocity_changes() {
    let config = ParticleConfig::default();
    let container = config.container().unwrap();
    let mut p = ball(Vec3::new(0.0, -2.795, 0.0), Vec3::ZERO, 0.2);
    assert!(p.physics(0.001, 1.0, Vec3::new(0.0, -0.001, 0.0), &container, &config).settled);

    let rest = p.position;
    p.velocity = Vec3::new(50.0, 50.0, 0.0);
    let outcome = p.physics(0.1, 1.0, Vec3::ZERO, &container, &config);
    assert_eq!(outcome, StepOutcome::RESTING);
    assert_eq!(p.position, rest);
    assert!(!p.is_moving());
}

#[test]
fn no_settling_high_above_floor() {
    let config = ParticleConfig::default();
    let container = config.container().unwrap();
    let mut p = ball(Vec3::ZERO, Vec3::ZERO, 0.2);
    let outcome = p.physics(0.001, 1.0, Vec3::new(0.0, -0.001, 0.0), &container, &config);
    assert!(!outcome.settled);
    assert!(p.is_moving());
}

#[test]
fn no_settling_while_fast() {
    let config = ParticleConfig::default();
    let container = config.container().unwrap();
    let mut p = ball(Vec3::new(0.0, -2.795, 0.0), Vec3::new(20.0, 0.0, 0.0), 0.2);
    let outcome = p.physics(0.01, 1.0, Vec3::ZERO, &container, &config);
    assert!(!outcome.settled);
    assert!(p.is_moving());
}

#[test]
fn dropped_ball_eventually_settles() {
    let config = ParticleConfig {
        collision_scale: 0.5,
        ..Default::default()
    };
    let mut sim = ParticleSimulator::new(config).unwrap();
    let id = sim.insert(ball(Vec3::ZERO, Vec3::ZERO, 0.25)).unwrap();

    let mut settle_events = 0;
    for _ in 0..50_000 {
        let report = sim.step(0.01);
        settle_events += report.settled.len();
        if !sim.particle(id).unwrap().is_moving() {
            break;
        }
    }
    assert_eq!(settle_events, 1);
    let p = sim.particle(id).unwrap();
    assert!(p.position.y - p.radius() >= -3.0);
    assert!(p.position.y - p.radius() < -3.0 + 0.05);
}

#[test]
fn kinetic_energy_uses_mass() {
    let p = Particle::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), 2.0, 0.1, [0.0; 3]).unwrap();
    assert!((p.kinetic_energy() - 25.0).abs() < 1e-5);
}

// ─── Simulator Tests ──────────────────────────────────────────

#[test]
fn insert_rejects_oversized_particle() {
    let mut sim = ParticleSimulator::new(ParticleConfig::default()).unwrap();
    assert!(sim.insert(ball(Vec3::ZERO, Vec3::ZERO, 3.0)).is_err());
    assert!(sim.is_empty());
    assert_eq!(sim.insert(ball(Vec3::ZERO, Vec3::ZERO, 1.0)).unwrap(), ParticleId(0));
}

#[test]
fn insert_rejects_particle_outside_container() {
    let mut sim = ParticleSimulator::new(ParticleConfig::default()).unwrap();
    let err = sim.insert(ball(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO, 0.2)).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidConfig(_)));
    assert!(sim.insert(ball(Vec3::new(2.9, 0.0, 0.0), Vec3::ZERO, 0.2)).is_err());
    assert!(sim.is_empty());

    // Touching a wall is inside.
    let id = sim.insert(ball(Vec3::new(0.0, -2.75, 0.0), Vec3::ZERO, 0.25)).unwrap();
    assert!(sim.container().contains(sim.particle(id).unwrap().position, 0.25));
}

#[test]
fn populate_spawns_inside_container() {
    let config = ParticleConfig::default();
    let mut sim = ParticleSimulator::new(config.clone()).unwrap();
    let mut rng = SeededRandom::new(99);
    sim.populate(&mut rng).unwrap();

    assert_eq!(sim.len(), config.count);
    assert_eq!(sim.moving_count(), config.count);
    let max_speed = config.half_width * config.speed_factor;
    for p in sim.particles() {
        assert!(p.radius() >= config.min_radius && p.radius() <= config.max_spawn_radius());
        assert_eq!(p.mass(), p.radius());
        assert!(sim.container().contains(p.position, p.radius()));
        assert!(p.velocity.abs().max_element() <= max_speed);
        assert!(p.color().iter().all(|c| (0.0..1.0).contains(c)));
    }
}

#[test]
fn scripted_spawn_is_exact() {
    let mut sim = ParticleSimulator::new(ParticleConfig::default()).unwrap();
    let mut rng = ScriptedRandom::new(vec![0.5]);
    let id = sim.spawn(&mut rng).unwrap();
    assert_eq!(rng.drawn(), 10);

    let p = sim.particle(id).unwrap();
    assert!((p.radius() - 0.4).abs() < 1e-6);
    assert_eq!(p.position, Vec3::ZERO);
    assert_eq!(p.velocity, Vec3::ZERO);
    assert_eq!(p.color(), [0.5, 0.5, 0.5]);
}

#[test]
fn same_seed_same_particles() {
    let config = ParticleConfig::default().with_seed(17);
    let a = ParticleSimulator::from_config(config.clone()).unwrap();
    let b = ParticleSimulator::from_config(config).unwrap();
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn particles_stay_in_container() {
    let config = ParticleConfig::crowded().with_seed(5);
    let mut sim = ParticleSimulator::from_config(config).unwrap();
    let mut t = 0.0;
    for _ in 0..2_000 {
        sim.tick(t);
        t += 16.0;
        for p in sim.particles() {
            assert!(sim.container().contains(p.position, p.radius()));
        }
    }
    assert_eq!(sim.frame(), 2_000);
}

#[test]
fn tick_uses_frame_clock() {
    let mut sim = ParticleSimulator::new(ParticleConfig::default()).unwrap();
    sim.insert(ball(Vec3::ZERO, Vec3::ZERO, 0.2)).unwrap();

    let first = sim.tick(1000.0);
    assert_eq!(first.dt, 0.0);
    assert_eq!(first.frame, 0);

    let second = sim.tick(1016.0);
    assert!((second.dt - 16.0 / 5000.0).abs() < 1e-9);
    assert_eq!(second.frame, 1);
    assert!((sim.sim_time() - 16.0 / 5000.0).abs() < 1e-9);
    assert!(sim.particles()[0].velocity.y < 0.0);
}

#[test]
fn collisions_are_reported() {
    let mut sim = ParticleSimulator::new(weightless()).unwrap();
    let id = sim.insert(ball(Vec3::new(2.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 0.5)).unwrap();
    let report = sim.step(0.1);
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].0, id);
    assert_eq!(report.collisions[0].1.wall, Wall::PosX);
}

// ─── Clock Tests ──────────────────────────────────────────────

#[test]
fn clock_first_tick_is_zero() {
    let mut clock = FrameClock::new(1.0 / 5000.0);
    assert_eq!(clock.tick(12345.0), 0.0);
    assert_eq!(clock.last_timestamp(), Some(12345.0));
}

#[test]
fn clock_scales_deltas() {
    let mut clock = FrameClock::new(0.001);
    clock.tick(0.0);
    assert!((clock.tick(500.0) - 0.5).abs() < 1e-6);
    assert!((clock.tick(750.0) - 0.25).abs() < 1e-6);
}

#[test]
fn clock_clamps_backwards_time() {
    let mut clock = FrameClock::new(0.001);
    clock.tick(1000.0);
    assert_eq!(clock.tick(900.0), 0.0);
    assert_eq!(clock.tick(900.0), 0.0);
    assert!((clock.tick(1000.0) - 0.1).abs() < 1e-6);
    clock.reset();
    assert_eq!(clock.tick(5000.0), 0.0);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_and_presets_validate() {
    assert!(ParticleConfig::default().validate().is_ok());
    assert!(ParticleConfig::gentle().validate().is_ok());
    assert!(ParticleConfig::crowded().validate().is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        ParticleConfig { collision_scale: 0.0, ..Default::default() },
        ParticleConfig { collision_scale: 1.5, ..Default::default() },
        ParticleConfig { drag_constant: 0.0, ..Default::default() },
        ParticleConfig { drag_constant: 1.01, ..Default::default() },
        ParticleConfig { time_scale: 0.0, ..Default::default() },
        ParticleConfig { half_width: 0.0, ..Default::default() },
        ParticleConfig { min_radius: 0.0, ..Default::default() },
        ParticleConfig { radius_spread: 2.0, ..Default::default() },
        ParticleConfig { gravity: [0.0, f32::NAN, 0.0], ..Default::default() },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(ReliefError::InvalidConfig(_))),
            "accepted {config:?}"
        );
        assert!(ParticleSimulator::new(config).is_err());
    }
}

#[test]
fn config_from_partial_toml() {
    let config: ParticleConfig =
        toml::from_str("count = 3\ncollision_policy = \"time_of_impact\"\nseed = 1\n").unwrap();
    assert_eq!(config.count, 3);
    assert_eq!(config.collision_policy, CollisionPolicy::TimeOfImpact);
    assert_eq!(config.half_width, 3.0);
    assert_eq!(config.seed, Some(1));
}

#[test]
fn frame_report_serializes() {
    let mut sim = ParticleSimulator::new(weightless()).unwrap();
    sim.insert(ball(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, -10.0), 0.5)).unwrap();
    let report = sim.step(0.1);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("NegZ"));
}
