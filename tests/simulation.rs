//! Whole-world behaviour: launch cadence, rocket bursts and the secondary
//! shower, driven through the public API with a seeded random source.

use heartworks::{Config, Randomizer, Recorder, World};

fn quiet_world(config: Config, seed: u64) -> World {
    // no scheduled launches get in the way
    let config = Config {
        launch_interval: 1_000_000,
        ..config
    };
    World::with_randomizer(config, Randomizer::with_seed(seed)).expect("valid config")
}

fn ticks_until_burst(v0: f32) -> (u32, f32, f32) {
    let mut world = quiet_world(Config::default(), 1);
    world.launch(250.0, v0);
    let mut recorder = Recorder::new();
    for tick in 1..=1000 {
        let report = world.tick(&mut recorder);
        if report.exploded == 1 {
            let fw = &world.fireworks()[0];
            return (tick, fw.x, fw.y);
        }
    }
    panic!("rocket launched at {v0} never burst");
}

#[test]
fn rocket_bursts_at_closed_form_tick_and_height() {
    let config = Config::default();
    let d = config.deceleration();
    for v0 in [10.0f32, 8.5, 11.9] {
        let (tick, x, y) = ticks_until_burst(v0);
        let k = (v0 / d).ceil() as u32;
        assert_eq!(tick, k, "v0={v0}");

        // y = H - sum_{i<k} (v0 - i*d)
        let k = k as f32;
        let expected = config.height - (k * v0 - d * k * (k - 1.0) / 2.0);
        assert_eq!(x, 250.0);
        assert!(
            (y - expected).abs() < 0.05,
            "v0={v0}: burst at y={y}, expected {expected}"
        );
    }
}

#[test]
fn heart_sheds_second_generation_after_half_a_second() {
    let config = Config {
        generation_cap: 2,
        ..Config::default()
    };
    let mut world = quiet_world(config.clone(), 2);
    world.ignite(400.0, 250.0, 1);
    let mut recorder = Recorder::new();

    for _ in 1..config.spawn_tick() {
        world.tick(&mut recorder);
        assert!(world.loose_particles().is_empty());
    }

    let eligible = world.fireworks()[0]
        .particles
        .iter()
        .filter(|p| {
            p.generation == 1 && p.is_static() && p.size - config.size_decay > config.base_size * 0.5
        })
        .count();

    let report = world.tick(&mut recorder);
    assert_eq!(report.spawned as usize, eligible);
    assert_eq!(world.loose_particles().len(), eligible);
    assert_eq!(eligible, 360);
    assert!(world.loose_particles().iter().all(|p| p.generation == 2));

    // the heart keeps its own particles; the shower lives in the world
    assert_eq!(world.fireworks()[0].particles.len(), 360);
    assert!(world.fireworks()[0].has_spawned());

    for _ in 0..60 {
        assert_eq!(world.tick(&mut recorder).spawned, 0);
    }
}

#[test]
fn generation_cap_of_one_never_sheds() {
    let config = Config {
        generation_cap: 1,
        ..Config::default()
    };
    let mut world = quiet_world(config, 3);
    world.ignite(400.0, 250.0, 1);
    let mut recorder = Recorder::new();
    for _ in 0..120 {
        assert_eq!(world.tick(&mut recorder).spawned, 0);
        assert!(world.loose_particles().is_empty());
    }
    assert!(world.fireworks().is_empty());
}

#[test]
fn launch_batches_follow_the_period() {
    for (period, ticks) in [(100u32, 1000u32), (37, 500), (1, 25)] {
        let config = Config {
            launch_interval: period,
            ..Config::default()
        };
        let mut world = World::with_randomizer(config.clone(), Randomizer::with_seed(4)).unwrap();
        let mut recorder = Recorder::new();

        let mut batches = 0;
        for _ in 0..ticks {
            let report = world.tick(&mut recorder);
            if report.launched > 0 {
                batches += 1;
                assert!(
                    (config.launch_count_min..=config.launch_count_max).contains(&report.launched)
                );
            }
        }
        assert_eq!(batches, ticks / period, "P={period} N={ticks}");
    }
}

#[test]
fn long_run_keeps_invariants() {
    let config = Config::default();
    let mut world = World::with_randomizer(
        Config {
            launch_interval: 20,
            ..config.clone()
        },
        Randomizer::with_seed(5),
    )
    .unwrap();
    let mut recorder = Recorder::new();
    let mut bursts = 0;

    for _ in 0..1500 {
        bursts += world.tick(&mut recorder).exploded;

        for rocket in world.projectiles() {
            assert!(rocket.speed > 0.0);
            assert!(rocket.dots.iter().all(|d| d.size > 0.0));
        }
        for fw in world.fireworks() {
            assert!(fw.alpha > 0.0 && fw.alpha <= 255.0);
            assert!(fw.dots.iter().all(|d| d.size > 0.0));
            assert!(fw.particles.iter().all(|p| p.size >= 0.0 && p.speed() >= 0.0));
            let shed_due = fw.generation < config.generation_cap && fw.timer >= config.spawn_tick();
            assert_eq!(fw.has_spawned(), shed_due);
        }
        for p in world.loose_particles() {
            assert!(p.size > 0.0 && p.speed() >= 0.0);
            assert_eq!(p.generation, 2);
        }
        // everything drawn this frame is visible
        assert!(recorder.calls.iter().all(|c| c.radius > 0.0));
    }
    assert!(bursts > 0);
}
