use approx::{assert_abs_diff_eq, assert_relative_eq};
use itertools::Itertools;
use rust_nbody::consts::{get_circular_velocity, EARTH_MASS, EARTH_ORBIT_RADIUS, SUN_MASS};
use rust_nbody::file::read_file;
use rust_nbody::math::units::{
    Acceleration, GravitationalConstant, Length, Mass, Position, Velocity,
};
use rust_nbody::model::{Body, BodyCategory, System};
use rust_nbody::presets;

fn body(name: &str, mass: f64, position: Position, velocity: Velocity) -> Body {
    Body::new(
        BodyCategory::Planet,
        name,
        Length::from_meters(1.0),
        Mass::from_kilograms(mass),
        position,
        velocity,
    )
    .unwrap()
}

fn at_rest(name: &str, mass: f64, x: f64, y: f64, z: f64) -> Body {
    body(name, mass, Position::new(x, y, z), Velocity::zeros())
}

#[test]
fn test_heavy_and_light_body_single_step() {
    let g = 6.674e-11;
    let (m1, m2, r) = (5.0e24, 1.0, 1.0e7);

    let mut system = System::new(GravitationalConstant::new(g)).unwrap();
    let heavy = system.add_body(at_rest("heavy", m1, 0.0, 0.0, 0.0)).unwrap();
    let light = system.add_body(at_rest("light", m2, r, 0.0, 0.0)).unwrap();
    system.step().unwrap();

    // Starting from rest, one tick moves each body by exactly its acceleration
    let light_accel = g * m1 / (r * r);
    let heavy_accel = g * m2 / (r * r);

    let light = system.get_body(light).unwrap();
    assert_relative_eq!(
        light.acceleration(),
        Acceleration::new(-light_accel, 0.0, 0.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        light.velocity(),
        Velocity::new(-light_accel, 0.0, 0.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        light.position(),
        Position::new(r - light_accel, 0.0, 0.0),
        max_relative = 1e-12
    );

    let heavy = system.get_body(heavy).unwrap();
    assert_relative_eq!(
        heavy.position(),
        Position::new(heavy_accel, 0.0, 0.0),
        max_relative = 1e-12
    );
    assert!(heavy.position().vector().x > 0.0);
}

#[test]
fn test_summation_order_does_not_matter() {
    let g = GravitationalConstant::SI;
    let target = body(
        "target",
        1.0e3,
        Position::new(1.0e6, -2.0e6, 5.0e5),
        Velocity::zeros(),
    );
    let others = vec![
        at_rest("a", 5.97e24, 0.0, 0.0, 0.0),
        at_rest("b", 7.35e22, 3.84e8, 0.0, 0.0),
        at_rest("c", 1.0e15, 1.2e6, -1.9e6, 4.0e5),
        at_rest("d", 3.3e23, -5.0e7, 2.0e7, -1.0e6),
        at_rest("e", 2.0e10, 1.0e6, -2.0e6, 5.1e5),
    ];

    let by_hand = others
        .iter()
        .map(|o| target.acceleration_due_to(o, g).unwrap())
        .fold(Acceleration::zeros(), |acc, a| acc + a);

    for order in others.iter().permutations(others.len()) {
        let total = target.net_acceleration(order, g).unwrap();
        assert_relative_eq!(total, by_hand, max_relative = 1e-12);
    }
}

#[test]
fn test_insertion_order_does_not_change_physics() {
    let make = |order: &[usize]| {
        let bodies = vec![
            body(
                "a",
                2.0e24,
                Position::new(0.0, 0.0, 0.0),
                Velocity::new(0.0, -5.0, 0.0),
            ),
            body(
                "b",
                4.0e22,
                Position::new(2.0e8, 0.0, 0.0),
                Velocity::new(0.0, 800.0, 0.0),
            ),
            body(
                "c",
                1.0e20,
                Position::new(-1.0e8, 5.0e7, 0.0),
                Velocity::new(300.0, 600.0, 10.0),
            ),
        ];
        let mut system = System::new(GravitationalConstant::SI).unwrap();
        for &i in order {
            system.add_body(bodies[i].clone()).unwrap();
        }
        system.set_step_size(60.0).unwrap();
        system.run(500).unwrap();
        system
    };

    let forward = make(&[0, 1, 2]);
    let shuffled = make(&[2, 0, 1]);
    for b in forward.bodies() {
        let other = shuffled
            .get_body(shuffled.find_body(b.name()).unwrap())
            .unwrap();
        assert_relative_eq!(b.position(), other.position(), max_relative = 1e-9);
        assert_relative_eq!(b.velocity(), other.velocity(), max_relative = 1e-9);
    }
}

#[test]
fn test_step_is_not_idempotent() {
    let mut system = System::new(GravitationalConstant::SI).unwrap();
    let heavy = system.add_body(at_rest("heavy", 6.0e24, 0.0, 0.0, 0.0)).unwrap();
    let light = system.add_body(at_rest("light", 1.0e4, 7.0e6, 0.0, 0.0)).unwrap();

    let separation = |system: &System| {
        let heavy = system.get_body(heavy).unwrap().position();
        let light = system.get_body(light).unwrap().position();
        heavy.distance_to(&light).meters()
    };

    let mut previous = separation(&system);
    for _ in 0..5 {
        let before: Vec<Position> = system.bodies().map(Body::position).collect();
        system.step().unwrap();
        let after: Vec<Position> = system.bodies().map(Body::position).collect();
        assert_ne!(before, after);

        // Falling from rest, so the gap only shrinks
        let current = separation(&system);
        assert!(current < previous);
        previous = current;
    }
    assert_eq!(system.ticks(), 5);
}

#[test]
fn test_step_size_keeps_physical_velocity_in_a_system() {
    let mut system = presets::solar_system().unwrap();
    let before: Vec<Velocity> = system.bodies().map(Body::physical_velocity).collect();

    for &step in [0.5, 60.0, 3600.0, 86400.0, 1.0].iter() {
        system.set_step_size(step).unwrap();
        for (b, v) in system.bodies().zip(before.iter()) {
            assert_relative_eq!(b.physical_velocity(), *v, max_relative = 1e-12);
            assert_relative_eq!(b.velocity(), v.scale(step), max_relative = 1e-12);
        }
    }
}

#[test]
fn test_earth_goes_around_the_sun() {
    let speed = get_circular_velocity(
        EARTH_ORBIT_RADIUS,
        GravitationalConstant::SI.value() * SUN_MASS,
    );

    let mut system = System::new(GravitationalConstant::SI).unwrap();
    let sun = system.add_body(at_rest("sun", SUN_MASS, 0.0, 0.0, 0.0)).unwrap();
    let earth = system
        .add_body(body(
            "earth",
            EARTH_MASS,
            Position::new(EARTH_ORBIT_RADIUS, 0.0, 0.0),
            Velocity::new(0.0, speed, 0.0),
        ))
        .unwrap();
    system.set_step_size(3600.0).unwrap();

    let hours_per_year = 8766;
    for tick in 1..=hours_per_year {
        system.step().unwrap();

        let sun_position = system.get_body(sun).unwrap().position();
        let offset = system.get_body(earth).unwrap().position() - sun_position;
        assert_relative_eq!(offset.norm(), EARTH_ORBIT_RADIUS, max_relative = 1e-2);

        // Half a year in, the earth is on the far side
        if tick == hours_per_year / 2 {
            assert!(offset.vector().x < -0.99 * EARTH_ORBIT_RADIUS);
        }
    }

    // And a year in, it's roughly back where it began
    let offset =
        system.get_body(earth).unwrap().position() - system.get_body(sun).unwrap().position();
    assert_abs_diff_eq!(
        offset.vector(),
        nalgebra::Vector3::new(EARTH_ORBIT_RADIUS, 0.0, 0.0),
        epsilon = 0.02 * EARTH_ORBIT_RADIUS
    );
}

#[test]
fn test_solar_bodies_file() {
    let mut system = read_file("solar-bodies.txt").unwrap();
    assert_eq!(system.len(), 6);
    assert_eq!(system.gravitational_constant(), GravitationalConstant::SI);

    let moon = system.get_body(system.find_body("Moon").unwrap()).unwrap();
    assert_eq!(moon.category(), BodyCategory::Moon);

    system.set_step_size(600.0).unwrap();
    system.run(144).unwrap();
    assert!(system.bodies().all(|b| b.position().is_finite()));
}
