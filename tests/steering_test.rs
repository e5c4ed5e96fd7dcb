//! Steering input mapping tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use bumpers::simulation::{direction_towards, steer_towards, Car, CarKind, Dimension2D, Point2D};

fn origin() -> Point2D {
    Point2D::new(100.0, 100.0)
}

#[test]
fn test_cardinal_directions() {
    assert_eq!(direction_towards(origin(), Point2D::new(200.0, 100.0)), 90);
    assert_eq!(direction_towards(origin(), Point2D::new(0.0, 100.0)), 270);
    assert_eq!(direction_towards(origin(), Point2D::new(100.0, 0.0)), 180);
    // straight below would be 360 and folds to 0
    assert_eq!(direction_towards(origin(), Point2D::new(100.0, 200.0)), 0);
}

#[test]
fn test_diagonal_directions() {
    // y grows downwards: below-right is 45, above-right 135
    assert_eq!(direction_towards(origin(), Point2D::new(200.0, 200.0)), 45);
    assert_eq!(direction_towards(origin(), Point2D::new(200.0, 0.0)), 135);
    assert_eq!(direction_towards(origin(), Point2D::new(0.0, 0.0)), 225);
    assert_eq!(direction_towards(origin(), Point2D::new(0.0, 200.0)), 315);
}

#[test]
fn test_angle_is_truncated() {
    // atan2(1, 2) is about 26.57 degrees
    assert_eq!(direction_towards(origin(), Point2D::new(102.0, 101.0)), 64);
}

#[test]
fn test_steer_towards_sets_direction() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut car = Car::new(CarKind::Fast, Dimension2D::new(500.0, 300.0), &mut rng);
    car.set_position(100.0, 100.0);

    let direction = steer_towards(&mut car, Point2D::new(0.0, 100.0)).unwrap();
    assert_eq!(direction, 270);
    assert_eq!(car.direction(), 270);
}

#[test]
fn test_crunched_car_ignores_steering() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut car = Car::new(CarKind::Fast, Dimension2D::new(500.0, 300.0), &mut rng);
    car.set_position(100.0, 100.0);
    car.set_direction(90).unwrap();
    car.crunch();

    assert_eq!(steer_towards(&mut car, Point2D::new(0.0, 100.0)), Ok(90));
    assert_eq!(car.direction(), 90);
}
