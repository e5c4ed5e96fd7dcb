//! Collision detection and resolution between two cars
//!
//! Cars are axis-aligned rectangles. The crash flag is computed once from the
//! positions at construction time; deciding what happens to the loser is up
//! to the caller.

use super::car::Car;

/// A potential collision between two cars at one instant
#[derive(Debug, Clone, Copy)]
pub struct Collision<'a> {
    car1: &'a Car,
    car2: &'a Car,
    crash: bool,
}

impl<'a> Collision<'a> {
    pub fn new(car1: &'a Car, car2: &'a Car) -> Self {
        let crash = detect_collision(car1, car2);
        Self { car1, car2, crash }
    }

    pub fn is_crash(&self) -> bool {
        self.crash
    }

    /// The car further to the left wins; equal x favors the first car.
    pub fn evaluate(&self) -> &'a Car {
        if self.car1.position().x > self.car2.position().x {
            self.car2
        } else {
            self.car1
        }
    }

    pub fn evaluate_loser(&self) -> &'a Car {
        let winner = self.evaluate();
        if std::ptr::eq(winner, self.car1) {
            self.car2
        } else {
            self.car1
        }
    }
}

/// Rectangles overlap unless one lies strictly above, below, right or left
/// of the other. Touching edges count as a crash.
fn detect_collision(car1: &Car, car2: &Car) -> bool {
    let p1 = car1.position();
    let d1 = car1.size();
    let p2 = car2.position();
    let d2 = car2.size();

    let above = p1.y + d1.height < p2.y;
    let below = p1.y > p2.y + d2.height;
    let right = p1.x + d1.width < p2.x;
    let left = p1.x > p2.x + d2.width;

    !above && !below && !right && !left
}
