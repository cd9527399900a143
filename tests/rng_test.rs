use std::f32::consts::TAU;

use halftone_tree::{
    generator::{FLOAT_SPEED, ROT_SPEED, TILT_LIMIT},
    rng::{self, RandomSource},
};
use rand::RngCore;

/// Yields the largest raw value first, then ordinary draws.
struct TopEdge {
    first: bool,
    rest: rand::rngs::SmallRng,
}

impl TopEdge {
    fn new() -> Self {
        Self {
            first: true,
            rest: rng::seeded(11),
        }
    }
}

impl RngCore for TopEdge {
    fn next_u32(&mut self) -> u32 {
        if std::mem::take(&mut self.first) {
            return u32::MAX;
        }
        self.rest.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        if std::mem::take(&mut self.first) {
            return u64::MAX;
        }
        self.rest.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rest.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rest.try_fill_bytes(dest)
    }
}

#[test]
fn unit_draws_are_half_open() {
    let mut rng = rng::seeded(3);
    for _ in 0..10_000 {
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn integer_ranges_exclude_the_upper_bound() {
    let mut rng = rng::seeded(4);
    let mut seen = [false; 30];
    for _ in 0..10_000 {
        let n = rng.range_usize(60, 90);
        assert!((60..90).contains(&n));
        seen[n - 60] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn float_ranges_never_reach_the_upper_bound() {
    for (lo, hi) in [
        (80.0, 200.0),
        (30.0, 80.0),
        (40.0, 100.0),
        (8.0, 20.0),
        (60.0, 160.0),
        (6.0, 14.0),
        FLOAT_SPEED,
        ROT_SPEED,
        (-TILT_LIMIT, TILT_LIMIT),
    ] {
        let v = TopEdge::new().range(lo, hi);
        assert!((lo..hi).contains(&v), "{} outside [{}, {})", v, lo, hi);
    }
    assert!(TopEdge::new().angle() < TAU);
}

#[test]
fn empty_float_range_returns_the_lower_bound() {
    let mut rng = rng::seeded(9);
    assert_eq!(rng.range(30.0, 30.0), 30.0);
    assert_eq!(rng.range(5.0, -5.0), 5.0);
}

#[test]
fn empty_integer_range_returns_the_lower_bound() {
    let mut rng = rng::seeded(5);
    assert_eq!(rng.range_usize(7, 7), 7);
    assert_eq!(rng.range_usize(9, 3), 9);
}

#[test]
fn pick_only_returns_members() {
    let mut rng = rng::seeded(6);
    let items = ["a", "b", "c"];
    for _ in 0..100 {
        assert!(rng.pick(&items).is_some_and(|item| items.contains(item)));
    }
    let empty: [&str; 0] = [];
    assert!(rng.pick(&empty).is_none());
}

#[test]
fn seeded_sources_repeat() {
    let mut a = rng::seeded(8);
    let mut b = rng::seeded(8);
    for _ in 0..32 {
        assert_eq!(a.seed(), b.seed());
    }
}
