//! Procedural scene generation.
//!
//! A scene is a cone of randomly shaped boxes with a small cluster of cubes on
//! top. Generation is a pure function of the seed: [`generate`] draws a seed
//! from the injected source and hands it to [`generate_from_seed`], so a
//! recorded [`Scene::seed`] always reproduces the same scene.

use std::f32::consts::PI;

use cgmath::Vector3;

use crate::{
    data_structures::{
        block::{Block, ColorPair, Rgb, Shape},
        scene::{Scene, Style},
    },
    rng::{self, RandomSource},
};

/// Vertical extent of the cone. Y grows downwards, so the apex sits at `-TREE_HEIGHT / 2`.
pub const TREE_HEIGHT: f32 = 900.0;
/// Cone radius at the base.
pub const MAX_RADIUS: f32 = 350.0;
/// Cone radius at the apex.
pub const APEX_RADIUS: f32 = 20.0;
/// Body block count is drawn from this half-open range.
pub const BODY_COUNT: (usize, usize) = (60, 90);
/// Exponent applied to the uniform height draw.
pub const LEVEL_EXPONENT: f32 = 0.8;

pub const TILT_LIMIT: f32 = 0.4;
pub const FLOAT_SPEED: (f32, f32) = (0.5, 1.5);
pub const ROT_SPEED: (f32, f32) = (-0.25, 0.25);

pub const TOPPER_COUNT: usize = 5;
pub const TOPPER_SIZE: f32 = 30.0;
pub const TOPPER_JITTER: f32 = 30.0;
/// How far above the apex the topper cluster floats.
pub const TOPPER_LIFT: f32 = 25.0;
pub const TOPPER_FLOAT_SPEED: f32 = 2.0;
pub const TOPPER_ROT_SPEED: f32 = 0.8;
pub const TOPPER_COLORS: ColorPair =
    ColorPair::new(Rgb::new(1.0, 0.85, 0.1), Rgb::new(1.0, 1.0, 1.0));

pub const PALETTES: [ColorPair; 6] = [
    // magenta / cyan
    ColorPair::new(Rgb::new(1.0, 0.0, 0.6), Rgb::new(0.0, 0.9, 1.0)),
    // orange / violet
    ColorPair::new(Rgb::new(1.0, 0.45, 0.0), Rgb::new(0.45, 0.0, 1.0)),
    // lime / blue
    ColorPair::new(Rgb::new(0.6, 1.0, 0.0), Rgb::new(0.0, 0.3, 1.0)),
    // red / yellow
    ColorPair::new(Rgb::new(1.0, 0.1, 0.1), Rgb::new(1.0, 0.9, 0.0)),
    // teal / pink
    ColorPair::new(Rgb::new(0.0, 0.8, 0.6), Rgb::new(1.0, 0.4, 0.7)),
    // indigo / mint
    ColorPair::new(Rgb::new(0.25, 0.1, 0.9), Rgb::new(0.4, 1.0, 0.7)),
];

/// Draws a seed from `rng` and generates the scene for it.
pub fn generate<R: RandomSource>(rng: &mut R) -> Scene {
    generate_from_seed(rng.seed())
}

/// Generates the scene for `seed`. Equal seeds give equal scenes.
pub fn generate_from_seed(seed: u64) -> Scene {
    let mut rng = rng::seeded(seed);
    let style = rng.pick(&Style::ALL).copied().unwrap_or_default();
    let count = rng.range_usize(BODY_COUNT.0, BODY_COUNT.1);

    let mut blocks = Vec::with_capacity(count + TOPPER_COUNT);
    blocks.extend((0..count).map(|_| body_block(&mut rng)));
    blocks.extend((0..TOPPER_COUNT).map(|_| topper_block(&mut rng)));

    log::debug!(
        "generated {} blocks, style {}, seed {:#x}",
        blocks.len(),
        style,
        seed
    );
    Scene::new(blocks, style, seed)
}

/// Radius limit of the cone at normalized height `level` (0 = base, 1 = apex).
pub fn max_radius_at(level: f32) -> f32 {
    let level = level.clamp(0.0, 1.0);
    MAX_RADIUS + (APEX_RADIUS - MAX_RADIUS) * level
}

/// World Y for normalized height `level`.
pub fn level_to_y(level: f32) -> f32 {
    TREE_HEIGHT / 2.0 - level * TREE_HEIGHT
}

fn body_block<R: RandomSource>(rng: &mut R) -> Block {
    let level = rng.unit().powf(LEVEL_EXPONENT);
    let y = level_to_y(level);
    let radius = rng.range(0.0, max_radius_at(level));
    let theta = rng.angle();
    let position = Vector3::new(radius * theta.cos(), y, radius * theta.sin());

    let shape = Shape::classify(rng.unit());
    let [w, h, d] = shape.extent_ranges();
    let extents = Vector3::new(
        rng.range(w.start, w.end),
        rng.range(h.start, h.end),
        rng.range(d.start, d.end),
    );

    let angle_y = rng.angle();
    let rotation_x = rng.range(-TILT_LIMIT, TILT_LIMIT);
    let rotation_z = rng.range(-TILT_LIMIT, TILT_LIMIT);
    let phase = rng.angle();
    let float_speed = rng.range(FLOAT_SPEED.0, FLOAT_SPEED.1);
    let rot_speed = rng.range(ROT_SPEED.0, ROT_SPEED.1);
    let color_pair = rng.pick(&PALETTES).copied().unwrap_or(PALETTES[0]);

    Block::new(
        shape,
        position,
        extents,
        angle_y,
        rotation_x,
        rotation_z,
        phase,
        color_pair,
        float_speed,
        rot_speed,
    )
}

fn topper_block<R: RandomSource>(rng: &mut R) -> Block {
    let apex = level_to_y(1.0) - TOPPER_LIFT;
    let position = Vector3::new(
        rng.range(-TOPPER_JITTER, TOPPER_JITTER),
        apex,
        rng.range(-TOPPER_JITTER, TOPPER_JITTER),
    );

    Block::new(
        Shape::Topper,
        position,
        Vector3::new(TOPPER_SIZE, TOPPER_SIZE, TOPPER_SIZE),
        rng.angle(),
        rng.range(0.0, PI),
        rng.range(0.0, PI),
        rng.angle(),
        TOPPER_COLORS,
        TOPPER_FLOAT_SPEED,
        TOPPER_ROT_SPEED,
    )
}
