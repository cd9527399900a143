use std::ops::Range;

use cgmath::Vector3;

/// An RGB colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    pub fn channels(&self) -> [f32; 3] {
        self.0
    }
}

/// The two gradient endpoints the halftone shader mixes between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub a: Rgb,
    pub b: Rgb,
}

impl ColorPair {
    pub const fn new(a: Rgb, b: Rgb) -> Self {
        Self { a, b }
    }
}

/// Which generation rule produced a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// wide, thin, thin
    Strip,
    /// medium width, thin height, medium depth
    Slab,
    /// narrow, tall, narrow
    Pillar,
    /// fixed cube of the apex cluster
    Topper,
}

impl Shape {
    /// Sampling ranges for `(w, h, d)`. Every lower bound is positive.
    pub fn extent_ranges(&self) -> [Range<f32>; 3] {
        match self {
            Shape::Strip => [80.0..200.0, 6.0..16.0, 6.0..16.0],
            Shape::Slab => [40.0..100.0, 6.0..14.0, 30.0..80.0],
            Shape::Pillar => [8.0..20.0, 60.0..160.0, 8.0..20.0],
            Shape::Topper => [30.0..30.0, 30.0..30.0, 30.0..30.0],
        }
    }

    /// Maps one uniform draw in `[0, 1)` onto a body shape.
    pub fn classify(u: f32) -> Self {
        if u < 0.4 {
            Shape::Strip
        } else if u < 0.7 {
            Shape::Slab
        } else {
            Shape::Pillar
        }
    }
}

/**
 * A single oriented box of the sculpture.
 *
 * Blocks never change after generation. Motion is derived every frame from the
 * static fields and the current time, see [`crate::animation`].
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    position: Vector3<f32>,
    extents: Vector3<f32>,
    angle_y: f32,
    rotation_x: f32,
    rotation_z: f32,
    phase: f32,
    color_pair: ColorPair,
    float_speed: f32,
    rot_speed: f32,
    shape: Shape,
}

impl Block {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shape: Shape,
        position: Vector3<f32>,
        extents: Vector3<f32>,
        angle_y: f32,
        rotation_x: f32,
        rotation_z: f32,
        phase: f32,
        color_pair: ColorPair,
        float_speed: f32,
        rot_speed: f32,
    ) -> Self {
        Self {
            position,
            extents,
            angle_y,
            rotation_x,
            rotation_z,
            phase,
            color_pair,
            float_speed,
            rot_speed,
            shape,
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn extents(&self) -> Vector3<f32> {
        self.extents
    }

    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    pub fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    pub fn rotation_z(&self) -> f32 {
        self.rotation_z
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn color_pair(&self) -> ColorPair {
        self.color_pair
    }

    pub fn float_speed(&self) -> f32 {
        self.float_speed
    }

    pub fn rot_speed(&self) -> f32 {
        self.rot_speed
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_topper(&self) -> bool {
        self.shape == Shape::Topper
    }
}
