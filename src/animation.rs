//! Per-frame motion of the sculpture.
//!
//! Nothing here reads a clock. The caller passes the elapsed time `t` in
//! seconds, so every transform is a pure function of the block, `t` and zoom.

use cgmath::{Quaternion, Rad, Rotation3, Vector3};

use crate::data_structures::{
    block::{Block, ColorPair},
    instance::Instance,
    scene::Scene,
};

/// Peak vertical float in world units.
pub const FLOAT_AMPLITUDE: f32 = 8.0;
/// Peak pitch wobble in radians.
pub const WOBBLE_AMPLITUDE: f32 = 0.02;
/// Yaw rate of the whole sculpture in radians per second.
pub const SCENE_YAW_SPEED: f32 = 0.15;

/// One block's draw data for a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFrame {
    pub world: Instance,
    pub colors: ColorPair,
}

pub fn float_offset(block: &Block, t: f32) -> f32 {
    (t * block.float_speed() + block.phase()).sin() * FLOAT_AMPLITUDE
}

/// Yaw, pitch and roll of `block` at time `t`.
pub fn block_angles(block: &Block, t: f32) -> (f32, f32, f32) {
    let yaw = block.angle_y() + t * block.rot_speed();
    let pitch = block.rotation_x() + (t + block.phase()).sin() * WOBBLE_AMPLITUDE;
    (yaw, pitch, block.rotation_z())
}

/// Local transform of `block`: translate, then yaw, pitch and roll, then box extents.
pub fn block_transform(block: &Block, t: f32) -> Instance {
    let (yaw, pitch, roll) = block_angles(block, t);
    let rotation = Quaternion::from_angle_y(Rad(yaw))
        * Quaternion::from_angle_x(Rad(pitch))
        * Quaternion::from_angle_z(Rad(roll));
    let mut position = block.position();
    position.y += float_offset(block, t);

    Instance {
        position,
        rotation,
        scale: block.extents(),
    }
}

/// Transform wrapping every block: uniform zoom and a slow global yaw.
pub fn scene_transform(t: f32, zoom: f32) -> Instance {
    Instance {
        position: Vector3::new(0.0, 0.0, 0.0),
        rotation: Quaternion::from_angle_y(Rad(t * SCENE_YAW_SPEED)),
        scale: Vector3::new(zoom, zoom, zoom),
    }
}

pub fn frame(scene: &Scene, t: f32, zoom: f32) -> Vec<BlockFrame> {
    let root = scene_transform(t, zoom);
    scene
        .blocks()
        .iter()
        .map(|block| BlockFrame {
            world: &root * &block_transform(block, t),
            colors: block.color_pair(),
        })
        .collect()
}
