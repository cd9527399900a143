//! Orthographic camera, zoom and orbit input.
//!
//! The projection always shows the full nominal volume along the shorter
//! viewport axis. Zoom is not a camera distance (orthographic projections do
//! not respond to it) but a uniform scale applied to the whole sculpture, see
//! [`crate::animation::scene_transform`].

use cgmath::{Matrix4, Point3, Rad, Vector3};
use winit::event::MouseScrollDelta;

/// Visual volume the sculpture should fill.
pub const NOMINAL_HEIGHT: f32 = 1200.0;
pub const NOMINAL_WIDTH: f32 = 1000.0;
/// Half depth of the clip volume. Large enough to never clip a block.
pub const DEPTH_RANGE: f32 = 5000.0;

pub const ZOOM_MIN: f32 = 0.2;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_SENSITIVITY: f32 = 0.001;
/// Pixels per scrolled line when the platform reports line deltas.
pub const LINE_HEIGHT_PX: f32 = 100.0;

/// Halftone dot size in pixels, passed to the shader every frame.
pub const DOT_SIZE: f32 = 6.0;

/// Distance of the orbiting eye from the origin. Irrelevant to size on screen,
/// it only has to sit well inside [`DEPTH_RANGE`].
pub const CAMERA_DISTANCE: f32 = 1000.0;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Symmetric orthographic clip bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    pub fn half_width(&self) -> f32 {
        self.right
    }

    pub fn half_height(&self) -> f32 {
        self.top
    }
}

/// Orthographic projection sized from the viewport.
#[derive(Clone, Copy, Debug)]
pub struct OrthoProjection {
    width: u32,
    height: u32,
}

impl OrthoProjection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self {
            width: 1,
            height: 1,
        };
        projection.resize(width, height);
        projection
    }

    /// Zero-sized viewports (minimized windows, hidden canvases) keep the previous size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn bounds(&self) -> OrthoBounds {
        let aspect = self.aspect();
        let (half_w, half_h) = if aspect > 1.0 {
            let half_h = NOMINAL_HEIGHT / 2.0;
            (half_h * aspect, half_h)
        } else {
            let half_w = NOMINAL_WIDTH / 2.0;
            (half_w, half_w / aspect)
        };
        OrthoBounds {
            left: -half_w,
            right: half_w,
            bottom: -half_h,
            top: half_h,
            near: -DEPTH_RANGE,
            far: DEPTH_RANGE,
        }
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let b = self.bounds();
        // Screen Y points down, so bottom and top are swapped: the apex at negative Y renders on top.
        OPENGL_TO_WGPU_MATRIX * cgmath::ortho(b.left, b.right, b.top, b.bottom, b.near, b.far)
    }
}

/// Zoom level shared by every scene the view ever shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f32);

impl Zoom {
    pub fn new(level: f32) -> Self {
        Self(level.clamp(ZOOM_MIN, ZOOM_MAX))
    }

    pub fn level(&self) -> f32 {
        self.0
    }

    /// `delta` follows the browser wheel convention: positive scrolls down and zooms out.
    pub fn apply_wheel(&mut self, delta: f32) -> f32 {
        if delta.is_finite() {
            self.0 = (self.0 - delta * ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
        }
        self.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Converts a winit scroll into a browser style wheel delta in pixels.
///
/// winit reports scrolling up as positive, browsers report scrolling down as positive.
pub fn wheel_delta(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

/// Orbit rotation around the origin, driven by pointer drags.
#[derive(Clone, Debug)]
pub struct OrbitController {
    yaw: Rad<f32>,
    pitch: Rad<f32>,
    sensitivity: f32,
}

impl OrbitController {
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    pub fn new(sensitivity: f32) -> Self {
        Self {
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            sensitivity,
        }
    }

    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        self.yaw.0 -= dx as f32 * self.sensitivity;
        self.pitch.0 = (self.pitch.0 + dy as f32 * self.sensitivity)
            .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn yaw(&self) -> Rad<f32> {
        self.yaw
    }

    pub fn pitch(&self) -> Rad<f32> {
        self.pitch
    }

    pub fn eye(&self) -> Point3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        Point3::new(
            CAMERA_DISTANCE * cos_pitch * sin_yaw,
            CAMERA_DISTANCE * sin_pitch,
            CAMERA_DISTANCE * cos_pitch * cos_yaw,
        )
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye(), Point3::new(0.0, 0.0, 0.0), Vector3::unit_y())
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(0.005)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub dot_size: f32,
    // Uniforms require 16 byte alignment
    _padding: f32,
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_proj: Matrix4::identity().into(),
            resolution: [1.0, 1.0],
            dot_size: DOT_SIZE,
            _padding: 0.0,
        }
    }

    pub fn update_view_proj(&mut self, orbit: &OrbitController, projection: &OrthoProjection) {
        self.view_proj = (projection.calc_matrix() * orbit.calc_matrix()).into();
        let (width, height) = projection.size();
        self.resolution = [width as f32, height as f32];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU side of the camera.
#[derive(Debug)]
pub struct CameraResources {
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}
