use cgmath::Vector4;
use halftone_tree::camera::{
    DEPTH_RANGE, DOT_SIZE, OrbitController, OrthoProjection, ZOOM_MAX, ZOOM_MIN, Zoom,
    CameraUniform, wheel_delta,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use winit::{dpi::PhysicalPosition, event::MouseScrollDelta};

fn assert_close(actual: f32, expected: f32, epsilon: f32) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "{} is not within {} of {}",
        actual,
        epsilon,
        expected
    );
}

#[test]
fn wide_viewport_fixes_the_height() {
    let bounds = OrthoProjection::new(1600, 800).bounds();
    assert_eq!(bounds.half_height(), 600.0);
    assert_eq!(bounds.half_width(), 1200.0);
}

#[test]
fn tall_viewport_fixes_the_width() {
    let bounds = OrthoProjection::new(800, 1600).bounds();
    assert_eq!(bounds.half_width(), 500.0);
    assert_eq!(bounds.half_height(), 1000.0);
}

#[test]
fn square_viewport_uses_the_nominal_width() {
    let bounds = OrthoProjection::new(900, 900).bounds();
    assert_eq!(bounds.half_width(), 500.0);
    assert_eq!(bounds.half_height(), 500.0);
}

#[test]
fn bounds_are_symmetric() {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..500 {
        let w = rng.gen_range(1..4000);
        let h = rng.gen_range(1..4000);
        let b = OrthoProjection::new(w, h).bounds();
        assert_eq!(b.left, -b.right);
        assert_eq!(b.bottom, -b.top);
        assert_eq!(b.near, -DEPTH_RANGE);
        assert_eq!(b.far, DEPTH_RANGE);
        // never shrinks below the nominal volume
        assert!(b.half_height() >= 500.0);
        assert!(b.half_width() >= 500.0);
    }
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut projection = OrthoProjection::new(1600, 800);
    projection.resize(0, 800);
    projection.resize(1600, 0);
    assert_eq!(projection.size(), (1600, 800));
    projection.resize(800, 1600);
    assert_eq!(projection.size(), (800, 1600));
}

#[test]
fn projection_puts_the_apex_at_the_top_of_the_screen() {
    let projection = OrthoProjection::new(1600, 800);
    let clip = projection.calc_matrix() * Vector4::new(1200.0, -600.0, 0.0, 1.0);
    assert_close(clip.x, 1.0, 1e-5);
    assert_close(clip.y, 1.0, 1e-5);
    assert_close(clip.z, 0.5, 1e-5);
    let clip = projection.calc_matrix() * Vector4::new(-1200.0, 600.0, 0.0, 1.0);
    assert_close(clip.x, -1.0, 1e-5);
    assert_close(clip.y, -1.0, 1e-5);
}

#[test]
fn scrolling_up_zooms_in() {
    let mut zoom = Zoom::default();
    assert_eq!(zoom.level(), 1.0);
    assert_close(zoom.apply_wheel(-1000.0), 2.0, 1e-6);
}

#[test]
fn zoom_is_clamped() {
    let mut zoom = Zoom::default();
    assert_eq!(zoom.apply_wheel(-1_000_000.0), ZOOM_MAX);
    assert_eq!(zoom.apply_wheel(1_000_000.0), ZOOM_MIN);
    assert_eq!(zoom.apply_wheel(f32::NAN), ZOOM_MIN);
    assert_eq!(Zoom::new(42.0).level(), ZOOM_MAX);
}

#[test]
fn any_wheel_sequence_stays_in_range() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut zoom = Zoom::default();
    for _ in 0..10_000 {
        let level = zoom.apply_wheel(rng.gen_range(-3000.0..3000.0));
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&level));
    }
}

#[test]
fn winit_scroll_follows_the_browser_sign() {
    assert_eq!(wheel_delta(&MouseScrollDelta::LineDelta(0.0, 1.0)), -100.0);
    assert_eq!(wheel_delta(&MouseScrollDelta::LineDelta(0.0, -2.0)), 200.0);
    assert_eq!(
        wheel_delta(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0))),
        -40.0
    );
}

#[test]
fn orbit_pitch_is_limited() {
    let mut orbit = OrbitController::new(0.01);
    orbit.handle_mouse(0.0, 100_000.0);
    assert!(orbit.pitch().0 < std::f32::consts::FRAC_PI_2);
    orbit.handle_mouse(0.0, -200_000.0);
    assert!(orbit.pitch().0 > -std::f32::consts::FRAC_PI_2);
}

#[test]
fn orbit_starts_in_front_of_the_origin() {
    let orbit = OrbitController::default();
    let eye = orbit.eye();
    assert_close(eye.x, 0.0, 1e-4);
    assert_close(eye.y, 0.0, 1e-4);
    assert!(eye.z > 0.0 && eye.z < DEPTH_RANGE);
}

#[test]
fn uniform_carries_resolution_and_dot_size() {
    let mut uniform = CameraUniform::new();
    uniform.update_view_proj(&OrbitController::default(), &OrthoProjection::new(1280, 720));
    assert_eq!(uniform.resolution, [1280.0, 720.0]);
    assert_eq!(uniform.dot_size, DOT_SIZE);
    assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
}

#[test]
fn only_the_left_button_drives_the_orbit() {
    use halftone_tree::context::MouseButtonState;
    use winit::event::{ElementState, MouseButton};

    assert_eq!(
        MouseButtonState::after(MouseButton::Left, ElementState::Pressed),
        Some(MouseButtonState::Left)
    );
    assert_eq!(
        MouseButtonState::after(MouseButton::Left, ElementState::Released),
        Some(MouseButtonState::None)
    );
    // releasing another button mid-drag keeps the drag going
    assert_eq!(MouseButtonState::after(MouseButton::Right, ElementState::Released), None);
    assert_eq!(MouseButtonState::after(MouseButton::Middle, ElementState::Pressed), None);
}
