#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_background_colour() {
    use common::test_utils::{FrameCounter, TestRender, close_to, rgba_at};
    use halftone_tree::{
        context::{BACKGROUND_SRGB, InitContext, background_colour},
        flow::ImageTestResult,
    };

    golden_image_test!(FrameCounter, (), |_: InitContext| TestRender::new(
        |ctx| {
            ctx.clear_colour = background_colour();
            ctx.camera.controller.handle_mouse(120.0, -40.0);
        },
        |ctx, state, texture| {
            if state.frame() == 0 {
                return Ok(ImageTestResult::Waiting);
            }
            for y in 0..ctx.config.height {
                for x in 0..ctx.config.width {
                    let pixel = rgba_at(ctx, texture, x, y);
                    assert!(
                        close_to(pixel, BACKGROUND_SRGB),
                        "pixel ({}, {}) is {:?}",
                        x,
                        y,
                        pixel
                    );
                }
            }
            Ok(ImageTestResult::Passed)
        },
    ));
}
