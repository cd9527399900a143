#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_rebuild_and_draw_the_tree_inside_the_background() {
    use common::test_utils::{Frame, close_to, rgba_at};
    use halftone_tree::{
        context::{BACKGROUND_SRGB, Context, InitContext},
        flow::{GraphicsFlow, ImageTestResult, Out},
        render::Render,
        sculpture::{TreeEvent, TreeFlow, ViewState, rebuild_request},
    };
    use instant::Duration;
    use winit::event::{DeviceEvent, WindowEvent};

    struct RebuildingTree {
        tree: TreeFlow,
        frames: u32,
    }

    impl GraphicsFlow<ViewState, TreeEvent> for RebuildingTree {
        fn on_init(&mut self, ctx: &mut Context, state: &mut ViewState) -> Out<TreeEvent> {
            self.tree.on_init(ctx, state)
        }

        fn on_update(
            &mut self,
            ctx: &Context,
            state: &mut ViewState,
            dt: Duration,
        ) -> Out<TreeEvent> {
            self.frames += 1;
            let out = self.tree.on_update(ctx, state, dt);
            // ask for a new scene once the first one is on screen
            if self.frames == 2 {
                return rebuild_request();
            }
            out
        }

        fn on_device_events(
            &mut self,
            ctx: &Context,
            state: &mut ViewState,
            event: &DeviceEvent,
        ) -> Out<TreeEvent> {
            self.tree.on_device_events(ctx, state, event)
        }

        fn on_window_events(
            &mut self,
            ctx: &Context,
            state: &mut ViewState,
            event: &WindowEvent,
        ) -> Out<TreeEvent> {
            self.tree.on_window_events(ctx, state, event)
        }

        fn on_custom_events(
            &mut self,
            ctx: &Context,
            state: &mut ViewState,
            event: TreeEvent,
        ) -> Option<TreeEvent> {
            self.tree.on_custom_events(ctx, state, event)
        }

        fn on_render<'pass>(&self) -> Render<'_, 'pass> {
            self.tree.on_render()
        }

        fn render_to_texture(
            &self,
            ctx: &Context,
            state: &mut ViewState,
            texture: &mut Frame,
        ) -> Result<ImageTestResult, anyhow::Error> {
            if state.generation == 0 {
                return Ok(ImageTestResult::Waiting);
            }
            assert!(state.style.is_some());
            assert_eq!(state.style, Some(self.tree.scene().style()));

            // the apex sits well below the top edge, so the corners stay empty
            let (w, h) = (ctx.config.width, ctx.config.height);
            for (x, y) in [(0, 0), (w - 1, 0)] {
                let pixel = rgba_at(ctx, texture, x, y);
                assert!(close_to(pixel, BACKGROUND_SRGB), "corner {:?}", pixel);
            }

            let drawn = (0..h)
                .flat_map(|y| (0..w).map(move |x| (x, y)))
                .filter(|&(x, y)| !close_to(rgba_at(ctx, texture, x, y), BACKGROUND_SRGB))
                .count();
            assert!(drawn > 0, "no block reached the framebuffer");
            Ok(ImageTestResult::Passed)
        }
    }

    golden_image_test!(ViewState, TreeEvent, |init: InitContext| RebuildingTree {
        tree: TreeFlow::new(init),
        frames: 0,
    });
}
