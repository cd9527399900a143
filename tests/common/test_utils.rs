#[cfg(feature = "integration-tests")]
use halftone_tree::{
    context::Context,
    flow::{GraphicsFlow, ImageTestResult, Out},
    render::Render,
};
#[cfg(feature = "integration-tests")]
use instant::Duration;
#[cfg(feature = "integration-tests")]
use winit::event::{DeviceEvent, WindowEvent};

pub(crate) type Frame = image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>;

#[derive(Default)]
pub(crate) struct FrameCounter(pub(crate) u32);

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

/// Reads a pixel as RGBA regardless of whether the surface stores BGRA.
#[cfg(feature = "integration-tests")]
pub(crate) fn rgba_at(ctx: &Context, texture: &Frame, x: u32, y: u32) -> [u8; 4] {
    let [a, b, c, d] = texture.get_pixel(x, y).0;
    match ctx.config.format {
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb => [c, b, a, d],
        _ => [a, b, c, d],
    }
}

/// Whether `pixel` matches `expected` within one step per channel.
pub(crate) fn close_to(pixel: [u8; 4], expected: [u8; 3]) -> bool {
    pixel
        .iter()
        .zip(expected.iter())
        .all(|(p, e)| p.abs_diff(*e) <= 1)
}

#[cfg(feature = "integration-tests")]
type Validate = dyn Fn(&Context, &mut FrameCounter, &mut Frame) -> Result<ImageTestResult, anyhow::Error>;

/// A flow that draws nothing itself: it configures the context once and checks every frame.
#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender {
    setup: Box<dyn Fn(&mut Context)>,
    validate: Box<Validate>,
}

#[cfg(feature = "integration-tests")]
impl TestRender {
    pub(crate) fn new(
        setup: impl Fn(&mut Context) + 'static,
        validate: impl Fn(&Context, &mut FrameCounter, &mut Frame) -> Result<ImageTestResult, anyhow::Error>
        + 'static,
    ) -> Self {
        Self {
            setup: Box::new(setup),
            validate: Box::new(validate),
        }
    }
}

#[cfg(feature = "integration-tests")]
impl GraphicsFlow<FrameCounter, ()> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, _: &mut FrameCounter) -> Out<()> {
        (self.setup)(ctx);
        Out::Empty
    }

    fn on_update(&mut self, _: &Context, state: &mut FrameCounter, _: Duration) -> Out<()> {
        state.progress();
        Out::Empty
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &DeviceEvent,
    ) -> Out<()> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &WindowEvent,
    ) -> Out<()> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut FrameCounter, event: ()) -> Option<()> {
        Some(event)
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        Render::None
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut Frame,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

#[macro_export]
macro_rules! golden_image_test {
    ($state:ty, $event:ty, $graphics_elem:expr) => {{
        use halftone_tree::flow::{FlowConstructor, GraphicsFlow};
        let constructor: FlowConstructor<$state, $event> = Box::new(|init| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<$state, $event>> =
                    Box::new(($graphics_elem)(init));
                g_flow
            })
        });

        halftone_tree::flow::run(vec![constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
