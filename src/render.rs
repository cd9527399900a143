//! Render composition.
//!
//! Flows describe what to draw by returning a [`Render`]. The event loop walks
//! it, batches every instanced block draw under the halftone pipeline and runs
//! custom closures in place. This is the only layer that issues draw commands.

use wgpu::RenderPass;

use crate::{context::Context, resources::mesh::BoxMesh};

/// An instanced draw of the box mesh: one instance per block.
#[derive(Clone, Copy)]
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub mesh: &'a BoxMesh,
    pub amount: usize,
}

/// Specifies how a flow should be rendered.
///
/// - `None` renders nothing
/// - `Blocks(Instanced)` renders one instanced batch of blocks
/// - `Composed(Vec<Render>)` recursively renders several renders
/// - `Custom(...)` invokes a closure on the render pass
pub enum Render<'a, 'pass>
where
    'pass: 'a,
{
    None,
    Blocks(Instanced<'a>),
    Composed(Vec<Render<'a, 'pass>>),
    Custom(Box<dyn 'a + FnOnce(&Context, &mut wgpu::RenderPass<'pass>)>),
}

impl<'a, 'pass> Render<'a, 'pass> {
    pub(crate) fn set_pipelines(
        self,
        ctx: &Context,
        render_pass: &mut RenderPass<'pass>,
        blocks: &mut Vec<Instanced<'a>>,
    ) {
        match self {
            Render::Blocks(instanced) => blocks.push(instanced),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(ctx, render_pass, blocks)),
            Render::Custom(f) => f(ctx, render_pass),
            Render::None => (),
        }
    }
}

/// Draws the collected batches. The caller has already set the pipeline.
pub(crate) fn draw_blocks(
    ctx: &Context,
    render_pass: &mut RenderPass<'_>,
    blocks: Vec<Instanced<'_>>,
) {
    render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
    for instanced in blocks {
        if instanced.amount == 0 || instanced.instance.size() == 0 {
            log::warn!("you attempted to render something with zero instances");
            continue;
        }
        render_pass.set_vertex_buffer(0, instanced.mesh.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
        render_pass.set_index_buffer(
            instanced.mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        render_pass.draw_indexed(0..instanced.mesh.num_elements, 0, 0..instanced.amount as u32);
    }
}
