//! halftone-tree
//!
//! An interactive generative-art view: a procedurally generated abstract tree
//! of boxes, rendered orthographically with a gradient halftone shader. Runs
//! natively through winit or in the browser on a WebGL2 canvas.
//!
//! The interesting parts are plain data and carry no GPU types:
//! - `generator`: builds a [`Scene`](data_structures::scene::Scene) from an injected random source
//! - `animation`: per-frame block transforms as a pure function of time and zoom
//! - `camera`: orthographic bounds, zoom clamping, orbit input, camera uniform
//!
//! High-level host modules
//! - `context`: central GPU and window context that owns device/queue/pipeline
//! - `flow`: event loop and the `GraphicsFlow` trait
//! - `render`: render composition, the only place that issues draw calls
//! - `sculpture`: the tree view itself (scene handoff, rebuild, instance upload)
//! - `pipelines`, `resources`: the halftone pipeline and the box mesh
//!

pub mod animation;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod generator;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod rng;
pub mod sculpture;

use crate::{
    flow::{FlowConstructor, GraphicsFlow},
    sculpture::{TreeEvent, TreeFlow, ViewState},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Window and document title prefix.
pub const TITLE: &str = "Abstract Tree";

/// Opens the view and blocks until it is closed.
pub fn start() -> anyhow::Result<()> {
    let tree: FlowConstructor<ViewState, TreeEvent> = Box::new(|init| {
        Box::pin(async move {
            Box::new(TreeFlow::new(init)) as Box<dyn GraphicsFlow<ViewState, TreeEvent>>
        })
    });
    flow::run(vec![tree])
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_web() -> Result<(), JsValue> {
    start().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
