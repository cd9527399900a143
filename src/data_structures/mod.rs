//! Engine data structures: blocks, scenes, instances and textures.
//!
//! - `block` is a single immutable box of the sculpture
//! - `scene` is the ordered result of one generation pass
//! - `instance` holds per-instance transformation data and its GPU layout
//! - `texture` contains the depth texture helper

pub mod block;
pub mod instance;
pub mod scene;
pub mod texture;
