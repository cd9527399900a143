/**
 * GPU resources built in code rather than loaded from files.
 */
pub mod mesh;
