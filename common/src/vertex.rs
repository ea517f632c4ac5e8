//! Render-ready vertex and instance types
//!
//! Plain-old-data structs the engine writes each frame and the rendering
//! layer uploads verbatim. Field layout is `#[repr(C)]` so slices can be
//! cast straight into GPU buffers with `bytemuck::cast_slice`.

/// Instance data for one rendered particle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// A single vertex of a rendered polyline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}
