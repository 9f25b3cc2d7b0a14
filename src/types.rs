/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub point_size: f32, // World-space sprite edge length
    pub right: [f32; 3],
    pub _pad1: f32,
    pub up: [f32; 3],
    pub _pad2: f32,
}

/// Particle state for the storage buffer, shared by the compute and draw passes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub velocity: [f32; 3],
    pub _pad2: f32,
    pub color: [f32; 4],
}

impl Particle {
    pub const fn new(position: [f32; 3], velocity: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            _pad1: 0.0,
            velocity,
            _pad2: 0.0,
            color,
        }
    }
}

/// Per-frame simulation parameters for the compute pass
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimParams {
    pub delta_time: f32,
    pub time: f32,
    pub jitter: f32,  // Brownian kick amplitude per sqrt(second)
    pub damping: f32, // Velocity retained per second, 0..=1
    pub count: u32,
    pub _pad: [u32; 3],
}
