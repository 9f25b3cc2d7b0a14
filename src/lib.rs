pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod orbit;
pub mod particles;
pub mod renderer;
pub mod traits;
pub mod types;

pub use camera::{Axis, CameraError, FlyingCamera, ViewBasis};
pub use orbit::OrbitCamera;
pub use traits::ViewSource;
