use glam::{Mat4, Vec3};

use crate::camera::ViewBasis;

/// Anything the renderer can read a view from once per frame
pub trait ViewSource {
    /// Get the `(eye, target, up)` triple for the look-at transform
    fn view_basis(&self) -> ViewBasis;

    /// Get the perspective projection for the given aspect ratio
    fn projection_matrix(&self, aspect: f32) -> Mat4;

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4 {
        self.view_basis().view_matrix()
    }

    /// Get the camera position in world space
    fn eye(&self) -> Vec3 {
        self.view_basis().eye
    }
}
