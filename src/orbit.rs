use glam::{Mat4, Vec3};

use crate::camera::{
    direction_from_angles, validate_projection, CameraError, ViewBasis, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR,
    PITCH_LIMIT,
};
use crate::traits::ViewSource;

pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 500.0;

/// Arcball-style camera circling a target point.
///
/// Uses the same yaw/pitch convention as `FlyingCamera`; the eye sits `distance`
/// units behind the target along the look direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    up: Vec3,
    fov: f32,
    near: f32,
    far: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            yaw: -90.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Replace the projection parameters, validated like `FlyingCamera::with_projection`
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Result<Self, CameraError> {
        validate_projection(fov, near, far)?;
        self.fov = fov;
        self.near = near;
        self.far = far;
        Ok(self)
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vec3 {
        direction_from_angles(self.yaw, self.pitch)
    }

    pub fn eye(&self) -> Vec3 {
        self.target - self.forward() * self.distance
    }

    /// Rotate around the target. Degrees; pitch is clamped like the flying camera.
    pub fn orbit(&mut self, yaw_delta: f32, pitch_delta: f32) {
        if !(yaw_delta.is_finite() && pitch_delta.is_finite()) {
            log::warn!("Ignoring non-finite orbit delta: ({}, {})", yaw_delta, pitch_delta);
            return;
        }
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move towards (positive) or away from (negative) the target
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite zoom delta: {}", delta);
            return;
        }
        self.distance = (self.distance - delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Slide the target in the screen plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            log::warn!("Ignoring non-finite pan delta: ({}, {})", dx, dy);
            return;
        }
        let forward = self.forward();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        self.target += right * dx + up * dy;
    }

    pub fn view_basis(&self) -> ViewBasis {
        ViewBasis {
            eye: self.eye(),
            target: self.target,
            up: self.up,
        }
    }
}

impl ViewSource for OrbitCamera {
    fn view_basis(&self) -> ViewBasis {
        OrbitCamera::view_basis(self)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }
}
