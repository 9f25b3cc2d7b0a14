use glam::{Mat4, Vec3};
use thiserror::Error;

use crate::traits::ViewSource;
use crate::types::CameraUniform;

/// Pitch limit in degrees. Keeps `forward` away from `up` so the strafe axis never degenerates.
pub const PITCH_LIMIT: f32 = 89.0;

pub const DEFAULT_FOV: f32 = 90.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// World axis selector for translation gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Per-axis translation gates. A disabled axis drops that component of every displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMask {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisMask {
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    fn gate(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            if self.x { v.x } else { 0.0 },
            if self.y { v.y } else { 0.0 },
            if self.z { v.z } else { 0.0 },
        )
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// The `(eye, target, up)` triple a look-at transform needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl ViewBasis {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Flying camera: a position plus a yaw/pitch orientation.
///
/// Axis convention: yaw is the azimuth in the XZ plane measured from +X towards +Z,
/// pitch is the elevation towards +Y. Both are stored in degrees. `yaw = -90`,
/// `pitch = 0` looks down -Z.
///
/// `(yaw, pitch)` is the canonical orientation; `forward` is a cache rebuilt after
/// every rotation and cannot be set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyingCamera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    near: f32,
    far: f32,
    axes: AxisMask,
}

impl FlyingCamera {
    /// Build a camera looking along `forward_hint`.
    ///
    /// The hint does not need to be normalized but must be finite and non-zero.
    /// Angles come from the raw hint since `atan2` is scale-free; very large or very
    /// small hints that cannot be normalized directly fall back to the angle form.
    /// Pitch is derived verbatim and is *not* clamped here: a hint of `(0, 1, 0)`
    /// yields a pitch of 90 degrees. Only `apply_pitch_delta` enforces the limit.
    pub fn new(position: Vec3, forward_hint: Vec3, up: Vec3) -> Result<Self, CameraError> {
        if !forward_hint.is_finite() {
            return Err(CameraError::InvalidArgument("forward hint must be finite"));
        }
        if forward_hint == Vec3::ZERO {
            return Err(CameraError::InvalidArgument("forward hint must be non-zero"));
        }

        let yaw = forward_hint.z.atan2(forward_hint.x).to_degrees();
        let horizontal = forward_hint.x.hypot(forward_hint.z);
        let pitch = forward_hint.y.atan2(horizontal).to_degrees();
        let forward = forward_hint
            .try_normalize()
            .unwrap_or_else(|| direction_from_angles(yaw, pitch));

        Ok(Self {
            position,
            forward,
            up,
            yaw,
            pitch,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            axes: AxisMask::ALL,
        })
    }

    /// Build a camera from explicit angles in degrees. Pitch is clamped to the limit.
    pub fn from_angles(position: Vec3, yaw: f32, pitch: f32, up: Vec3) -> Self {
        let pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position,
            forward: direction_from_angles(yaw, pitch),
            up,
            yaw,
            pitch,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            axes: AxisMask::ALL,
        }
    }

    /// Replace the projection parameters. Only available while constructing.
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Result<Self, CameraError> {
        validate_projection(fov, near, far)?;
        self.fov = fov;
        self.near = near;
        self.far = far;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Strafe axis, `normalize(forward x up)`. Zero if forward and up are parallel.
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize_or_zero()
    }

    pub fn axis_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.axes.x,
            Axis::Y => self.axes.y,
            Axis::Z => self.axes.z,
        }
    }

    pub fn set_axis_enabled(&mut self, axis: Axis, enabled: bool) {
        match axis {
            Axis::X => self.axes.x = enabled,
            Axis::Y => self.axes.y = enabled,
            Axis::Z => self.axes.z = enabled,
        }
    }

    // === Translation ===

    pub fn move_forward(&mut self, delta: f32) {
        self.translate(self.forward, delta);
    }

    pub fn move_backward(&mut self, delta: f32) {
        self.translate(self.forward, -delta);
    }

    pub fn move_right(&mut self, delta: f32) {
        self.translate(self.right(), delta);
    }

    pub fn move_left(&mut self, delta: f32) {
        self.translate(self.right(), -delta);
    }

    pub fn move_up(&mut self, delta: f32) {
        self.translate(self.up, delta);
    }

    pub fn move_down(&mut self, delta: f32) {
        self.translate(self.up, -delta);
    }

    fn translate(&mut self, direction: Vec3, delta: f32) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite translation delta: {}", delta);
            return;
        }
        self.position += self.axes.gate(direction * delta);
    }

    // === Rotation ===

    /// Turn left/right by `delta` degrees. Yaw is never wrapped.
    pub fn apply_yaw_delta(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite yaw delta: {}", delta);
            return;
        }
        self.yaw += delta;
        self.refresh_forward();
    }

    /// Look up/down by `delta` degrees, clamped to +/- `PITCH_LIMIT`.
    pub fn apply_pitch_delta(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite pitch delta: {}", delta);
            return;
        }
        self.pitch = (self.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_forward();
    }

    fn refresh_forward(&mut self) {
        self.forward = direction_from_angles(self.yaw, self.pitch);
    }

    // === Queries ===

    pub fn view_basis(&self) -> ViewBasis {
        ViewBasis {
            eye: self.position,
            target: self.position + self.forward,
            up: self.up,
        }
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }
}

impl ViewSource for FlyingCamera {
    fn view_basis(&self) -> ViewBasis {
        FlyingCamera::view_basis(self)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        FlyingCamera::projection_matrix(self, aspect)
    }
}

/// Check perspective parameters: fov in degrees within (0, 180), finite `0 < near < far`
pub fn validate_projection(fov: f32, near: f32, far: f32) -> Result<(), CameraError> {
    if !(fov > 0.0 && fov < 180.0) {
        return Err(CameraError::InvalidArgument("fov must be in (0, 180) degrees"));
    }
    if !(near > 0.0 && near < far && far.is_finite()) {
        return Err(CameraError::InvalidArgument("clip planes must satisfy 0 < near < far"));
    }
    Ok(())
}

/// Unit direction on the sphere for a yaw (azimuth) and pitch (elevation) in degrees
pub fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
    let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();
    Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
}

/// Pack any view source into the GPU camera uniform
pub fn to_uniform(source: &dyn ViewSource, aspect: f32, point_size: f32) -> CameraUniform {
    let basis = source.view_basis();
    let forward = (basis.target - basis.eye).normalize_or_zero();
    let right = forward.cross(basis.up).normalize_or_zero();
    let up = right.cross(forward);
    let view_proj = source.projection_matrix(aspect) * basis.view_matrix();

    CameraUniform {
        view_proj: view_proj.to_cols_array_2d(),
        position: basis.eye.to_array(),
        point_size,
        right: right.to_array(),
        _pad1: 0.0,
        up: up.to_array(),
        _pad2: 0.0,
    }
}
