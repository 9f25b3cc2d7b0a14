use serde::{Deserialize, Serialize};

use crate::camera::FlyingCamera;
use crate::core::{Button, Controller};
use crate::orbit::OrbitCamera;

/// How raw input maps onto camera deltas.
///
/// Pointer motion is divided by `sensitivity` (pixels per degree). Screen Y grows
/// downward, so with `invert_pitch` set moving the pointer down looks down;
/// clearing it flips the vertical look direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    pub sensitivity: f32,
    pub invert_pitch: bool,
    /// World units per second
    pub move_speed: f32,
    /// Degrees per second for keyboard turning
    pub turn_speed: f32,
    /// Only steer with the pointer while the left mouse button is held
    pub drag_to_look: bool,
    /// Orbit zoom in world units per second
    pub zoom_speed: f32,
    /// Orbit pan in world units per pointer pixel per unit of orbit distance
    pub pan_sensitivity: f32,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            invert_pitch: true,
            move_speed: 10.0,
            turn_speed: 90.0,
            drag_to_look: true,
            zoom_speed: 20.0,
            pan_sensitivity: 0.002,
        }
    }
}

impl LookSettings {
    /// Convert a pointer delta in pixels into `(yaw, pitch)` degrees
    pub fn pointer_to_angles(&self, (dx, dy): (f32, f32)) -> (f32, f32) {
        let sign = if self.invert_pitch { -1.0 } else { 1.0 };
        (dx / self.sensitivity, sign * dy / self.sensitivity)
    }

    fn look_active(&self, controller: &dyn Controller) -> bool {
        !self.drag_to_look || controller.is_down(Button::MouseLeft)
    }
}

/// Apply one frame of input to a flying camera
pub fn drive_flying(camera: &mut FlyingCamera, controller: &dyn Controller, dt: f32, settings: &LookSettings) {
    let step = settings.move_speed * dt;
    let turn = settings.turn_speed * dt;

    camera.move_forward(controller.axis(Button::KeyW, Button::KeyS) * step);
    camera.move_right(controller.axis(Button::KeyD, Button::KeyA) * step);
    camera.move_up(controller.axis(Button::Space, Button::Shift) * step);

    let mut yaw = (controller.axis(Button::KeyE, Button::KeyQ)
        + controller.axis(Button::ArrowRight, Button::ArrowLeft))
        * turn;
    let mut pitch = controller.axis(Button::ArrowUp, Button::ArrowDown) * turn;

    if settings.look_active(controller) {
        let (pointer_yaw, pointer_pitch) = settings.pointer_to_angles(controller.pointer_delta());
        yaw += pointer_yaw;
        pitch += pointer_pitch;
    }

    if yaw != 0.0 {
        camera.apply_yaw_delta(yaw);
    }
    if pitch != 0.0 {
        camera.apply_pitch_delta(pitch);
    }
}

/// Apply one frame of input to an orbit camera. W/S zoom, A/D and arrows orbit,
/// right-drag pans the target.
pub fn drive_orbit(camera: &mut OrbitCamera, controller: &dyn Controller, dt: f32, settings: &LookSettings) {
    let turn = settings.turn_speed * dt;

    camera.zoom(controller.axis(Button::KeyW, Button::KeyS) * settings.zoom_speed * dt);

    let mut yaw = (controller.axis(Button::KeyD, Button::KeyA)
        + controller.axis(Button::ArrowRight, Button::ArrowLeft))
        * turn;
    let mut pitch = controller.axis(Button::ArrowUp, Button::ArrowDown) * turn;

    if controller.is_down(Button::MouseRight) {
        // Drag the scene: pointer right moves the target left, pointer down moves it up
        let (dx, dy) = controller.pointer_delta();
        let scale = settings.pan_sensitivity * camera.distance();
        camera.pan(-dx * scale, dy * scale);
    } else if settings.look_active(controller) {
        let (pointer_yaw, pointer_pitch) = settings.pointer_to_angles(controller.pointer_delta());
        yaw += pointer_yaw;
        pitch += pointer_pitch;
    }

    camera.orbit(yaw, pitch);
}
