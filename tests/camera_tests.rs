use flycam::camera::{direction_from_angles, PITCH_LIMIT};
use flycam::{Axis, CameraError, FlyingCamera};
use glam::Vec3;

const EPS: f32 = 1e-5;

fn looking_down_z() -> FlyingCamera {
    FlyingCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y).unwrap()
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_forward_stays_unit_length_under_rotation() {
        let mut camera = looking_down_z();
        let deltas = [13.7, -250.0, 0.001, 720.5, -33.3, 89.9, 1e4];

        for (i, delta) in deltas.iter().enumerate() {
            if i % 2 == 0 {
                camera.apply_yaw_delta(*delta);
            } else {
                camera.apply_pitch_delta(*delta);
            }
            let length = camera.forward().length();
            assert!((length - 1.0).abs() < EPS, "|forward| drifted to {}", length);
        }
    }

    #[test]
    fn test_pitch_clamps_at_limits() {
        let mut camera = looking_down_z();

        camera.apply_pitch_delta(1000.0);
        assert_eq!(camera.pitch(), 89.0);

        camera.apply_pitch_delta(-1000.0);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn test_pitch_stays_in_range_for_any_sequence() {
        let mut camera = looking_down_z();
        for step in 0..200 {
            let delta = ((step * 37) % 101) as f32 - 50.0;
            camera.apply_pitch_delta(delta * 3.0);
            assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_full_turn_of_yaw_restores_forward() {
        for start in [-720.0, -90.0, 0.0, 45.0, 1234.5] {
            let mut camera = FlyingCamera::from_angles(Vec3::ZERO, start, 30.0, Vec3::Y);
            let before = camera.forward();

            camera.apply_yaw_delta(360.0);

            assert!(
                (camera.forward() - before).length() < 1e-4,
                "yaw {} -> {:?} vs {:?}",
                start,
                camera.forward(),
                before
            );
            // Yaw itself is not wrapped
            assert!((camera.yaw() - (start + 360.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = looking_down_z();
        for _ in 0..10 {
            camera.apply_yaw_delta(100.0);
        }
        assert!((camera.yaw() - 910.0).abs() < 1e-3);
    }

    #[test]
    fn test_direction_formula() {
        let d = direction_from_angles(90.0, 0.0);
        assert!((d - Vec3::Z).length() < EPS);
        let d = direction_from_angles(0.0, 45.0);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!((d - Vec3::new(h, h, 0.0)).length() < EPS);
    }
}

#[cfg(test)]
mod translation_tests {
    use super::*;

    #[test]
    fn test_move_right_strafes_along_world_x() {
        let mut camera = looking_down_z();
        camera.move_right(1.0);

        let p = camera.position();
        assert!((p.x - 1.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn test_move_left_and_backward_are_opposites() {
        let mut camera = FlyingCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.5, -2.0), Vec3::Y).unwrap();
        let start = camera.position();

        camera.move_forward(4.0);
        camera.move_backward(4.0);
        camera.move_right(2.5);
        camera.move_left(2.5);

        assert!((camera.position() - start).length() < 1e-4);
    }

    #[test]
    fn test_translation_does_not_touch_orientation() {
        let mut camera = FlyingCamera::from_angles(Vec3::ZERO, 17.0, -12.0, Vec3::Y);
        let (forward, up, yaw, pitch) = (camera.forward(), camera.up(), camera.yaw(), camera.pitch());

        camera.move_forward(3.0);
        camera.move_left(1.0);
        camera.move_up(2.0);

        assert_eq!(camera.forward(), forward);
        assert_eq!(camera.up(), up);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
    }

    #[test]
    fn test_disabled_y_axis_drops_vertical_displacement() {
        let mut camera = FlyingCamera::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), Vec3::Y).unwrap();
        camera.set_axis_enabled(Axis::Y, false);
        assert!(!camera.axis_enabled(Axis::Y));

        camera.move_forward(2.0);

        let p = camera.position();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_eq!(p.y, 0.0);
        assert!((p.x - 2.0 * h).abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn test_axis_gate_does_not_affect_rotation() {
        let mut gated = looking_down_z();
        gated.set_axis_enabled(Axis::X, false);
        gated.set_axis_enabled(Axis::Z, false);
        let mut free = looking_down_z();

        gated.apply_yaw_delta(30.0);
        gated.apply_pitch_delta(10.0);
        free.apply_yaw_delta(30.0);
        free.apply_pitch_delta(10.0);

        assert_eq!(gated.forward(), free.forward());
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_plus_x_hint_gives_zero_angles() {
        let camera = FlyingCamera::new(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert!(camera.yaw().abs() < EPS);
        assert!(camera.pitch().abs() < EPS);
    }

    #[test]
    fn test_straight_up_hint_is_not_clamped() {
        let camera = FlyingCamera::new(Vec3::ZERO, Vec3::Y, Vec3::Y).unwrap();
        assert!((camera.pitch() - 90.0).abs() < EPS);

        // The first pitch mutation pulls it back inside the limit
        let mut camera = camera;
        camera.apply_pitch_delta(0.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_position_and_up_stored_verbatim() {
        let up = Vec3::new(0.0, 2.0, 0.0);
        let camera = FlyingCamera::new(Vec3::new(4.0, 5.0, 6.0), Vec3::NEG_Z, up).unwrap();
        assert_eq!(camera.position(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(camera.up(), up);
    }

    #[test]
    fn test_zero_hint_is_rejected() {
        let result = FlyingCamera::new(Vec3::ZERO, Vec3::ZERO, Vec3::Y);
        assert!(matches!(result, Err(CameraError::InvalidArgument(_))));

        let result = FlyingCamera::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0), Vec3::Y);
        assert!(matches!(result, Err(CameraError::InvalidArgument(_))));
    }
}

#[cfg(test)]
mod view_basis_tests {
    use super::*;

    #[test]
    fn test_view_basis_is_eye_target_up() {
        let camera = FlyingCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z, Vec3::Y).unwrap();
        let basis = camera.view_basis();

        assert_eq!(basis.eye, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(basis.target, Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(basis.up, Vec3::Y);
    }

    #[test]
    fn test_view_basis_is_idempotent() {
        let mut camera = looking_down_z();
        camera.apply_yaw_delta(12.0);
        camera.move_forward(3.0);

        assert_eq!(camera.view_basis(), camera.view_basis());
    }

    #[test]
    fn test_view_matrix_maps_target_onto_negative_z() {
        let camera = FlyingCamera::from_angles(Vec3::new(3.0, 1.0, -2.0), 40.0, 20.0, Vec3::Y);
        let basis = camera.view_basis();
        let in_view = basis.view_matrix().transform_point3(basis.target);

        assert!((in_view - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn test_non_finite_deltas_leave_state_untouched() {
        let mut camera = looking_down_z();
        let before = camera.clone();

        camera.apply_yaw_delta(f32::NAN);
        camera.apply_pitch_delta(f32::INFINITY);
        camera.move_forward(f32::NEG_INFINITY);
        camera.move_right(f32::NAN);

        assert_eq!(camera, before);
    }
}
