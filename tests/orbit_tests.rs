use flycam::orbit::{MAX_DISTANCE, MIN_DISTANCE};
use flycam::{OrbitCamera, ViewSource};
use glam::Vec3;

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_eye_keeps_distance_while_orbiting() {
        let target = Vec3::new(1.0, -2.0, 3.0);
        let mut orbit = OrbitCamera::new(target, 12.0);

        for _ in 0..20 {
            orbit.orbit(23.0, 7.0);
            let distance = orbit.eye().distance(target);
            assert!((distance - 12.0).abs() < 1e-3, "distance drifted to {}", distance);
        }
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 5.0);
        orbit.orbit(0.0, 500.0);
        assert_eq!(orbit.pitch(), 89.0);
        orbit.orbit(0.0, -500.0);
        assert_eq!(orbit.pitch(), -89.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::new(Vec3::ZERO, 5.0);
        orbit.zoom(100.0);
        assert_eq!(orbit.distance(), MIN_DISTANCE);
        orbit.zoom(-1e6);
        assert_eq!(orbit.distance(), MAX_DISTANCE);
    }

    #[test]
    fn test_view_basis_targets_the_orbit_centre() {
        let target = Vec3::new(0.0, 4.0, 0.0);
        let orbit = OrbitCamera::new(target, 8.0);
        let basis = orbit.view_basis();

        assert_eq!(basis.target, target);
        assert_eq!(basis.up, Vec3::Y);
        assert_eq!(ViewSource::eye(&orbit), basis.eye);
    }
}
