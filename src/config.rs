use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{FlyingCamera, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR, PITCH_LIMIT};
use crate::cli::{CameraMode, Cli};
use crate::input::LookSettings;
use crate::orbit::OrbitCamera;
use crate::particles::ParticleCloud;

/// Everything a demo session is configured with. Every field has a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub look: LookSettings,
    pub particles: ParticleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flying Camera Particles".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub mode: CameraMode,
    pub position: [f32; 3],
    pub forward: [f32; 3],
    pub up: [f32; 3],
    /// Degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Starting distance for the orbit rig
    pub orbit_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Fly,
            position: [0.0, 0.0, 30.0],
            forward: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            orbit_distance: 30.0,
        }
    }
}

impl CameraConfig {
    /// Flying rig for the demo. A `forward` pointing straight along `up` would leave
    /// the first frames without a strafe axis, so the derived pitch is pulled back
    /// inside the limit before the camera is handed to the render loop.
    pub fn flying_camera(&self) -> Result<FlyingCamera> {
        let position = Vec3::from_array(self.position);
        let up = Vec3::from_array(self.up);
        let mut camera = FlyingCamera::new(position, Vec3::from_array(self.forward), up)?;
        if camera.pitch().abs() > PITCH_LIMIT {
            log::warn!(
                "Configured forward {:?} has pitch {:.1}, clamping to {}",
                self.forward,
                camera.pitch(),
                PITCH_LIMIT
            );
            camera = FlyingCamera::from_angles(position, camera.yaw(), camera.pitch(), up);
        }
        Ok(camera.with_projection(self.fov, self.near, self.far)?)
    }

    /// Orbit rig circling the origin, where the cloud is seeded
    pub fn orbit_camera(&self) -> Result<OrbitCamera> {
        let camera = OrbitCamera::new(Vec3::ZERO, self.orbit_distance)
            .with_projection(self.fov, self.near, self.far)?;
        Ok(camera)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub seed: u64,
    /// Standard deviation of seeded positions
    pub spread: f32,
    /// Standard deviation of seeded velocities
    pub speed: f32,
    pub jitter: f32,
    pub damping: f32,
    pub point_size: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100_000,
            seed: 1,
            spread: 6.0,
            speed: 0.5,
            jitter: 1.5,
            damping: 0.6,
            point_size: 0.08,
        }
    }
}

impl ParticleConfig {
    pub fn seed_cloud(&self) -> Result<ParticleCloud> {
        let cloud = ParticleCloud::gaussian(Vec3::ZERO, self.count, self.spread, self.speed, self.seed)?;
        Ok(cloud)
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// File (if given) then command-line overrides
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would poison per-frame input math
    pub fn validate(&self) -> Result<()> {
        let look = &self.look;
        if !(look.sensitivity.is_finite() && look.sensitivity > 0.0) {
            bail!("look.sensitivity must be a positive number, got {}", look.sensitivity);
        }
        if !(look.pan_sensitivity.is_finite() && look.pan_sensitivity >= 0.0) {
            bail!("look.pan_sensitivity must be non-negative, got {}", look.pan_sensitivity);
        }
        for (name, value) in [
            ("look.move_speed", look.move_speed),
            ("look.turn_speed", look.turn_speed),
            ("look.zoom_speed", look.zoom_speed),
        ] {
            if !value.is_finite() {
                bail!("{} must be finite, got {}", name, value);
            }
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(count) = cli.particles {
            self.particles.count = count;
        }
        if let Some(seed) = cli.seed {
            self.particles.seed = seed;
        }
        if let Some(mode) = cli.camera {
            self.camera.mode = mode;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.look.sensitivity = sensitivity;
        }
        if cli.no_invert_pitch {
            self.look.invert_pitch = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = DemoConfig::from_json(r#"{ "particles": { "count": 16 }, "look": { "invert_pitch": false } }"#)
            .unwrap();
        assert_eq!(config.particles.count, 16);
        assert_eq!(config.particles.spread, ParticleConfig::default().spread);
        assert!(!config.look.invert_pitch);
        assert_eq!(config.look.sensitivity, 3.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_camera_mode_parses_lowercase() {
        let config = DemoConfig::from_json(r#"{ "camera": { "mode": "orbit" } }"#).unwrap();
        assert_eq!(config.camera.mode, CameraMode::Orbit);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = DemoConfig::from_json(r#"{ "particles": { "count": 16, "seed": 3 } }"#).unwrap();
        let cli = Cli {
            particles: Some(32),
            camera: Some(CameraMode::Orbit),
            no_invert_pitch: true,
            ..Default::default()
        };

        config.apply_cli(&cli);
        assert_eq!(config.particles.count, 32);
        assert_eq!(config.particles.seed, 3);
        assert_eq!(config.camera.mode, CameraMode::Orbit);
        assert!(!config.look.invert_pitch);
    }

    #[test]
    fn test_zero_forward_is_reported() {
        let config = DemoConfig::from_json(r#"{ "camera": { "forward": [0, 0, 0] } }"#).unwrap();
        let err = config.camera.flying_camera().unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_zero_sensitivity_is_rejected() {
        let config = DemoConfig::from_json(r#"{ "look": { "sensitivity": 0 } }"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sensitivity"));

        let mut config = DemoConfig::default();
        config.apply_cli(&Cli {
            sensitivity: Some(-2.0),
            ..Default::default()
        });
        assert!(config.validate().is_err());
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_orbit_rig_uses_configured_projection() {
        let config = DemoConfig::from_json(r#"{ "camera": { "mode": "orbit", "fov": 75 } }"#).unwrap();
        let orbit = config.camera.orbit_camera().unwrap();
        assert_eq!(orbit.fov(), 75.0);

        let bad = DemoConfig::from_json(r#"{ "camera": { "fov": 0 } }"#).unwrap();
        assert!(bad.camera.orbit_camera().is_err());
    }

    #[test]
    fn test_straight_up_forward_is_clamped_for_rendering() {
        let config = DemoConfig::from_json(r#"{ "camera": { "forward": [0, 1, 0] } }"#).unwrap();
        let camera = config.camera.flying_camera().unwrap();
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert!(camera.right().length() > 0.5);

        let uniform = crate::camera::to_uniform(&camera, 1.0, 0.1);
        assert!(uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
        assert!(uniform.up.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = DemoConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }
}
