use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use flycam::camera::{self, FlyingCamera};
use flycam::cli::{CameraMode, Cli};
use flycam::config::DemoConfig;
use flycam::core::{Clock, FpsCounter, WinitController};
use flycam::input::{drive_flying, drive_orbit};
use flycam::orbit::OrbitCamera;
use flycam::particles::ParticleCloud;
use flycam::renderer::ParticleRenderer;
use flycam::traits::ViewSource;
use flycam::types::SimParams;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// The active camera scheme
enum Rig {
    Fly(FlyingCamera),
    Orbit(OrbitCamera),
}

impl Rig {
    fn view_source(&self) -> &dyn ViewSource {
        match self {
            Rig::Fly(camera) => camera as &dyn ViewSource,
            Rig::Orbit(camera) => camera,
        }
    }
}

/// GPU half of the session, created once the event loop hands us a window
struct Surface {
    window: Arc<Window>,
    renderer: ParticleRenderer,
}

/// All per-session state, passed by reference into the event handlers
struct DemoContext {
    config: DemoConfig,
    rig: Rig,
    cloud: ParticleCloud,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
    surface: Option<Surface>,
}

impl DemoContext {
    fn new(config: DemoConfig) -> Result<Self> {
        let rig = match config.camera.mode {
            CameraMode::Fly => Rig::Fly(config.camera.flying_camera()?),
            CameraMode::Orbit => Rig::Orbit(config.camera.orbit_camera()?),
        };
        let cloud = config.particles.seed_cloud()?;
        log::info!(
            "Seeded {} particles (spread {}, seed {})",
            cloud.len(),
            config.particles.spread,
            config.particles.seed
        );

        Ok(Self {
            config,
            rig,
            cloud,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            surface: None,
        })
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window_config = &self.config.window;
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(window_config.title.as_str())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        window_config.width,
                        window_config.height,
                    )),
            )?,
        );
        let renderer = pollster::block_on(ParticleRenderer::new(window.clone(), &self.cloud))?;
        self.surface = Some(Surface { window, renderer });
        Ok(())
    }

    /// Input, then compute, then draw
    fn frame(&mut self) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::info!("FPS: {:.1}", fps);
        }

        let look = &self.config.look;
        match &mut self.rig {
            Rig::Fly(camera) => drive_flying(camera, &self.controller, delta, look),
            Rig::Orbit(camera) => drive_orbit(camera, &self.controller, delta, look),
        }
        self.controller.reset_deltas();

        let Some(surface) = &mut self.surface else {
            return;
        };

        let uniform = camera::to_uniform(
            self.rig.view_source(),
            surface.renderer.aspect(),
            self.config.particles.point_size,
        );
        let params = SimParams::new(
            delta,
            self.clock.elapsed(),
            self.config.particles.jitter,
            self.config.particles.damping,
            surface.renderer.particle_count(),
        );
        log::trace!("eye {:?}", self.rig.view_source().eye());

        match surface.renderer.render(&uniform, &params) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = surface.renderer.size();
                surface.renderer.resize(size);
            }
            Err(e) => log::error!("Render error: {}", e),
        }
    }
}

struct App {
    context: DemoContext,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.surface.is_none() {
            if let Err(e) = self.context.create_surface(event_loop) {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.context.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(surface) = &mut self.context.surface {
                    surface.renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.context.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(surface) = &self.context.surface {
            surface.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DemoConfig::resolve(&cli)?;
    let mut app = App {
        context: DemoContext::new(config)?,
    };

    let event_loop = EventLoop::new()?;
    log::info!("Controls: WASD move, Space/Shift up/down, Q/E or arrows turn, drag to look, right-drag pans in orbit mode, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
