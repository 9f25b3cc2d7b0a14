// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Which camera rig drives the view
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    #[default]
    Fly,
    Orbit,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flycam-particles")]
#[command(about = "Flying camera over a GPU particle cloud", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of particles to seed
    #[arg(short, long)]
    pub particles: Option<usize>,

    /// Seed for the particle cloud
    #[arg(long)]
    pub seed: Option<u64>,

    /// Camera rig
    #[arg(long, value_enum)]
    pub camera: Option<CameraMode>,

    /// Pointer pixels per degree of rotation
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Moving the pointer down looks up
    #[arg(long = "no-invert-pitch", default_value = "false")]
    pub no_invert_pitch: bool,
}
