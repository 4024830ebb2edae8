//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{RenderConfig, SurfaceParams};
use crate::rendering::RenderMode;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavescape")]
#[command(about = "Animated ocean surface viewer with an orbit camera", long_about = None)]
pub struct Args {
    /// Cross-layout skybox image (3x2 grid of square tiles); a procedural
    /// gradient sky is generated when omitted
    #[arg(long, value_name = "PATH")]
    pub skybox: Option<PathBuf>,

    /// Wave surface resolution (quads per side)
    #[arg(long, value_name = "N")]
    pub resolution: Option<u32>,

    /// Wave surface side length in meters
    #[arg(long, value_name = "METERS")]
    pub size: Option<f32>,

    /// Seed for the wave parameter bank
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Draw the surface as a height-colored point cloud instead of a lit mesh
    #[arg(long)]
    pub points: bool,
}

impl Args {
    /// Surface parameters with CLI overrides applied
    pub fn surface_params(&self) -> SurfaceParams {
        let mut params = SurfaceParams::default();
        if let Some(resolution) = self.resolution {
            params.resolution = resolution;
        }
        if let Some(size) = self.size {
            params.size_m = size;
        }
        if let Some(seed) = self.seed {
            params.wave_seed = seed;
        }
        params
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.points {
            RenderMode::Points
        } else {
            RenderMode::Surface
        }
    }

    /// Render configuration with CLI overrides applied
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        config
    }
}
