//! Parameter definitions with physical units and documented semantics.

use std::f32::consts::FRAC_PI_4;

/// Wave surface generation parameters
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Grid resolution (quads per side; vertices per side is resolution + 1)
    pub resolution: u32,

    /// Side length of the plane in world units (meters)
    pub size_m: f32,

    /// Seed for the wave parameter bank random draws
    pub wave_seed: u64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            resolution: 512,
            size_m: 16.0,
            wave_seed: 42,
        }
    }
}

/// Initial orbit state and input sensitivities
#[derive(Debug, Clone)]
pub struct OrbitParams {
    /// Starting azimuth around the +Y axis (radians)
    pub azimuth_rad: f32,

    /// Starting elevation measured from the +Y pole (radians)
    pub elevation_rad: f32,

    /// Starting distance from the origin (meters)
    pub radius_m: f32,

    /// Orbit rotation per pixel of drag (radians per pixel)
    pub drag_sensitivity: f32,

    /// Radius change per pixel of scroll (meters per pixel)
    pub zoom_sensitivity: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            azimuth_rad: 0.0,
            elevation_rad: 1.2,
            radius_m: 5.0,
            drag_sensitivity: 0.01,
            zoom_sensitivity: 0.5 * 0.01,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (radians)
    pub fov_radians: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_radians: FRAC_PI_4,
            near_plane_m: 0.1,
            far_plane_m: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Fragment shading parameters shared by the wave pass
#[derive(Debug, Clone)]
pub struct ShadingParams {
    /// World-space point light position (meters)
    pub light_pos_m: [f32; 3],

    /// Mie scattering coefficient for the horizon haze
    pub mie_coefficient: f32,

    /// How aggressively reflections blur toward the horizon
    pub horizon_blur_strength: f32,

    /// World-space height of the horizon line (meters)
    pub horizon_height_m: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            light_pos_m: [0.0, 5.0, 0.0],
            mie_coefficient: 0.02,
            horizon_blur_strength: 5.0,
            horizon_height_m: 0.0,
        }
    }
}
