//! Orbit camera rig: azimuth/elevation/radius state plus derived matrices.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::params::{OrbitParams, RenderConfig};

/// Elevation is kept just short of the poles to avoid the look-at up vector
/// degenerating.
pub const ELEVATION_LIMIT_RAD: f32 = 0.495 * PI;

/// Orbit radius bounds (meters)
pub const MIN_RADIUS_M: f32 = 0.3;
pub const MAX_RADIUS_M: f32 = 50.0;

/// Everything the renderers need from the camera for one frame
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    pub model: Mat4,
    pub light_pos: Vec3,
}

/// Mouse-driven orbit camera around the origin
pub struct CameraRig {
    azimuth: f32,
    elevation: f32,
    radius: f32,
    dragging: bool,
    params: OrbitParams,
    light_pos: Vec3,
}

impl CameraRig {
    pub fn new(params: OrbitParams, light_pos: Vec3) -> Self {
        Self {
            azimuth: params.azimuth_rad,
            elevation: params.elevation_rad.clamp(-ELEVATION_LIMIT_RAD, ELEVATION_LIMIT_RAD),
            radius: params.radius_m.clamp(MIN_RADIUS_M, MAX_RADIUS_M),
            dragging: false,
            params,
            light_pos,
        }
    }

    /// Mark the designated pointer button held/released. Cursor motion only
    /// rotates the orbit while the button is held.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply a pointer motion delta in pixels. Ignored outside an active drag.
    /// Azimuth wraps implicitly through trig periodicity; elevation is
    /// clamped short of the poles.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !self.dragging {
            return;
        }
        self.azimuth -= dx * self.params.drag_sensitivity;
        self.elevation = (self.elevation - dy * self.params.drag_sensitivity)
            .clamp(-ELEVATION_LIMIT_RAD, ELEVATION_LIMIT_RAD);
    }

    /// Apply a scroll delta in pixels; radius is clamped, never rejected.
    pub fn zoom(&mut self, dy: f32) {
        self.radius =
            (self.radius - dy * self.params.zoom_sensitivity).clamp(MIN_RADIUS_M, MAX_RADIUS_M);
    }

    /// World-space eye position from the spherical orbit state.
    ///
    /// Elevation is measured from the +Y pole, so `y = r cos(elevation)`.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.elevation.sin() * self.azimuth.sin(),
            self.radius * self.elevation.cos(),
            self.radius * self.elevation.sin() * self.azimuth.cos(),
        )
    }

    /// Recompute the full camera state for the current orbit and canvas size.
    ///
    /// Pure in the orbit state: calling twice without input or resize yields
    /// bit-identical matrices.
    pub fn update(&self, width: u32, height: u32, config: &RenderConfig) -> CameraState {
        let position = self.position();
        let view = Mat4::look_at_rh(position, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh(
            config.fov_radians,
            width as f32 / height as f32,
            config.near_plane_m,
            config.far_plane_m,
        );

        CameraState {
            position,
            view,
            projection,
            model: Mat4::IDENTITY,
            light_pos: self.light_pos,
        }
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Copy of a view matrix with the translation column zeroed, so the skybox
/// cube stays centered on the eye and reads as infinitely distant.
pub fn strip_translation(view: Mat4) -> Mat4 {
    let mut stripped = view;
    stripped.w_axis.x = 0.0;
    stripped.w_axis.y = 0.0;
    stripped.w_axis.z = 0.0;
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(OrbitParams::default(), Vec3::new(0.0, 5.0, 0.0))
    }

    #[test]
    fn test_elevation_clamps_at_poles() {
        let mut rig = rig();
        rig.set_dragging(true);

        // Drive far past the upper bound
        for _ in 0..10_000 {
            rig.drag(0.0, -10.0);
        }
        assert_eq!(rig.elevation(), ELEVATION_LIMIT_RAD);

        // And back past the lower bound
        for _ in 0..10_000 {
            rig.drag(0.0, 10.0);
        }
        assert_eq!(rig.elevation(), -ELEVATION_LIMIT_RAD);

        // Even pinned at the pole the eye stays above y = r cos(limit) > 0
        assert!(rig.position().y > 0.0);
    }

    #[test]
    fn test_radius_clamps() {
        let mut rig = rig();
        rig.zoom(1.0e6);
        assert_eq!(rig.radius(), MIN_RADIUS_M);
        rig.zoom(-1.0e7);
        assert_eq!(rig.radius(), MAX_RADIUS_M);
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut rig = rig();
        let before = rig.position();
        assert!(!rig.is_dragging());
        rig.drag(100.0, 100.0);
        assert_eq!(rig.position(), before);

        rig.set_dragging(true);
        rig.drag(100.0, 100.0);
        assert_ne!(rig.position(), before);
    }

    #[test]
    fn test_spherical_position() {
        let params = OrbitParams {
            azimuth_rad: 0.0,
            elevation_rad: 0.3,
            radius_m: 2.0,
            ..OrbitParams::default()
        };
        let rig = CameraRig::new(params, Vec3::ZERO);
        let pos = rig.position();
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 2.0 * 0.3_f32.cos());
        assert_eq!(pos.z, 2.0 * 0.3_f32.sin());
    }

    #[test]
    fn test_update_is_idempotent() {
        let rig = rig();
        let config = RenderConfig::default();
        let a = rig.update(1280, 720, &config);
        let b = rig.update(1280, 720, &config);
        assert_eq!(a.view.to_cols_array(), b.view.to_cols_array());
        assert_eq!(a.projection.to_cols_array(), b.projection.to_cols_array());
    }

    #[test]
    fn test_strip_translation_zeroes_column() {
        let view = Mat4::look_at_rh(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y);
        let stripped = strip_translation(view);

        assert_eq!(stripped.w_axis.x, 0.0);
        assert_eq!(stripped.w_axis.y, 0.0);
        assert_eq!(stripped.w_axis.z, 0.0);
        assert_eq!(stripped.w_axis.w, view.w_axis.w);

        // Rotation part untouched, input matrix unmodified
        assert_eq!(stripped.x_axis, view.x_axis);
        assert_ne!(view.w_axis.z, 0.0);
    }
}
