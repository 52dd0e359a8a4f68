//! Orbit camera controller
//!
//! Spherical coordinates around a fixed look-at target: azimuth theta,
//! polar phi, distance. The polar angle is clamped away from the poles
//! so a drag of any size can never flip the camera.

use bevy::math::Vec3;

/// Keep-out margin at the spherical poles
pub const POLAR_EPSILON: f32 = 0.1;

/// Camera pose and control parameters for one view
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Azimuth angle theta, radians around the Y axis
    pub azimuth: f32,
    /// Polar angle phi, radians from the +Y axis, always inside
    /// (POLAR_EPSILON, PI - POLAR_EPSILON)
    pub polar: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub target: Vec3,
    /// Radians of rotation per pixel of pointer drag
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub dragging: bool,
}

impl OrbitCamera {
    /// Wide view of the whole rake
    pub fn main_view() -> Self {
        Self {
            azimuth: std::f32::consts::FRAC_PI_4,
            polar: std::f32::consts::FRAC_PI_4,
            distance: 128.0,
            min_distance: 50.0,
            max_distance: 200.0,
            target: Vec3::new(0.0, 5.0, 0.0),
            sensitivity: 0.005,
            zoom_speed: 0.1,
            dragging: false,
        }
    }

    /// Tighter view for the single-wagon detail scene
    pub fn detail_view() -> Self {
        Self {
            azimuth: std::f32::consts::FRAC_PI_2,
            polar: std::f32::consts::FRAC_PI_3,
            distance: 36.0,
            min_distance: 20.0,
            max_distance: 80.0,
            target: Vec3::new(0.0, 4.0, 0.0),
            sensitivity: 0.008,
            zoom_speed: 0.08,
            dragging: false,
        }
    }

    /// Apply a pointer drag delta (pixels). Azimuth wraps freely; polar
    /// clamps to the keep-out band.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * self.sensitivity;
        self.polar = (self.polar - dy * self.sensitivity).clamp(
            POLAR_EPSILON,
            std::f32::consts::PI - POLAR_EPSILON,
        );
    }

    /// Rescale the camera distance along its current direction; positive
    /// `amount` zooms in. Clamped to [min_distance, max_distance].
    pub fn apply_zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Cartesian camera position derived from the spherical coordinates
    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * cos_azimuth, cos_polar, sin_polar * sin_azimuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_clamp_holds_under_extreme_drag() {
        let mut cam = OrbitCamera::main_view();
        cam.apply_drag(0.0, 1_000_000.0);
        assert!(cam.polar >= POLAR_EPSILON);
        cam.apply_drag(0.0, -1_000_000.0);
        assert!(cam.polar <= PI - POLAR_EPSILON);
        // And it never leaves the open interval across many small steps
        for _ in 0..10_000 {
            cam.apply_drag(37.0, -53.0);
            assert!(cam.polar >= POLAR_EPSILON && cam.polar <= PI - POLAR_EPSILON);
        }
    }

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut cam = OrbitCamera::main_view();
        cam.apply_zoom(1e9);
        assert_eq!(cam.distance, cam.min_distance);
        cam.apply_zoom(-1e9);
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn test_detail_view_permits_a_tighter_range() {
        let main = OrbitCamera::main_view();
        let detail = OrbitCamera::detail_view();
        assert!(detail.min_distance < main.min_distance);
        assert!(detail.max_distance < main.max_distance);
    }

    #[test]
    fn test_position_is_on_the_orbit_sphere() {
        let cam = OrbitCamera::main_view();
        let offset = cam.position() - cam.target;
        assert!((offset.length() - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn test_position_at_known_angles() {
        let mut cam = OrbitCamera::main_view();
        cam.azimuth = 0.0;
        cam.polar = std::f32::consts::FRAC_PI_2;
        cam.distance = 100.0;
        cam.target = Vec3::ZERO;
        let pos = cam.position();
        assert!((pos - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3);
    }
}
