//! Camera matrices for looking at a point on the globe.
//!
//! The globe itself rotates so that the target latitude/longitude faces +Z;
//! the camera stays on the +Z axis at the animated distance.

use glam::{Mat4, Vec3};

use crate::animate::Animated;
use crate::config::QuizConfig;
use crate::constants::{Z_FAR, Z_NEAR};
use crate::countries::Country;

/// Unit-sphere position of a latitude/longitude in degrees.
///
/// `(0, 0)` maps to +Z, the north pole to +Y, and longitude 90° east to +X.
pub fn lat_lon_to_unit(latitude_deg: f32, longitude_deg: f32) -> Vec3 {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub rotation: Mat4,
    pub camera: Mat4,
    pub perspective: Mat4,
    pub distance: f32,
}

impl CameraFrame {
    pub fn new(
        distance: f32,
        latitude_deg: f32,
        longitude_deg: f32,
        aspect: f32,
        fovy_deg: f32,
    ) -> Self {
        let rotation = Mat4::from_rotation_x(latitude_deg.to_radians())
            * Mat4::from_rotation_y(-longitude_deg.to_radians());
        let camera = Mat4::look_at_rh(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y);
        let perspective =
            Mat4::perspective_rh(fovy_deg.to_radians(), aspect.max(1e-3), Z_NEAR, Z_FAR);
        Self {
            rotation,
            camera,
            perspective,
            distance,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.perspective * self.camera
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            rotation: self.rotation.to_cols_array_2d(),
            distance: [self.distance, 0.0, 0.0, 0.0],
        }
    }
}

/// The three springs steering the camera toward the current country.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub distance: Animated,
    pub latitude: Animated,
    pub longitude: Animated,
}

impl CameraRig {
    /// Rig already facing `country`, zooming in from `config.intro_distance`.
    pub fn new(config: &QuizConfig, country: &Country) -> Self {
        let mut distance = Animated::new(config.distance_spring, config.intro_distance);
        distance.retarget(country.scale.camera_distance());
        Self {
            distance,
            latitude: Animated::new(config.latitude_spring, country.latitude),
            longitude: Animated::new(config.longitude_spring, country.longitude),
        }
    }

    /// Swing toward `country` without dropping the current motion.
    pub fn retarget(&mut self, country: &Country) {
        self.distance.retarget(country.scale.camera_distance());
        self.latitude.retarget(country.latitude);
        self.longitude.retarget(country.longitude);
    }

    pub fn step(&mut self, delta_ms: f32) {
        self.distance.step(delta_ms);
        self.latitude.step(delta_ms);
        self.longitude.step(delta_ms);
    }

    pub fn is_active(&self) -> bool {
        self.distance.is_active() || self.latitude.is_active() || self.longitude.is_active()
    }

    pub fn frame(&self, aspect: f32, fovy_deg: f32) -> CameraFrame {
        CameraFrame::new(
            self.distance.get(),
            self.latitude.get(),
            self.longitude.get(),
            aspect,
            fovy_deg,
        )
    }
}

/// GPU layout of [`CameraFrame`].
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub rotation: [[f32; 4]; 4],
    pub distance: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_brings_target_to_front() {
        for &(lat, lon) in &[(0.0, 0.0), (37.1, -95.7), (-40.9, 174.9), (61.5, 105.3)] {
            let frame = CameraFrame::new(2.0, lat, lon, 1.5, 45.0);
            let p = frame.rotation.transform_vector3(lat_lon_to_unit(lat, lon));
            assert!((p - Vec3::Z).length() < 1e-4, "({lat},{lon}) -> {p:?}");
        }
    }

    #[test]
    fn front_of_globe_is_in_view() {
        let frame = CameraFrame::new(3.0, 10.0, 20.0, 1.0, 45.0);
        let front = frame.rotation.transform_point3(lat_lon_to_unit(10.0, 20.0));
        let clip = frame.view_projection() * front.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
