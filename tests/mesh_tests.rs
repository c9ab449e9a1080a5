// Host-side tests for the globe mesh and texture coordinates.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}

use glam::Vec3;
use mesh::*;
use quiz_core::{lat_lon_to_unit, CameraFrame};

fn position(v: &GlobeVertex) -> Vec3 {
    Vec3::from_array(v.position)
}

#[test]
fn uv_follows_the_equirectangular_layout() {
    assert_eq!(lat_lon_to_uv(90.0, -180.0), [0.0, 0.0]);
    assert_eq!(lat_lon_to_uv(-90.0, 180.0), [1.0, 1.0]);
    assert_eq!(lat_lon_to_uv(0.0, 0.0), [0.5, 0.5]);
    let [u, v] = lat_lon_to_uv(45.0, 90.0);
    assert!((u - 0.75).abs() < 1e-6);
    assert!((v - 0.25).abs() < 1e-6);
}

#[test]
fn sphere_has_expected_size_and_unit_radius() {
    let (rings, segments) = (8, 16);
    let sphere = uv_sphere(rings, segments);
    assert_eq!(sphere.vertices.len() as u32, (rings + 1) * (segments + 1));
    // two triangles per quad, minus one per quad on each polar band
    assert_eq!(sphere.indices.len() as u32, 3 * (2 * rings * segments - 2 * segments));
    for v in &sphere.vertices {
        assert!((position(v).length() - 1.0).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
    assert!(sphere
        .indices
        .iter()
        .all(|&i| (i as usize) < sphere.vertices.len()));
}

#[test]
fn vertices_agree_with_the_camera_convention() {
    let sphere = uv_sphere(6, 12);
    for v in &sphere.vertices {
        let lat = 90.0 - v.uv[1] * 180.0;
        let lon = v.uv[0] * 360.0 - 180.0;
        let expected = lat_lon_to_unit(lat, lon);
        assert!((position(v) - expected).length() < 1e-4, "{v:?}");
    }
}

#[test]
fn triangles_wind_counter_clockwise_from_outside() {
    let sphere = uv_sphere(10, 20);
    for tri in sphere.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| position(&sphere.vertices[i as usize]));
        let normal = (b - a).cross(c - a);
        assert!(normal.length() > 1e-7, "degenerate triangle {tri:?}");
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "inward-facing triangle {tri:?}");
    }
}

#[test]
fn camera_rotation_brings_a_country_to_the_front() {
    let sphere = uv_sphere(32, 64);
    let frame = CameraFrame::new(2.4, 48.86, 2.35, 1.5, 45.0);
    let target = lat_lon_to_uv(48.86, 2.35);
    // the vertex nearest Paris ends up nearest the camera
    let nearest = sphere
        .vertices
        .iter()
        .min_by(|a, b| {
            let da = (a.uv[0] - target[0]).powi(2) + (a.uv[1] - target[1]).powi(2);
            let db = (b.uv[0] - target[0]).powi(2) + (b.uv[1] - target[1]).powi(2);
            da.total_cmp(&db)
        })
        .unwrap();
    let rotated = frame.rotation.transform_point3(position(nearest));
    assert!(rotated.z > 0.99, "{rotated:?}");
}
