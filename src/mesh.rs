use quiz_core::lat_lon_to_unit;

/// One vertex of the globe: unit-sphere position plus equirectangular uv.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

pub struct SphereMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

/// Texture coordinate of a latitude/longitude on the equirectangular map:
/// u runs west to east from -180°, v runs north to south from 90°.
#[inline]
pub fn lat_lon_to_uv(latitude_deg: f32, longitude_deg: f32) -> [f32; 2] {
    [
        (longitude_deg + 180.0) / 360.0,
        (90.0 - latitude_deg) / 180.0,
    ]
}

/// Latitude/longitude sphere with `rings` bands from pole to pole and
/// `segments` slices around. The seam column is duplicated so u reaches 1.
///
/// Triangles wind counter-clockwise seen from outside; the degenerate
/// triangles touching the poles are left out.
pub fn uv_sphere(rings: u32, segments: u32) -> SphereMesh {
    let rings = rings.max(2);
    let segments = segments.max(3);
    let stride = segments + 1;

    let mut vertices = Vec::with_capacity(((rings + 1) * stride) as usize);
    for i in 0..=rings {
        let lat = 90.0 - 180.0 * i as f32 / rings as f32;
        for j in 0..=segments {
            let lon = -180.0 + 360.0 * j as f32 / segments as f32;
            vertices.push(GlobeVertex {
                position: lat_lon_to_unit(lat, lon).to_array(),
                uv: lat_lon_to_uv(lat, lon),
            });
        }
    }

    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for i in 0..rings {
        for j in 0..segments {
            let a = i * stride + j;
            let b = a + stride;
            let c = a + 1;
            let d = b + 1;
            if i + 1 < rings {
                indices.extend_from_slice(&[a, b, d]);
            }
            if i > 0 {
                indices.extend_from_slice(&[a, d, c]);
            }
        }
    }

    SphereMesh { vertices, indices }
}
