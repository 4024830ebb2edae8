//! Planar grid mesh used as the wave surface.

use bytemuck::{Pod, Zeroable};

/// Vertex data for the wave mesh (position + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Static triangle mesh uploaded once at startup
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Generate a square plane of `resolution x resolution` quads spanning
    /// `[-size/2, size/2]` in x and z at `y = 0`.
    ///
    /// Normals start pointing straight up; the wave shader re-derives them
    /// per frame from the displacement sum. `resolution = 0` yields a single
    /// point with no triangles.
    pub fn plane(resolution: u32, size: f32) -> Self {
        let verts_per_side = resolution + 1;
        let step = if resolution > 0 {
            size / resolution as f32
        } else {
            0.0
        };
        let half_size = size / 2.0;

        let mut vertices = Vec::with_capacity((verts_per_side * verts_per_side) as usize);
        for z in 0..verts_per_side {
            for x in 0..verts_per_side {
                vertices.push(Vertex {
                    position: [
                        x as f32 * step - half_size,
                        0.0,
                        z as f32 * step - half_size,
                    ],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }

        // Counter-clockwise winding seen from above (+Y), so back-face
        // culling keeps the upward face.
        let mut indices = Vec::with_capacity((resolution * resolution * 6) as usize);
        for z in 0..resolution {
            for x in 0..resolution {
                let top_left = z * verts_per_side + x;
                let top_right = top_left + 1;
                let bottom_left = (z + 1) * verts_per_side + x;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    bottom_left,
                    bottom_right,
                    top_right,
                ]);
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_counts() {
        for resolution in [1u32, 2, 7, 64] {
            let mesh = Mesh::plane(resolution, 16.0);
            assert_eq!(
                mesh.vertices.len(),
                ((resolution + 1) * (resolution + 1)) as usize
            );
            assert_eq!(mesh.triangle_count(), (2 * resolution * resolution) as usize);
        }
    }

    #[test]
    fn test_plane_indices_in_bounds() {
        let mesh = Mesh::plane(9, 16.0);
        let vertex_count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_single_quad_corners() {
        let mesh = Mesh::plane(1, 16.0);

        // Grid order: rows in z, columns in x
        assert_eq!(mesh.vertices[0].position, [-8.0, 0.0, -8.0]);
        assert_eq!(mesh.vertices[1].position, [8.0, 0.0, -8.0]);
        assert_eq!(mesh.vertices[2].position, [-8.0, 0.0, 8.0]);
        assert_eq!(mesh.vertices[3].position, [8.0, 0.0, 8.0]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_first_cell_winding() {
        let mesh = Mesh::plane(2, 4.0);

        // top_left = 0, top_right = 1, bottom_left = 3, bottom_right = 4
        assert_eq!(&mesh.indices[0..6], &[0, 3, 1, 3, 4, 1]);
    }

    #[test]
    fn test_normals_point_up() {
        let mesh = Mesh::plane(4, 16.0);
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_zero_resolution_degenerates() {
        let mesh = Mesh::plane(0, 16.0);
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.indices.is_empty());
    }
}
