use crate::math::Vec3;

/// A single vertex: position, projected texture coordinate, smooth
/// normal.
///
/// The order of vertices in [`Mesh::vertices`] is significant -- it is
/// the index space the face list refers to, and it is never reordered
/// after parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: [f32; 2],
    pub normal: Vec3,
}

impl Vertex {
    /// Vertex at a position with uv and normal left for the geometry
    /// passes to fill in.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            uv: [0.0, 0.0],
            normal: [0.0, 0.0, 0.0],
        }
    }
}

/// The fundamental geometry container: an ordered vertex sequence plus
/// a triangle index list.
///
/// Invariants: `indices.len()` is a multiple of 3, and every index is
/// smaller than `vertices.len()`.  Both are enforced by the OBJ parser
/// before a `Mesh` leaves the ingestion stage.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles (indices / 3).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }
}

/// Axis-aligned bounding box over a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Scan all vertex positions and return the axis-aligned bounding
    /// box.  An empty mesh yields a zero-size box at the origin.
    pub fn of(mesh: &Mesh) -> Self {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];

        for v in &mesh.vertices {
            for axis in 0..3 {
                if v.position[axis] < min[axis] {
                    min[axis] = v.position[axis];
                }
                if v.position[axis] > max[axis] {
                    max[axis] = v.position[axis];
                }
            }
        }

        if min[0] == f32::INFINITY {
            return Self {
                min: [0.0; 3],
                max: [0.0; 3],
            };
        }

        Self { min, max }
    }

    /// Extent (max - min) along each axis.
    pub fn extents(&self) -> Vec3 {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Largest extent across the three axes.
    pub fn max_extent(&self) -> f32 {
        let e = self.extents();
        e[0].max(e[1]).max(e[2])
    }
}
