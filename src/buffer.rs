use crate::{FaceId, FaceMesh};

use tracing::warn;

/// Flattened vertex data for drawing a [`FaceMesh`], refilled once per frame by the caller.
///
/// Each face contributes four vertices in perimeter order, two triangles wound the same way as the perimeter, and four
/// outline segments. This buffer can be reused between frames in order to avoid reallocations.
#[derive(Clone, Debug, Default)]
pub struct FaceMeshBuffer {
    pub positions: Vec<[f32; 3]>,
    /// The face normal, repeated for all four vertices.
    pub normals: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle list, 6 indices per face.
    pub indices: Vec<u32>,
    /// Line list, 8 indices per face.
    pub line_indices: Vec<u32>,
    /// One entry per face, in mesh order.
    pub face_ids: Vec<FaceId>,
    /// One entry per face, in mesh order. Renderers use this to highlight the picked face.
    pub selected: Vec<bool>,
}

impl FaceMeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
        self.line_indices.clear();
        self.face_ids.clear();
        self.selected.clear();
    }

    /// Replaces the contents with `mesh`.
    ///
    /// Indices are `u32`, so faces past the first `u32::MAX / 4` are left out.
    pub fn fill(&mut self, mesh: &FaceMesh) {
        self.reset();

        for face in mesh.faces() {
            let Some(start) = first_vertex_index(self.positions.len()) else {
                warn!(faces = mesh.len(), drawn = self.num_quads(), "mesh too large for u32 indices");
                break;
            };
            let normal = face.normal().to_array();
            for vertex in face.vertices() {
                self.positions.push(vertex.position.to_array());
                self.normals.push(normal);
                self.tex_coords.push(vertex.tex_coord.to_array());
            }
            self.indices.extend_from_slice(&quad_indices(start));
            self.line_indices.extend_from_slice(&outline_indices(start));
            self.face_ids.push(face.id());
            self.selected.push(mesh.is_selected(face.id()));
        }
    }

    /// Returns the count of quads in the buffer.
    pub fn num_quads(&self) -> usize {
        self.face_ids.len()
    }
}

/// The index of the first vertex of the next quad, if all four of its vertices can be addressed with `u32`.
fn first_vertex_index(num_vertices: usize) -> Option<u32> {
    let start = u32::try_from(num_vertices).ok()?;
    start.checked_add(3).map(|_| start)
}

/// Returns the vertex indices for a single quad (two triangles) whose vertices are wound along its perimeter. `start` is
/// the first index.
fn quad_indices(start: u32) -> [u32; 6] {
    [start, start + 1, start + 2, start, start + 2, start + 3]
}

fn outline_indices(start: u32) -> [u32; 8] {
    [
        start,
        start + 1,
        start + 1,
        start + 2,
        start + 2,
        start + 3,
        start + 3,
        start,
    ]
}
