//! Editable box meshes built from quad faces.
//!
//! A [`FaceMesh`] starts as a unit cube (or any set of quads) and grows one
//! face at a time:
//! - [`FaceMesh::trace_line`] picks the face under a camera ray and selects it
//! - [`FaceMesh::extrude_selected`] pushes that face out by one unit and
//!   surrounds the new cell with side faces
//! - [`FaceMeshBuffer`] flattens the faces and selection for a renderer
//!
//! Picking intersects bounding boxes only, then ranks the candidates with a
//! [`PickHeuristic`]. That is far cheaper than exact polygon tests and good
//! enough for axis-aligned boxes, where faces rarely overlap on screen.
//!
//! The crate has no rendering, windowing or input code. The caller supplies a
//! ray every frame and reads the faces back.
//!
//! # Example Code
//!
//! ```
//! use box_mesh::glam::Vec3;
//! use box_mesh::{Direction, FaceId, FaceMesh, FaceMeshBuffer, Ray};
//!
//! // Faces 1 to 6, in forward, back, left, right, up, down order.
//! let mut mesh = FaceMesh::cube(Vec3::ZERO);
//!
//! // Look at the cube from the +Z side.
//! let ray = Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = mesh.trace_line(&ray, 250.0).unwrap();
//! assert_eq!(hit.face, FaceId(1));
//! assert_eq!(mesh.selected_face().unwrap().direction(), Direction::Forward);
//!
//! // Grow the solid toward the camera.
//! let extrusion = mesh.extrude_selected().unwrap().unwrap();
//! assert_eq!(extrusion.sides.len(), 4);
//! assert_eq!(mesh.len(), 10);
//!
//! let mut buffer = FaceMeshBuffer::new();
//! buffer.fill(&mesh);
//! assert_eq!(buffer.num_quads(), 10);
//! ```

mod buffer;
mod error;
mod extrude;
pub mod geometry;
mod mesh;

pub use buffer::*;
pub use error::*;
pub use extrude::*;
#[doc(inline)]
pub use geometry::*;
pub use mesh::*;

pub use ilattice;
pub use ilattice::glam;
