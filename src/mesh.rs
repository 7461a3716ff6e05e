use std::collections::BTreeSet;

use ilattice::glam::Vec3;
use tracing::{debug, trace, warn};

pub use face::*;
pub use pick::*;

use crate::{Direction, FaceMeshError, QuadCoordinateConfig, Ray, Vertex, LEFT_HANDED_Y_UP_CONFIG};

mod face;
mod pick;

/// The editable solid: an insertion-ordered list of quad faces plus the current selection.
///
/// Faces are only ever appended. [`FaceMesh::move_face`] replaces a face by removing it and appending a new one with the
/// same [`FaceId`]. Lookups by id are a linear scan, which is fine for hand-edited meshes of tens or hundreds of faces.
///
/// At most one face is selected at a time; the selection is kept as a set so callers do not depend on that.
#[derive(Clone, Debug)]
pub struct FaceMesh {
    faces: Vec<Face>,
    last_id: u32,
    selected: BTreeSet<FaceId>,
    config: QuadCoordinateConfig,
}

impl Default for FaceMesh {
    fn default() -> Self {
        Self::with_config(LEFT_HANDED_Y_UP_CONFIG)
    }
}

impl FaceMesh {
    /// An empty mesh using [`LEFT_HANDED_Y_UP_CONFIG`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty mesh. `config` provides the quad templates for [`FaceMesh::add_quad`] and extrusion.
    pub fn with_config(config: QuadCoordinateConfig) -> Self {
        Self {
            faces: Vec::new(),
            last_id: 0,
            selected: BTreeSet::new(),
            config,
        }
    }

    /// A unit cube spanning `[min_corner, min_corner + 1]`, with faces added in [`Direction::CANONICAL`] order (ids 1 to
    /// 6).
    pub fn cube(min_corner: Vec3) -> Self {
        Self::cube_with_config(LEFT_HANDED_Y_UP_CONFIG, min_corner)
    }

    pub fn cube_with_config(config: QuadCoordinateConfig, min_corner: Vec3) -> Self {
        let mut mesh = Self::with_config(config);
        let cell_center = min_corner + Vec3::splat(0.5);
        for direction in Direction::CANONICAL {
            mesh.add_quad(direction, cell_center);
        }
        mesh
    }

    #[inline]
    pub fn config(&self) -> &QuadCoordinateConfig {
        &self.config
    }

    /// All faces in insertion order. A moved face sits at the end.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.iter().find(|face| face.id() == id)
    }

    fn index_of(&self, id: FaceId) -> Option<usize> {
        self.faces.iter().position(|face| face.id() == id)
    }

    fn next_id(&mut self) -> FaceId {
        self.last_id += 1;
        FaceId(self.last_id)
    }

    /// Appends a quad and returns its new id. The vertices should be planar and wound along the perimeter; this is not
    /// checked, and a degenerate quad simply gets a zero normal.
    pub fn add_face(&mut self, v1: Vertex, v2: Vertex, v3: Vertex, v4: Vertex) -> FaceId {
        let id = self.next_id();
        let face = Face::new(id, [v1, v2, v3, v4]);
        debug!(
            face = %id,
            normal = ?face.normal(),
            direction = ?face.direction(),
            "added face"
        );
        self.faces.push(face);
        id
    }

    /// Appends the unit quad on the `direction` side of the unit cell centered at `cell_center`, built from this mesh's
    /// template table. Returns `None` for [`Direction::None`].
    pub fn add_quad(&mut self, direction: Direction, cell_center: Vec3) -> Option<FaceId> {
        let [v1, v2, v3, v4] = self.config.quad_vertices(direction, cell_center)?;
        Some(self.add_face(v1, v2, v3, v4))
    }

    /// Picks the face under `ray` with the default epsilon and [`MeanVertexDistance`], and makes it the only selected face.
    ///
    /// Returns `None` and clears the selection if no face is hit within `(0.1, max_distance)`.
    pub fn trace_line(&mut self, ray: &Ray, max_distance: f32) -> Option<TraceHit> {
        self.trace_with(
            ray,
            &TraceConfig::with_max_distance(max_distance),
            &MeanVertexDistance,
        )
    }

    /// Picks with an explicit range and ranking strategy.
    ///
    /// Only bounding boxes are intersected, which is cheap and good enough for axis-aligned box editing. Of the faces whose
    /// box the ray enters within the configured range, the one with the lowest `heuristic` score becomes the sole selected
    /// face.
    pub fn trace_with<H>(&mut self, ray: &Ray, config: &TraceConfig, heuristic: &H) -> Option<TraceHit>
    where
        H: PickHeuristic + ?Sized,
    {
        self.selected.clear();

        let best = self
            .faces
            .iter()
            .filter_map(|face| {
                let hit_distance = ray.hit_distance(face.bounding_box())?;
                config.accepts(hit_distance).then(|| TraceHit {
                    face: face.id(),
                    position: ray.point_at(hit_distance),
                    distance: hit_distance,
                    score: heuristic.score(face, ray, hit_distance),
                })
            })
            // `min_by` keeps the first of equal elements.
            .min_by(|a, b| a.score.total_cmp(&b.score));

        match best {
            Some(hit) => {
                self.selected.insert(hit.face);
                trace!(face = %hit.face, distance = hit.distance, score = hit.score, "picked face");
            }
            None => trace!("no face under ray"),
        }

        best
    }

    /// The selected face, if any.
    ///
    /// Holding the returned reference borrows the mesh, so it cannot outlive the next edit.
    pub fn selected_face(&self) -> Option<&Face> {
        self.faces
            .iter()
            .find(|face| self.selected.contains(&face.id()))
    }

    pub fn selection(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.selected.iter().copied()
    }

    #[inline]
    pub fn is_selected(&self, id: FaceId) -> bool {
        self.selected.contains(&id)
    }

    /// Makes `id` the only selected face.
    pub fn select(&mut self, id: FaceId) -> Result<(), FaceMeshError> {
        if self.index_of(id).is_none() {
            warn!(face = %id, "cannot select missing face");
            return Err(FaceMeshError::FaceNotFound(id));
        }
        self.selected.clear();
        self.selected.insert(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Translates every vertex of face `id` by `offset`.
    ///
    /// The face keeps its id and its normal (translation cannot change orientation, and recomputing from moved vertices
    /// could drift), gets a fresh bounding box, and moves to the end of [`FaceMesh::faces`]. If it was selected, the
    /// whole selection is cleared.
    ///
    /// An unknown id leaves the mesh untouched.
    pub fn move_face(&mut self, id: FaceId, offset: Vec3) -> Result<(), FaceMeshError> {
        let Some(index) = self.index_of(id) else {
            warn!(face = %id, "cannot move missing face");
            return Err(FaceMeshError::FaceNotFound(id));
        };

        let old = self.faces.remove(index);
        let vertices = old.vertices().map(|v| v.translated(offset));

        if self.selected.contains(&id) {
            self.selected.clear();
        }

        self.faces.push(Face::with_normal(id, vertices, old.normal()));
        debug!(face = %id, offset = ?offset, "moved face");
        Ok(())
    }
}
