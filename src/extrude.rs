//! Growing the solid one unit cell at a time.

use crate::{Direction, ExtrudeError, Face, FaceId, FaceMesh};

use ilattice::glam::Vec3;
use tracing::{debug, warn};

/// What one extrusion changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Extrusion {
    /// The extruded face, now capping the new cell. Its id is unchanged.
    pub cap: FaceId,
    /// Direction of the cap's normal.
    pub direction: Direction,
    /// Center of the new unit cell.
    pub cell_center: Vec3,
    /// The new side faces, in [`Direction::CANONICAL`] order.
    pub sides: Vec<FaceId>,
}

impl FaceMesh {
    /// Extrudes the selected face. `Ok(None)` if nothing is selected.
    pub fn extrude_selected(&mut self) -> Result<Option<Extrusion>, ExtrudeError> {
        match self.selected_face().map(Face::id) {
            Some(id) => self.extrude_face(id).map(Some),
            None => Ok(None),
        }
    }

    /// Pushes face `id` one unit out along its normal and surrounds the new unit cell with side faces from the template
    /// table, one for each canonical direction other than the face's own direction and its inverse.
    ///
    /// Faces are never removed. The face must point along a canonical axis: with an unaligned normal there is no way to
    /// tell which sides to build, so [`ExtrudeError::UnalignedNormal`] is returned and nothing changes.
    pub fn extrude_face(&mut self, id: FaceId) -> Result<Extrusion, ExtrudeError> {
        let face = self.face(id).ok_or(ExtrudeError::FaceNotFound(id))?;
        let normal = face.normal();
        let direction = face.direction();
        if !direction.is_canonical() {
            warn!(face = %id, normal = ?normal, "refusing to extrude face with unaligned normal");
            return Err(ExtrudeError::UnalignedNormal { id, normal });
        }
        let cell_center = face.bounding_box().center() + normal / 2.0;
        let inverse = direction.inverse();

        self.move_face(id, normal)?;

        let sides: Vec<FaceId> = Direction::CANONICAL
            .into_iter()
            .filter(|&side| side != direction && side != inverse)
            .filter_map(|side| self.add_quad(side, cell_center))
            .collect();

        debug!(
            face = %id,
            direction = ?direction,
            cell_center = ?cell_center,
            sides = sides.len(),
            "extruded face"
        );

        Ok(Extrusion {
            cap: id,
            direction,
            cell_center,
            sides,
        })
    }
}
