use crate::FaceId;

use ilattice::glam::Vec3;
use thiserror::Error;

/// Errors from direct face edits on a [`FaceMesh`](crate::FaceMesh).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FaceMeshError {
    #[error("face {0} does not exist")]
    FaceNotFound(FaceId),
}

/// Reasons an extrusion was refused. The mesh is unchanged whenever one of these is returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExtrudeError {
    #[error("face {0} does not exist")]
    FaceNotFound(FaceId),

    /// The face normal is not within tolerance of any canonical axis, so the side faces cannot be chosen.
    #[error("face {id} has normal {normal:?}, which is not aligned with a canonical axis")]
    UnalignedNormal { id: FaceId, normal: Vec3 },
}

impl From<FaceMeshError> for ExtrudeError {
    fn from(err: FaceMeshError) -> Self {
        match err {
            FaceMeshError::FaceNotFound(id) => ExtrudeError::FaceNotFound(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_face() {
        let err = FaceMeshError::FaceNotFound(FaceId(999));
        assert_eq!(err.to_string(), "face 999 does not exist");

        let err = ExtrudeError::UnalignedNormal {
            id: FaceId(3),
            normal: Vec3::ZERO,
        };
        assert!(err.to_string().contains("face 3"));

        let converted: ExtrudeError = FaceMeshError::FaceNotFound(FaceId(7)).into();
        assert_eq!(converted, ExtrudeError::FaceNotFound(FaceId(7)));
    }
}
