//! End-to-end editing sessions: pick with a camera ray, extrude, pick again.

use box_mesh::glam::Vec3;
use box_mesh::{
    Direction, ExtrudeError, Face, FaceId, FaceMesh, FaceMeshBuffer, FaceMeshError, Ray, Vertex,
};

fn unit_cube() -> FaceMesh {
    FaceMesh::cube(Vec3::ZERO)
}

#[test]
fn every_face_has_tight_bounds_and_unit_normal() {
    let mut mesh = unit_cube();
    mesh.extrude_face(FaceId(1)).unwrap();
    mesh.extrude_face(FaceId(5)).unwrap();

    for face in mesh.faces() {
        let bounds = face.bounding_box();
        for p in face.positions() {
            assert!(bounds.contains(p));
        }
        let coords = face.positions().map(|p| p.to_array());
        let (min, max) = (bounds.min.to_array(), bounds.max.to_array());
        for axis in 0..3 {
            assert!(coords.iter().any(|p| p[axis] == min[axis]));
            assert!(coords.iter().any(|p| p[axis] == max[axis]));
        }
        assert!((face.normal().length() - 1.0).abs() < 1e-6);
        assert!(face.direction().is_canonical());
    }
}

#[test]
fn ray_toward_cube_front_selects_forward_face() {
    let mut mesh = unit_cube();
    let ray = Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = mesh.trace_line(&ray, 10.0).unwrap();

    assert_eq!(hit.face, FaceId(1));
    let selected = mesh.selected_face().unwrap();
    assert_eq!(selected.id(), FaceId(1));
    assert_eq!(selected.direction(), Direction::Forward);
    assert_eq!(selected.normal(), Vec3::Z);
}

#[test]
fn ray_from_negative_z_selects_back_face() {
    let mut mesh = unit_cube();
    let ray = Ray::new(Vec3::new(0.5, 0.5, -5.0), Vec3::Z);

    let hit = mesh.trace_line(&ray, 10.0).unwrap();

    assert_eq!(hit.face, FaceId(2));
    assert_eq!(hit.position, Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(mesh.selected_face().map(Face::direction), Some(Direction::Back));
}

#[test]
fn extrude_selected_forward_face() {
    let mut mesh = unit_cube();
    let ray = Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, -1.0));
    mesh.trace_line(&ray, 10.0).unwrap();
    let before = *mesh.face(FaceId(1)).unwrap().bounding_box();

    let extrusion = mesh.extrude_selected().unwrap().unwrap();

    assert_eq!(mesh.len(), 10);
    assert_eq!(extrusion.cap, FaceId(1));
    assert_eq!(
        *mesh.face(FaceId(1)).unwrap().bounding_box(),
        before.translated(Vec3::Z)
    );
    assert_eq!(extrusion.sides, (7..=10).map(FaceId).collect::<Vec<_>>());
    for &id in &extrusion.sides {
        let direction = mesh.face(id).unwrap().direction();
        assert_ne!(direction, Direction::Forward);
        assert_ne!(direction, Direction::Back);
        assert_ne!(direction, Direction::None);
    }

    // Selection was reset by moving the selected face. The next frame's trace finds the cap again, one unit closer.
    assert!(mesh.selected_face().is_none());
    let hit = mesh.trace_line(&ray, 10.0).unwrap();
    assert_eq!(hit.face, FaceId(1));
    assert_eq!(hit.distance, 3.0);
}

#[test]
fn missing_ray_clears_selection() {
    let mut mesh = unit_cube();
    mesh.trace_line(
        &Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, -1.0)),
        10.0,
    );
    assert!(mesh.selected_face().is_some());

    let hit = mesh.trace_line(&Ray::new(Vec3::splat(100.0), Vec3::X), 10.0);

    assert!(hit.is_none());
    assert_eq!(mesh.selection().count(), 0);
    assert!(mesh.selected_face().is_none());
    assert_eq!(mesh.extrude_selected(), Ok(None));
}

#[test]
fn move_unknown_face_changes_nothing() {
    let mut mesh = unit_cube();
    let before = mesh.faces().to_vec();

    let result = mesh.move_face(FaceId(999), Vec3::ONE);

    assert_eq!(result, Err(FaceMeshError::FaceNotFound(FaceId(999))));
    assert_eq!(mesh.len(), 6);
    assert_eq!(mesh.faces(), &before[..]);
}

#[test]
fn move_preserves_identity_and_count() {
    let mut mesh = unit_cube();
    let offset = Vec3::new(0.25, -3.0, 2.0);
    for id in (1..=6).map(FaceId) {
        let before = *mesh.face(id).unwrap().bounding_box();
        mesh.move_face(id, offset).unwrap();
        assert_eq!(mesh.len(), 6);
        let moved = mesh.face(id).unwrap();
        assert!(moved.bounding_box().abs_diff_eq(&before.translated(offset), 1e-6));
    }
}

#[test]
fn degenerate_face_cannot_be_extruded() {
    let mut mesh = unit_cube();
    let p = Vertex::at(Vec3::new(3.0, 3.0, 3.0));
    let id = mesh.add_face(p, p, p, p);
    assert_eq!(mesh.face(id).unwrap().normal(), Vec3::ZERO);
    assert_eq!(mesh.face(id).unwrap().direction(), Direction::None);

    assert!(matches!(
        mesh.extrude_face(id),
        Err(ExtrudeError::UnalignedNormal { .. })
    ));
    assert_eq!(mesh.len(), 7);
}

#[test]
fn render_buffer_tracks_selection() {
    let mut mesh = unit_cube();
    mesh.trace_line(&Ray::new(Vec3::new(0.5, 5.0, 0.5), -Vec3::Y), 250.0);

    let mut buffer = FaceMeshBuffer::new();
    buffer.fill(&mesh);

    let selected: Vec<FaceId> = buffer
        .face_ids
        .iter()
        .zip(&buffer.selected)
        .filter(|(_, selected)| **selected)
        .map(|(&id, _)| id)
        .collect();
    assert_eq!(selected, vec![FaceId(5)]);
}
