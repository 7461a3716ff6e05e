use box_mesh::glam::Vec3;
use box_mesh::{BoxHitDistance, FaceId, FaceMesh, FaceMeshBuffer, Ray, TraceConfig};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const COLUMN_HEIGHTS: [usize; 3] = [1, 16, 128];

fn bench_trace_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_trace_line");
    for height in COLUMN_HEIGHTS {
        let mut mesh = column(height);
        let ray = Ray::new(Vec3::new(0.5, 0.5, -5.0), Vec3::Z);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("faces={}", mesh.len())),
            &(),
            |b, _| {
                b.iter(|| mesh.trace_line(&ray, 1000.0));
            },
        );
    }
    group.finish();
}

fn bench_trace_box_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_trace_box_hit");
    let config = TraceConfig::with_max_distance(1000.0);
    for height in COLUMN_HEIGHTS {
        let mut mesh = column(height);
        let ray = Ray::new(Vec3::new(0.5, 0.5, -5.0), Vec3::Z);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("faces={}", mesh.len())),
            &(),
            |b, _| {
                b.iter(|| mesh.trace_with(&ray, &config, &BoxHitDistance));
            },
        );
    }
    group.finish();
}

fn bench_extrude(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_extrude");
    for height in COLUMN_HEIGHTS {
        let mesh = column(height);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("faces={}", mesh.len())),
            &(),
            |b, _| {
                b.iter_batched(
                    || mesh.clone(),
                    |mut mesh| mesh.extrude_face(CAP).map(|e| e.sides.len()),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_fill_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_fill_buffer");
    for height in COLUMN_HEIGHTS {
        let mesh = column(height);

        // Do a single run first to allocate the buffer to the right size.
        let mut buffer = FaceMeshBuffer::new();
        buffer.fill(&mesh);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("quads={}", buffer.num_quads())),
            &(),
            |b, _| {
                b.iter(|| buffer.fill(&mesh));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_trace_line,
    bench_trace_box_hit,
    bench_extrude,
    bench_fill_buffer
);
criterion_main!(benches);

/// The right face of the initial cube.
const CAP: FaceId = FaceId(4);

/// A row of `height` unit cells along +X, grown by extruding the same face.
fn column(height: usize) -> FaceMesh {
    let mut mesh = FaceMesh::cube(Vec3::ZERO);
    for _ in 1..height {
        mesh.extrude_face(CAP).expect("cube faces are axis aligned");
    }
    mesh
}
