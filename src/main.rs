use std::f32::consts::PI;

use itertools::iproduct;
use remath::{core::prelude::*, util::setup_log};

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 600.0;
const FIELD_OF_VIEW: f32 = 45.0;
const Z_NEAR: f32 = 0.3;
const Z_FAR: f32 = 100.0;

const TORUS_SLICES: usize = 16;
const TORUS_LOOPS: usize = 30;
const TORUS_OUTER_RADIUS: f32 = 1.5;
const TORUS_INNER_RADIUS: f32 = 0.7;

const FRAME_COUNT: usize = 900;
const DEGREES_PER_FRAME: f32 = 0.4;
const LOG_EVERY_N_FRAMES: usize = 75;

struct Mesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<[usize; 4]>,
}

impl Mesh {
    /// Torus around the z axis. Vertex `(i, j)` is at slice `i` around the tube and loop `j`
    /// around the ring; faces are quads between neighbouring slices and loops.
    fn torus(slices: usize, loops: usize, outer_radius: f32, inner_radius: f32) -> Mesh {
        let vertices = iproduct!(0..slices, 0..loops)
            .map(|(i, j)| {
                let slice_angle = i as f32 / slices as f32 * 2.0 * PI;
                let loop_angle = j as f32 / loops as f32 * 2.0 * PI;
                let ring_radius = outer_radius + inner_radius * slice_angle.cos();
                Vec3::new(
                    ring_radius * loop_angle.cos(),
                    ring_radius * loop_angle.sin(),
                    inner_radius * slice_angle.sin(),
                )
            })
            .collect_vec();

        let faces = iproduct!(0..slices, 0..loops)
            .map(|(i, j)| {
                let next_i = (i + 1) % slices;
                let next_j = (j + 1) % loops;
                [
                    i * loops + j,
                    next_i * loops + j,
                    next_i * loops + next_j,
                    i * loops + next_j,
                ]
            })
            .collect_vec();

        let mut normal_sums = vec![(Vec3::zero(), 0_usize); vertices.len()];
        for face in &faces {
            let a = vertices[face[0]] - vertices[face[1]];
            let b = vertices[face[0]] - vertices[face[2]];
            let normal = a.cross(b).normed();
            for &index in face {
                normal_sums[index].0 += normal;
                normal_sums[index].1 += 1;
            }
        }
        let normals = normal_sums
            .into_iter()
            .map(|(sum, count)| {
                if count == 0 {
                    Vec3::zero()
                } else {
                    (sum / count as f32).normed()
                }
            })
            .collect_vec();

        Mesh {
            vertices,
            normals,
            faces,
        }
    }
}

fn main() -> Result<()> {
    setup_log()?;

    let mesh = Mesh::torus(
        TORUS_SLICES,
        TORUS_LOOPS,
        TORUS_OUTER_RADIUS,
        TORUS_INNER_RADIUS,
    );
    info!(
        "torus: {} vertices, {} faces",
        mesh.vertices.len(),
        mesh.faces.len()
    );
    run_sanity_checks(&mesh);

    let view = look_at(Vec3::new(0.0, 0.0, 6.0), Vec3::zero(), Vec3::unit_y());
    let projection = perspective_with_planes(
        FIELD_OF_VIEW,
        SCREEN_WIDTH / SCREEN_HEIGHT,
        Z_NEAR,
        Z_FAR,
    );
    let view_projection = projection * view;

    let mut angle = 0.0;
    for frame in 0..FRAME_COUNT {
        angle += DEGREES_PER_FRAME;
        while angle > 360.0 {
            angle -= 360.0;
        }

        let eulers = Vec3::new(to_radians(angle), to_radians(angle), 0.0);
        let mut model = Matrix4::identity();
        model.set_rotation_vec(eulers);
        check_almost_eq!(Quaternion::from_eulers(eulers).to_matrix(), model);

        let mvp = view_projection * model;
        let clip_w = mesh
            .vertices
            .iter()
            .map(|v| (mvp * Quaternion::new(v.x, v.y, v.z, 1.0)).w)
            .fold(f32::INFINITY, f32::min);
        check_lt!(0.0, clip_w);

        if frame % LOG_EVERY_N_FRAMES == 0 {
            info!(
                "frame {frame}: angle {angle:.1}, min w {clip_w:.3}, first vertex -> {:.3}, \
                 normal -> {:.3}",
                mesh.vertices[0] * mvp,
                model.rotate(mesh.normals[0]),
            );
        }
    }
    Ok(())
}

fn run_sanity_checks(mesh: &Mesh) {
    check_eq!(mesh.vertices.len(), TORUS_SLICES * TORUS_LOOPS);
    check_eq!(mesh.normals.len(), mesh.vertices.len());
    check!(mesh.vertices.iter().all(ReFloat::is_finite));

    // Averaged normals must point along the tube's radius, all to the same side.
    let radial_dots = iproduct!(0..TORUS_SLICES, 0..TORUS_LOOPS)
        .map(|(i, j)| {
            let index = i * TORUS_LOOPS + j;
            let loop_angle = j as f32 / TORUS_LOOPS as f32 * 2.0 * PI;
            let ring_centre =
                Vec3::new(loop_angle.cos(), loop_angle.sin(), 0.0) * TORUS_OUTER_RADIUS;
            mesh.normals[index].dot((mesh.vertices[index] - ring_centre).normed())
        })
        .collect_vec();
    check!(radial_dots.iter().all(|d| d.abs() > 0.99));
    check!(radial_dots.iter().map(|d| d.is_sign_positive()).all_equal());

    let mut m = Matrix4::identity();
    m.set_rotation(0.3, 0.0, 0.5);
    check_almost_eq!(m.eulers(), Vec3::new(0.3, 0.0, 0.5));
    check_almost_eq!(m * m.inverse(), Matrix4::identity());
    check_almost_eq!(Quaternion::from(m), Quaternion::from_eulers(m.eulers()));

    let area = triangle_area(
        mesh.vertices[mesh.faces[0][0]],
        mesh.vertices[mesh.faces[0][1]],
        mesh.vertices[mesh.faces[0][2]],
    );
    check_lt!(0.0, area);
    info!("sanity checks passed");
}
