use cgmath::{InnerSpace, Matrix4, Quaternion, Rad, Rotation3, Vector3, Vector4};
use halftone_tree::{
    data_structures::{
        block::{ColorPair, Rgb},
        instance::{Instance, InstanceRaw},
    },
    resources::mesh::box_geometry,
};

#[test]
fn box_has_four_vertices_and_two_triangles_per_face() {
    let (vertices, indices) = box_geometry();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));
    for v in &vertices {
        assert!(v.position.iter().all(|c| c.abs() == 0.5));
        assert!(v.tex_coords.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn faces_wind_counter_clockwise_from_outside() {
    let (vertices, indices) = box_geometry();
    for tri in indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vector3::from(vertices[i as usize].position));
        let normal = Vector3::from(vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(normal) > 0.0);
    }
}

#[test]
fn composition_matches_the_matrix_product() {
    let parent = Instance {
        position: Vector3::new(0.0, 0.0, 0.0),
        rotation: Quaternion::from_angle_y(Rad(0.7)),
        scale: Vector3::new(1.5, 1.5, 1.5),
    };
    let child = Instance {
        position: Vector3::new(10.0, -20.0, 5.0),
        rotation: Quaternion::from_angle_x(Rad(0.3)) * Quaternion::from_angle_z(Rad(-0.2)),
        scale: Vector3::new(80.0, 10.0, 12.0),
    };
    let composed: Matrix4<f32> = (&parent * &child).to_matrix();
    let product = parent.to_matrix() * child.to_matrix();
    for corner in [
        Vector4::new(0.5, 0.5, 0.5, 1.0),
        Vector4::new(-0.5, 0.5, -0.5, 1.0),
        Vector4::new(0.5, -0.5, 0.5, 1.0),
    ] {
        let diff = composed * corner - product * corner;
        assert!(diff.magnitude() < 1e-3, "{:?}", diff);
    }
}

#[test]
fn raw_instance_carries_the_colour_pair() {
    let colors = ColorPair::new(Rgb::new(1.0, 0.85, 0.1), Rgb::new(1.0, 1.0, 1.0));
    let raw: InstanceRaw = Instance::default().to_raw(colors);
    assert_eq!(raw.color_a, [1.0, 0.85, 0.1]);
    assert_eq!(raw.color_b, [1.0, 1.0, 1.0]);
    assert_eq!(raw.model[3], [0.0, 0.0, 0.0, 1.0]);
}
