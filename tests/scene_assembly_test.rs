use tank3d::{
    cgmath::{Matrix4, Vector3},
    controller::TankState,
    data_structures::{
        model::MeshKind,
        scene_graph::{PART_COUNT, Part, tank_parts, wheel_z},
    },
};

use crate::common::test_utils::{assert_matrix_eq, assert_point_eq, transform_point};

mod common;

fn part_named<'a>(parts: &'a [Part], name: &str) -> &'a Part {
    parts
        .iter()
        .find(|part| part.name == name)
        .unwrap_or_else(|| panic!("no part named {}", name))
}

#[test]
fn manifest_has_fixed_order_and_meshes() {
    let parts = tank_parts(&TankState::new());
    assert_eq!(parts.len(), PART_COUNT);

    let names: Vec<&str> = parts.iter().map(|part| part.name).collect();
    assert_eq!(
        names,
        vec![
            "hull",
            "right track",
            "left track",
            "right wheel",
            "left wheel",
            "right wheel",
            "left wheel",
            "right wheel",
            "left wheel",
            "turret",
            "cannon",
        ]
    );

    let meshes: Vec<MeshKind> = parts.iter().map(|part| part.mesh).collect();
    assert_eq!(&meshes[..3], &[MeshKind::Cuboid; 3]);
    assert_eq!(&meshes[3..9], &[MeshKind::Wheel; 6]);
    assert_eq!(meshes[9], MeshKind::Cuboid);
    assert_eq!(meshes[10], MeshKind::Cylinder);
}

#[test]
fn hull_is_a_stretched_cube_at_the_chassis() {
    let parts = tank_parts(&TankState::new());
    assert_matrix_eq(
        part_named(&parts, "hull").to_matrix(),
        Matrix4::from_nonuniform_scale(1.0, 0.75, 2.5),
    );
}

#[test]
fn tracks_flank_the_hull() {
    let parts = tank_parts(&TankState::new());
    let expected = |x: f32| {
        Matrix4::from_translation(Vector3::new(x, -0.30, 0.0))
            * Matrix4::from_nonuniform_scale(0.25, 0.75, 2.5)
    };
    assert_matrix_eq(part_named(&parts, "right track").to_matrix(), expected(0.6));
    assert_matrix_eq(part_named(&parts, "left track").to_matrix(), expected(-0.6));
}

#[test]
fn wheels_line_up_front_to_back() {
    let parts = tank_parts(&TankState::new());
    let wheels: Vec<_> = parts.iter().filter(|part| part.mesh == MeshKind::Wheel).collect();
    assert_eq!(wheels.len(), 6);

    for (i, pair) in wheels.chunks(2).enumerate() {
        let z = 0.825 - i as f32 * 0.85;
        assert!((wheel_z(i) - z).abs() < 1e-6);
        assert_point_eq(transform_point(pair[0].to_matrix(), [0.0; 3]), [0.7, -0.30, z]);
        assert_point_eq(transform_point(pair[1].to_matrix(), [0.0; 3]), [-0.7, -0.30, z]);
    }
}

#[test]
fn wheels_face_sideways() {
    let parts = tank_parts(&TankState::new());
    let right = part_named(&parts, "right wheel").to_matrix();
    // the disc's axis (local Z) points along world X after the 90 degree yaw
    let axle = transform_point(right, [0.0, 0.0, 1.0]);
    let hub = transform_point(right, [0.0; 3]);
    assert_point_eq([axle[0] - hub[0], axle[1] - hub[1], axle[2] - hub[2]], [0.65, 0.0, 0.0]);
}

#[test]
fn chassis_movement_carries_every_part() {
    let resting = tank_parts(&TankState::new());
    let moved = tank_parts(&TankState {
        chassis_x: 1.5,
        chassis_z: -2.0,
        ..Default::default()
    });
    for (a, b) in resting.iter().zip(&moved) {
        let before = transform_point(a.to_matrix(), [0.0; 3]);
        let after = transform_point(b.to_matrix(), [0.0; 3]);
        assert_point_eq(after, [before[0] + 1.5, before[1], before[2] - 2.0]);
    }
}

#[test]
fn turret_pose_only_moves_turret_and_cannon() {
    let resting = tank_parts(&TankState::new());
    let aimed = tank_parts(&TankState {
        turret_yaw: 35.0,
        turret_pitch: -20.0,
        ..Default::default()
    });
    for (a, b) in resting.iter().zip(&aimed) {
        let unchanged = a.transform == b.transform;
        let is_turret = a.name == "turret" || a.name == "cannon";
        assert_eq!(unchanged, !is_turret, "{}", a.name);
    }
}

#[test]
fn turret_rotates_about_its_own_centre() {
    let parts = tank_parts(&TankState {
        turret_yaw: 90.0,
        ..Default::default()
    });
    let turret = part_named(&parts, "turret").to_matrix();
    assert_point_eq(transform_point(turret, [0.0; 3]), [0.0, 0.625, -0.75]);
    // local +X is turned onto -Z
    assert_point_eq(transform_point(turret, [1.0, 0.0, 0.0]), [0.0, 0.625, -1.25]);
}

#[test]
fn cannon_muzzle_points_forward_at_rest() {
    let parts = tank_parts(&TankState::new());
    let cannon = part_named(&parts, "cannon").to_matrix();
    assert_point_eq(transform_point(cannon, [0.0, 0.0, 0.5]), [0.0, 0.625, 1.0]);
    assert_point_eq(transform_point(cannon, [0.0, 0.0, -0.5]), [0.0, 0.625, -0.5]);
    assert_point_eq(transform_point(cannon, [1.0, 0.0, 0.0]), [0.1, 0.625, 0.25]);
}

#[test]
fn cannon_pivots_about_its_breech() {
    // local z = -0.625 maps onto the breech once the 1.5 stretch is applied
    let breech = [0.0, 0.625, 0.25 - 0.9375];
    for (yaw, pitch) in [(0.0, 0.0), (45.0, -30.0), (-120.0, -90.0), (179.0, -1.0)] {
        let parts = tank_parts(&TankState {
            turret_yaw: yaw,
            turret_pitch: pitch,
            ..Default::default()
        });
        let cannon = part_named(&parts, "cannon").to_matrix();
        assert_point_eq(transform_point(cannon, [0.0, 0.0, -0.625]), breech);
    }
}

#[test]
fn raising_the_cannon_lifts_the_muzzle() {
    let level = tank_parts(&TankState::new());
    let raised = tank_parts(&TankState {
        turret_pitch: -90.0,
        ..Default::default()
    });
    let muzzle = |parts: &[Part]| {
        transform_point(part_named(parts, "cannon").to_matrix(), [0.0, 0.0, 0.5])
    };
    assert_point_eq(muzzle(&raised), [0.0, 0.625 + 1.6875, 0.25 - 0.9375]);
    assert!(muzzle(&raised)[1] > muzzle(&level)[1]);
}
