//! The tank as a fixed list of parts.
//!
//! Every frame [`tank_parts`] rebuilds each part's transform recipe from the
//! current [`TankState`]. The list has a stable order and length so that the
//! i-th part always maps onto the i-th model uniform on the GPU.

use cgmath::Matrix4;

use crate::{
    controller::TankState,
    data_structures::{instance::Transform, model::MeshKind},
};

/// Number of parts produced by [`tank_parts`].
pub const PART_COUNT: usize = 11;

pub const WHEEL_PAIRS: usize = 3;

const TRACK_OFFSET_X: f32 = 0.6;
const WHEEL_OFFSET_X: f32 = 0.7;
const RUNNING_GEAR_Y: f32 = -0.30;
const FIRST_WHEEL_Z: f32 = 0.825;
const WHEEL_SPACING: f32 = 0.85;
const TURRET_Y: f32 = 0.625;
const TURRET_Z: f32 = -0.75;
const CANNON_Z: f32 = 0.25;
/// Distance from the cannon's mount point back to its breech.
const BREECH_OFFSET: f32 = 0.625 * 1.5;

/// A named component of the tank, drawn with one mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub transform: Transform,
}

impl Part {
    fn new(name: &'static str, mesh: MeshKind, transform: Transform) -> Self {
        Self {
            name,
            mesh,
            transform,
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        self.transform.to_matrix()
    }
}

/// Z offset of the i-th wheel pair, front to back.
pub fn wheel_z(i: usize) -> f32 {
    FIRST_WHEEL_Z - i as f32 * WHEEL_SPACING
}

/// Builds all parts for the given state: hull, right and left track, the
/// wheels (right then left, front to back), turret and cannon.
pub fn tank_parts(tank: &TankState) -> Vec<Part> {
    let (x, z) = (tank.chassis_x, tank.chassis_z);
    let mut parts = Vec::with_capacity(PART_COUNT);

    parts.push(Part::new(
        "hull",
        MeshKind::Cuboid,
        Transform::new()
            .translate([x, 0.0, z])
            .scale([1.0, 0.75, 2.5]),
    ));
    parts.push(Part::new(
        "right track",
        MeshKind::Cuboid,
        Transform::new()
            .translate([TRACK_OFFSET_X + x, RUNNING_GEAR_Y, z])
            .scale([0.25, 0.75, 2.5]),
    ));
    parts.push(Part::new(
        "left track",
        MeshKind::Cuboid,
        Transform::new()
            .translate([-TRACK_OFFSET_X + x, RUNNING_GEAR_Y, z])
            .scale([0.25, 0.75, 2.5]),
    ));

    for i in 0..WHEEL_PAIRS {
        let pair_z = wheel_z(i) + z;
        parts.push(Part::new(
            "right wheel",
            MeshKind::Wheel,
            wheel([WHEEL_OFFSET_X + x, RUNNING_GEAR_Y, pair_z], 0.75),
        ));
        parts.push(Part::new(
            "left wheel",
            MeshKind::Wheel,
            wheel([-WHEEL_OFFSET_X + x, RUNNING_GEAR_Y, pair_z], 0.7),
        ));
    }

    parts.push(Part::new(
        "turret",
        MeshKind::Cuboid,
        Transform::new()
            .translate([x, TURRET_Y, TURRET_Z + z])
            .rotate_y(tank.turret_yaw)
            .rotate_x(tank.turret_pitch)
            .uniform_scale(0.5),
    ));
    parts.push(Part::new("cannon", MeshKind::Cylinder, cannon(tank)));

    parts
}

/// Wheels face sideways: the disc's Z axis is turned onto X.
fn wheel(position: [f32; 3], radius_scale: f32) -> Transform {
    Transform::new()
        .translate(position)
        .rotate_y(90.0)
        .rotate_z(0.0)
        .scale([radius_scale, radius_scale, 0.65])
}

/// The barrel pivots about its breech: move to the mount, back to the breech,
/// rotate, then forward again before stretching the unit cylinder.
fn cannon(tank: &TankState) -> Transform {
    Transform::new()
        .translate([tank.chassis_x, TURRET_Y, CANNON_Z + tank.chassis_z])
        .translate([0.0, 0.0, -BREECH_OFFSET])
        .rotate_y(tank.turret_yaw)
        .rotate_x(tank.turret_pitch)
        .translate([0.0, 0.0, BREECH_OFFSET])
        .scale([0.1, 0.1, 1.5])
}
