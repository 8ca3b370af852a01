#![allow(dead_code)]

use tank3d::{
    cgmath::{Matrix4, Point3, Transform as _, Vector4},
    controller::{TankAction, TankController, TankState},
};

pub(crate) const EPSILON: f32 = 1e-5;

/// Applies `action` `times` times without any frame in between.
pub(crate) fn press(controller: &TankController, state: &mut TankState, action: TankAction, times: usize) {
    for _ in 0..times {
        controller.apply(state, action);
    }
}

pub(crate) fn transform_point(matrix: Matrix4<f32>, point: [f32; 3]) -> [f32; 3] {
    let p = matrix.transform_point(Point3::new(point[0], point[1], point[2]));
    [p.x, p.y, p.z]
}

pub(crate) fn assert_point_eq(actual: [f32; 3], expected: [f32; 3]) {
    for axis in 0..3 {
        assert!(
            (actual[axis] - expected[axis]).abs() < 1e-4,
            "point mismatch on axis {}: {:?} != {:?}",
            axis,
            actual,
            expected
        );
    }
}

pub(crate) fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let columns = |m: Matrix4<f32>| -> [Vector4<f32>; 4] { [m.x, m.y, m.z, m.w] };
    for (c, (a, e)) in columns(actual).iter().zip(columns(expected).iter()).enumerate() {
        for row in 0..4 {
            assert!(
                (a[row] - e[row]).abs() < EPSILON,
                "matrix mismatch at column {}, row {}: {:?} != {:?}",
                c,
                row,
                actual,
                expected
            );
        }
    }
}
