use tank3d::{
    cgmath::{Deg, Matrix4, SquareMatrix, Vector3},
    data_structures::instance::{ModelUniform, Op, Transform},
};

use crate::common::test_utils::{assert_matrix_eq, assert_point_eq, transform_point};

mod common;

#[test]
fn empty_transform_is_identity() {
    assert_matrix_eq(Transform::new().to_matrix(), Matrix4::identity());
}

#[test]
fn neutral_translate_rotate_scale_is_identity() {
    let neutral = Transform::new()
        .translate([0.0, 0.0, 0.0])
        .rotate_y(0.0)
        .rotate_x(0.0)
        .scale([1.0, 1.0, 1.0]);
    assert_matrix_eq(neutral.to_matrix(), Matrix4::identity());
}

#[test]
fn recipe_keeps_operations_in_call_order() {
    let recipe = Transform::new()
        .translate([1.0, 2.0, 3.0])
        .rotate_y(10.0)
        .rotate_x(-5.0)
        .uniform_scale(0.5);
    assert_eq!(
        recipe.ops(),
        &[
            Op::Translate(Vector3::new(1.0, 2.0, 3.0)),
            Op::RotateY(Deg(10.0)),
            Op::RotateX(Deg(-5.0)),
            Op::Scale(Vector3::new(0.5, 0.5, 0.5)),
        ]
    );
}

#[test]
fn operations_are_post_multiplied() {
    let t = Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0));
    let r = Matrix4::from_angle_y(Deg(90.0));
    let s = Matrix4::from_nonuniform_scale(2.0, 1.0, 1.0);
    let recipe = Transform::new()
        .translate([1.0, 0.0, 0.0])
        .rotate_y(90.0)
        .scale([2.0, 1.0, 1.0]);
    assert_matrix_eq(recipe.to_matrix(), t * r * s);
}

#[test]
fn rotation_happens_about_the_translated_pivot() {
    let recipe = Transform::new().translate([5.0, 0.0, 0.0]).rotate_y(90.0);
    // the pivot itself stays put
    assert_point_eq(transform_point(recipe.to_matrix(), [0.0, 0.0, 0.0]), [5.0, 0.0, 0.0]);
    // +X swings onto -Z around the pivot
    assert_point_eq(transform_point(recipe.to_matrix(), [1.0, 0.0, 0.0]), [5.0, 0.0, -1.0]);
}

#[test]
fn order_matters() {
    let translate_first = Transform::new().translate([5.0, 0.0, 0.0]).rotate_y(90.0);
    let rotate_first = Transform::new().rotate_y(90.0).translate([5.0, 0.0, 0.0]);
    let a = transform_point(translate_first.to_matrix(), [0.0; 3]);
    let b = transform_point(rotate_first.to_matrix(), [0.0; 3]);
    assert_point_eq(a, [5.0, 0.0, 0.0]);
    assert_point_eq(b, [0.0, 0.0, -5.0]);
}

#[test]
fn angles_are_degrees() {
    let half_turn = Transform::new().rotate_x(180.0);
    assert_point_eq(transform_point(half_turn.to_matrix(), [0.0, 1.0, 0.0]), [0.0, -1.0, 0.0]);
    let quarter_pitch = Transform::new().rotate_x(-90.0);
    assert_point_eq(transform_point(quarter_pitch.to_matrix(), [0.0, 0.0, 1.0]), [0.0, 1.0, 0.0]);
}

#[test]
fn scale_applies_in_local_frame() {
    let recipe = Transform::new().rotate_y(90.0).scale([2.0, 1.0, 1.0]);
    // local X is stretched, then turned onto -Z
    assert_point_eq(transform_point(recipe.to_matrix(), [1.0, 0.0, 0.0]), [0.0, 0.0, -2.0]);
}

#[test]
fn concatenation_matches_matrix_product() {
    let a = Transform::new().translate([1.0, 2.0, 3.0]).rotate_y(30.0);
    let b = Transform::new().rotate_x(-20.0).scale([0.1, 0.1, 1.5]);
    let combined = &a * &b;
    assert_eq!(combined.ops().len(), 4);
    assert_matrix_eq(combined.to_matrix(), a.to_matrix() * b.to_matrix());
    assert_eq!(a.clone() * b.clone(), combined);
}

#[test]
fn translation_converts_into_transform() {
    let moved: Transform = Vector3::new(1.0, -1.0, 2.0).into();
    assert_point_eq(transform_point(moved.to_matrix(), [0.0; 3]), [1.0, -1.0, 2.0]);
}

#[test]
fn uniform_layout_is_column_major() {
    let raw = Transform::new().translate([1.0, 2.0, 3.0]).to_raw();
    assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    assert_eq!(ModelUniform::default(), ModelUniform::new(Matrix4::identity()));
}
