use std::f32::consts::PI;

use wgpu::util::DeviceExt;

use crate::data_structures::model::{ColorVertex, GpuMesh, Mesh};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

#[rustfmt::skip]
const CUBOID_VERTICES: [ColorVertex; 8] = [
    ColorVertex::new([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    ColorVertex::new([ 0.5, -0.5, -0.5], [0.0, 1.0, 0.0]),
    ColorVertex::new([ 0.5,  0.5, -0.5], [0.0, 0.0, 1.0]),
    ColorVertex::new([-0.5,  0.5, -0.5], [1.0, 1.0, 0.0]),
    ColorVertex::new([-0.5, -0.5,  0.5], [1.0, 0.0, 1.0]),
    ColorVertex::new([ 0.5, -0.5,  0.5], [0.0, 1.0, 1.0]),
    ColorVertex::new([ 0.5,  0.5,  0.5], [0.5, 0.5, 0.5]),
    ColorVertex::new([-0.5,  0.5,  0.5], [0.2, 0.8, 0.5]),
];

#[rustfmt::skip]
const CUBOID_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // front
    4, 5, 6, 6, 7, 4, // back
    0, 1, 5, 5, 4, 0, // bottom
    2, 3, 7, 7, 6, 2, // top
    0, 3, 7, 7, 4, 0, // left
    1, 2, 6, 6, 5, 1, // right
];

/// Unit cube centred on the origin with one debug colour per corner.
pub fn cuboid() -> Mesh {
    Mesh {
        vertices: CUBOID_VERTICES.to_vec(),
        indices: CUBOID_INDICES.to_vec(),
    }
}

/// Point on a circle of `radius` in the XY plane at depth `z`.
fn ring_point(radius: f32, angle: f32, z: f32) -> [f32; 3] {
    [radius * angle.cos(), radius * angle.sin(), z]
}

/**
 * Open tube along Z, centred on the origin.
 *
 * Vertex `2i` lies on the bottom ring (z = -height/2, red) and `2i + 1` on
 * the top ring (z = +height/2, green). Only the side is triangulated, the
 * ends stay open.
 */
pub fn cylinder(segments: u32, height: f32, radius: f32) -> Mesh {
    let angle_step = 2.0 * PI / segments as f32;
    let half = height / 2.0;

    let vertices = (0..segments)
        .flat_map(|i| {
            let angle = i as f32 * angle_step;
            [
                ColorVertex::new(ring_point(radius, angle, -half), RED),
                ColorVertex::new(ring_point(radius, angle, half), GREEN),
            ]
        })
        .collect();

    let indices = (0..segments)
        .flat_map(|i| {
            let next = (i + 1) % segments;
            [
                i * 2,
                next * 2,
                i * 2 + 1,
                i * 2 + 1,
                next * 2,
                next * 2 + 1,
            ]
        })
        .collect();

    Mesh { vertices, indices }
}

/**
 * Closed disc along Z, centred on the origin.
 *
 * Vertices 0 and 1 are the centres of the back (z = -width/2) and front
 * (z = +width/2) faces. Rim vertex pairs follow: `2i + 2` on the back rim
 * (red) and `2i + 3` on the front rim (green). Each segment emits two side
 * triangles and one fan triangle per face, the front fan wound the other way
 * round so both caps face outwards.
 */
pub fn wheel(segments: u32, radius: f32, width: f32) -> Mesh {
    let angle_step = 2.0 * PI / segments as f32;
    let half = width / 2.0;

    let mut vertices = Vec::with_capacity(2 + 2 * segments as usize);
    vertices.push(ColorVertex::new([0.0, 0.0, -half], WHITE));
    vertices.push(ColorVertex::new([0.0, 0.0, half], WHITE));
    vertices.extend((0..segments).flat_map(|i| {
        let angle = i as f32 * angle_step;
        [
            ColorVertex::new(ring_point(radius, angle, -half), RED),
            ColorVertex::new(ring_point(radius, angle, half), GREEN),
        ]
    }));

    let indices = (0..segments)
        .flat_map(|i| wheel_segment(i, (i + 1) % segments))
        .collect();

    Mesh { vertices, indices }
}

/// Rim vertices of segment `i` sit at `2i + 2` (back) and `2i + 3` (front).
#[rustfmt::skip]
fn wheel_segment(i: u32, next: u32) -> [u32; 12] {
    let (back, front) = (i * 2 + 2, i * 2 + 3);
    let (next_back, next_front) = (next * 2 + 2, next * 2 + 3);
    [
        // side
        back, next_back, front,
        front, next_back, next_front,
        // back cap
        0, back, next_back,
        // front cap
        1, next_front, front,
    ]
}

/// Uploads a generated mesh into static vertex and index buffers.
pub fn upload(device: &wgpu::Device, name: &str, mesh: &Mesh) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Vertex Buffer", name)),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Index Buffer", name)),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    GpuMesh {
        name: name.to_string(),
        vertex_buffer,
        index_buffer,
        num_elements: mesh.num_elements(),
    }
}
