//! Mesh data: CPU-side vertex/index lists and their GPU-resident counterparts.

/// Describes how a vertex type is laid out in a GPU vertex buffer.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single vertex: position plus a per-vertex debug colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/**
 * Stride layout: position (3 x f32) at offset 0 followed by colour (3 x f32)
 * at offset 12, 24 bytes per vertex.
 */
impl Vertex for ColorVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// The three primitive shapes the tank is assembled from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cuboid,
    Cylinder,
    Wheel,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Cuboid, MeshKind::Cylinder, MeshKind::Wheel];

    pub fn name(&self) -> &'static str {
        match self {
            MeshKind::Cuboid => "cuboid",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Wheel => "wheel",
        }
    }
}

/// Generated geometry before upload. Three indices per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn num_elements(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangles(&self) -> impl Iterator<Item = &[u32]> {
        self.indices.chunks(3)
    }
}

/// A mesh living in GPU memory, ready for an indexed draw.
#[derive(Debug)]
pub struct GpuMesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

/// Draws a mesh with the model uniform of one part bound at group 1.
///
/// The pipeline and the camera bind group (group 0) must already be set.
pub trait DrawMesh {
    fn draw_mesh(&mut self, mesh: &GpuMesh, part_bind_group: &wgpu::BindGroup);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &GpuMesh, part_bind_group: &wgpu::BindGroup) {
        self.set_bind_group(1, part_bind_group, &[]);
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.num_elements, 0, 0..1);
    }
}
