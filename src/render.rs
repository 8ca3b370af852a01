//! Per-part GPU state and draw submission.
//!
//! Each tank part owns a small uniform buffer holding its model matrix. The
//! buffers are created once for the fixed part list and rewritten every frame
//! before the render pass is encoded.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        instance::ModelUniform,
        model::DrawMesh,
        scene_graph::Part,
    },
    pipelines::basic::mk_uniform_bind_group,
    resources::MeshResources,
};

#[derive(Debug)]
pub struct PartUniform {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

/// One model uniform per part slot.
#[derive(Debug)]
pub struct PartUniforms {
    slots: Vec<PartUniform>,
}

impl PartUniforms {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, count: usize) -> Self {
        let slots = (0..count)
            .map(|i| {
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Part {} Model Buffer", i)),
                    contents: bytemuck::cast_slice(&[ModelUniform::default()]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group =
                    mk_uniform_bind_group(device, layout, &buffer, &format!("part_{}_bind_group", i));
                PartUniform { buffer, bind_group }
            })
            .collect();
        Self { slots }
    }

    /// Uploads each part's composed transform into its slot.
    pub fn write_to_buffer(&self, queue: &wgpu::Queue, parts: &[Part]) {
        if parts.len() > self.slots.len() {
            log::warn!(
                "{} parts but only {} uniform slots, extra parts are skipped",
                parts.len(),
                self.slots.len()
            );
        }
        for (slot, part) in self.slots.iter().zip(parts) {
            queue.write_buffer(&slot.buffer, 0, bytemuck::cast_slice(&[part.transform.to_raw()]));
        }
    }

    /// Issues one indexed draw per part, skipping empty meshes. The pipeline
    /// and the camera bind group must already be set on `render_pass`.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, meshes: &MeshResources, parts: &[Part]) {
        for (slot, part) in self.slots.iter().zip(parts) {
            let mesh = meshes.get(part.mesh);
            if mesh.num_elements > 0 {
                render_pass.draw_mesh(mesh, &slot.bind_group);
            }
        }
    }
}
