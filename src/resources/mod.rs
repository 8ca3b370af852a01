use crate::{
    data_structures::model::{GpuMesh, Mesh, MeshKind},
    settings::Settings,
};

/**
 * This module contains all logic for generating meshes and turning them into GPU resources.
 */
pub mod mesh;

/// Generates the CPU-side geometry for every [`MeshKind`] from the settings.
pub fn generate_meshes(settings: &Settings) -> [(MeshKind, Mesh); 3] {
    MeshKind::ALL.map(|kind| (kind, generate(kind, settings)))
}

pub fn generate(kind: MeshKind, settings: &Settings) -> Mesh {
    match kind {
        MeshKind::Cuboid => mesh::cuboid(),
        MeshKind::Cylinder => mesh::cylinder(
            settings.segments,
            settings.cannon_height,
            settings.cannon_radius,
        ),
        MeshKind::Wheel => {
            mesh::wheel(settings.segments, settings.wheel_radius, settings.wheel_width)
        }
    }
}

/// One uploaded mesh per [`MeshKind`], created once at startup.
///
/// The buffers are released when the bundle is dropped.
#[derive(Debug)]
pub struct MeshResources {
    cuboid: GpuMesh,
    cylinder: GpuMesh,
    wheel: GpuMesh,
}

impl MeshResources {
    pub fn new(device: &wgpu::Device, settings: &Settings) -> Self {
        let [cuboid, cylinder, wheel] = generate_meshes(settings).map(|(kind, mesh)| {
            log::debug!(
                "generated {} mesh: {} vertices, {} indices",
                kind.name(),
                mesh.vertices.len(),
                mesh.indices.len()
            );
            if mesh.indices.is_empty() {
                log::warn!("{} mesh has no indices, parts using it are not drawn", kind.name());
            }
            mesh::upload(device, kind.name(), &mesh)
        });
        Self {
            cuboid,
            cylinder,
            wheel,
        }
    }

    pub fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Cuboid => &self.cuboid,
            MeshKind::Cylinder => &self.cylinder,
            MeshKind::Wheel => &self.wheel,
        }
    }
}

impl Drop for MeshResources {
    fn drop(&mut self) {
        log::debug!("releasing mesh buffers");
    }
}
