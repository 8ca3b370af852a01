//! The tank scene: state, controls and per-frame part placement.

use winit::event::WindowEvent;

use crate::{
    context::Context,
    controller::{TankController, TankState},
    data_structures::scene_graph::{PART_COUNT, Part, tank_parts},
    render::PartUniforms,
    resources::MeshResources,
    settings::Settings,
};

/// Everything the frame loop needs to update and draw the tank.
#[derive(Debug)]
pub struct TankFlow {
    pub state: TankState,
    controller: TankController,
    meshes: MeshResources,
    uniforms: PartUniforms,
    parts: Vec<Part>,
}

impl TankFlow {
    pub fn new(ctx: &Context, settings: &Settings) -> Self {
        let state = TankState::new();
        let meshes = MeshResources::new(&ctx.device, settings);
        let uniforms = PartUniforms::new(&ctx.device, &ctx.model_bind_group_layout, PART_COUNT);
        let parts = tank_parts(&state);
        Self {
            state,
            controller: TankController::from_settings(settings),
            meshes,
            uniforms,
            parts,
        }
    }

    pub fn on_window_events(&mut self, event: &WindowEvent) -> bool {
        self.controller.handle_window_events(&mut self.state, event)
    }

    /// Advances the camera and recomputes every part's transform.
    pub fn on_update(&mut self, ctx: &mut Context) {
        self.state.wrap_turret_yaw();

        ctx.camera.camera.advance();
        ctx.camera.write_to_buffer(&ctx.queue, &ctx.projection);

        self.parts = tank_parts(&self.state);
        self.uniforms.write_to_buffer(&ctx.queue, &self.parts);
    }

    pub fn on_render(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        let Some(pipeline) = &ctx.pipeline else {
            return;
        };
        render_pass.set_pipeline(pipeline);
        render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
        self.uniforms.draw(render_pass, &self.meshes, &self.parts);
    }
}
